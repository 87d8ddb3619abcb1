//! Turning command arguments into values

use std::collections::VecDeque;

use bevy_math::Vec3;
use thiserror::Error;

use crate::{ParseError, Token};

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Command `{0}` not found")]
    UnknownCommand(String),
    #[error("Missing argument `{0}`")]
    MissingArgument(&'static str),
    #[error("Unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("`{0}` is not true or false")]
    InvalidBool(String),
    #[error("`{0}` is not a point; expected x,y,z")]
    InvalidPoint(String),
    #[error("Nothing is following a path right now")]
    NoFollower,
    #[error("There is no pilot to control")]
    NoPilot,
}

/// Parse a finite number
pub fn parse_f32(token: &Token) -> Result<f32, CommandError> {
    token
        .as_str()
        .parse::<f32>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber(token.string.clone()))
}

pub fn parse_bool(token: &Token) -> Result<bool, CommandError> {
    match token.as_str().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(CommandError::InvalidBool(token.string.clone())),
    }
}

/// Parse `x,y,z`, every component finite
pub fn parse_point(token: &Token) -> Result<Vec3, CommandError> {
    let invalid = || CommandError::InvalidPoint(token.string.clone());

    let components = token
        .as_str()
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f32>()
                .ok()
                .filter(|component| component.is_finite())
                .ok_or_else(invalid)
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(invalid()),
    }
}

/// Take an optional trailing value: `None` when there are no arguments, an error when there is
/// more than one.
pub fn optional_value<T>(
    mut args: VecDeque<Token>,
    parse: impl FnOnce(&Token) -> Result<T, CommandError>,
) -> Result<Option<T>, CommandError> {
    let Some(first) = args.pop_front() else {
        return Ok(None);
    };

    if let Some(extra) = args.pop_front() {
        return Err(CommandError::UnexpectedArgument(extra.string));
    }

    parse(&first).map(Some)
}

/// Error out if there are any arguments at all
pub fn no_arguments(mut args: VecDeque<Token>) -> Result<(), CommandError> {
    match args.pop_front() {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.string)),
        None => Ok(()),
    }
}
