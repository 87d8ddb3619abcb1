//! Systems, Resources, and events implementing a simple, extensible line-based command console.
//!
//! This is how anything outside the app (another process, a terminal, a script) drives it: each
//! line arrives as a [`ConsoleInput`] event, is split into [`Token`]s, and handed to the
//! [`CommandObject`] registered under its first token through
//! [`registration::RegisterConsoleCommand`]. Commands answer with [`ConsoleOutput`] events.
//!
//! [`io`] handles command input and output during the normal game loop; [`args`] has helpers for
//! turning tokens into values.

#![warn(clippy::unwrap_used)]
#![warn(clippy::perf, clippy::disallowed_types)] // performance warns
#![warn(clippy::pedantic)]
// most bevy systems violate these. Nothing I can do about it at the moment.
#![allow(
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::needless_pass_by_value // TODO: separate out system functions from non-system
)]
#![allow(clippy::cast_possible_truncation)]

pub mod args;
mod io;
pub mod registration;

use std::collections::VecDeque;

use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::*;
use bevy_ecs::system::Command;
use bevy_log::prelude::*;
use bevy_utils::HashMap;
use thiserror::Error;

pub use args::CommandError;
pub use io::{ConsoleInput, ConsoleOutput};

#[cfg(test)]
mod test;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub string: String,
}

impl Token {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.string
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected character at char {0}; We expected you to escape either a space, backslash, or quote")]
    EscapedIncorrectCharacter(usize),
    #[error("Input ended before closing all quotes.")]
    EndQuoted(),
    #[error("Input contains a backslash at end.")]
    EndEscaped(),
}

/// Split a line of console input into tokens.
///
/// Tokens are separated by runs of whitespace. Quotes group words into a single token, and a
/// backslash escapes a space, backslash or quote.
pub fn parse(to_parse: &str) -> Result<VecDeque<Token>, ParseError> {
    trace!("parsing string `{}`", to_parse);

    let mut tokens: VecDeque<Token> = VecDeque::new();
    let mut cur_string = String::new();
    // quoted empty strings ("") still count as a token
    let mut has_token = false;
    let mut is_backslash_escaped = false;
    let mut is_in_quotes = false;

    for (i, char) in to_parse.char_indices() {
        if is_backslash_escaped {
            match char {
                ' ' | '\\' | '"' => {
                    cur_string.push(char);
                    is_backslash_escaped = false;
                }
                _ => return Err(ParseError::EscapedIncorrectCharacter(i)),
            }
        } else if is_in_quotes {
            match char {
                '"' => is_in_quotes = false,
                '\\' => is_backslash_escaped = true,
                c => cur_string.push(c),
            }
        } else {
            match char {
                '\\' => {
                    is_backslash_escaped = true;
                    has_token = true;
                }
                '"' => {
                    is_in_quotes = true;
                    has_token = true;
                }
                c if c.is_whitespace() => {
                    if has_token {
                        tokens.push_back(Token {
                            string: std::mem::take(&mut cur_string),
                        });
                        has_token = false;
                    }
                }
                c => {
                    cur_string.push(c);
                    has_token = true;
                }
            }
        }
    }

    if is_backslash_escaped {
        return Err(ParseError::EndEscaped());
    } else if is_in_quotes {
        return Err(ParseError::EndQuoted());
    } else if has_token {
        tokens.push_back(Token { string: cur_string });
    }

    trace!("{:?}", tokens);

    tokens.shrink_to_fit(); // you shouldn't really be pushing and pulling from it at all after
                            // this
    Ok(tokens)
}

/// A console command type-object for registration.
///
/// Gets every token after the command's name. Anything touching the world should be queued on
/// `commands`; whatever ends up answering must finish with [`ConsoleOutput::End`].
pub type CommandObject = fn(VecDeque<Token>, &mut Commands);

/// A resource to store all registered Console commands
#[derive(Deref, DerefMut, Resource, Default)]
pub(crate) struct RegisteredConsoleCommands(HashMap<Box<str>, CommandObject>);

pub struct Plugin;
impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut bevy_app::App) {
        app.init_resource::<RegisteredConsoleCommands>()
            .add_plugins(self::io::Plugin);
    }
}

/// A command to print self.0 to the console
#[derive(Deref, DerefMut)]
pub struct PrintStringCommand(pub String);

impl Command for PrintStringCommand {
    fn apply(self, world: &mut World) {
        world.send_event(ConsoleOutput::String(self.0));
        world.send_event(ConsoleOutput::End);
    }
}

/// Report `result` to the console: the success message, or the error
pub struct ReportCommand(pub Result<String, CommandError>);

impl Command for ReportCommand {
    fn apply(self, world: &mut World) {
        let output = match self.0 {
            Ok(output) => output,
            Err(error) => {
                debug!("console command failed: {error}");
                format!("Error: {error}")
            }
        };

        PrintStringCommand(output).apply(world);
    }
}
