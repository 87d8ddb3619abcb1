//! `path.*` console commands: remote control of the [`Pilot`]'s [`PathFollower`]
//!
//! Each command parses its arguments into a [`PathRequest`] up front, then runs it against the
//! world as a [`PathCommand`]. Getters print the current value; the same command with a value
//! sets it.

use std::collections::VecDeque;

use bevy::{ecs::system::Command, prelude::*};

use navpilot_console::{
    args::{no_arguments, optional_value, parse_bool, parse_f32, parse_point},
    registration::RegisterConsoleCommand,
    CommandError, ReportCommand, Token,
};
use navpilot_controllers::PathFollower;

use crate::Pilot;

const FLY_FLAG: &str = "--fly";

#[derive(Debug, Clone, PartialEq)]
pub enum PathRequest {
    /// Replace the queue. Flying paths care about height
    Move { waypoints: Vec<Vec3>, fly: bool },
    Stop,
    IsRunning,
    NumWaypoints,
    Waypoints,
    MovementAllowed(Option<bool>),
    AlignCamera(Option<bool>),
    Tolerance(Option<f32>),
    IgnoreVertical(Option<bool>),
}

impl PathRequest {
    /// `[--fly] x,y,z ...`; at least one waypoint
    fn parse_move(args: VecDeque<Token>) -> Result<Self, CommandError> {
        let mut fly = false;
        let mut waypoints = Vec::with_capacity(args.len());

        for token in &args {
            if token.as_str() == FLY_FLAG {
                fly = true;
            } else {
                waypoints.push(parse_point(token)?);
            }
        }

        if waypoints.is_empty() {
            return Err(CommandError::MissingArgument("waypoints"));
        }

        Ok(Self::Move { waypoints, fly })
    }

    fn run(self, follower: &mut PathFollower) -> String {
        match self {
            Self::Move { waypoints, fly } => {
                follower.move_along(waypoints, !fly);
                format!("following {} waypoints", follower.len())
            }
            Self::Stop => {
                follower.stop();
                "stopped".into()
            }
            Self::IsRunning => follower.is_running().to_string(),
            Self::NumWaypoints => follower.len().to_string(),
            Self::Waypoints => follower
                .waypoints()
                .map(|point| format!("{},{},{}", point.x, point.y, point.z))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::MovementAllowed(set) => {
                get_or_set(&mut follower.config.movement_allowed, set, "movement_allowed")
            }
            Self::AlignCamera(set) => {
                get_or_set(&mut follower.config.align_camera, set, "align_camera")
            }
            Self::Tolerance(Some(tolerance)) => {
                follower.set_tolerance(tolerance);
                format!("tolerance = {tolerance}")
            }
            Self::Tolerance(None) => follower.config.tolerance.to_string(),
            Self::IgnoreVertical(set) => get_or_set(
                &mut follower.config.ignore_vertical_delta,
                set,
                "ignore_vertical",
            ),
        }
    }
}

fn get_or_set(value: &mut bool, set: Option<bool>, name: &str) -> String {
    match set {
        Some(new) => {
            *value = new;
            format!("{name} = {new}")
        }
        None => value.to_string(),
    }
}

/// Run a parsed request against the pilot, and report the outcome to the console
pub struct PathCommand(pub Result<PathRequest, CommandError>);

impl Command for PathCommand {
    fn apply(self, world: &mut World) {
        let result = self.0.and_then(|request| {
            let mut followers = world.query_filtered::<&mut PathFollower, With<Pilot>>();
            let mut follower = followers
                .iter_mut(world)
                .next()
                .ok_or(CommandError::NoFollower)?;

            debug!("console path request {request:?}");
            Ok(request.run(&mut follower))
        });

        ReportCommand(result).apply(world);
    }
}

fn move_to(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(PathRequest::parse_move(args)));
}

fn stop(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(no_arguments(args).map(|()| PathRequest::Stop)));
}

fn is_running(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(no_arguments(args).map(|()| PathRequest::IsRunning)));
}

fn num_waypoints(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(no_arguments(args).map(|()| PathRequest::NumWaypoints)));
}

fn waypoints(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(no_arguments(args).map(|()| PathRequest::Waypoints)));
}

fn movement_allowed(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(
        optional_value(args, parse_bool).map(PathRequest::MovementAllowed),
    ));
}

fn align_camera(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(
        optional_value(args, parse_bool).map(PathRequest::AlignCamera),
    ));
}

fn tolerance(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(
        optional_value(args, parse_f32).map(PathRequest::Tolerance),
    ));
}

fn ignore_vertical(args: VecDeque<Token>, commands: &mut Commands) {
    commands.add(PathCommand(
        optional_value(args, parse_bool).map(PathRequest::IgnoreVertical),
    ));
}

pub(super) fn setup_path_commands(mut commands: Commands) {
    let path_commands: [(&str, navpilot_console::CommandObject); 9] = [
        ("path.move_to", move_to),
        ("path.stop", stop),
        ("path.is_running", is_running),
        ("path.num_waypoints", num_waypoints),
        ("path.waypoints", waypoints),
        ("path.movement_allowed", movement_allowed),
        ("path.align_camera", align_camera),
        ("path.tolerance", tolerance),
        ("path.ignore_vertical", ignore_vertical),
    ];

    for (name, command) in path_commands {
        commands.add(RegisterConsoleCommand::new(name.into(), command));
    }
}
