//! `pilot.*` console commands: the [`Pilot`]'s own state, outside of any path

use std::collections::VecDeque;

use bevy::{ecs::system::Command, prelude::*};

use navpilot_console::{
    args::{no_arguments, optional_value, parse_bool},
    registration::RegisterConsoleCommand,
    CommandError, ReportCommand, Token,
};
use navpilot_controllers::PathFollower;
use navpilot_core::live_state::Locomotion;

use crate::Pilot;

/// Get or set whether the pilot is mounted. Dismounting also lands it.
fn set_mounted(world: &mut World, set: Option<bool>) -> Result<String, CommandError> {
    let mut pilots = world.query_filtered::<&mut Locomotion, With<Pilot>>();
    let mut locomotion = pilots
        .iter_mut(world)
        .next()
        .ok_or(CommandError::NoPilot)?;

    let Some(mounted) = set else {
        return Ok(locomotion.mounted.to_string());
    };

    if !mounted && locomotion.airborne {
        info!("pilot dismounted in the air; landing");
        locomotion.airborne = false;
    }
    locomotion.mounted = mounted;

    Ok(format!("mounted = {mounted}"))
}

fn status(world: &mut World) -> Result<String, CommandError> {
    let mut pilots = world
        .query_filtered::<(&Transform, Option<&Locomotion>, Option<&PathFollower>), With<Pilot>>();
    let (transform, locomotion, follower) =
        pilots.iter(world).next().ok_or(CommandError::NoPilot)?;

    let locomotion = locomotion.copied().unwrap_or_default();
    let position = transform.translation;

    Ok(format!(
        "at {},{},{} mounted={} airborne={} path={:?}",
        position.x,
        position.y,
        position.z,
        locomotion.mounted,
        locomotion.airborne,
        follower.map(PathFollower::state),
    ))
}

fn mounted(args: VecDeque<Token>, commands: &mut Commands) {
    match optional_value(args, parse_bool) {
        Ok(set) => commands.add(move |world: &mut World| {
            let result = set_mounted(world, set);
            ReportCommand(result).apply(world);
        }),
        Err(error) => commands.add(ReportCommand(Err(error))),
    }
}

fn pilot_status(args: VecDeque<Token>, commands: &mut Commands) {
    match no_arguments(args) {
        Ok(()) => commands.add(|world: &mut World| {
            let result = status(world);
            ReportCommand(result).apply(world);
        }),
        Err(error) => commands.add(ReportCommand(Err(error))),
    }
}

pub(super) fn setup_pilot_commands(mut commands: Commands) {
    commands.add(RegisterConsoleCommand::new("pilot.mounted".into(), mounted));
    commands.add(RegisterConsoleCommand::new(
        "pilot.status".into(),
        pilot_status,
    ));
}
