use bevy_app::prelude::*;
use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_reflect::prelude::*;
use bevy_time::Time;
use bevy_transform::prelude::*;

use navpilot_core::live_state::Locomotion;
use navpilot_core::utils::step_towards;

use super::{FollowSet, MovementOverride};

/// Used for entities without a [`SeekSpeed`]
pub const DEFAULT_SEEK_SPEED: f32 = 6.;

/// How fast (world units per second) an entity closes in on its [`MovementOverride`]
#[derive(Debug, Component, Clone, Copy, Deref, DerefMut, Reflect)]
pub struct SeekSpeed(pub f32);

impl Default for SeekSpeed {
    fn default() -> Self {
        Self(DEFAULT_SEEK_SPEED)
    }
}

/// Seek every enabled [`MovementOverride`].
///
/// Entities move at most speed * delta per tick and land exactly on the target instead of
/// overshooting. Anything not airborne can only walk, so it keeps its height and seeks on the
/// horizontal plane.
fn seek_desired_position(
    mut seekers: Query<(
        &mut Transform,
        &MovementOverride,
        Option<&Locomotion>,
        Option<&SeekSpeed>,
    )>,
    time: Res<Time>,
) {
    let delta_time = time.delta_seconds();

    for (mut transform, movement, locomotion, speed) in &mut seekers {
        if !movement.enabled {
            continue;
        }

        let mut target = movement.desired_position;
        if !locomotion.is_some_and(|l| l.airborne) {
            target.y = transform.translation.y;
        }

        let speed = speed.map_or(DEFAULT_SEEK_SPEED, |s| **s);
        let next = step_towards(transform.translation, target, speed * delta_time);

        // avoid tripping change detection while standing still
        if next != transform.translation {
            trace!("seeking {} -> {}", transform.translation, next);
            transform.translation = next;
        }
    }
}

pub(super) struct Plugin;

impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            seek_desired_position
                .in_set(FollowSet::Steer)
                .after(super::action::take_off),
        );
    }
}
