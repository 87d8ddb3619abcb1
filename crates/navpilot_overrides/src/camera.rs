//! Rotating an entity's [`ViewAngles`] towards its [`CameraOverride`]

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_time::Time;

use navpilot_core::live_state::ViewAngles;
use navpilot_core::Angle;

use super::{CameraOverride, FollowSet};

/// Altitude is kept strictly off the poles
pub const MAX_ALTITUDE: f32 = 89.;

/// Turn `current` towards `target` around the circle, the short way, by at most `max_step`.
#[must_use]
pub fn approach_azimuth(current: Angle, target: Angle, max_step: Angle) -> Angle {
    let delta = current.shortest_to(target);

    if delta.abs() <= max_step.abs() {
        target.normalized()
    } else {
        (current + max_step.abs() * delta.radians().signum()).normalized()
    }
}

/// Move `current` towards `target` by at most `max_step`. No wrapping.
#[must_use]
pub fn approach_altitude(current: Angle, target: Angle, max_step: Angle) -> Angle {
    let delta = target - current;

    if delta.abs() <= max_step.abs() {
        target
    } else {
        current + max_step.abs() * delta.radians().signum()
    }
}

fn rotate_towards_desired(
    mut views: Query<(&mut ViewAngles, &CameraOverride)>,
    time: Res<Time>,
) {
    let delta_time = time.delta_seconds();
    let max_altitude = Angle::from_degrees(MAX_ALTITUDE);

    for (mut view, camera) in &mut views {
        if !camera.enabled {
            continue;
        }

        let desired_altitude = camera.desired_altitude.clamp(-max_altitude, max_altitude);

        let next = ViewAngles {
            azimuth: approach_azimuth(
                view.azimuth,
                camera.desired_azimuth,
                camera.speed_horizontal * delta_time,
            ),
            altitude: approach_altitude(
                view.altitude,
                desired_altitude,
                camera.speed_vertical * delta_time,
            ),
        };

        if next != *view {
            *view = next;
        }
    }
}

pub(super) struct Plugin;

impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rotate_towards_desired.in_set(FollowSet::Steer));
    }
}
