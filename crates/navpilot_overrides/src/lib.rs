//! Host-side adapters that carry out the path follower's requests
//!
//! The follower only writes goals ([`MovementOverride`], [`CameraOverride`], [`AscendAction`]).
//! This crate is what turns those into motion: see [`OverridesPlugin`].

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

use bevy_app::prelude::*;

pub use navpilot_core::goals::{AscendAction, CameraOverride, MovementOverride};
pub use navpilot_core::FollowSet;

pub mod action;
pub mod camera;
pub mod movement;

pub use movement::SeekSpeed;

#[cfg(test)]
mod test;

/// A plugin to set up the steering, camera and action systems.
///
/// Anything that wants the overrides applied this tick must write them before
/// [`FollowSet::Steer`]. Positions and view angles are final after it.
pub struct OverridesPlugin;

impl Plugin for OverridesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((action::Plugin, movement::Plugin, camera::Plugin))
            .register_type::<SeekSpeed>();
    }
}
