//! Goals for communicating between the path follower and the host that moves things
//!
//! For example, [`MovementOverride`] tells the steering systems where the follower would like the
//! entity to go, and [`CameraOverride`] where it would like the view to point. [`AscendAction`] is
//! the one discrete request: jump, or take off when mounted.

use bevy_ecs::prelude::{Component, Entity, Event};
use bevy_math::Vec3;
use bevy_reflect::Reflect;

use crate::Angle;

/// A request to steer an entity towards `desired_position`.
///
/// While `enabled`, the host owns the entity's motion and seeks towards the position every tick.
/// When disabled the host leaves the entity alone, so `desired_position` has no effect.
#[derive(Debug, Component, Clone, Default, PartialEq, Reflect)]
pub struct MovementOverride {
    pub enabled: bool,
    pub desired_position: Vec3,
}

impl MovementOverride {
    /// Give control back and forget the target
    pub fn release(&mut self) {
        *self = Self::default();
    }
}

/// A request to rotate an entity's view towards a desired orientation.
///
/// Speeds are in radians per second. The host never rotates past the desired angles.
#[derive(Debug, Component, Clone, Default, PartialEq, Reflect)]
pub struct CameraOverride {
    pub enabled: bool,
    pub desired_azimuth: Angle,
    pub desired_altitude: Angle,
    pub speed_horizontal: Angle,
    pub speed_vertical: Angle,
}

impl CameraOverride {
    pub fn release(&mut self) {
        *self = Self::default();
    }
}

/// A request for `entity` to ascend: take off if mounted, otherwise jump.
///
/// Senders are expected to rate-limit these themselves.
#[derive(Debug, Event, Clone, Copy, PartialEq, Eq)]
pub struct AscendAction {
    pub entity: Entity,
}
