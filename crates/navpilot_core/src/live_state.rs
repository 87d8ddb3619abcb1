//! Live state of a controlled entity, as seen by controllers

use bevy_ecs::prelude::Component;
use bevy_math::Vec3;
use bevy_reflect::Reflect;

use crate::Angle;

/// How an entity is currently getting around. Owned by the host; controllers only read it.
#[derive(Debug, Component, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct Locomotion {
    pub mounted: bool,
    pub airborne: bool,
}

/// The orientation an entity is looking in. Rotated by the camera override.
#[derive(Debug, Component, Clone, Copy, Default, PartialEq, Reflect)]
pub struct ViewAngles {
    pub azimuth: Angle,
    pub altitude: Angle,
}

/// A read-only snapshot of an entity for a single tick.
///
/// Controllers take this instead of querying the world themselves, so they can be fed synthetic
/// sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntityState {
    pub position: Vec3,
    pub mounted: bool,
    pub airborne: bool,
}

impl EntityState {
    #[must_use]
    pub fn new(position: Vec3, locomotion: Locomotion) -> Self {
        Self {
            position,
            mounted: locomotion.mounted,
            airborne: locomotion.airborne,
        }
    }

    #[must_use]
    pub fn grounded(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
