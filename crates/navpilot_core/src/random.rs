//! simple wrappers around bracket_random
//!
//! this probably shouldn't be a single file, but it doesn't particularly fit anywhere else yet

use std::time::UNIX_EPOCH;

use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::{Commands, Resource};
use bevy_math::Vec3;
use bracket_random::prelude::*;

/// A Seed for random number generation.
#[derive(Debug, Resource, Deref)]
pub struct Seed(u64);

/// A random number generator, but as a resource
#[derive(Resource, Deref, DerefMut)]
pub struct RandomGenerator(RandomNumberGenerator);

impl RandomGenerator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(RandomNumberGenerator::seeded(seed))
    }

    /// A point with every component in `[-extent, extent)`
    pub fn point_within(&mut self, extent: f32) -> Vec3 {
        let mut component = || self.0.range(-extent, extent);
        Vec3::new(component(), component(), component())
    }
}

pub fn setup_generator(mut commands: Commands) {
    let seed = std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |since| since.as_secs());

    commands.insert_resource(Seed(seed));
    commands.insert_resource(RandomGenerator::seeded(seed));
}
