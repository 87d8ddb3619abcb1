//! Angles for camera azimuth/altitude and angular speeds
//!
//! Stored in radians. Azimuth is measured on the horizontal (XZ) plane, with 0 pointing down +Z
//! and positive angles turning towards +X.

use std::f32::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

use bevy_math::Vec3;
use bevy_reflect::Reflect;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Reflect)]
pub struct Angle(pub f32);

impl Angle {
    pub const ZERO: Self = Self(0.);

    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0.to_degrees()
    }

    /// Azimuth of `direction` projected onto the horizontal plane. The vertical component is
    /// ignored; a purely vertical or zero direction gives [`Angle::ZERO`].
    #[must_use]
    pub fn from_direction_xz(direction: Vec3) -> Self {
        Self(direction.x.atan2(direction.z))
    }

    /// Wrap into `[-PI, PI)`
    #[must_use]
    pub fn normalized(self) -> Self {
        Self((self.0 + PI).rem_euclid(TAU) - PI)
    }

    /// Signed shortest rotation that takes `self` to `target`, in `[-PI, PI)`
    #[must_use]
    pub fn shortest_to(self, target: Self) -> Self {
        (target - self).normalized()
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
