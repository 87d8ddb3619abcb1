use bevy_math::Vec3;

/// `vec` with its vertical (Y) component zeroed
#[must_use]
#[inline]
pub fn horizontal(vec: Vec3) -> Vec3 {
    Vec3::new(vec.x, 0., vec.z)
}

/// Whether `offset` is no longer than `tolerance`. Compares squared lengths, so a non-positive
/// tolerance only ever accepts a zero offset (or nothing, if negative).
#[must_use]
#[inline]
pub fn within_tolerance(offset: Vec3, tolerance: f32) -> bool {
    offset.length_squared() <= tolerance * tolerance
}

/// Step from `current` towards `target` by at most `max_step`, landing exactly on `target` when it
/// is close enough.
#[must_use]
#[inline]
pub fn step_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();

    if distance <= max_step || distance <= f32::EPSILON {
        target
    } else {
        current + offset / distance * max_step
    }
}
