//! Following a precomputed list of waypoints
//!
//! A [`PathFollower`] owns the waypoint queue of one entity. Every tick it drops the waypoints the
//! entity has already reached, then steers towards the next one by writing the entity's
//! [`MovementOverride`] and [`CameraOverride`], asking for an ascend when the path leaves the
//! ground.

use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::Vec3;
use bevy_reflect::Reflect;
use bevy_time::Time;
use bevy_transform::prelude::*;

use navpilot_core::goals::{AscendAction, CameraOverride, MovementOverride};
use navpilot_core::idle::IdleTimers;
use navpilot_core::live_state::{EntityState, Locomotion};
use navpilot_core::nav_surface::NavSurfaceChanged;
use navpilot_core::utils::{horizontal, within_tolerance};
use navpilot_core::Angle;

use crate::ascend::AscendTrigger;

pub const DEFAULT_TOLERANCE: f32 = 0.25;

/// Knobs a remote controller may change at any time. Read every tick.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct FollowConfig {
    /// When false the follower still steers the camera and consumes waypoints, but never moves
    pub movement_allowed: bool,
    /// Measure arrival on the horizontal plane only, and never try to ascend
    pub ignore_vertical_delta: bool,
    /// How close counts as reached. Not validated: a non-positive tolerance means the front
    /// waypoint is never consumed unless the entity sits exactly on it.
    pub tolerance: f32,
    /// Point the camera along the path while following
    pub align_camera: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            movement_allowed: true,
            ignore_vertical_delta: false,
            tolerance: DEFAULT_TOLERANCE,
            align_camera: true,
        }
    }
}

/// Design constants for the camera while following. Not derived from the path.
#[derive(Debug, Clone, Resource)]
pub struct FollowTuning {
    /// Added to the direction of travel; 180° keeps the camera behind the entity
    pub azimuth_offset: Angle,
    /// Fixed pitch while following
    pub altitude: Angle,
    /// Per second, for both axes. Fast enough to be a snap at any sane tick rate.
    pub camera_speed: Angle,
}

impl Default for FollowTuning {
    fn default() -> Self {
        Self {
            azimuth_offset: Angle::from_degrees(180.),
            altitude: Angle::from_degrees(-30.),
            camera_speed: Angle::from_degrees(360.),
        }
    }
}

/// What the follower did on its last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum FollowState {
    /// No waypoints left; both overrides are released
    #[default]
    Idle,
    /// Walking or flying towards the front waypoint
    Following,
    /// Mounted, on the ground, with the next waypoint above: trying to take off while moving
    Ascending,
    /// On foot with the next waypoint above: standing still, camera left alone
    AwaitingTakeoff,
}

impl FollowState {
    /// Branch table for a tick, given whether there is a waypoint left, whether reaching it needs
    /// the entity to ascend first, and whether the entity is mounted.
    #[must_use]
    pub fn classify(has_target: bool, needs_ascend: bool, mounted: bool) -> Self {
        match (has_target, needs_ascend, mounted) {
            (false, _, _) => Self::Idle,
            (true, false, _) => Self::Following,
            (true, true, true) => Self::Ascending,
            (true, true, false) => Self::AwaitingTakeoff,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }

    #[must_use]
    pub fn steers_camera(self) -> bool {
        matches!(self, Self::Following | Self::Ascending)
    }
}

/// The waypoint queue of a single entity, and how to follow it.
#[derive(Debug, Component, Clone, Default)]
pub struct PathFollower {
    waypoints: VecDeque<Vec3>,
    pub config: FollowConfig,
    state: FollowState,
}

impl PathFollower {
    #[must_use]
    pub fn new(config: FollowConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Replace the whole queue, and whether height matters for it
    pub fn move_along(
        &mut self,
        waypoints: impl IntoIterator<Item = Vec3>,
        ignore_vertical_delta: bool,
    ) {
        self.waypoints = waypoints.into_iter().collect();
        self.config.ignore_vertical_delta = ignore_vertical_delta;

        info!(
            "following {} waypoints (ignore vertical: {})",
            self.waypoints.len(),
            ignore_vertical_delta
        );
    }

    /// Drop every waypoint. The overrides are released on the next tick.
    pub fn stop(&mut self) {
        self.waypoints.clear();
    }

    /// Whether there is anything left to follow
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.waypoints.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> impl ExactSizeIterator<Item = &Vec3> {
        self.waypoints.iter()
    }

    #[must_use]
    pub fn state(&self) -> FollowState {
        self.state
    }

    /// Set the tolerance, warning about (but keeping) values that can never be reached
    pub fn set_tolerance(&mut self, tolerance: f32) {
        if tolerance <= 0. {
            warn!("tolerance {tolerance} is not positive; waypoints will only be reached exactly");
        }

        self.config.tolerance = tolerance;
    }

    /// Pop every leading waypoint within tolerance of `position`. Returns how many went.
    fn consume_reached(&mut self, position: Vec3) -> usize {
        let mut consumed = 0;

        while let Some(&next) = self.waypoints.front() {
            let mut to_next = next - position;
            if self.config.ignore_vertical_delta {
                to_next = horizontal(to_next);
            }

            if !within_tolerance(to_next, self.config.tolerance) {
                break;
            }

            self.waypoints.pop_front();
            consumed += 1;
        }

        consumed
    }

    fn needs_ascend(&self, target: Vec3, entity: &EntityState) -> bool {
        target.y > entity.position.y && !entity.airborne && !self.config.ignore_vertical_delta
    }

    /// Run one tick against `entity`, writing the result into the overrides.
    ///
    /// Triggering the ascend action and resetting idle timers is left to the caller, based on the
    /// returned state.
    pub fn tick(
        &mut self,
        entity: &EntityState,
        tuning: &FollowTuning,
        movement: &mut MovementOverride,
        camera: &mut CameraOverride,
    ) -> FollowState {
        let consumed = self.consume_reached(entity.position);
        if consumed > 0 {
            trace!("reached {consumed} waypoints, {} left", self.waypoints.len());
        }

        let target = self.waypoints.front().copied();
        let state = FollowState::classify(
            target.is_some(),
            target.is_some_and(|t| self.needs_ascend(t, entity)),
            entity.mounted,
        );

        match target {
            None => {
                movement.enabled = false;
                camera.enabled = false;
                camera.speed_horizontal = Angle::ZERO;
                camera.speed_vertical = Angle::ZERO;
                movement.desired_position = entity.position;
            }
            Some(target) => {
                movement.desired_position = target;
                // on foot there is no way up, and walking in place helps nobody
                movement.enabled =
                    self.config.movement_allowed && state != FollowState::AwaitingTakeoff;

                if state.steers_camera() {
                    camera.enabled = self.config.align_camera;
                    camera.speed_horizontal = tuning.camera_speed;
                    camera.speed_vertical = tuning.camera_speed;
                    camera.desired_azimuth =
                        Angle::from_direction_xz(target - entity.position) + tuning.azimuth_offset;
                    camera.desired_altitude = tuning.altitude;
                }
            }
        }

        if state != self.state {
            debug!("path follower {:?} -> {:?}", self.state, state);
            self.state = state;
        }

        state
    }
}

/// Everything an entity needs to be driven by a [`PathFollower`].
///
/// The host still has to provide a [`Transform`], and [`Locomotion`] for anything that can mount
/// or fly.
#[derive(Bundle, Default)]
pub struct PathFollowerBundle {
    pub follower: PathFollower,
    pub movement: MovementOverride,
    pub camera: CameraOverride,
    pub ascend: AscendTrigger,
}

impl PathFollowerBundle {
    #[must_use]
    pub fn new(config: FollowConfig) -> Self {
        Self {
            follower: PathFollower::new(config),
            ..Default::default()
        }
    }
}

/// Any path computed against an old navigation surface is stale, whatever the configuration.
pub(crate) fn clear_on_surface_change(
    mut changes: EventReader<NavSurfaceChanged>,
    mut followers: Query<&mut PathFollower>,
) {
    let Some(latest) = changes.iter().last() else {
        return;
    };

    for mut follower in &mut followers {
        if follower.is_running() {
            info!(
                "navigation surface {} replaced; dropping {} waypoints",
                latest.generation,
                follower.len()
            );
        }

        follower.stop();
    }
}

/// Tick every follower. Entities without a transform aren't controlled yet, and are skipped.
pub(crate) fn follow_paths(
    mut followers: Query<(
        Entity,
        &mut PathFollower,
        &Transform,
        Option<&Locomotion>,
        &mut MovementOverride,
        &mut CameraOverride,
        &mut AscendTrigger,
    )>,
    tuning: Res<FollowTuning>,
    time: Res<Time>,
    mut idle_timers: ResMut<IdleTimers>,
    mut ascend: EventWriter<AscendAction>,
) {
    let now = time.elapsed();

    for (entity, mut follower, transform, locomotion, mut movement, mut camera, mut trigger) in
        &mut followers
    {
        let entity_state =
            EntityState::new(transform.translation, locomotion.copied().unwrap_or_default());

        let state = follower.tick(&entity_state, &tuning, &mut movement, &mut camera);

        if state.is_active() {
            idle_timers.reset();
        }

        if state == FollowState::Ascending && trigger.try_fire(now) {
            trace!("{entity:?} trying to take off");
            ascend.send(AscendAction { entity });
        }
    }
}

/// Removing a [`PathFollower`] hands the entity back: both overrides go back to their released
/// defaults.
pub(crate) fn release_overrides(
    mut removed: RemovedComponents<PathFollower>,
    mut overrides: Query<(&mut MovementOverride, &mut CameraOverride)>,
) {
    for entity in removed.iter() {
        if let Ok((mut movement, mut camera)) = overrides.get_mut(entity) {
            debug!("{entity:?} no longer follows a path; releasing overrides");
            movement.release();
            camera.release();
        }
    }
}
