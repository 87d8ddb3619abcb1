//! System sets used externally between crates

use bevy_ecs::prelude::SystemSet;

#[derive(SystemSet, Hash, Debug, Clone, Eq, PartialEq)]
/// Per-tick ordering for anything that follows a path.
///
/// Run anything that changes a follower's queue or configuration before [`FollowSet::Decide`], or
/// it won't be seen until the next tick.
///
/// Systems acting on the overrides (steering, camera) run in [`FollowSet::Steer`]. If wanting the
/// positions they produced, run after [`FollowSet::Completed`].
pub enum FollowSet {
    Input,
    Decide,
    Steer,
    Completed,
}
