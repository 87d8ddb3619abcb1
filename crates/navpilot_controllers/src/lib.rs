//! Controllers that act on an entity's behalf
//!
//! The final output of controllers will be "requests" (goals) for the host to carry out; see
//! [`navpilot_core::goals`]. Right now the only controller is the [`PathFollower`].

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

use bevy_app::{App, Startup, Update};
use bevy_ecs::prelude::*;
use bevy_reflect::GetTypeRegistration;

use navpilot_core::FollowSet;

pub mod ascend;
pub mod follow_path;

pub use ascend::AscendTrigger;
pub use follow_path::{FollowConfig, FollowState, FollowTuning, PathFollower, PathFollowerBundle};


fn register_types(type_registry: Res<AppTypeRegistry>) {
    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(FollowConfig::get_type_registration());
    type_registry_w.add_registration(FollowState::get_type_registration());
}

pub struct Plugin;
impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowTuning>()
            .add_systems(Startup, register_types)
            .add_systems(
                Update,
                (
                    follow_path::clear_on_surface_change,
                    follow_path::follow_paths,
                    follow_path::release_overrides,
                )
                    .chain()
                    .in_set(FollowSet::Decide),
            );
    }
}
