//! Core types shared by the path follower and the host it drives
//!
//! This includes the override goals, angles, live entity state, navigation surface notifications
//! and the system sets everything else is ordered by.
//!
//! Almost every other crate will depend on this crate.

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

pub mod angle;
pub mod goals;
pub mod idle;
pub mod live_state;
pub mod nav_surface;
pub mod random;
pub mod system_sets;
pub mod utils;

pub use angle::Angle;
pub use system_sets::FollowSet;

#[cfg(test)]
mod test;

/// set up core resources, events, `system_sets`, etc
pub struct CorePlugin;

impl bevy_app::Plugin for CorePlugin {
    fn build(&self, app: &mut bevy_app::App) {
        #[allow(clippy::enum_glob_use)]
        use self::system_sets::FollowSet::*;
        use bevy_app::prelude::*;
        use bevy_ecs::prelude::*;
        use bevy_ecs::schedule::common_conditions::resource_exists;

        app.configure_sets(Update, (Input, Decide, Steer, Completed).chain())
            .init_resource::<idle::IdleTimers>()
            .add_event::<nav_surface::NavSurfaceChanged>()
            .add_event::<goals::AscendAction>()
            .add_systems(Update, idle::tick_idle_timers.in_set(Input))
            .add_systems(
                Update,
                nav_surface::forward_surface_changes
                    .in_set(Input)
                    .run_if(resource_exists::<nav_surface::NavSurfaceInbox>()),
            );

        app.register_type::<Angle>()
            .register_type::<goals::MovementOverride>()
            .register_type::<goals::CameraOverride>()
            .register_type::<live_state::Locomotion>()
            .register_type::<live_state::ViewAngles>();
    }
}

/// A plugin that sets up things that nearly every system expects to exist, for quick test setup
pub mod test_utils {
    pub struct DefaultTestPlugin;

    use bevy_app::prelude::*;
    use bevy_core::Name;
    use bevy_ecs::prelude::*;
    use bevy_log::prelude::*;
    use bevy_transform::prelude::*;

    impl Plugin for DefaultTestPlugin {
        fn build(&self, app: &mut App) {
            // system to log location of every named entity when it moves
            app.add_systems(
                Last,
                |q: Query<(&Transform, &Name), Or<(Changed<Transform>, Added<Transform>)>>| {
                    q.iter().for_each(|e| {
                        debug!("`{}` moved to {}", e.1.to_string(), e.0.translation);
                    });
                },
            );

            // almost every system assumes these plugins are present
            app.add_plugins(bevy_log::LogPlugin::default())
                .add_plugins(bevy_time::TimePlugin)
                .add_plugins(bevy_transform::TransformPlugin)
                .add_plugins(crate::CorePlugin);
        }
    }
}
