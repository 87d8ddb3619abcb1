//! Notifications about the navigation surface (navmesh) being replaced.
//!
//! Whoever owns the navmesh may rebuild it on a background thread, so changes are published through
//! a [`NavSurfacePublisher`] that can be cloned and sent anywhere. [`forward_surface_changes`]
//! drains them into [`NavSurfaceChanged`] events during [`crate::FollowSet::Input`], which keeps
//! every reader on the schedule's thread and ordered before anything that follows a path.

use bevy_app::App;
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use crossbeam_channel::{Receiver, Sender};

/// The navigation surface was replaced. Any path computed against the old one is stale.
#[derive(Debug, Event, Clone, Copy, PartialEq, Eq)]
pub struct NavSurfaceChanged {
    /// Increases with every rebuild; readers only care that a change happened
    pub generation: u64,
}

/// Sending half, safe to use from any thread
#[derive(Debug, Clone)]
pub struct NavSurfacePublisher(Sender<NavSurfaceChanged>);

impl NavSurfacePublisher {
    pub fn publish(&self, generation: u64) {
        if self.0.send(NavSurfaceChanged { generation }).is_err() {
            warn!("navigation surface {generation} published after the app shut down");
        }
    }
}

/// Receiving half, owned by the app
#[derive(Debug, Resource)]
pub struct NavSurfaceInbox(Receiver<NavSurfaceChanged>);

/// Create the inbox resource on `app` and hand back a publisher for it.
///
/// Calling this again replaces the inbox; publishers from earlier calls stop being heard.
pub fn connect(app: &mut App) -> NavSurfacePublisher {
    let (sender, receiver) = crossbeam_channel::unbounded();
    app.insert_resource(NavSurfaceInbox(receiver));

    NavSurfacePublisher(sender)
}

pub(crate) fn forward_surface_changes(
    inbox: Res<NavSurfaceInbox>,
    mut changed: EventWriter<NavSurfaceChanged>,
) {
    for event in inbox.0.try_iter() {
        debug!("navigation surface changed (generation {})", event.generation);
        changed.send(event);
    }
}
