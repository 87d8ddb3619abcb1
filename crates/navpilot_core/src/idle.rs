//! Idle (AFK) tracking. Anything acting on the player's behalf resets these timers.

use std::time::Duration;

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_time::Time;

/// How long without activity before the session counts as idle
pub const IDLE_AFTER: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Resource, Default)]
pub struct IdleTimers {
    since_activity: Duration,
    reported: bool,
}

impl IdleTimers {
    pub fn reset(&mut self) {
        self.since_activity = Duration::ZERO;
        self.reported = false;
    }

    #[must_use]
    pub fn since_activity(&self) -> Duration {
        self.since_activity
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.since_activity >= IDLE_AFTER
    }
}

pub(crate) fn tick_idle_timers(mut timers: ResMut<IdleTimers>, time: Res<Time>) {
    timers.since_activity += time.delta();

    if timers.is_idle() && !timers.reported {
        info!("no activity for {:?}; session is idle", timers.since_activity);
        timers.reported = true;
    }
}
