//! Rate limiting for [`AscendAction`](navpilot_core::goals::AscendAction)s

use std::time::Duration;

use bevy_ecs::prelude::Component;

/// Minimum time between two ascend actions from the same entity
pub const ASCEND_COOLDOWN: Duration = Duration::from_millis(100);

/// Lets an ascend action through at most once per cooldown, so it can be attempted every tick
/// without flooding whatever carries the actions out.
#[derive(Debug, Component, Clone)]
pub struct AscendTrigger {
    cooldown: Duration,
    next_allowed: Duration,
}

impl Default for AscendTrigger {
    fn default() -> Self {
        Self::new(ASCEND_COOLDOWN)
    }
}

impl AscendTrigger {
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            next_allowed: Duration::ZERO,
        }
    }

    /// Returns whether the action may fire at `now` (time since startup). Only a successful
    /// attempt pushes the cooldown forward.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        if now < self.next_allowed {
            return false;
        }

        self.next_allowed = now + self.cooldown;
        true
    }

    #[must_use]
    pub fn next_allowed(&self) -> Duration {
        self.next_allowed
    }
}
