//! Carrying out [`AscendAction`]s

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;

use navpilot_core::live_state::Locomotion;

use super::{AscendAction, FollowSet};

/// Mounted entities take off when asked to ascend. Anything else just hops, which doesn't change
/// how it gets around.
pub(crate) fn take_off(
    mut actions: EventReader<AscendAction>,
    mut locomotion_q: Query<&mut Locomotion>,
) {
    for action in actions.iter() {
        let Ok(mut locomotion) = locomotion_q.get_mut(action.entity) else {
            debug!("{:?} asked to ascend but has no locomotion", action.entity);
            continue;
        };

        if locomotion.airborne {
            continue;
        }

        if locomotion.mounted {
            info!("{:?} took off", action.entity);
            locomotion.airborne = true;
        } else {
            trace!("{:?} jumped", action.entity);
        }
    }
}

pub(super) struct Plugin;

impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, take_off.in_set(FollowSet::Steer));
    }
}
