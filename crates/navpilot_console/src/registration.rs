//! See [`RegisterConsoleCommand`]

use super::{CommandObject, RegisteredConsoleCommands};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_utils::HashMap;

/// a struct to easily register a [`CommandObject`] for the console to use
pub struct RegisterConsoleCommand(Box<str>, CommandObject);

impl bevy_ecs::system::Command for RegisterConsoleCommand {
    fn apply(self, world: &mut World) {
        let mut registered =
            world.get_resource_or_insert_with(|| RegisteredConsoleCommands(HashMap::new()));

        if registered.insert(self.0.clone(), self.1).is_some() {
            warn!("console command `{}` registered twice; keeping the newest", self.0);
        }
    }
}

impl RegisterConsoleCommand {
    /// create a registration command that will register `to_register`
    pub fn new(name: Box<str>, command: CommandObject) -> Self {
        Self(name, command)
    }
}

