use bevy_ecs::prelude::*;
use bevy_log::prelude::*;

use navpilot_core::FollowSet;

use super::{parse, CommandError, ReportCommand};

/// One line of console input, as typed or piped in
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ConsoleInput(pub String);

/// events for a command to output to console
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutput {
    /// A string to write to the console.
    String(String),
    /// Tells the console that the current command has ended
    End,
}

/// Parse every line that came in this frame and start the command it names
fn process_console_input(
    mut input: EventReader<ConsoleInput>,
    console_commands: Res<super::RegisteredConsoleCommands>,
    mut commands: Commands,
) {
    for ConsoleInput(line) in input.iter() {
        let mut tokens = match parse(line) {
            Ok(tokens) => tokens,
            Err(error) => {
                debug!("could not parse `{line}`");
                commands.add(ReportCommand(Err(CommandError::from(error))));
                continue;
            }
        };

        // blank lines are a no-op
        let Some(command) = tokens.pop_front() else {
            continue;
        };

        match console_commands.get(command.as_str()) {
            Some(command_obj) => {
                trace!("running `{}` with {} arguments", command.as_str(), tokens.len());
                command_obj(tokens, &mut commands);
            }
            None => commands.add(ReportCommand(Err(CommandError::UnknownCommand(command.string)))),
        }
    }
}

pub(super) struct Plugin;
impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut bevy_app::App) {
        app.add_event::<ConsoleInput>()
            .add_event::<ConsoleOutput>()
            .add_systems(
                bevy_app::Update,
                process_console_input.in_set(FollowSet::Input),
            );
    }
}
