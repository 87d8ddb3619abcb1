use std::collections::VecDeque;

use bevy::{app::AppExit, ecs::system::Command, prelude::*};

use navpilot_console::{
    args::no_arguments, registration::RegisterConsoleCommand, PrintStringCommand, ReportCommand,
    Token,
};

fn echo(args: VecDeque<Token>, commands: &mut Commands) {
    let words: Vec<_> = args.into_iter().map(|token| token.string).collect();

    trace!("echoing {} words", words.len());
    commands.add(PrintStringCommand(words.join(" ")));
}

fn quit(args: VecDeque<Token>, commands: &mut Commands) {
    match no_arguments(args) {
        Ok(()) => commands.add(|world: &mut World| {
            info!("quit requested from the console");
            world.send_event(AppExit);
            PrintStringCommand("bye".into()).apply(world);
        }),
        Err(error) => commands.add(ReportCommand(Err(error))),
    }
}

pub(super) fn setup_basic_commands(mut commands: Commands) {
    commands.add(RegisterConsoleCommand::new("echo".into(), echo));
    commands.add(RegisterConsoleCommand::new("quit".into(), quit));
}
