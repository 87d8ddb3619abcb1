#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;

use bevy_app::prelude::*;
use bevy_ecs::event::Events;
use bevy_ecs::prelude::*;
use bevy_ecs::system::Command;
use bevy_math::Vec3;

use navpilot_core::test_utils::DefaultTestPlugin;

use crate::args::{no_arguments, optional_value, parse_bool, parse_f32, parse_point};
use crate::registration::RegisterConsoleCommand;
use crate::{
    parse, CommandError, ConsoleInput, ConsoleOutput, ParseError, PrintStringCommand, Token,
};

fn token(string: &str) -> Token {
    Token {
        string: string.to_owned(),
    }
}

fn strings(tokens: VecDeque<Token>) -> Vec<String> {
    tokens.into_iter().map(|t| t.string).collect()
}

#[test]
fn parse_splits_on_whitespace_runs() {
    let tokens = parse("  path.move_to   1,2,3\t4,5,6 ").unwrap();
    assert_eq!(strings(tokens), ["path.move_to", "1,2,3", "4,5,6"]);

    assert!(parse("").unwrap().is_empty());
    assert!(parse("   ").unwrap().is_empty());
}

#[test]
fn parse_handles_quotes_and_escapes() {
    let tokens = parse(r#"echo "hello world" a\ b "" \\"#).unwrap();
    assert_eq!(strings(tokens), ["echo", "hello world", "a b", "", "\\"]);
}

#[test]
fn parse_rejects_unfinished_input() {
    assert_eq!(parse(r#"echo "open"#), Err(ParseError::EndQuoted()));
    assert_eq!(parse("echo \\"), Err(ParseError::EndEscaped()));
    assert_eq!(
        parse("echo \\n"),
        Err(ParseError::EscapedIncorrectCharacter(6))
    );
}

#[test]
fn argument_values() {
    assert_eq!(parse_f32(&token("0.5")), Ok(0.5));
    assert_eq!(
        parse_f32(&token("half")),
        Err(CommandError::InvalidNumber("half".into()))
    );

    assert_eq!(parse_bool(&token("TRUE")), Ok(true));
    assert_eq!(parse_bool(&token("off")), Ok(false));
    assert_eq!(
        parse_bool(&token("maybe")),
        Err(CommandError::InvalidBool("maybe".into()))
    );

    assert_eq!(
        parse_point(&token("1, -2.5,3")),
        Ok(Vec3::new(1., -2.5, 3.))
    );
    assert_eq!(
        parse_point(&token("1,2")),
        Err(CommandError::InvalidPoint("1,2".into()))
    );
    assert_eq!(
        parse_point(&token("1,2,z")),
        Err(CommandError::InvalidPoint("1,2,z".into()))
    );
}

#[test]
fn non_finite_values_are_rejected() {
    for number in ["nan", "NaN", "inf", "-inf", "infinity", "1e39"] {
        assert_eq!(
            parse_f32(&token(number)),
            Err(CommandError::InvalidNumber(number.into())),
            "{number}"
        );
    }

    for point in ["nan,0,0", "0,inf,0", "0,0,-inf", "1e39,0,0"] {
        assert_eq!(
            parse_point(&token(point)),
            Err(CommandError::InvalidPoint(point.into())),
            "{point}"
        );
    }
}

#[test]
fn optional_and_absent_arguments() {
    assert_eq!(optional_value(VecDeque::new(), parse_bool), Ok(None));
    assert_eq!(
        optional_value(VecDeque::from([token("1.5")]), parse_f32),
        Ok(Some(1.5))
    );
    assert_eq!(
        optional_value(VecDeque::from([token("1"), token("2")]), parse_f32),
        Err(CommandError::UnexpectedArgument("2".into()))
    );

    assert_eq!(no_arguments(VecDeque::new()), Ok(()));
    assert_eq!(
        no_arguments(VecDeque::from([token("x")])),
        Err(CommandError::UnexpectedArgument("x".into()))
    );
}

fn app() -> App {
    let mut app = App::new();

    app.add_plugins(DefaultTestPlugin);
    app.add_plugins(crate::Plugin);

    app
}

/// Send `line` through the console and collect whatever it printed during that update
fn run_line(app: &mut App, line: &str) -> Vec<ConsoleOutput> {
    app.world.send_event(ConsoleInput(line.into()));
    app.update();

    let events = app.world.resource::<Events<ConsoleOutput>>();
    let mut reader = events.get_reader();
    let output = reader.iter(events).cloned().collect();

    app.world.resource_mut::<Events<ConsoleOutput>>().clear();
    output
}

fn shout(args: VecDeque<Token>, commands: &mut Commands) {
    let words: Vec<_> = args.into_iter().map(|t| t.string.to_uppercase()).collect();
    commands.add(PrintStringCommand(words.join(" ")));
}

#[test]
fn registered_commands_get_their_arguments() {
    let mut app = app();
    RegisterConsoleCommand::new("shout".into(), shout).apply(&mut app.world);

    assert_eq!(
        run_line(&mut app, "shout hello \"big world\""),
        [
            ConsoleOutput::String("HELLO BIG WORLD".into()),
            ConsoleOutput::End
        ]
    );
}

#[test]
fn unknown_and_unparseable_lines_are_reported() {
    let mut app = app();

    let output = run_line(&mut app, "nope 1 2");
    assert_eq!(output.len(), 2);
    assert!(matches!(&output[0], ConsoleOutput::String(s) if s.contains("`nope` not found")));
    assert_eq!(output[1], ConsoleOutput::End);

    let output = run_line(&mut app, "echo \"unterminated");
    assert!(matches!(&output[0], ConsoleOutput::String(s) if s.starts_with("Error")));

    assert!(run_line(&mut app, "   ").is_empty());
}

