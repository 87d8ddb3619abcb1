//! The headless host: a pilot entity driven by a path follower, controlled over stdin.

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

use std::time::Duration;

use bevy::{
    app::{AppExit, ScheduleRunnerPlugin},
    log::LogPlugin,
    prelude::*,
    transform::TransformPlugin,
};
use crossbeam_channel::{Receiver, TryRecvError};

use navpilot_console::{ConsoleInput, ConsoleOutput};
use navpilot_controllers::{FollowConfig, FollowState, PathFollower, PathFollowerBundle};
use navpilot_core::live_state::{Locomotion, ViewAngles};
use navpilot_core::random::RandomGenerator;
use navpilot_core::CorePlugin;
use navpilot_overrides::{OverridesPlugin, SeekSpeed};

mod basic_commands;
mod path_commands;
mod pilot_commands;


/// How often the host ticks
pub const TICK_RATE: f64 = 60.;

/// How many waypoints the pilot starts out with, and how far out they are scattered
const DEMO_WAYPOINTS: usize = 4;
const DEMO_EXTENT: f32 = 8.;

/// Marks the entity the console's `path.*` and `pilot.*` commands act on
#[derive(Component, Debug, Default)]
pub struct Pilot;

/// the bundle for spawning a pilot
#[derive(Bundle)]
pub struct PilotBundle {
    pub pilot: Pilot,
    pub name: Name,
    pub transform: TransformBundle,
    pub locomotion: Locomotion,
    pub view: ViewAngles,
    pub seek_speed: SeekSpeed,
    pub follower_bundle: PathFollowerBundle,
}

impl PilotBundle {
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            pilot: Pilot,
            name: Name::new("Pilot"),
            transform: TransformBundle::from_transform(Transform::from_translation(position)),
            locomotion: Locomotion::default(),
            view: ViewAngles::default(),
            seek_speed: SeekSpeed::default(),
            follower_bundle: PathFollowerBundle::new(FollowConfig::default()),
        }
    }
}

/// Lines read from stdin by a background thread
#[derive(Resource)]
pub struct StdinLines {
    lines: Receiver<String>,
    closed: bool,
}

impl StdinLines {
    #[must_use]
    pub fn new(lines: Receiver<String>) -> Self {
        Self {
            lines,
            closed: false,
        }
    }

    /// Start reading stdin on its own thread
    fn spawn_reader() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();

        let spawned = std::thread::Builder::new()
            .name("stdin".into())
            .spawn(move || {
                for line in std::io::stdin().lines() {
                    let Ok(line) = line else {
                        break;
                    };

                    if sender.send(line).is_err() {
                        break;
                    }
                }
                trace!("stdin closed");
            });

        if let Err(error) = spawned {
            error!("could not start reading stdin: {error}");
        }

        Self::new(receiver)
    }
}

/// Everything the sim needs on top of the core plugin: steering, the follower and the console
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            OverridesPlugin,
            navpilot_controllers::Plugin,
            navpilot_console::Plugin,
        ))
        .add_systems(
            Startup,
            (
                basic_commands::setup_basic_commands,
                path_commands::setup_path_commands,
                pilot_commands::setup_pilot_commands,
            ),
        )
        .add_systems(
            PreUpdate,
            forward_stdin.run_if(resource_exists::<StdinLines>()),
        )
        .add_systems(Update, print_console_output)
        .add_systems(
            Last,
            exit_when_finished.run_if(resource_exists::<StdinLines>()),
        );
    }
}

fn forward_stdin(mut stdin: ResMut<StdinLines>, mut input: EventWriter<ConsoleInput>) {
    if stdin.closed {
        return;
    }

    loop {
        match stdin.lines.try_recv() {
            Ok(line) => input.send(ConsoleInput(line)),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                info!("no more console input");
                stdin.closed = true;
                break;
            }
        }
    }
}

fn print_console_output(mut output: EventReader<ConsoleOutput>) {
    for event in output.iter() {
        if let ConsoleOutput::String(string) = event {
            println!("{string}");
        }
    }
}

/// Once nobody can send commands anymore, stop as soon as every path is done.
///
/// A follower on foot waiting to take off will wait forever once nothing can mount it, so it
/// counts as done.
fn exit_when_finished(
    stdin: Res<StdinLines>,
    followers: Query<&PathFollower>,
    mut exit: EventWriter<AppExit>,
) {
    if !stdin.closed {
        return;
    }

    let mut stranded = 0;
    for follower in &followers {
        if !follower.is_running() {
            continue;
        }

        if follower.state() != FollowState::AwaitingTakeoff {
            return;
        }
        stranded += 1;
    }

    if stranded > 0 {
        warn!("input closed with {stranded} followers stuck waiting to take off; exiting anyway");
    } else {
        info!("input closed and every path finished; exiting");
    }
    exit.send(AppExit);
}

/// Spawn the pilot with a short random walk queued up
fn spawn_pilot(mut commands: Commands, mut rng: ResMut<RandomGenerator>) {
    let mut pilot = PilotBundle::new(Vec3::ZERO);

    // flat, so the pilot can walk it
    let demo_path =
        (0..DEMO_WAYPOINTS).map(|_| rng.point_within(DEMO_EXTENT) * Vec3::new(1., 0., 1.));
    pilot.follower_bundle.follower.move_along(demo_path, true);

    commands.spawn(pilot);
}

pub fn run_sim() {
    let mut app = App::new();

    // bevy plugins
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1. / TICK_RATE,
        ))),
        LogPlugin::default(),
        TransformPlugin,
    ));

    // our plugins
    app.add_plugins((CorePlugin, SimPlugin));

    trace!("setting up resources, adding startup systems");
    app.insert_resource(StdinLines::spawn_reader()).add_systems(
        Startup,
        (
            navpilot_core::random::setup_generator,
            apply_deferred,
            spawn_pilot,
        )
            .chain(),
    );

    trace!("Running app");
    app.run();
}
