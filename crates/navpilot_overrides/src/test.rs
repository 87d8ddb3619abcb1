#![allow(clippy::unwrap_used)]

use bevy_app::prelude::*;
use bevy_core::Name;
use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_time::Time;
use bevy_transform::prelude::*;

use navpilot_core::live_state::{Locomotion, ViewAngles};
use navpilot_core::test_utils::DefaultTestPlugin;
use navpilot_core::Angle;

use crate::camera::{approach_altitude, approach_azimuth};
use crate::{AscendAction, CameraOverride, MovementOverride, SeekSpeed};

const EPSILON: f32 = 1e-4;

fn app() -> App {
    let mut app = App::new();

    app.add_plugins(DefaultTestPlugin);
    app.add_plugins(crate::OverridesPlugin);

    app
}

fn run_for(app: &mut App, seconds: f32, mut each_tick: impl FnMut(&mut App)) {
    while app.world.resource::<Time>().elapsed_seconds() <= seconds {
        app.update();
        each_tick(app);
    }
}

#[test]
fn azimuth_turns_the_short_way_and_stops_on_target() {
    let step = Angle::from_degrees(10.);

    let turned = approach_azimuth(Angle::from_degrees(175.), Angle::from_degrees(-175.), step);
    assert!((turned.degrees() + 175.).abs() < 1e-3);

    let turned = approach_azimuth(Angle::from_degrees(0.), Angle::from_degrees(-90.), step);
    assert!((turned.degrees() + 10.).abs() < 1e-3);

    let held = approach_azimuth(Angle::from_degrees(30.), Angle::from_degrees(30.), Angle::ZERO);
    assert!((held.degrees() - 30.).abs() < 1e-3);
}

#[test]
fn altitude_never_overshoots() {
    let step = Angle::from_degrees(25.);
    let target = Angle::from_degrees(-30.);

    let first = approach_altitude(Angle::ZERO, target, step);
    assert!((first.degrees() + 25.).abs() < 1e-3);

    let second = approach_altitude(first, target, step);
    assert_eq!(second, target);
}

#[test]
/// a grounded seeker closes in on the horizontal plane only, and never moves away
fn grounded_seek_converges() {
    let mut app = app();

    let seeker = app
        .world
        .spawn((
            Name::new("Seeker"),
            Transform::from_xyz(0., 0., 0.),
            Locomotion::default(),
            SeekSpeed(20.),
            MovementOverride {
                enabled: true,
                desired_position: Vec3::new(3., 5., 4.),
            },
        ))
        .id();

    let target_xz = Vec3::new(3., 0., 4.);
    let mut last_distance = f32::INFINITY;

    run_for(&mut app, 1., |app| {
        let translation = app.world.get::<Transform>(seeker).unwrap().translation;
        let distance = translation.distance(target_xz);

        assert!(distance <= last_distance + EPSILON, "seeker moved away");
        assert_eq!(translation.y, 0., "grounded seeker changed height");
        last_distance = distance;
    });

    assert_eq!(app.world.get::<Transform>(seeker).unwrap().translation, target_xz);
}

#[test]
fn airborne_seek_converges_in_3d() {
    let mut app = app();

    let target = Vec3::new(-2., 6., 1.);
    let seeker = app
        .world
        .spawn((
            Name::new("Flyer"),
            Transform::from_xyz(0., 0., 0.),
            Locomotion {
                mounted: true,
                airborne: true,
            },
            SeekSpeed(30.),
            MovementOverride {
                enabled: true,
                desired_position: target,
            },
        ))
        .id();

    run_for(&mut app, 1., |_| {});

    assert_eq!(app.world.get::<Transform>(seeker).unwrap().translation, target);
}

#[test]
fn disabled_override_leaves_entity_alone() {
    let mut app = app();

    let start = Transform::from_xyz(1., 2., 3.);
    let idle = app
        .world
        .spawn((
            Name::new("Idle"),
            start,
            Locomotion::default(),
            MovementOverride {
                enabled: false,
                desired_position: Vec3::new(100., 0., 100.),
            },
            ViewAngles::default(),
            CameraOverride {
                desired_azimuth: Angle::from_degrees(90.),
                speed_horizontal: Angle::from_degrees(360.),
                ..Default::default()
            },
        ))
        .id();

    run_for(&mut app, 0.2, |_| {});

    assert_eq!(*app.world.get::<Transform>(idle).unwrap(), start);
    assert_eq!(*app.world.get::<ViewAngles>(idle).unwrap(), ViewAngles::default());
}

#[test]
fn camera_reaches_desired_orientation() {
    let mut app = app();

    let viewer = app
        .world
        .spawn((
            ViewAngles::default(),
            CameraOverride {
                enabled: true,
                desired_azimuth: Angle::from_degrees(180.),
                desired_altitude: Angle::from_degrees(-30.),
                speed_horizontal: Angle::from_degrees(360.),
                speed_vertical: Angle::from_degrees(360.),
            },
        ))
        .id();

    run_for(&mut app, 1., |_| {});

    let view = app.world.get::<ViewAngles>(viewer).unwrap();
    assert!(view.azimuth.shortest_to(Angle::from_degrees(180.)).abs().radians() < EPSILON);
    assert!((view.altitude.degrees() + 30.).abs() < 1e-3);
}

#[test]
fn camera_altitude_is_clamped_off_the_poles() {
    let mut app = app();

    let viewer = app
        .world
        .spawn((
            ViewAngles::default(),
            CameraOverride {
                enabled: true,
                desired_altitude: Angle::from_degrees(-120.),
                speed_vertical: Angle::from_degrees(720.),
                ..Default::default()
            },
        ))
        .id();

    run_for(&mut app, 1., |_| {});

    let view = app.world.get::<ViewAngles>(viewer).unwrap();
    assert!((view.altitude.degrees() + crate::camera::MAX_ALTITUDE).abs() < 1e-3);
}

#[test]
fn mounted_entities_take_off_when_asked() {
    let mut app = app();

    let mount = app.world.spawn(Locomotion { mounted: true, airborne: false }).id();
    let walker = app.world.spawn(Locomotion::default()).id();

    app.world.send_event(AscendAction { entity: mount });
    app.world.send_event(AscendAction { entity: walker });
    app.update();

    assert!(app.world.get::<Locomotion>(mount).unwrap().airborne);
    assert!(!app.world.get::<Locomotion>(walker).unwrap().airborne);
}
