//! Tests for core types and the navigation surface plumbing

use std::f32::consts::PI;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::nav_surface::{self, NavSurfaceChanged};
use crate::test_utils::DefaultTestPlugin;
use crate::utils::{horizontal, step_towards, within_tolerance};
use crate::Angle;

const EPSILON: f32 = 1e-5;

#[test]
fn azimuth_from_direction_ignores_height() {
    let forward = Angle::from_direction_xz(Vec3::new(0., 5., 1.));
    let right = Angle::from_direction_xz(Vec3::new(1., -3., 0.));
    let back = Angle::from_direction_xz(Vec3::new(0., 0., -1.));

    assert!(forward.radians().abs() < EPSILON);
    assert!((right.degrees() - 90.).abs() < 1e-3);
    assert!((back.radians().abs() - PI).abs() < EPSILON);
}

#[test]
fn angles_wrap_the_short_way() {
    let almost_full = Angle::from_degrees(350.);
    assert!((almost_full.normalized().degrees() + 10.).abs() < 1e-3);

    let delta = Angle::from_degrees(170.).shortest_to(Angle::from_degrees(-170.));
    assert!((delta.degrees() - 20.).abs() < 1e-3);

    let delta = Angle::from_degrees(-170.).shortest_to(Angle::from_degrees(170.));
    assert!((delta.degrees() + 20.).abs() < 1e-3);
}

#[test]
fn tolerance_compares_lengths() {
    assert!(within_tolerance(Vec3::new(0., 0., 0.1), 0.25));
    assert!(within_tolerance(Vec3::new(0.25, 0., 0.), 0.25));
    assert!(!within_tolerance(Vec3::new(0.2, 0.2, 0.), 0.25));

    // a flattened offset only counts the horizontal part
    assert!(within_tolerance(horizontal(Vec3::new(0.1, 40., 0.)), 0.25));

    // non-positive tolerances never accept a real offset
    assert!(!within_tolerance(Vec3::new(0., 0., 0.1), 0.));
}

#[test]
fn step_towards_never_overshoots() {
    let start = Vec3::ZERO;
    let target = Vec3::new(3., 0., 4.);

    let first = step_towards(start, target, 1.);
    assert!((first.length() - 1.).abs() < EPSILON);

    let last = step_towards(Vec3::new(2.9, 0., 3.9), target, 10.);
    assert_eq!(last, target);

    assert_eq!(step_towards(target, target, 1.), target);
}

#[test]
fn published_surface_changes_become_events() {
    let mut app = App::new();
    app.add_plugins(DefaultTestPlugin);

    let publisher = nav_surface::connect(&mut app);

    // publishing from another thread is the whole point
    let background = publisher.clone();
    std::thread::spawn(move || background.publish(7))
        .join()
        .expect("publisher thread panicked");
    publisher.publish(8);

    app.update();

    let events = app.world.resource::<Events<NavSurfaceChanged>>();
    let mut reader = events.get_reader();
    let generations = reader.iter(events).map(|e| e.generation).collect::<Vec<_>>();

    assert_eq!(generations, vec![7, 8]);
}

#[test]
fn idle_timers_reset() {
    let mut timers = crate::idle::IdleTimers::default();
    assert!(!timers.is_idle());

    timers.reset();
    assert_eq!(timers.since_activity(), std::time::Duration::ZERO);
}
