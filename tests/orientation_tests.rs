// Host-side tests for the step-to-orientation mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod step {
        include!("../src/core/step.rs");
    }
    pub mod orientation {
        include!("../src/core/orientation.rs");
    }
}

use self::core::orientation::{target_orientation, Orientation};
use self::core::step::Step;
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-12;

fn close(a: Orientation, b: Orientation) -> bool {
    a.distance(b) < EPS
}

#[test]
fn first_four_steps_turn_around_vertical_axis() {
    for i in 0..4u8 {
        let o = target_orientation(Step::new(i).unwrap());
        let expected = Orientation::new(0.0, i as f64 * PI / 2.0);
        assert!(close(o, expected), "step {}: {:?}", i, o);
    }
}

#[test]
fn step_four_and_five_are_the_poles() {
    let up = target_orientation(Step::new(4).unwrap());
    let down = target_orientation(Step::new(5).unwrap());
    assert!(close(up, Orientation::new(-FRAC_PI_2, 0.0)), "{:?}", up);
    assert!(close(down, Orientation::new(FRAC_PI_2, 0.0)), "{:?}", down);
}

#[test]
fn mapping_is_pure() {
    for i in 0..6u8 {
        let s = Step::new(i).unwrap();
        assert_eq!(target_orientation(s), target_orientation(s));
    }
}

#[test]
fn no_step_combines_pitch_and_yaw() {
    for i in 0..6u8 {
        let o = target_orientation(Step::new(i).unwrap());
        assert!(o.pitch == 0.0 || o.yaw == 0.0, "step {}: {:?}", i, o);
    }
}

#[test]
fn all_six_facings_are_distinct() {
    let faces: Vec<DVec3> = (0..6u8)
        .map(|i| {
            // Which cube normal the rotation brings to the front
            target_orientation(Step::new(i).unwrap()).rotation().transpose() * DVec3::Z
        })
        .collect();
    for a in 0..6 {
        for b in (a + 1)..6 {
            assert!(
                (faces[a] - faces[b]).length() > 0.5,
                "steps {} and {} show the same face",
                a,
                b
            );
        }
    }
}

#[test]
fn rotation_composes_pitch_after_yaw() {
    let o = Orientation::new(0.3, -1.1);
    let expected = glam::DMat3::from_rotation_x(0.3) * glam::DMat3::from_rotation_y(-1.1);
    assert!(o.rotation().abs_diff_eq(expected, EPS));
    assert!(o.rotation_f32().abs_diff_eq(expected.as_mat3(), 1e-6));
}

#[test]
fn with_yaw_keeps_pitch() {
    let o = Orientation::new(0.5, 1.0).with_yaw(2.0);
    assert_eq!(o, Orientation::new(0.5, 2.0));
}

#[test]
fn distance_is_largest_axis_gap() {
    let a = Orientation::new(0.0, 0.0);
    let b = Orientation::new(-0.25, 0.1);
    assert!((a.distance(b) - 0.25).abs() < EPS);
    assert_eq!(a.distance(a), 0.0);
}
