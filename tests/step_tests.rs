// Host-side tests for the step counter and wheel direction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod step {
        include!("../src/core/step.rs");
    }
}

use self::core::step::{Direction, Step};

fn step(i: u8) -> Step {
    Step::new(i).unwrap()
}

#[test]
fn step_new_rejects_out_of_range() {
    for i in 0..6 {
        assert_eq!(Step::new(i).map(Step::index), Some(i));
    }
    assert_eq!(Step::new(6), None);
    assert_eq!(Step::new(255), None);
}

#[test]
fn step_starts_at_zero() {
    assert_eq!(Step::default().index(), 0);
}

#[test]
fn advance_forward_is_plus_one_mod_six() {
    for i in 0..6u8 {
        assert_eq!(step(i).advance(Direction::Forward).index(), (i + 1) % 6);
    }
}

#[test]
fn advance_backward_is_plus_five_mod_six() {
    for i in 0..6u8 {
        assert_eq!(step(i).advance(Direction::Backward).index(), (i + 5) % 6);
    }
    // The wrap that needs the +6 guard
    assert_eq!(step(0).advance(Direction::Backward).index(), 5);
}

#[test]
fn six_advances_return_to_start() {
    for dir in [Direction::Forward, Direction::Backward] {
        for i in 0..6u8 {
            let mut s = step(i);
            for _ in 0..6 {
                s = s.advance(dir);
            }
            assert_eq!(s, step(i), "direction {:?} from {}", dir, i);
        }
    }
}

#[test]
fn forward_then_backward_is_identity() {
    for i in 0..6u8 {
        let s = step(i);
        assert_eq!(s.advance(Direction::Forward).advance(Direction::Backward), s);
    }
}

#[test]
fn direction_uses_sign_only() {
    assert_eq!(Direction::from_delta(1.0), Direction::Forward);
    assert_eq!(Direction::from_delta(500.0), Direction::Forward);
    assert_eq!(Direction::from_delta(0.0001), Direction::Forward);
    assert_eq!(Direction::from_delta(-1.0), Direction::Backward);
    assert_eq!(Direction::from_delta(-500.0), Direction::Backward);
}

#[test]
fn direction_zero_and_nan_go_backward() {
    assert_eq!(Direction::from_delta(0.0), Direction::Backward);
    assert_eq!(Direction::from_delta(-0.0), Direction::Backward);
    assert_eq!(Direction::from_delta(f64::NAN), Direction::Backward);
}

#[test]
fn step_displays_as_index() {
    assert_eq!(step(4).to_string(), "4");
}
