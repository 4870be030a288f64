// Host-side tests for wheel handling and the debounce lock.
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
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use self::core::orientation::target_orientation;
use self::core::scroll::{Clock, DebounceLock, ScrollController};
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Clock that only moves when the test says so.
#[derive(Clone)]
struct ManualClock {
    base: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    fn advance_ms(&self, ms: u64) {
        self.elapsed.set(self.elapsed.get() + Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }
}

fn controller() -> (ScrollController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (ScrollController::new(clock.clone()), clock)
}

#[test]
fn starts_unlocked_at_step_zero() {
    let (ctl, _) = controller();
    assert_eq!(ctl.step().index(), 0);
    assert!(!ctl.is_locked());
}

#[test]
fn first_wheel_advances_and_locks() {
    let (mut ctl, _) = controller();
    assert!(ctl.on_wheel(120.0));
    assert_eq!(ctl.step().index(), 1);
    assert!(ctl.is_locked());
}

#[test]
fn burst_inside_window_moves_one_step() {
    let (mut ctl, clock) = controller();
    assert!(ctl.on_wheel(3.0));
    for _ in 0..50 {
        clock.advance_ms(10);
        assert!(!ctl.on_wheel(3.0));
    }
    assert_eq!(ctl.step().index(), 1);
}

#[test]
fn lock_releases_after_eight_hundred_ms() {
    let (mut ctl, clock) = controller();
    assert!(ctl.on_wheel(1.0));
    clock.advance_ms(799);
    assert!(ctl.is_locked());
    assert!(!ctl.on_wheel(1.0));
    clock.advance_ms(1);
    assert!(!ctl.is_locked());
    assert!(ctl.on_wheel(1.0));
    assert_eq!(ctl.step().index(), 2);
}

#[test]
fn rejected_events_do_not_extend_the_lock() {
    let (mut ctl, clock) = controller();
    assert!(ctl.on_wheel(1.0));
    clock.advance_ms(700);
    assert!(!ctl.on_wheel(1.0));
    // Deadline is still 800ms after the accepted event, not the rejected one.
    clock.advance_ms(100);
    assert!(ctl.on_wheel(1.0));
}

#[test]
fn events_spaced_past_window_all_count() {
    let (mut ctl, clock) = controller();
    for i in 1..=6u8 {
        assert!(ctl.on_wheel(50.0));
        assert_eq!(ctl.step().index(), i % 6);
        clock.advance_ms(801);
    }
}

#[test]
fn backward_from_zero_wraps_to_five() {
    let (mut ctl, _) = controller();
    assert!(ctl.on_wheel(-40.0));
    assert_eq!(ctl.step().index(), 5);
    assert_eq!(ctl.target(), target_orientation(ctl.step()));
}

#[test]
fn magnitude_is_ignored() {
    let (mut ctl, clock) = controller();
    ctl.on_wheel(0.5);
    clock.advance_ms(800);
    ctl.on_wheel(10_000.0);
    assert_eq!(ctl.step().index(), 2);
}

#[test]
fn zero_and_nan_delta_step_backward() {
    let (mut ctl, clock) = controller();
    assert!(ctl.on_wheel(0.0));
    assert_eq!(ctl.step().index(), 5);
    clock.advance_ms(800);
    assert!(ctl.on_wheel(f64::NAN));
    assert_eq!(ctl.step().index(), 4);
}

#[test]
fn target_tracks_step() {
    let (mut ctl, clock) = controller();
    for _ in 0..4 {
        ctl.on_wheel(1.0);
        assert_eq!(ctl.target(), target_orientation(ctl.step()));
        clock.advance_ms(800);
    }
}

#[test]
fn custom_window_is_honoured() {
    let clock = ManualClock::new();
    let mut ctl = ScrollController::with_window(clock.clone(), Duration::from_millis(100));
    assert!(ctl.on_wheel(1.0));
    clock.advance_ms(100);
    assert!(ctl.on_wheel(1.0));
    assert_eq!(ctl.step().index(), 2);
}

#[test]
fn debounce_lock_free_until_acquired() {
    let now = Instant::now();
    let mut lock = DebounceLock::new(Duration::from_millis(800));
    assert!(!lock.is_held(now));
    assert!(lock.try_acquire(now));
    assert!(lock.is_held(now));
    assert!(!lock.try_acquire(now + Duration::from_millis(500)));
    assert!(lock.try_acquire(now + Duration::from_millis(800)));
}

#[test]
fn debounce_accepts_first_drops_second_accepts_third() {
    let (mut ctl, clock) = controller();
    assert!(ctl.on_wheel(1.0)); // t = 0
    clock.advance_ms(200);
    assert!(!ctl.on_wheel(1.0)); // t = 200
    assert_eq!(ctl.step().index(), 1);
    clock.advance_ms(600);
    assert!(ctl.on_wheel(1.0)); // t = 800
    assert_eq!(ctl.step().index(), 2);
}

#[test]
fn three_then_four_downward_scrolls() {
    use std::f64::consts::FRAC_PI_2;
    let (mut ctl, clock) = controller();
    for _ in 0..3 {
        assert!(ctl.on_wheel(100.0));
        clock.advance_ms(800);
    }
    let t = ctl.target();
    assert_eq!(t.pitch, 0.0);
    assert!((t.yaw - 3.0 * FRAC_PI_2).abs() < 1e-12);

    assert!(ctl.on_wheel(100.0));
    let t = ctl.target();
    assert!((t.pitch + FRAC_PI_2).abs() < 1e-12);
    assert_eq!(t.yaw, 0.0);
}
