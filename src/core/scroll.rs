use super::constants::DEBOUNCE_MS;
use super::orientation::{target_orientation, Orientation};
use super::step::{Direction, Step};
use instant::Instant;
use std::time::Duration;

/// Source of "now" for the debounce window.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `instant` (performance.now() in the browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Time gate that stays held for `window` after each acquisition.
///
/// Holding a release deadline instead of a pending timer gives the same
/// observable behaviour as a one-shot timer that is never cancelled.
#[derive(Clone, Debug)]
pub struct DebounceLock {
    window: Duration,
    released_at: Option<Instant>,
}

impl DebounceLock {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            released_at: None,
        }
    }

    #[inline]
    pub fn is_held(&self, now: Instant) -> bool {
        matches!(self.released_at, Some(deadline) if now < deadline)
    }

    /// Take the lock if it is free. Returns `false` (and changes nothing) while held.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.is_held(now) {
            return false;
        }
        self.released_at = Some(now + self.window);
        true
    }
}

/// Owns the step counter and its debounce lock. The only way to change the
/// step is [`ScrollController::on_wheel`].
pub struct ScrollController<C: Clock = SystemClock> {
    clock: C,
    step: Step,
    lock: DebounceLock,
}

impl Default for ScrollController<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ScrollController<C> {
    pub fn new(clock: C) -> Self {
        Self::with_window(clock, Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_window(clock: C, window: Duration) -> Self {
        Self {
            clock,
            step: Step::default(),
            lock: DebounceLock::new(window),
        }
    }

    #[inline]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Orientation the scene should currently be heading toward.
    #[inline]
    pub fn target(&self) -> Orientation {
        target_orientation(self.step)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_held(self.clock.now())
    }

    /// Handle one wheel event. Returns `true` when the step changed.
    ///
    /// Events that arrive while the lock is held are dropped, not queued, and
    /// the magnitude of `delta_y` is ignored.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if !self.lock.try_acquire(self.clock.now()) {
            return false;
        }
        self.step = self.step.advance(Direction::from_delta(delta_y));
        true
    }
}
