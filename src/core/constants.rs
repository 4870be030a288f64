/// Interaction and animation tuning constants.
///
/// These are the knobs that shape how the cube responds to the wheel. The
/// easing factors are applied once per rendered frame, not per second, so the
/// perceived speed follows the display refresh rate.
// Number of cube faces reachable by scrolling
pub const STEP_COUNT: u8 = 6;

// Wheel debounce window after an accepted step (milliseconds)
pub const DEBOUNCE_MS: u64 = 800;

// Per-frame approach factor for the cube (exponential ease)
pub const FOREGROUND_EASE: f64 = 0.1;

// Per-frame approach factor for the starfield group (linear interpolation)
pub const BACKGROUND_EASE: f64 = 0.05;

// Ambient starfield drift around the vertical axis (radians per second)
pub const AMBIENT_SPIN_RAD_PER_SEC: f64 = 0.01;
