use super::step::Step;
use glam::{DMat3, Mat3};
use std::f64::consts::FRAC_PI_2;

/// Pitch/yaw pair in radians.
///
/// Pitch rotates about X, yaw about Y; the composed rotation is
/// `Rx(pitch) * Ry(yaw)`, matching an XYZ Euler order with no roll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
}

impl Orientation {
    pub const IDENTITY: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    #[inline]
    pub const fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    #[inline]
    pub fn with_yaw(self, yaw: f64) -> Self {
        Self { yaw, ..self }
    }

    /// Largest per-axis gap to `other`.
    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self.pitch - other.pitch)
            .abs()
            .max((self.yaw - other.yaw).abs())
    }

    pub fn rotation(self) -> DMat3 {
        DMat3::from_rotation_x(self.pitch) * DMat3::from_rotation_y(self.yaw)
    }

    /// Single-precision rotation for GPU uniforms.
    pub fn rotation_f32(self) -> Mat3 {
        self.rotation().as_mat3()
    }
}

/// Facing for each step: four turns around the vertical axis, then the two
/// poles. No combined pitch/yaw facing is reachable.
pub fn target_orientation(step: Step) -> Orientation {
    match step.index() {
        i @ 0..=3 => Orientation::new(0.0, i as f64 * FRAC_PI_2),
        4 => Orientation::new(-FRAC_PI_2, 0.0),
        _ => Orientation::new(FRAC_PI_2, 0.0),
    }
}
