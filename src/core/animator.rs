use super::constants::{AMBIENT_SPIN_RAD_PER_SEC, BACKGROUND_EASE, FOREGROUND_EASE};
use super::orientation::Orientation;

/// Per-frame approach factors and the ambient drift rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorParams {
    pub foreground_ease: f64,
    pub background_ease: f64,
    pub ambient_spin: f64,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            foreground_ease: FOREGROUND_EASE,
            background_ease: BACKGROUND_EASE,
            ambient_spin: AMBIENT_SPIN_RAD_PER_SEC,
        }
    }
}

/// Exponential step toward `target`: each component closes `factor` of its gap.
#[inline]
pub fn ease_toward(current: Orientation, target: Orientation, factor: f64) -> Orientation {
    Orientation {
        pitch: current.pitch + (target.pitch - current.pitch) * factor,
        yaw: current.yaw + (target.yaw - current.yaw) * factor,
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Linear interpolation from `current` toward `target` by `t`.
#[inline]
pub fn lerp_toward(current: Orientation, target: Orientation, t: f64) -> Orientation {
    Orientation {
        pitch: lerp(current.pitch, target.pitch, t),
        yaw: lerp(current.yaw, target.yaw, t),
    }
}

/// Advance the ambient yaw by `dt_sec` at `rate`. Never wrapped; yaw is periodic.
#[inline]
pub fn spin(ambient_yaw: f64, dt_sec: f64, rate: f64) -> f64 {
    ambient_yaw + dt_sec.max(0.0) * rate
}

/// Transforms produced for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransforms {
    /// Cube rotation.
    pub foreground: Orientation,
    /// Outer starfield group, target-seeking only.
    pub background: Orientation,
    pub ambient_yaw: f64,
}

impl SceneTransforms {
    /// Rotation of the nested starfield layer: the outer group's rotation with
    /// the ambient drift added on yaw.
    #[inline]
    pub fn sky(&self) -> Orientation {
        self.background
            .with_yaw(self.background.yaw + self.ambient_yaw)
    }
}

/// Frame-to-frame animation state for the cube and the starfield.
///
/// The three layers never feed into each other: the cube and the starfield
/// both chase the same target at different rates, and the drift only ever
/// accumulates.
#[derive(Clone, Debug, Default)]
pub struct SceneAnimator {
    pub params: AnimatorParams,
    foreground: Orientation,
    background: Orientation,
    ambient_yaw: f64,
}

impl SceneAnimator {
    pub fn new(params: AnimatorParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn tick(&mut self, target: Orientation, dt_sec: f64) -> SceneTransforms {
        self.foreground = ease_toward(self.foreground, target, self.params.foreground_ease);
        self.background = lerp_toward(self.background, target, self.params.background_ease);
        self.ambient_yaw = spin(self.ambient_yaw, dt_sec, self.params.ambient_spin);
        self.transforms()
    }

    pub fn transforms(&self) -> SceneTransforms {
        SceneTransforms {
            foreground: self.foreground,
            background: self.background,
            ambient_yaw: self.ambient_yaw,
        }
    }
}
