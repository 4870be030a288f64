use glam::{Mat3, Vec3};

/// Fixed perspective camera. It never rotates, so only the eye position and
/// the vertical field of view matter.
#[derive(Clone, Copy, Debug)]
pub struct SceneCamera {
    pub eye: Vec3,
    pub fovy_radians: f32,
}

impl SceneCamera {
    pub fn new(eye: Vec3, fovy_degrees: f32) -> Self {
        Self {
            eye,
            fovy_radians: fovy_degrees.to_radians(),
        }
    }

    #[inline]
    pub fn tan_half_fovy(&self) -> f32 {
        (self.fovy_radians * 0.5).tan()
    }

    /// CSS `perspective` distance (px) that reproduces this camera's vertical
    /// field of view for a viewport `viewport_height_px` tall.
    #[inline]
    pub fn css_perspective_px(&self, viewport_height_px: f32) -> f32 {
        (viewport_height_px * 0.5) / self.tan_half_fovy()
    }

    /// Layout for DOM panels so that one world unit at the origin plane lands
    /// where the 3D camera would draw it.
    pub fn css_projection(&self, viewport_height_px: f32) -> CssProjection {
        let perspective_px = self.css_perspective_px(viewport_height_px);
        let px_per_unit = perspective_px / self.eye.z.max(1e-3);
        CssProjection {
            perspective_px,
            px_per_unit,
            // Camera above the origin pushes the scene down on screen (CSS y is down).
            offset_y_px: self.eye.y * px_per_unit,
        }
    }
}

/// Pixel-space mapping of the origin plane for CSS 3D transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssProjection {
    pub perspective_px: f32,
    pub px_per_unit: f32,
    pub offset_y_px: f32,
}

impl CssProjection {
    #[inline]
    pub fn to_px(&self, world: f32) -> f32 {
        world * self.px_per_unit
    }
}

/// Basis that takes a view direction into the starfield's local frame.
/// The sky sphere is rotated by `rotation`, so sampling uses its inverse.
#[inline]
pub fn sky_basis(rotation: Mat3) -> Mat3 {
    rotation.transpose()
}
