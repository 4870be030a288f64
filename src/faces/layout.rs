use crate::camera::CssProjection;
use crate::constants::{CUBE_EDGE, FACE_CONTENT_SCALE, FACE_OFFSET};
use crate::core::Orientation;

/// Where a panel sits on the cube, in CSS space (y points down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacePlacement {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl FacePlacement {
    /// Rotation that turns the panel's +Z normal to face outward.
    pub fn css_rotation(self) -> &'static str {
        match self {
            FacePlacement::Front => "rotateY(0deg)",
            FacePlacement::Right => "rotateY(90deg)",
            FacePlacement::Back => "rotateY(180deg)",
            FacePlacement::Left => "rotateY(-90deg)",
            FacePlacement::Top => "rotateX(90deg)",
            FacePlacement::Bottom => "rotateX(-90deg)",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            FacePlacement::Front => "face-front",
            FacePlacement::Right => "face-right",
            FacePlacement::Back => "face-back",
            FacePlacement::Left => "face-left",
            FacePlacement::Top => "face-top",
            FacePlacement::Bottom => "face-bottom",
        }
    }
}

pub struct FaceContent {
    pub placement: FacePlacement,
    pub html: &'static str,
}

// One panel per cube side.
pub const FACES: [FaceContent; 6] = [
    FaceContent {
        placement: FacePlacement::Front,
        html: "<h1 class='fuzzy'>Scroll Down</h1>",
    },
    FaceContent {
        placement: FacePlacement::Right,
        html: "<h2>Keep Going</h2><p>Every notch of the wheel turns the cube one face.</p>",
    },
    FaceContent {
        placement: FacePlacement::Back,
        html: "<h2>PURPOSE</h2><p>Trying out 3D on the web with Rust, WebGPU and CSS 3D.</p>",
    },
    FaceContent {
        placement: FacePlacement::Left,
        html: "<h2 class='decrypt'>Hey There!!!</h2><br/><h2>Hover It</h2>",
    },
    FaceContent {
        placement: FacePlacement::Top,
        html: "<h2>Built with</h2><h2>wgpu and wasm-bindgen</h2>",
    },
    FaceContent {
        placement: FacePlacement::Bottom,
        html: "<h2>Still here?</h2><h1>Scroll Up</h1>",
    },
];

/// Size and position of every panel for a given projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    /// Panel box edge before the content scale is applied (px).
    pub panel_px: f32,
    /// Distance from cube centre to panel plane (px).
    pub depth_px: f32,
}

impl FaceLayout {
    pub fn new(projection: &CssProjection) -> Self {
        Self {
            panel_px: projection.to_px(CUBE_EDGE) / FACE_CONTENT_SCALE,
            depth_px: projection.to_px(CUBE_EDGE * 0.5 + FACE_OFFSET),
        }
    }

    /// Inline style for one panel, centred on the cube origin.
    pub fn face_style(&self, placement: FacePlacement) -> String {
        let half = self.panel_px * 0.5;
        format!(
            "width:{w:.2}px;height:{w:.2}px;left:{l:.2}px;top:{l:.2}px;transform:{rot} translateZ({d:.2}px) scale({s});",
            w = self.panel_px,
            l = -half,
            rot = placement.css_rotation(),
            d = self.depth_px,
            s = FACE_CONTENT_SCALE,
        )
    }
}

/// CSS transform for the cube container.
///
/// CSS y points down, which flips the sense of a rotation about X; yaw keeps
/// its sign.
pub fn cube_transform(orientation: Orientation, projection: &CssProjection) -> String {
    format!(
        "translateY({:.2}px) rotateX({:.5}rad) rotateY({:.5}rad)",
        projection.offset_y_px, -orientation.pitch, orientation.yaw
    )
}
