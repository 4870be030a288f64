use glam::Vec3;

// Shared scene/visual tuning constants used by the web frontend.

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.0, 9.0); // looks down -Z, cube sits slightly low
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;

// Cube
pub const CUBE_EDGE: f32 = 2.5; // world units
pub const FACE_OFFSET: f32 = 0.01; // lifts each panel off the cube surface
pub const FACE_CONTENT_SCALE: f32 = 0.5; // panel content is laid out at 2x then scaled down

// Canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

// Starfield texture (equirectangular)
pub const STARFIELD_WIDTH: u32 = 2048;
pub const STARFIELD_HEIGHT: u32 = 1024;
pub const STARFIELD_STAR_COUNT: usize = 9000;
pub const STARFIELD_SEED: u64 = 2020;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.7;
pub const BLOOM_THRESHOLD: f32 = 0.6;

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const STAGE_ID: &str = "cube-stage";
pub const LOADING_ID: &str = "loading-overlay";
pub const MUSIC_SRC: &str = "bgm.mp3";

// Cube hover; enter/leave do not bubble, so moving between a face and its
// content does not toggle the class.
pub const HOVER_CLASS: &str = "hovered";
pub const HOVER_ENTER_EVENT: &str = "pointerenter";
pub const HOVER_LEAVE_EVENT: &str = "pointerleave";
