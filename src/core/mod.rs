pub mod animator;
pub mod constants;
pub mod music_gate;
pub mod orientation;
pub mod scroll;
pub mod step;

pub use animator::{AnimatorParams, SceneAnimator, SceneTransforms};
pub use music_gate::MusicGate;
pub use orientation::{target_orientation, Orientation};
pub use scroll::{ScrollController, SystemClock};
pub use step::{Direction, Step};

// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
