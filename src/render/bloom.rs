use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};

/// Uniform block shared by every post pass. Layout mirrors `PostUniforms` in
/// `shaders/post.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
    pub blur_dir: [f32; 2],
    pub bloom_strength: f32,
    pub threshold: f32,
}

impl PostUniforms {
    pub fn new(resolution: [f32; 2], blur_dir: [f32; 2]) -> Self {
        Self {
            resolution,
            _pad: [0.0; 2],
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

/// Offscreen color targets the bloom chain reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BloomTex {
    Hdr,
    BloomA,
    BloomB,
}

/// One step of the bloom chain, run in `BloomPass::CHAIN` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BloomPass {
    Bright,
    BlurH,
    BlurV,
}

/// Target holding the finished bloom after the chain, sampled by the composite.
pub const BLOOM_OUTPUT: BloomTex = BloomTex::BloomA;

impl BloomPass {
    pub const CHAIN: [BloomPass; 3] = [BloomPass::Bright, BloomPass::BlurH, BloomPass::BlurV];

    pub fn label(self) -> &'static str {
        match self {
            BloomPass::Bright => "bright_pass",
            BloomPass::BlurH => "blur_h",
            BloomPass::BlurV => "blur_v",
        }
    }

    /// Sample step direction for the blur; zero for the bright pass.
    pub fn blur_dir(self) -> [f32; 2] {
        match self {
            BloomPass::Bright => [0.0, 0.0],
            BloomPass::BlurH => [1.0, 0.0],
            BloomPass::BlurV => [0.0, 1.0],
        }
    }

    pub fn source(self) -> BloomTex {
        match self {
            BloomPass::Bright => BloomTex::Hdr,
            BloomPass::BlurH => BloomTex::BloomA,
            BloomPass::BlurV => BloomTex::BloomB,
        }
    }

    pub fn target(self) -> BloomTex {
        match self {
            BloomPass::Bright => BloomTex::BloomA,
            BloomPass::BlurH => BloomTex::BloomB,
            BloomPass::BlurV => BloomTex::BloomA,
        }
    }
}
