// Host-side tests for the bloom pass chain and its uniform block.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod bloom {
    include!("../src/render/bloom.rs");
}

use bloom::{BloomPass, BloomTex, PostUniforms, BLOOM_OUTPUT};
use constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};

const POST_WGSL: &str = include_str!("../shaders/post.wgsl");

#[test]
fn chain_starts_from_scene_color() {
    assert_eq!(BloomPass::CHAIN[0], BloomPass::Bright);
    assert_eq!(BloomPass::CHAIN[0].source(), BloomTex::Hdr);
}

#[test]
fn each_pass_reads_what_the_previous_wrote() {
    for pair in BloomPass::CHAIN.windows(2) {
        assert_eq!(pair[1].source(), pair[0].target(), "{:?} -> {:?}", pair[0], pair[1]);
    }
}

#[test]
fn no_pass_samples_its_own_target() {
    for pass in BloomPass::CHAIN {
        assert_ne!(pass.source(), pass.target(), "{:?}", pass);
        assert_ne!(pass.target(), BloomTex::Hdr, "{:?}", pass);
    }
}

#[test]
fn composite_samples_last_pass_output() {
    let last = BloomPass::CHAIN[BloomPass::CHAIN.len() - 1];
    assert_eq!(last.target(), BLOOM_OUTPUT);
}

#[test]
fn blur_runs_both_axes() {
    assert_eq!(BloomPass::Bright.blur_dir(), [0.0, 0.0]);
    assert_eq!(BloomPass::BlurH.blur_dir(), [1.0, 0.0]);
    assert_eq!(BloomPass::BlurV.blur_dir(), [0.0, 1.0]);
}

#[test]
fn pass_labels_are_distinct() {
    let labels: Vec<&str> = BloomPass::CHAIN.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["bright_pass", "blur_h", "blur_v"]);
}

#[test]
fn uniforms_carry_bloom_constants() {
    let u = PostUniforms::new([640.0, 360.0], [1.0, 0.0]);
    assert_eq!(u.bloom_strength, BLOOM_STRENGTH);
    assert_eq!(u.threshold, BLOOM_THRESHOLD);
    assert_eq!(u._pad, [0.0, 0.0]);
}

#[test]
fn uniform_bytes_match_shader_offsets() {
    let u = PostUniforms::new([640.0, 360.0], [0.0, 1.0]);
    let bytes = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 32);
    let f = |off: usize| f32::from_le_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]);
    assert_eq!((f(0), f(4)), (640.0, 360.0));
    assert_eq!((f(16), f(20)), (0.0, 1.0));
    assert_eq!(f(24), BLOOM_STRENGTH);
    assert_eq!(f(28), BLOOM_THRESHOLD);
}

#[test]
fn shader_struct_has_same_fields() {
    let start = POST_WGSL.find("struct PostUniforms {").unwrap();
    let body = &POST_WGSL[start..];
    let body = &body[body.find('{').unwrap() + 1..body.find('}').unwrap()];
    let fields: Vec<&str> = body
        .lines()
        .filter_map(|l| l.trim().split(':').next())
        .filter(|name| !name.is_empty())
        .collect();
    assert_eq!(fields, ["resolution", "_pad", "blur_dir", "bloom_strength", "threshold"]);
}
