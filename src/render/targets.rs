use super::bloom::BloomTex;
use super::helpers;
use wgpu;

/// Offscreen color targets for the render pipeline.
///
/// A full-resolution HDR scene color plus two half-resolution bloom ping-pong
/// textures. The textures are kept alive alongside their views.
pub(crate) struct RenderTargets {
    _hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    _bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    _bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

#[inline]
pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (hdr_tex, hdr_view) = helpers::create_hdr_target(device, "hdr_tex", width, height);
        let (bw, bh) = bloom_size(width, height);
        let (bloom_a, bloom_a_view) = helpers::create_hdr_target(device, "bloom_a", bw, bh);
        let (bloom_b, bloom_b_view) = helpers::create_hdr_target(device, "bloom_b", bw, bh);
        Self {
            _hdr_tex: hdr_tex,
            hdr_view,
            _bloom_a: bloom_a,
            bloom_a_view,
            _bloom_b: bloom_b,
            bloom_b_view,
        }
    }

    pub(crate) fn view(&self, tex: BloomTex) -> &wgpu::TextureView {
        match tex {
            BloomTex::Hdr => &self.hdr_view,
            BloomTex::BloomA => &self.bloom_a_view,
            BloomTex::BloomB => &self.bloom_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
