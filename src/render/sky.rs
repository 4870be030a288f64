use super::helpers::{make_fullscreen_pipeline, sampler_entry, texture_entry, uniform_entry};
use super::starfield::StarfieldImage;
use glam::Mat3;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SkyUniforms {
    // Columns of the view-to-sky basis, padded to vec4 for uniform layout.
    pub(crate) basis: [[f32; 4]; 3],
    pub(crate) resolution: [f32; 2],
    pub(crate) tan_half_fovy: f32,
    pub(crate) exposure: f32,
}

impl SkyUniforms {
    pub(crate) fn new(basis: Mat3, resolution: [f32; 2], tan_half_fovy: f32) -> Self {
        let col = |v: glam::Vec3| [v.x, v.y, v.z, 0.0];
        Self {
            basis: [col(basis.x_axis), col(basis.y_axis), col(basis.z_axis)],
            resolution,
            tan_half_fovy,
            exposure: 1.0,
        }
    }
}

pub(crate) struct SkyResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    _texture: wgpu::Texture,
}

fn upload_starfield(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &StarfieldImage,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("starfield"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(image.bytes_per_row()),
            rows_per_image: Some(image.height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

pub(crate) fn create_sky_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    hdr_format: wgpu::TextureFormat,
    image: &StarfieldImage,
) -> SkyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sky_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SKY_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sky_bgl"),
        entries: &[uniform_entry(0), texture_entry(1), sampler_entry(2)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sky_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline =
        make_fullscreen_pipeline(device, "sky_pipeline", &pl, &shader, "fs_sky", hdr_format, None);
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sky_uniforms"),
        size: std::mem::size_of::<SkyUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let (texture, view) = upload_starfield(device, queue, image);
    // Repeat on U so longitude wraps across the seam.
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("starfield_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sky_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });

    SkyResources {
        pipeline,
        uniform_buffer,
        bind_group,
        _texture: texture,
    }
}
