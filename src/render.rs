use crate::camera::{sky_basis, SceneCamera};
use crate::constants::{STARFIELD_HEIGHT, STARFIELD_SEED, STARFIELD_STAR_COUNT, STARFIELD_WIDTH};
use crate::core::Orientation;
use web_sys as web;

pub mod bloom;
mod helpers;
mod post;
mod sky;
pub mod starfield;
mod targets;

use bloom::{BloomPass, PostUniforms};
use helpers::HDR_FORMAT;
use sky::{create_sky_resources, SkyResources, SkyUniforms};
use starfield::StarfieldImage;
use targets::RenderTargets;

/// WebGPU side of the scene: the starfield sky drawn into an HDR target, then
/// bright-pass, separable blur and composite for bloom.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sky: SkyResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    post_groups: post::PostBindGroups,

    width: u32,
    height: u32,
    camera: SceneCamera,
    sky_rotation: Orientation,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        camera: SceneCamera,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let image = StarfieldImage::generate(
            STARFIELD_WIDTH,
            STARFIELD_HEIGHT,
            STARFIELD_STAR_COUNT,
            STARFIELD_SEED,
        );
        let sky = create_sky_resources(&device, &queue, HDR_FORMAT, &image);
        log::info!(
            "[gpu] starfield {}x{} uploaded, surface {}x{} {:?}",
            image.width,
            image.height,
            width,
            height,
            format
        );

        let targets = RenderTargets::new(&device, width, height);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = post::create_bind_groups(
            &device,
            &post,
            &linear_sampler,
            &targets,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sky,
            targets,
            linear_sampler,
            post,
            post_groups,
            width,
            height,
            camera,
            sky_rotation: Orientation::IDENTITY,
        })
    }

    /// Rotation of the starfield layer (outer group plus ambient drift).
    pub fn set_sky_rotation(&mut self, rotation: Orientation) {
        self.sky_rotation = rotation;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Offscreen targets and the bind groups that sample them
            self.targets.recreate(&self.device, width, height);
            self.post_groups = post::create_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets,
            );
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: starfield into HDR
        let sky_u = SkyUniforms::new(
            sky_basis(self.sky_rotation.rotation_f32()),
            [self.width as f32, self.height as f32],
            self.camera.tan_half_fovy(),
        );
        self.queue
            .write_buffer(&self.sky.uniform_buffer, 0, bytemuck::bytes_of(&sky_u));
        post::blit(
            &mut encoder,
            "sky_pass",
            &self.targets.hdr_view,
            wgpu::Color::BLACK,
            &self.sky.pipeline,
            &self.sky.bind_group,
            None,
        );

        let (bw, bh) = targets::bloom_size(self.width, self.height);
        let res = [bw as f32, bh as f32];

        // Each pass gets its own submit so the shared uniform buffer holds the
        // right blur direction when it executes.
        for pass in BloomPass::CHAIN {
            self.queue.write_buffer(
                &self.post.uniform_buffer,
                0,
                bytemuck::bytes_of(&PostUniforms::new(res, pass.blur_dir())),
            );
            let pipeline = match pass {
                BloomPass::Bright => &self.post.bright_pipeline,
                BloomPass::BlurH | BloomPass::BlurV => &self.post.blur_pipeline,
            };
            post::blit(
                &mut encoder,
                pass.label(),
                self.targets.view(pass.target()),
                wgpu::Color::BLACK,
                pipeline,
                self.post_groups.sampling(pass.source()),
                None,
            );
            self.queue.submit(Some(encoder.finish()));
            encoder = self
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("encoder"),
                });
        }

        // Final pass: composite to swapchain
        let composite_u = PostUniforms::new([self.width as f32, self.height as f32], [0.0, 0.0]);
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&composite_u));
        post::blit(
            &mut encoder,
            "composite",
            &view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.post_groups.from_hdr,
            Some(&self.post_groups.bloom_output),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
