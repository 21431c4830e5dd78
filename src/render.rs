use plane_core::grid::grid_vertices;
use plane_core::{
    constants::{GRID_CENTER_COLOR, GRID_LINE_COLOR},
    DecodedImage, FrameInput, PlaneUniforms, SceneRenderer, ViewerConfig, ViewerError,
};
use web_sys as web;

mod grid;
mod helpers;
mod planes;
mod targets;

use grid::{create_grid_resources, GridResources, GridUniforms};
pub use planes::PlaneResources;
use planes::{create_plane_pipeline, create_plane_resources, PlanePipeline};
use targets::RenderTargets;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    planes: PlanePipeline,
    grid: GridResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, cfg: &ViewerConfig) -> anyhow::Result<Self> {
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
        // Translucent background needs a premultiplied canvas.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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

        let targets = RenderTargets::new(&device, width, height);
        let planes = create_plane_pipeline(&device, format);
        let grid = create_grid_resources(
            &device,
            format,
            &grid_vertices(
                cfg.grid_size,
                cfg.grid_divisions,
                GRID_CENTER_COLOR,
                GRID_LINE_COLOR,
            ),
        );
        let [r, g, b, a] = cfg.clear_rgba();
        log::info!(
            "[gpu] surface {}x{} {:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            planes,
            grid,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
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
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Upload a decoded image, refusing sizes the device cannot hold.
    pub fn upload_plane(&self, label: &str, image: &DecodedImage) -> plane_core::Result<PlaneResources> {
        image.ensure_fits(label, self.device.limits().max_texture_dimension_2d)?;
        Ok(create_plane_resources(
            &self.device,
            &self.queue,
            &self.planes,
            label,
            image,
        ))
    }
}

impl SceneRenderer<PlaneResources> for GpuState {
    fn render(&mut self, frame: FrameInput<'_, PlaneResources>) -> plane_core::Result<()> {
        let surface_tex = self
            .surface
            .get_current_texture()
            .map_err(|e| ViewerError::Render(e.to_string()))?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.grid.uniform_buffer,
            0,
            bytemuck::bytes_of(&GridUniforms {
                view_proj: frame.view_proj.to_cols_array_2d(),
            }),
        );
        for plane in frame.planes {
            let u = PlaneUniforms::new(frame.view_proj, plane);
            self.queue
                .write_buffer(&plane.texture.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.grid.pipeline);
            rpass.set_bind_group(0, &self.grid.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.grid.vertex_buffer.slice(..));
            rpass.draw(0..self.grid.vertex_count, 0..1);

            // insertion order is draw order
            rpass.set_pipeline(&self.planes.pipeline);
            for plane in frame.planes {
                rpass.set_bind_group(0, &plane.texture.bind_group, &[]);
                rpass.draw(0..crate::constants::PLANE_VERTEX_COUNT, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
