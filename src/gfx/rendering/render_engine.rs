//! WGPU-based renderer for the hero scene
//!
//! Owns the surface, device and every engine-level GPU resource: depth
//! buffer, key-light shadow map, global uniforms and the scene pipelines.
//! Per-surface buffers live on the scene surfaces themselves and are created
//! lazily in [`RenderEngine::prepare`].

use std::sync::Arc;

use wgpu::TextureFormat;

use super::{
    pipeline_manager::{PipelineConfig, PipelineManager},
    tone_mapping::{SurfaceExtent, ToneMapping},
};
use crate::{
    error::Result,
    gfx::{
        resources::{
            draw_bindings::{DrawBindings, DrawUniform, SurfaceGpu},
            global_bindings::{GlobalBindings, GlobalUBO, GlobalUniform},
            material::Shading,
            texture_resource::TextureResource,
        },
        scene::{mesh::Topology, node::Surface, scene::Scene},
    },
    wgpu_utils::{binding_builder::BindGroupLayoutBuilder, binding_types, BindGroupBuilder},
};

const SHADOW_MAP_SIZE: u32 = 2048;

const SHADOW_PIPELINE: &str = "Shadow";
const LIT_PIPELINE: &str = "Lit";
const LIT_BLEND_PIPELINE: &str = "LitBlend";
const UNLIT_PIPELINE: &str = "Unlit";
const UNLIT_LINES_PIPELINE: &str = "UnlitLines";

/// Which pipeline draws a surface in the main pass
fn main_pipeline_for(surface: &Surface) -> &'static str {
    match (surface.material.shading, surface.mesh.topology) {
        (_, Topology::Lines) => UNLIT_LINES_PIPELINE,
        (Shading::Unlit, Topology::Triangles) => UNLIT_PIPELINE,
        (Shading::Lit, Topology::Triangles) if surface.material.transparent => LIT_BLEND_PIPELINE,
        (Shading::Lit, Topology::Triangles) => LIT_PIPELINE,
    }
}

fn is_opaque_pass(pipeline: &str) -> bool {
    pipeline == LIT_PIPELINE
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    format: TextureFormat,
    depth_texture: TextureResource,
    shadow_map: TextureResource,
    shadow_bind_group: wgpu::BindGroup,
    pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    draw_bindings: DrawBindings,
    tone_mapping: ToneMapping,
    clear_color: wgpu::Color,
}

impl RenderEngine {
    /// Creates the renderer for `window` at the given pixel extent
    ///
    /// Fails when no surface, adapter or device can be obtained.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        extent: SurfaceExtent,
        tone_mapping: ToneMapping,
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Vitrine Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        // Colors are encoded to sRGB in the shaders, so prefer a linear format
        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .unwrap_or(TextureFormat::Bgra8Unorm);
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: extent.width,
            height: extent.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = TextureResource::create_depth_texture(&device, &config, "Depth Texture");
        let shadow_map = TextureResource::create_shadow_map(&device, SHADOW_MAP_SIZE);

        let shadow_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::shadow_map())
            .next_binding_fragment(binding_types::shadow_sampler())
            .create(&device, "Shadow Bind Group");
        let shadow_bind_group = BindGroupBuilder::new(&shadow_layout)
            .texture(&shadow_map.view)
            .sampler(&shadow_map.sampler)
            .create(&device, "Shadow Bind Group");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let draw_bindings = DrawBindings::new(&device);

        let device: Arc<wgpu::Device> = device.into();
        let queue: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device.clone());

        let common = include_str!("shaders/common.wgsl");
        pipeline_manager.load_shader("pbr", &format!("{common}\n{}", include_str!("shaders/pbr.wgsl")));
        pipeline_manager.load_shader("unlit", &format!("{common}\n{}", include_str!("shaders/unlit.wgsl")));
        pipeline_manager.load_shader(
            "shadow",
            &format!("{common}\n{}", include_str!("shaders/shadow_pass.wgsl")),
        );

        let scene_layouts = vec![
            global_bindings.bind_group_layout().clone(),
            draw_bindings.bind_group_layout().clone(),
            shadow_layout.layout.clone(),
        ];

        pipeline_manager.register_pipeline(
            SHADOW_PIPELINE,
            PipelineConfig::default()
                .with_label("SHADOW")
                .with_shader("shadow")
                .with_depth(TextureResource::DEPTH_FORMAT)
                .with_depth_bias(wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                })
                .with_cull_mode(None)
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    draw_bindings.bind_group_layout().clone(),
                ])
                .with_color_targets(vec![])
                .with_vertex_only(),
        );

        pipeline_manager.register_pipeline(
            LIT_PIPELINE,
            PipelineConfig::default()
                .with_label("LIT")
                .with_shader("pbr")
                .with_depth(TextureResource::DEPTH_FORMAT)
                .with_color_target(format, Some(wgpu::BlendState::REPLACE))
                .with_bind_group_layouts(scene_layouts.clone()),
        );

        pipeline_manager.register_pipeline(
            LIT_BLEND_PIPELINE,
            PipelineConfig::default()
                .with_label("LIT BLEND")
                .with_shader("pbr")
                .with_depth(TextureResource::DEPTH_FORMAT)
                .with_color_target(format, Some(wgpu::BlendState::ALPHA_BLENDING))
                .with_bind_group_layouts(scene_layouts.clone()),
        );

        pipeline_manager.register_pipeline(
            UNLIT_PIPELINE,
            PipelineConfig::default()
                .with_label("UNLIT")
                .with_shader("unlit")
                .with_depth(TextureResource::DEPTH_FORMAT)
                .with_cull_mode(None)
                .with_color_target(format, Some(wgpu::BlendState::ALPHA_BLENDING))
                .with_bind_group_layouts(scene_layouts.clone()),
        );

        pipeline_manager.register_pipeline(
            UNLIT_LINES_PIPELINE,
            PipelineConfig::default()
                .with_label("UNLIT LINES")
                .with_shader("unlit")
                .with_depth(TextureResource::DEPTH_FORMAT)
                .with_cull_mode(None)
                .with_primitive_topology(wgpu::PrimitiveTopology::LineList)
                .with_color_target(format, Some(wgpu::BlendState::ALPHA_BLENDING))
                .with_bind_group_layouts(scene_layouts),
        );

        if let Err(errors) = pipeline_manager.create_all_pipelines() {
            for error in errors {
                log::error!("{}", error);
            }
        }

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            format,
            depth_texture,
            shadow_map,
            shadow_bind_group,
            pipeline_manager,
            global_ubo,
            global_bindings,
            draw_bindings,
            tone_mapping,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Uploads camera, light and per-surface uniforms for the next frame
    ///
    /// Surfaces without GPU buffers get them here; empty meshes are skipped.
    pub fn prepare(&mut self, scene: &mut Scene) {
        scene.update();
        self.global_ubo.update_content(
            &self.queue,
            GlobalUniform::new(&scene.camera.uniform, &scene.lights, self.tone_mapping),
        );

        let device = &self.device;
        let queue = &self.queue;
        let draw_bindings = &self.draw_bindings;
        scene.visit_surfaces_mut(|world, surface| {
            let uniform = DrawUniform::new(world, surface);
            if let Some(gpu) = surface.gpu.as_mut() {
                gpu.update(queue, uniform);
                return;
            }
            if surface.mesh.is_empty() {
                return;
            }
            let gpu = draw_bindings.create_surface_gpu(device, surface, &uniform);
            surface.gpu = Some(gpu);
        });
    }

    /// Renders one frame: shadow pass, scene pass, then the optional UI pass
    ///
    /// Opaque lit surfaces draw first; blended surfaces follow in scene
    /// order.
    pub fn render_frame<F>(&mut self, scene: &Scene, ui_callback: Option<F>)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                log::error!("Failed to acquire surface texture: {}", e);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut shadow_casters: Vec<&SurfaceGpu> = Vec::new();
        let mut opaque: Vec<&SurfaceGpu> = Vec::new();
        let mut blended: Vec<(&'static str, &SurfaceGpu)> = Vec::new();
        scene.visit_surfaces(|_, surface| {
            let Some(gpu) = surface.gpu.as_ref() else {
                return;
            };
            if surface.cast_shadow && surface.mesh.topology == Topology::Triangles {
                shadow_casters.push(gpu);
            }
            if surface.material.effective_opacity() <= 0.0 {
                return;
            }
            let pipeline = main_pipeline_for(surface);
            if is_opaque_pass(pipeline) {
                opaque.push(gpu);
            } else {
                blended.push((pipeline, gpu));
            }
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        // PASS 1: key light depth
        {
            let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Depth Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow_map.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(pipeline) = self.pipeline_manager.get_pipeline(SHADOW_PIPELINE) {
                shadow_pass.set_pipeline(pipeline);
                shadow_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
                for gpu in &shadow_casters {
                    draw_surface(&mut shadow_pass, gpu);
                }
            }
        }

        // PASS 2: scene
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
            render_pass.set_bind_group(2, &self.shadow_bind_group, &[]);

            if let Some(pipeline) = self.pipeline_manager.get_pipeline(LIT_PIPELINE) {
                render_pass.set_pipeline(pipeline);
                for gpu in &opaque {
                    draw_surface(&mut render_pass, gpu);
                }
            }

            let mut current: Option<&str> = None;
            for (name, gpu) in &blended {
                if current != Some(*name) {
                    let Some(pipeline) = self.pipeline_manager.get_pipeline(name) else {
                        continue;
                    };
                    render_pass.set_pipeline(pipeline);
                    current = Some(*name);
                }
                draw_surface(&mut render_pass, gpu);
            }
        }

        // PASS 3: UI overlay
        if let Some(ui_callback) = ui_callback {
            ui_callback(&self.device, &self.queue, &mut encoder, &surface_texture_view);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    /// Sets the background behind the scene from sRGB components
    pub fn set_clear_color(&mut self, rgb: [f32; 3]) {
        self.clear_color = wgpu::Color {
            r: f64::from(rgb[0]),
            g: f64::from(rgb[1]),
            b: f64::from(rgb[2]),
            a: 1.0,
        };
    }

    pub fn tone_mapping(&self) -> ToneMapping {
        self.tone_mapping
    }

    /// Reconfigures the surface and recreates the depth buffer
    ///
    /// Zero-sized extents (minimized windows) are ignored.
    pub fn resize(&mut self, extent: SurfaceExtent) {
        if extent.width == 0 || extent.height == 0 {
            return;
        }
        if extent.width == self.config.width && extent.height == self.config.height {
            return;
        }

        self.config.width = extent.width;
        self.config.height = extent.height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture.destroy();
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "Depth Texture");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> TextureFormat {
        self.format
    }

    /// Destroys engine textures and buffers, then the device itself
    ///
    /// Scene surfaces must already have released their buffers.
    pub fn dispose(self) {
        self.depth_texture.destroy();
        self.shadow_map.destroy();
        self.global_ubo.destroy();
        self.device.destroy();
        log::info!("Render engine disposed");
    }
}

fn draw_surface(pass: &mut wgpu::RenderPass<'_>, gpu: &SurfaceGpu) {
    pass.set_bind_group(1, &gpu.bind_group, &[]);
    pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
    pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    pass.draw_indexed(0..gpu.index_count, 0, 0..1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::generate_icosahedron,
        resources::material::Material,
        scene::mesh::Mesh,
    };

    fn surface(material: Material, wire: bool) -> Surface {
        let geometry = generate_icosahedron(1.0, 0);
        let mesh = if wire {
            Mesh::wireframe(&geometry)
        } else {
            Mesh::from_geometry(&geometry)
        };
        Surface::new(mesh, material)
    }

    #[test]
    fn pipelines_follow_material_and_topology() {
        assert_eq!(main_pipeline_for(&surface(Material::lit("a", 0x747264), false)), LIT_PIPELINE);
        assert_eq!(
            main_pipeline_for(&surface(Material::lit("a", 0x747264).with_opacity(0.0), false)),
            LIT_BLEND_PIPELINE
        );
        assert_eq!(
            main_pipeline_for(&surface(Material::unlit("b", 0x3C3633).with_opacity(0.06), false)),
            UNLIT_PIPELINE
        );
        assert_eq!(
            main_pipeline_for(&surface(Material::unlit("c", 0x9A9080), true)),
            UNLIT_LINES_PIPELINE
        );
    }
}
