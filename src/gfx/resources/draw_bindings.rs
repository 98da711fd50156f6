//! Per-surface GPU resources
//!
//! Every drawable surface owns a vertex buffer, an index buffer and a small
//! uniform block with its model matrix and material factors, bound at
//! group 1 in all scene pipelines.

use cgmath::{Matrix, Matrix4, SquareMatrix};
use wgpu::util::DeviceExt;

use crate::{
    gfx::{camera::camera_utils::matrix_to_array, scene::node::Surface},
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Must match `DrawUniform` in the WGSL shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// rgb linear color, a = opacity
    pub base_color: [f32; 4],
    /// rgb emissive radiance
    pub emissive: [f32; 4],
    /// metallic, roughness, receive_shadow (0/1), unused
    pub params: [f32; 4],
}

impl DrawUniform {
    pub fn new(world: &Matrix4<f32>, surface: &Surface) -> Self {
        let normal_matrix = world
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(*world);
        let material = &surface.material;
        let [r, g, b] = material.base_color;
        let [er, eg, eb] = material.emissive_radiance();

        Self {
            model: matrix_to_array(*world),
            normal_matrix: matrix_to_array(normal_matrix),
            base_color: [r, g, b, material.effective_opacity()],
            emissive: [er, eg, eb, 0.0],
            params: [
                material.metallic,
                material.roughness,
                if surface.receive_shadow { 1.0 } else { 0.0 },
                0.0,
            ],
        }
    }
}

pub type DrawUBO = UniformBuffer<DrawUniform>;

/// Shared layout for the per-surface bind group
pub struct DrawBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
}

impl DrawBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Draw Bind Group");

        Self { bind_group_layout }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// Uploads the surface mesh and creates its uniform block
    pub fn create_surface_gpu(
        &self,
        device: &wgpu::Device,
        surface: &Surface,
        uniform: &DrawUniform,
    ) -> SurfaceGpu {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Surface Vertex Buffer"),
            contents: bytemuck::cast_slice(&surface.mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Surface Index Buffer"),
            contents: bytemuck::cast_slice(&surface.mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = DrawUBO::with_content(device, uniform);
        let bind_group = BindGroupBuilder::new(&self.bind_group_layout)
            .resource(uniform_buffer.binding_resource())
            .create(device, "Draw Bind Group");

        SurfaceGpu {
            vertex_buffer,
            index_buffer,
            index_count: surface.mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }
}

/// GPU side of a [`Surface`]
pub struct SurfaceGpu {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub uniform_buffer: DrawUBO,
    pub bind_group: wgpu::BindGroup,
}

impl SurfaceGpu {
    pub fn update(&mut self, queue: &wgpu::Queue, uniform: DrawUniform) {
        self.uniform_buffer.update_content(queue, uniform);
    }

    pub fn destroy(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}

impl std::fmt::Debug for SurfaceGpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceGpu")
            .field("index_count", &self.index_count)
            .finish_non_exhaustive()
    }
}
