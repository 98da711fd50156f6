//! Global uniform bindings for camera, lights and tone mapping
//!
//! Bound at group 0 in every scene pipeline.

use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

use crate::{
    gfx::{
        camera::camera_utils::{matrix_to_array, CameraUniform, OPENGL_TO_WGPU_MATRIX},
        lights::{DirectionalLight, LightRig},
        rendering::tone_mapping::ToneMapping,
    },
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Half extent of the key light's orthographic shadow frustum
const SHADOW_HALF_EXTENT: f32 = 5.0;
const SHADOW_NEAR: f32 = 0.5;
const SHADOW_FAR: f32 = 50.0;

/// Global uniform buffer content
///
/// MUST match the `Globals` struct in the shaders exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniform {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    /// rgb * intensity
    pub ambient: [f32; 4],
    /// xyz toward the light
    pub key_direction: [f32; 4],
    pub key_color: [f32; 4],
    pub fill_direction: [f32; 4],
    pub fill_color: [f32; 4],
    /// xyz position, w range
    pub rim_position: [f32; 4],
    pub rim_color: [f32; 4],
    /// exposure, tone mapping enabled, unused, unused
    pub tone: [f32; 4],
}

pub type GlobalUBO = UniformBuffer<GlobalUniform>;

fn scaled_color(color: [f32; 3], intensity: f32) -> [f32; 4] {
    [color[0] * intensity, color[1] * intensity, color[2] * intensity, 1.0]
}

fn direction4(light: &DirectionalLight) -> [f32; 4] {
    let d = light.direction();
    [d.x, d.y, d.z, 0.0]
}

/// View-projection of the shadow-casting light, looking at the origin
pub fn light_view_projection(light: &DirectionalLight) -> Matrix4<f32> {
    let eye = Point3::new(light.position.x, light.position.y, light.position.z);
    let up = if light.direction().cross(Vector3::unit_y()).magnitude2() < 1e-6 {
        Vector3::unit_z()
    } else {
        Vector3::unit_y()
    };
    let view = Matrix4::look_at_rh(eye, Point3::new(0.0, 0.0, 0.0), up);
    let projection = cgmath::ortho(
        -SHADOW_HALF_EXTENT,
        SHADOW_HALF_EXTENT,
        -SHADOW_HALF_EXTENT,
        SHADOW_HALF_EXTENT,
        SHADOW_NEAR,
        SHADOW_FAR,
    );
    OPENGL_TO_WGPU_MATRIX * projection * view
}

impl GlobalUniform {
    pub fn new(camera: &CameraUniform, lights: &LightRig, tone_mapping: ToneMapping) -> Self {
        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            light_view_proj: matrix_to_array(light_view_projection(&lights.key)),
            ambient: scaled_color(lights.ambient.color, lights.ambient.intensity),
            key_direction: direction4(&lights.key),
            key_color: scaled_color(lights.key.color, lights.key.intensity),
            fill_direction: direction4(&lights.fill),
            fill_color: scaled_color(lights.fill.color, lights.fill.intensity),
            rim_position: [
                lights.rim.position.x,
                lights.rim.position.y,
                lights.rim.position.z,
                lights.rim.range,
            ],
            rim_color: scaled_color(lights.rim.color, lights.rim.intensity),
            tone: [
                tone_mapping.exposure,
                if tone_mapping.enabled { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        }
    }
}

/// Layout and bind group for the global uniforms
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group");
        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Global Bind Group");

        Self {
            bind_group_layout,
            bind_group,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Transform, Vector4};

    #[test]
    fn origin_lands_inside_the_shadow_frustum() {
        let lights = LightRig::default();
        let clip = light_view_projection(&lights.key) * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn ground_disc_fits_the_shadow_frustum() {
        let lights = LightRig::default();
        let m = light_view_projection(&lights.key);
        for corner in [
            Point3::new(1.5, -2.4, 1.5),
            Point3::new(-1.5, -2.4, -1.5),
            Point3::new(1.5, -2.4, -1.5),
        ] {
            let p = m.transform_point(corner);
            assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0);
        }
    }
}
