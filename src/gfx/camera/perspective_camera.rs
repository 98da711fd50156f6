use cgmath::*;

use super::camera_utils::{CameraUniform, OPENGL_TO_WGPU_MATRIX};

/// Perspective camera that always looks at a fixed target
///
/// `vertical_shift` slides the rendered image up or down in normalized device
/// coordinates without changing the view, which lets the hero canvas scroll
/// with the page while the camera itself stays put.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub vertical_shift: f32,
    pub uniform: CameraUniform,
}

impl PerspectiveCamera {
    /// View-projection including the scroll shift
    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        let shift = Matrix4::from_translation(Vector3::new(0.0, self.vertical_shift, 0.0));
        shift * proj * view
    }

    pub fn new(fovy: Deg<f32>, aspect: f32, znear: f32, zfar: f32, eye: Vector3<f32>) -> Self {
        let mut camera = Self {
            eye,
            target: Vector3::zero(),
            up: Vector3::unit_y(),
            aspect,
            fovy: fovy.into(),
            znear,
            zfar,
            vertical_shift: 0.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    pub fn look_at(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Moves the image up by `pixels` on a viewport `viewport_height` pixels tall
    pub fn set_scroll_offset(&mut self, pixels: f32, viewport_height: f32) {
        self.vertical_shift = if viewport_height > 0.0 {
            2.0 * pixels / viewport_height
        } else {
            0.0
        };
    }

    pub fn update_view_proj(&mut self) {
        self.uniform = CameraUniform::new(self.eye, self.build_view_projection_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = PerspectiveCamera::new(
            Deg(45.0),
            16.0 / 9.0,
            0.1,
            200.0,
            Vector3::new(0.0, 0.0, 5.0),
        );
        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
    }

    #[test]
    fn scroll_offset_moves_image_up() {
        let mut camera =
            PerspectiveCamera::new(Deg(45.0), 1.0, 0.1, 200.0, Vector3::new(0.0, 0.0, 5.0));
        camera.set_scroll_offset(400.0, 800.0);
        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.y / clip.w - 1.0).abs() < 1e-5);
    }
}
