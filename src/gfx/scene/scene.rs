use cgmath::{Matrix4, One};

use super::{
    group::SceneGroup,
    node::{Node, Surface},
};
use crate::gfx::{camera::PerspectiveCamera, lights::LightRig};

/// Everything the render engine draws for one frame
#[derive(Debug)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub lights: LightRig,
    /// Static decoration drawn in world space (the ground disc)
    pub ground: Node,
    pub group: SceneGroup,
}

impl Scene {
    pub fn new(camera: PerspectiveCamera, lights: LightRig, ground: Node, group: SceneGroup) -> Self {
        Self {
            camera,
            lights,
            ground,
            group,
        }
    }

    /// Refreshes derived camera matrices
    pub fn update(&mut self) {
        self.camera.update_view_proj();
    }

    /// Visits the ground first, then the group subject, with world matrices
    pub fn visit_surfaces<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&Matrix4<f32>, &'a Surface),
    {
        self.ground.visit_surfaces(&Matrix4::one(), &mut visit);
        let group_matrix = self.group.transform.matrix();
        self.group
            .content()
            .node()
            .visit_surfaces(&group_matrix, &mut visit);
    }

    pub fn visit_surfaces_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&Matrix4<f32>, &mut Surface),
    {
        self.ground.visit_surfaces_mut(&Matrix4::one(), &mut visit);
        let group_matrix = self.group.transform.matrix();
        self.group
            .content_mut()
            .node_mut()
            .visit_surfaces_mut(&group_matrix, &mut visit);
    }

    /// Destroys every surface buffer in the scene
    pub fn release_gpu_resources(&mut self) {
        self.ground.release_gpu_resources();
        self.group.content_mut().node_mut().release_gpu_resources();
    }
}
