//! Scene hierarchy
//!
//! A [`Node`] owns its surfaces and children outright; the hierarchy is a
//! plain tree with no shared ownership.

use cgmath::{
    Matrix4, One, Point3, Quaternion, Rad, Rotation3, Transform as _, Vector3, Zero,
};

use super::{bounds::Aabb, mesh::Mesh};
use crate::gfx::resources::{draw_bindings::SurfaceGpu, material::Material};

/// Translation, rotation, scale applied in that order (T * R * S)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Quaternion::one(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vector3<f32>) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Rotation about X by `pitch` after rotation about Y by `yaw`
    pub fn set_pitch_yaw(&mut self, pitch: f32, yaw: f32) {
        self.rotation = Quaternion::from_angle_x(Rad(pitch)) * Quaternion::from_angle_y(Rad(yaw));
    }

    /// Rotation about X only
    pub fn with_rotation_x(mut self, angle: f32) -> Self {
        self.rotation = Quaternion::from_angle_x(Rad(angle));
        self
    }
}

/// One drawable piece of a node: mesh, material and shadow flags
#[derive(Debug)]
pub struct Surface {
    pub mesh: Mesh,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// GPU buffers, created lazily by the render engine
    pub gpu: Option<SurfaceGpu>,
}

impl Surface {
    pub fn new(mesh: Mesh, material: Material) -> Self {
        Self {
            mesh,
            material,
            cast_shadow: false,
            receive_shadow: false,
            gpu: None,
        }
    }

    /// Drops GPU buffers; they are recreated on next use
    pub fn release_gpu(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.destroy();
        }
    }
}

/// Named transform node with surfaces and children
#[derive(Debug, Default)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub surfaces: Vec<Surface>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Visits every surface with its world matrix, `parent` being the matrix
    /// of the space this node lives in.
    pub fn visit_surfaces<'a, F>(&'a self, parent: &Matrix4<f32>, visit: &mut F)
    where
        F: FnMut(&Matrix4<f32>, &'a Surface),
    {
        let world = parent * self.transform.matrix();
        for surface in &self.surfaces {
            visit(&world, surface);
        }
        for child in &self.children {
            child.visit_surfaces(&world, visit);
        }
    }

    pub fn visit_surfaces_mut<F>(&mut self, parent: &Matrix4<f32>, visit: &mut F)
    where
        F: FnMut(&Matrix4<f32>, &mut Surface),
    {
        let world = parent * self.transform.matrix();
        for surface in self.surfaces.iter_mut() {
            visit(&world, surface);
        }
        for child in self.children.iter_mut() {
            child.visit_surfaces_mut(&world, visit);
        }
    }

    /// Calls `visit` on every surface in the subtree regardless of transforms
    pub fn for_each_surface_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Surface),
    {
        for surface in self.surfaces.iter_mut() {
            visit(surface);
        }
        for child in self.children.iter_mut() {
            child.for_each_surface_mut(visit);
        }
    }

    /// Bounds of every vertex in the subtree, expressed in the parent's space
    /// (this node's own transform included).
    pub fn bounds(&self) -> Aabb {
        let mut bounds = Aabb::empty();
        self.visit_surfaces(&Matrix4::one(), &mut |world, surface| {
            for vertex in &surface.mesh.vertices {
                bounds.expand(world.transform_point(Point3::from(vertex.position)));
            }
        });
        bounds
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
            + self
                .children
                .iter()
                .map(Node::surface_count)
                .sum::<usize>()
    }

    pub fn triangle_count(&self) -> usize {
        self.surfaces
            .iter()
            .map(|s| s.mesh.triangle_count())
            .sum::<usize>()
            + self
                .children
                .iter()
                .map(Node::triangle_count)
                .sum::<usize>()
    }

    pub fn release_gpu_resources(&mut self) {
        self.for_each_surface_mut(&mut Surface::release_gpu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_icosahedron;

    fn unit_ball() -> Node {
        Node::new("ball").with_surface(Surface::new(
            Mesh::from_geometry(&generate_icosahedron(1.0, 0)),
            Material::default(),
        ))
    }

    #[test]
    fn bounds_include_own_transform() {
        let node = unit_ball().with_transform(Transform {
            scale: Vector3::new(2.0, 2.0, 2.0),
            ..Transform::from_translation(Vector3::new(5.0, 0.0, 0.0))
        });
        let unscaled = unit_ball().bounds().max_dimension();
        let bounds = node.bounds();
        assert!((bounds.center().x - 5.0).abs() < 1e-5);
        assert!((bounds.max_dimension() - 2.0 * unscaled).abs() < 1e-5);
    }

    #[test]
    fn child_transforms_compose() {
        let root = Node::new("root")
            .with_transform(Transform::from_translation(Vector3::new(0.0, 1.0, 0.0)))
            .with_child(
                unit_ball()
                    .with_transform(Transform::from_translation(Vector3::new(0.0, 2.0, 0.0))),
            );
        assert!((root.bounds().center().y - 3.0).abs() < 1e-5);
        assert_eq!(root.surface_count(), 1);
        assert_eq!(root.triangle_count(), 20);
    }

    #[test]
    fn pitch_yaw_rotation_keeps_bounds_size_of_sphere() {
        let mut node = unit_ball();
        node.transform.set_pitch_yaw(0.3, 1.2);
        let size = node.bounds().max_dimension();
        assert!(size > 1.5 && size <= 2.0 + 1e-5);
    }
}
