//! Initial hero scene: camera, lights, ground disc and fallback shape

use std::f32::consts::FRAC_PI_2;

use cgmath::{Deg, Vector3};

use crate::gfx::{
    camera::PerspectiveCamera,
    geometry::{generate_circle, generate_icosahedron},
    lights::LightRig,
    resources::material::Material,
    scene::{
        group::SceneGroup,
        mesh::Mesh,
        node::{Node, Surface, Transform},
        scene::Scene,
    },
};

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_DISTANCE: f32 = 5.0;

const FALLBACK_RADIUS: f32 = 1.4;
const WIRE_RADIUS: f32 = 1.42;
const ICOSAHEDRON_DETAIL: u32 = 1;

const DISC_RADIUS: f32 = 1.5;
const DISC_SEGMENTS: u32 = 64;
const DISC_HEIGHT: f32 = -2.4;

/// Lit icosahedron plus a slightly larger wireframe shell
pub fn fallback_node() -> Node {
    let solid = Surface::new(
        Mesh::from_geometry(&generate_icosahedron(FALLBACK_RADIUS, ICOSAHEDRON_DETAIL)),
        Material::lit("fallback", 0x747264)
            .with_roughness(0.85)
            .with_metallic(0.05)
            .with_emissive(0x2A2825, 0.2),
    );
    let wire = Surface::new(
        Mesh::wireframe(&generate_icosahedron(WIRE_RADIUS, ICOSAHEDRON_DETAIL)),
        Material::unlit("fallback wire", 0x9A9080).with_opacity(0.18),
    );

    Node::new("fallback").with_surface(solid).with_surface(wire)
}

/// Faint disc lying flat under the subject
pub fn ground_disc() -> Node {
    let disc = Surface::new(
        Mesh::from_geometry(&generate_circle(DISC_RADIUS, DISC_SEGMENTS)),
        Material::unlit("ground disc", 0x3C3633).with_opacity(0.06),
    );
    let transform =
        Transform::from_translation(Vector3::new(0.0, DISC_HEIGHT, 0.0)).with_rotation_x(-FRAC_PI_2);

    Node::new("ground disc")
        .with_transform(transform)
        .with_surface(disc)
}

pub fn hero_camera(aspect: f32) -> PerspectiveCamera {
    PerspectiveCamera::new(
        Deg(CAMERA_FOV_DEGREES),
        aspect,
        CAMERA_NEAR,
        CAMERA_FAR,
        Vector3::new(0.0, 0.0, CAMERA_DISTANCE),
    )
}

/// The scene shown as soon as the hero mounts
pub fn build_scene(aspect: f32) -> Scene {
    Scene::new(
        hero_camera(aspect),
        LightRig::default(),
        ground_disc(),
        SceneGroup::with_fallback(fallback_node()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_solid_and_wire_surfaces() {
        let fallback = fallback_node();
        assert_eq!(fallback.surface_count(), 2);
        assert_eq!(fallback.triangle_count(), 80);
        assert!(!fallback.surfaces[0].material.transparent);
        assert!((fallback.surfaces[1].material.effective_opacity() - 0.18).abs() < 1e-6);
    }

    #[test]
    fn disc_lies_flat_below_the_subject() {
        let bounds = ground_disc().bounds();
        assert!((bounds.min.y - DISC_HEIGHT).abs() < 1e-5);
        assert!((bounds.max.y - DISC_HEIGHT).abs() < 1e-5);
        assert!((bounds.max_dimension() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn scene_starts_with_the_fallback() {
        let scene = build_scene(16.0 / 9.0);
        assert!(scene.group.shows_fallback());
        assert_eq!(scene.camera.eye, Vector3::new(0.0, 0.0, 5.0));
    }
}
