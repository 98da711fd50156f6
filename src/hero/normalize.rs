//! Deterministic fitting of a loaded model into the hero frame

use cgmath::{EuclideanSpace, Vector3};

use crate::gfx::scene::node::Node;

/// What normalization did to a model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    /// Uniform factor applied to the root scale (1 for flat models)
    pub scale_factor: f32,
    /// Translation added to the root to center it
    pub offset: Vector3<f32>,
    /// Bounding box size before scaling
    pub original_size: Vector3<f32>,
}

/// Scales `model` so its largest bounding dimension equals `target_size`,
/// then recenters it on the origin.
///
/// Bounds are measured in the root's parent space. The recentering pass runs
/// on the bounds recomputed after scaling. A model with zero extent is only
/// recentered. Returns `None` when the model has no vertices at all.
pub fn normalize_model(model: &mut Node, target_size: f32) -> Option<Normalization> {
    let bounds = model.bounds();
    if bounds.is_empty() {
        return None;
    }

    let original_size = bounds.size();
    let max_dimension = bounds.max_dimension();
    let scale_factor = if max_dimension > 0.0 && max_dimension.is_finite() {
        target_size / max_dimension
    } else {
        log::warn!(
            "Model '{}' has zero extent, attaching without rescaling",
            model.name
        );
        1.0
    };
    model.transform.scale *= scale_factor;

    let center = model.bounds().center();
    let offset = -center.to_vec();
    model.transform.translation += offset;

    log::debug!(
        "Normalized '{}': size {:?}, scale {:.4}, offset {:?}",
        model.name,
        original_size,
        scale_factor,
        offset
    );

    Some(Normalization {
        scale_factor,
        offset,
        original_size,
    })
}

/// Enables shadows on every surface and hides them for the fade-in
pub fn prepare_for_fade(model: &mut Node) {
    model.for_each_surface_mut(&mut |surface| {
        surface.cast_shadow = true;
        surface.receive_shadow = true;
        surface.material.set_transparent(true);
        surface.material.set_opacity(0.0);
    });
}

/// Sets the opacity of every surface in the subtree
pub fn set_model_opacity(model: &mut Node, opacity: f32) {
    model.for_each_surface_mut(&mut |surface| surface.material.set_opacity(opacity));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        resources::material::Material,
        scene::{mesh::Mesh, node::Surface},
    };

    fn box_node(min: [f32; 3], max: [f32; 3]) -> Node {
        let positions = vec![min, max, [min[0], max[1], min[2]]];
        Node::new("box").with_surface(Surface::new(
            Mesh::from_positions(positions, None, vec![0, 1, 2]),
            Material::default(),
        ))
    }

    #[test]
    fn largest_dimension_becomes_target() {
        let mut node = box_node([1.0, 1.0, 1.0], [5.0, 3.0, 2.0]);
        let result = normalize_model(&mut node, 2.2).unwrap();
        assert!((result.scale_factor - 0.55).abs() < 1e-6);

        let bounds = node.bounds();
        assert!((bounds.max_dimension() - 2.2).abs() < 1e-5);
        let center = bounds.center();
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5 && center.z.abs() < 1e-5);
    }

    #[test]
    fn root_scale_is_multiplied_not_replaced() {
        use crate::gfx::scene::node::Transform;

        let mut node = box_node([0.0, 0.0, 0.0], [4.0, 1.0, 1.0]).with_transform(Transform {
            scale: Vector3::new(2.0, 2.0, 2.0),
            ..Transform::from_translation(Vector3::new(10.0, -3.0, 4.0))
        });
        let result = normalize_model(&mut node, 2.2).unwrap();

        assert!((result.scale_factor - 0.275).abs() < 1e-6);
        assert!((node.transform.scale.x - 0.55).abs() < 1e-6);
        assert!((node.transform.scale.y - 0.55).abs() < 1e-6);

        let bounds = node.bounds();
        assert!((bounds.max_dimension() - 2.2).abs() < 1e-5);
        let center = bounds.center();
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5 && center.z.abs() < 1e-5);
    }

    #[test]
    fn flat_model_is_only_recentered() {
        let mut node = box_node([2.0, 2.0, 2.0], [2.0, 2.0, 2.0]);
        let result = normalize_model(&mut node, 2.2).unwrap();
        assert_eq!(result.scale_factor, 1.0);
        assert_eq!(node.bounds().center(), cgmath::Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn empty_model_is_rejected() {
        assert!(normalize_model(&mut Node::new("empty"), 2.2).is_none());
    }

    #[test]
    fn prepared_surfaces_start_invisible_and_cast_shadows() {
        let mut node = box_node([0.0; 3], [1.0; 3]);
        prepare_for_fade(&mut node);
        let surface = &node.surfaces[0];
        assert!(surface.cast_shadow && surface.receive_shadow);
        assert_eq!(surface.material.effective_opacity(), 0.0);
    }
}
