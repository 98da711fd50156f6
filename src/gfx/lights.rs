//! Light rig for the hero scene
//!
//! One ambient term, two directional lights (the key light casts the only
//! shadow) and one point light with a finite range.

use cgmath::{InnerSpace, Vector3};

use crate::gfx::color::hex_to_linear;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Directional light shining from `position` toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vector3<f32>,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Unit vector from the lit point toward the light
    pub fn direction(&self) -> Vector3<f32> {
        if self.position.magnitude2() > 0.0 {
            self.position.normalize()
        } else {
            Vector3::unit_y()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vector3<f32>,
    /// Distance at which the contribution reaches zero; 0 means unbounded
    pub range: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
    pub rim: PointLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: hex_to_linear(0xE0CCBE),
                intensity: 1.0,
            },
            key: DirectionalLight {
                color: hex_to_linear(0xFFFFFF),
                intensity: 2.0,
                position: Vector3::new(4.0, 6.0, 4.0),
                cast_shadow: true,
            },
            fill: DirectionalLight {
                color: hex_to_linear(0xE0CCBE),
                intensity: 0.6,
                position: Vector3::new(-4.0, -2.0, 3.0),
                cast_shadow: false,
            },
            rim: PointLight {
                color: hex_to_linear(0x747264),
                intensity: 1.5,
                position: Vector3::new(-3.0, 3.0, -2.0),
                range: 30.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_key_light_casts() {
        let rig = LightRig::default();
        assert!(rig.key.cast_shadow);
        assert!(!rig.fill.cast_shadow);
        assert!((rig.key.direction().magnitude() - 1.0).abs() < 1e-6);
    }
}
