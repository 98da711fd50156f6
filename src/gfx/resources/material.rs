//! Surface materials
//!
//! Colors are stored in linear space. Lit materials follow the
//! metallic-roughness model; unlit materials output their base color
//! directly.

use crate::gfx::color::hex_to_linear;

/// Shading model applied to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    Lit,
    Unlit,
}

/// Material definition with PBR properties
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub shading: Shading,
    pub base_color: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
    /// Drawn with alpha blending after opaque surfaces
    pub transparent: bool,
}

impl Material {
    /// Lit material from an sRGB hex color, rough dielectric by default
    pub fn lit(name: &str, color: u32) -> Self {
        Self {
            name: name.to_owned(),
            shading: Shading::Lit,
            base_color: hex_to_linear(color),
            metallic: 0.0,
            roughness: 1.0,
            emissive: [0.0; 3],
            emissive_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Unlit material from an sRGB hex color
    pub fn unlit(name: &str, color: u32) -> Self {
        Self {
            shading: Shading::Unlit,
            ..Self::lit(name, color)
        }
    }

    /// Lit material from linear factors as stored in glTF
    pub fn from_factors(
        name: &str,
        base_color: [f32; 4],
        metallic: f32,
        roughness: f32,
        emissive: [f32; 3],
    ) -> Self {
        Self {
            name: name.to_owned(),
            shading: Shading::Lit,
            base_color: [base_color[0], base_color[1], base_color[2]],
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            emissive,
            emissive_intensity: 1.0,
            opacity: base_color[3].clamp(0.0, 1.0),
            transparent: false,
        }
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_emissive(mut self, color: u32, intensity: f32) -> Self {
        self.emissive = hex_to_linear(color);
        self.emissive_intensity = intensity;
        self
    }

    /// Sets opacity and marks the material transparent
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Opacity used when drawing; opaque materials always draw fully
    pub fn effective_opacity(&self) -> f32 {
        if self.transparent {
            self.opacity
        } else {
            1.0
        }
    }

    /// Emissive color pre-multiplied by its intensity
    pub fn emissive_radiance(&self) -> [f32; 3] {
        self.emissive.map(|c| c * self.emissive_intensity)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::lit("default", 0xCCCCCC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_only_applies_when_transparent() {
        let mut material = Material::lit("test", 0xFFFFFF);
        material.set_opacity(0.25);
        assert_eq!(material.effective_opacity(), 1.0);
        material.set_transparent(true);
        assert_eq!(material.effective_opacity(), 0.25);
    }

    #[test]
    fn emissive_scales_by_intensity() {
        let material = Material::lit("test", 0x000000).with_emissive(0xFFFFFF, 0.2);
        assert_eq!(material.emissive_radiance(), [0.2, 0.2, 0.2]);
    }
}
