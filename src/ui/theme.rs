//! Page palette

use crate::gfx::color::hex_to_srgb;

pub const CHARCOAL: u32 = 0x3C3633;
pub const TAUPE: u32 = 0x747264;
pub const SAND: u32 = 0xE0CCBE;
pub const IVORY: u32 = 0xEEEDEB;
pub const STONE: u32 = 0x9A9080;

/// Background of each section below the hero
pub const SECTION_BACKGROUNDS: [u32; 6] = [IVORY, 0xF4F2EF, IVORY, 0xF4F2EF, IVORY, CHARCOAL];

/// sRGB color with alpha, as ImGui expects it on a non-sRGB target
pub fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let [r, g, b] = hex_to_srgb(hex);
    [r, g, b, alpha.clamp(0.0, 1.0)]
}

pub fn rgb(hex: u32) -> [f32; 4] {
    rgba(hex, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(rgba(0xFFFFFF, 2.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(rgba(0x000000, -1.0)[3], 0.0);
    }
}
