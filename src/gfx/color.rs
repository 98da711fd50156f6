//! Color conversion helpers
//!
//! Colors are authored as sRGB hex values and converted to linear RGB once,
//! so shading happens in linear space and the shader re-encodes for display.

/// Converts one sRGB-encoded channel in [0, 1] to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a `0xRRGGBB` sRGB color to linear RGB
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let [r, g, b] = hex_to_srgb(hex);
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

/// Splits a `0xRRGGBB` color into sRGB channels in [0, 1] without conversion
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Parses `#RRGGBB` (leading `#` optional)
pub fn parse_hex(text: &str) -> Option<u32> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Linear interpolation between two sRGB colors, channel by channel
pub fn mix_srgb(from: u32, to: u32, t: f32) -> [f32; 3] {
    let a = hex_to_srgb(from);
    let b = hex_to_srgb(to);
    let t = t.clamp(0.0, 1.0);
    [
        a[0] * (1.0 - t) + b[0] * t,
        a[1] * (1.0 - t) + b[1] * t,
        a[2] * (1.0 - t) + b[2] * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_are_fixed_points() {
        assert_eq!(hex_to_linear(0xFFFFFF), [1.0, 1.0, 1.0]);
        assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn mid_gray_darkens_in_linear_space() {
        let [r, _, _] = hex_to_linear(0x808080);
        assert!((r - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_hex("#3C3633"), Some(0x3C3633));
        assert_eq!(parse_hex("eeedeb"), Some(0xEEEDEB));
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
    }

    #[test]
    fn mix_endpoints_match_inputs() {
        assert_eq!(mix_srgb(0x000000, 0xFFFFFF, 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(mix_srgb(0x000000, 0xFFFFFF, 1.0), [1.0, 1.0, 1.0]);
    }
}
