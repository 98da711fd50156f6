//! Output settings for the drawing surface

/// Filmic (ACES) tone mapping applied before sRGB encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapping {
    pub exposure: f32,
    pub enabled: bool,
}

impl Default for ToneMapping {
    fn default() -> Self {
        Self {
            exposure: 1.2,
            enabled: true,
        }
    }
}

impl ToneMapping {
    pub fn with_exposure(exposure: f32) -> Self {
        Self {
            exposure,
            ..Default::default()
        }
    }
}

/// Pixel size of the drawing surface after capping the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceExtent {
    pub width: u32,
    pub height: u32,
}

impl SurfaceExtent {
    /// Scales a physical window size down so the effective pixel ratio does
    /// not exceed `max_pixel_ratio`. Dimensions never drop below 1.
    pub fn capped(physical_width: u32, physical_height: u32, scale_factor: f64, max_pixel_ratio: f32) -> Self {
        let max_ratio = f64::from(max_pixel_ratio).max(f64::MIN_POSITIVE);
        let factor = if scale_factor > max_ratio {
            max_ratio / scale_factor
        } else {
            1.0
        };

        Self {
            width: ((f64::from(physical_width) * factor).round() as u32).max(1),
            height: ((f64::from(physical_height) * factor).round() as u32).max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_below_cap_keeps_physical_size() {
        assert_eq!(
            SurfaceExtent::capped(1600, 1200, 1.0, 2.0),
            SurfaceExtent { width: 1600, height: 1200 }
        );
    }

    #[test]
    fn ratio_above_cap_is_scaled_down() {
        // 800x600 logical at 3x becomes 1600x1200 with a cap of 2
        assert_eq!(
            SurfaceExtent::capped(2400, 1800, 3.0, 2.0),
            SurfaceExtent { width: 1600, height: 1200 }
        );
    }

    #[test]
    fn zero_sized_windows_stay_drawable() {
        let extent = SurfaceExtent::capped(0, 0, 1.0, 2.0);
        assert_eq!((extent.width, extent.height), (1, 1));
    }
}
