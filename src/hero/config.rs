//! Tunable hero parameters

use std::{path::PathBuf, time::Duration};

/// Default location of the showcased model
pub const DEFAULT_MODEL_PATH: &str = "assets/House.glb";

/// Every constant the hero scene uses, with builder-style overrides
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vitrine::hero::HeroConfig;
///
/// let config = HeroConfig::default()
///     .with_model_path("assets/Chair.glb")
///     .with_rotation_speed(0.002)
///     .with_fade_duration(Duration::from_millis(800));
/// assert_eq!(config.target_size, 2.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    pub model_path: PathBuf,
    /// Largest dimension of the model after normalization
    pub target_size: f32,
    /// Radians added to the rotation accumulator per frame
    pub rotation_speed: f32,
    /// Peak vertical float offset of the scene group
    pub float_amplitude: f32,
    pub fade_duration: Duration,
    /// Camera offset per unit of normalized pointer position (x, y)
    pub parallax: [f32; 2],
    /// Fraction of the remaining camera distance covered per frame
    pub camera_smoothing: f32,
    pub max_pixel_ratio: f32,
    pub exposure: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            target_size: 2.2,
            rotation_speed: 0.004,
            float_amplitude: 0.12,
            fade_duration: Duration::from_millis(1400),
            parallax: [0.5, 0.3],
            camera_smoothing: 0.05,
            max_pixel_ratio: 2.0,
            exposure: 1.2,
        }
    }
}

impl HeroConfig {
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_target_size(mut self, size: f32) -> Self {
        self.target_size = size;
        self
    }

    pub fn with_rotation_speed(mut self, radians_per_frame: f32) -> Self {
        self.rotation_speed = radians_per_frame;
        self
    }

    pub fn with_float_amplitude(mut self, amplitude: f32) -> Self {
        self.float_amplitude = amplitude;
        self
    }

    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    pub fn with_parallax(mut self, x: f32, y: f32) -> Self {
        self.parallax = [x, y];
        self
    }

    pub fn with_camera_smoothing(mut self, factor: f32) -> Self {
        self.camera_smoothing = factor.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_pixel_ratio(mut self, ratio: f32) -> Self {
        self.max_pixel_ratio = ratio;
        self
    }

    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_only_their_field() {
        let config = HeroConfig::default()
            .with_target_size(3.0)
            .with_float_amplitude(0.2)
            .with_parallax(0.8, 0.4)
            .with_camera_smoothing(0.1)
            .with_max_pixel_ratio(1.5);

        assert_eq!(config.target_size, 3.0);
        assert_eq!(config.float_amplitude, 0.2);
        assert_eq!(config.parallax, [0.8, 0.4]);
        assert_eq!(config.camera_smoothing, 0.1);
        assert_eq!(config.max_pixel_ratio, 1.5);
        assert_eq!(config.rotation_speed, HeroConfig::default().rotation_speed);
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }
}
