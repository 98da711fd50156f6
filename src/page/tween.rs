//! Time-driven interpolation between two poses

use super::easing::Ease;

/// Animated properties of one page element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in logical pixels
    pub x: f32,
    /// Vertical offset in logical pixels
    pub y: f32,
    pub scale: f32,
    /// Rotation about the horizontal axis in degrees
    pub rotate_x: f32,
    /// Free scalar (counter value, bar width percentage, ...)
    pub value: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate_x: 0.0,
            value: 0.0,
        }
    }
}

impl Pose {
    /// Fully transparent, otherwise at rest
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate_x(mut self, degrees: f32) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Component-wise interpolation; `t` outside [0, 1] extrapolates
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Pose {
            opacity: mix(self.opacity, other.opacity),
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            scale: mix(self.scale, other.scale),
            rotate_x: mix(self.rotate_x, other.rotate_x),
            value: mix(self.value, other.value),
        }
    }
}

/// Delay, duration and curve of one animation, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            delay: 0.0,
            duration,
            ease,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Un-eased progress in [0, 1] after `elapsed` seconds
    pub fn linear_progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if self.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration).clamp(0.0, 1.0)
    }

    /// Eased progress after `elapsed` seconds
    pub fn progress(&self, elapsed: f32) -> f32 {
        self.ease.apply(self.linear_progress(elapsed))
    }

    /// Time at which the tween completes, delay included
    pub fn end(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.end()
    }
}

/// A `from -> to` animation of a [`Pose`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTween {
    pub from: Pose,
    pub to: Pose,
    pub tween: Tween,
}

impl PoseTween {
    pub fn new(from: Pose, to: Pose, tween: Tween) -> Self {
        Self { from, to, tween }
    }

    /// Pose after `elapsed` seconds; the `from` pose holds until the delay
    /// has passed
    pub fn sample(&self, elapsed: f32) -> Pose {
        self.from.lerp(&self.to, self.tween.progress(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_holds_the_start_pose() {
        let tween = PoseTween::new(
            Pose::hidden().with_y(40.0),
            Pose::default(),
            Tween::new(0.8, Ease::Power3Out).with_delay(0.3),
        );
        assert_eq!(tween.sample(0.2), tween.from);
        assert_eq!(tween.sample(1.1), tween.to);
        let mid = tween.sample(0.7);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 40.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = Tween::new(0.0, Ease::Linear).with_delay(1.0);
        assert_eq!(tween.progress(0.5), 0.0);
        assert_eq!(tween.progress(1.0), 1.0);
        assert!(tween.is_finished(1.0));
    }
}
