use std::time::{Duration, Instant};

use crate::page::easing::Ease;

/// Time-based opacity ramp from 0 to 1 for a freshly attached model
#[derive(Debug, Clone, Copy)]
pub struct FadeIn {
    started: Instant,
    duration: Duration,
    ease: Ease,
}

impl FadeIn {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
            ease: Ease::Power2Out,
        }
    }

    /// Eased opacity at `now`
    pub fn opacity(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        self.ease
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_power2_out() {
        let t0 = Instant::now();
        let fade = FadeIn::start(t0, Duration::from_millis(1400));
        assert_eq!(fade.opacity(t0), 0.0);
        assert!((fade.opacity(t0 + Duration::from_millis(700)) - 0.875).abs() < 1e-4);
        assert_eq!(fade.opacity(t0 + Duration::from_secs(5)), 1.0);
        assert!(fade.is_finished(t0 + Duration::from_millis(1400)));
    }

    #[test]
    fn zero_duration_is_immediately_opaque() {
        let t0 = Instant::now();
        assert_eq!(FadeIn::start(t0, Duration::ZERO).opacity(t0), 1.0);
    }
}
