//! Smoothed page scrolling and the progress bar

use super::easing::Ease;

pub const SMOOTH_SCROLL_DURATION: f32 = 1.4;

/// Wheel-driven scroll offset that glides to its target
///
/// Every new target restarts the glide from the currently displayed offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    limit: f32,
    target: f32,
    current: f32,
    glide_from: f32,
    glide_started: f32,
    duration: f32,
    ease: Ease,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SmoothScroll {
    pub fn new(limit: f32) -> Self {
        Self {
            limit: limit.max(0.0),
            target: 0.0,
            current: 0.0,
            glide_from: 0.0,
            glide_started: 0.0,
            duration: SMOOTH_SCROLL_DURATION,
            ease: Ease::SmoothScroll,
        }
    }

    /// Changes the scrollable range, clamping both offsets into it
    pub fn set_limit(&mut self, limit: f32) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
        self.glide_from = self.glide_from.clamp(0.0, self.limit);
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Adds a wheel delta in pixels (positive scrolls down)
    pub fn scroll_by(&mut self, delta: f32, time: f32) {
        self.scroll_to(self.target + delta, time);
    }

    pub fn scroll_to(&mut self, offset: f32, time: f32) {
        let offset = offset.clamp(0.0, self.limit);
        if (offset - self.target).abs() < f32::EPSILON {
            return;
        }
        self.target = offset;
        self.glide_from = self.current;
        self.glide_started = time;
    }

    /// Advances the glide to `time` and returns the displayed offset
    pub fn update(&mut self, time: f32) -> f32 {
        let t = if self.duration > 0.0 {
            (time - self.glide_started) / self.duration
        } else {
            1.0
        };
        let eased = self.ease.apply(t);
        self.current = if eased >= 1.0 {
            self.target
        } else {
            self.glide_from + (self.target - self.glide_from) * eased
        };
        self.current
    }

    pub fn offset(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Fraction of the scrollable range already scrolled
    pub fn progress(&self) -> f32 {
        scroll_progress(self.current, self.limit)
    }
}

/// Progress bar fill for `offset` within `scrollable`; 0 when nothing scrolls
pub fn scroll_progress(offset: f32, scrollable: f32) -> f32 {
    if scrollable > 0.0 {
        (offset / scrollable).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glide_reaches_the_clamped_target() {
        let mut scroll = SmoothScroll::new(1000.0);
        scroll.scroll_by(1500.0, 0.0);
        assert_eq!(scroll.target(), 1000.0);

        let early = scroll.update(0.2);
        assert!(early > 0.0 && early < 1000.0);
        assert_eq!(scroll.update(SMOOTH_SCROLL_DURATION), 1000.0);
        assert_eq!(scroll.progress(), 1.0);
    }

    #[test]
    fn retarget_starts_from_displayed_offset() {
        let mut scroll = SmoothScroll::new(1000.0);
        scroll.scroll_to(800.0, 0.0);
        let shown = scroll.update(0.1);
        scroll.scroll_to(0.0, 0.1);
        let next = scroll.update(0.1);
        assert!(shown > 0.0);
        assert!((next - shown).abs() < shown * 0.01);
    }

    #[test]
    fn nothing_to_scroll_means_no_progress() {
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert_eq!(SmoothScroll::new(-5.0).progress(), 0.0);
    }
}
