//! Scroll-triggered reveals
//!
//! A [`Reveal`] waits hidden until its trigger point scrolls into place,
//! then plays its tween once. A [`ScrubTrack`] instead follows the scroll
//! position between two trigger points.

use super::tween::{Pose, PoseTween};

/// Scroll predicate in the style of "top 75%": fires once the element's top
/// edge has risen to `start_ratio` of the viewport height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// Offset of the trigger element from the top of its section
    pub anchor_offset: f32,
    /// Viewport line, 0 = top, 1 = bottom
    pub start_ratio: f32,
}

impl Trigger {
    pub fn new(anchor_offset: f32, start_ratio: f32) -> Self {
        Self {
            anchor_offset,
            start_ratio,
        }
    }

    /// Trigger on the section's own top edge
    pub fn section_top(start_ratio: f32) -> Self {
        Self::new(0.0, start_ratio)
    }

    /// Scroll offset at which the trigger fires for a section at `section_top`
    pub fn scroll_position(&self, section_top: f32, viewport_height: f32) -> f32 {
        section_top + self.anchor_offset - viewport_height * self.start_ratio
    }

    pub fn is_met(&self, scroll: f32, section_top: f32, viewport_height: f32) -> bool {
        scroll >= self.scroll_position(section_top, viewport_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    Hidden,
    /// Playing since the given page time
    Entering { started: f32 },
    Visible,
}

/// One element's scroll-triggered entrance
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub trigger: Trigger,
    pub animation: PoseTween,
    state: RevealState,
}

impl Reveal {
    pub fn new(trigger: Trigger, animation: PoseTween) -> Self {
        Self {
            trigger,
            animation,
            state: RevealState::Hidden,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Fires the trigger when met and finishes the entrance when done.
    /// Scrolling back up never hides the element again.
    pub fn update(&mut self, scroll: f32, section_top: f32, viewport_height: f32, time: f32) {
        match self.state {
            RevealState::Hidden => {
                if self.trigger.is_met(scroll, section_top, viewport_height) {
                    self.state = RevealState::Entering { started: time };
                }
            }
            RevealState::Entering { started } => {
                if self.animation.tween.is_finished(time - started) {
                    self.state = RevealState::Visible;
                }
            }
            RevealState::Visible => {}
        }
    }

    pub fn pose(&self, time: f32) -> Pose {
        match self.state {
            RevealState::Hidden => self.animation.from,
            RevealState::Entering { started } => self.animation.sample(time - started),
            RevealState::Visible => self.animation.to,
        }
    }
}

/// Catch-up time of a scrubbed animation, in seconds
pub const SCRUB_LAG: f32 = 1.0;

/// Progress bound to the scroll position between two trigger points, eased
/// toward its target over [`SCRUB_LAG`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubTrack {
    pub start: Trigger,
    pub end: Trigger,
    progress: f32,
}

impl ScrubTrack {
    pub fn new(start: Trigger, end: Trigger) -> Self {
        Self {
            start,
            end,
            progress: 0.0,
        }
    }

    /// Progress the scroll position asks for, without smoothing
    pub fn target(&self, scroll: f32, section_top: f32, viewport_height: f32) -> f32 {
        let from = self.start.scroll_position(section_top, viewport_height);
        let to = self.end.scroll_position(section_top, viewport_height);
        if to <= from {
            return if scroll >= from { 1.0 } else { 0.0 };
        }
        ((scroll - from) / (to - from)).clamp(0.0, 1.0)
    }

    /// Moves the displayed progress toward the target; `dt` is the frame time
    pub fn update(&mut self, scroll: f32, section_top: f32, viewport_height: f32, dt: f32) {
        let target = self.target(scroll, section_top, viewport_height);
        let step = (dt.max(0.0) / SCRUB_LAG).min(1.0);
        self.progress += (target - self.progress) * step;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{easing::Ease, tween::Tween};

    fn fade_up() -> PoseTween {
        PoseTween::new(
            Pose::hidden().with_y(50.0),
            Pose::default(),
            Tween::new(1.0, Ease::Power3Out),
        )
    }

    #[test]
    fn reveal_fires_once_at_the_trigger_line() {
        // section at 1000, viewport 800, "top 75%" fires at scroll 400
        let mut reveal = Reveal::new(Trigger::section_top(0.75), fade_up());
        reveal.update(399.0, 1000.0, 800.0, 0.0);
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert_eq!(reveal.pose(0.0).opacity, 0.0);

        reveal.update(400.0, 1000.0, 800.0, 2.0);
        assert_eq!(reveal.state(), RevealState::Entering { started: 2.0 });
        assert!(reveal.pose(2.5).opacity > 0.0);

        reveal.update(0.0, 1000.0, 800.0, 3.0);
        assert_eq!(reveal.state(), RevealState::Visible);
        assert_eq!(reveal.pose(3.0), Pose::default());
    }

    #[test]
    fn scrub_catches_up_over_one_second() {
        let mut track = ScrubTrack::new(Trigger::section_top(0.7), Trigger::new(1000.0, 0.6));
        // from = 1000 - 560 = 440, to = 2000 - 480 = 1520
        assert_eq!(track.target(440.0, 1000.0, 800.0), 0.0);
        assert_eq!(track.target(1520.0, 1000.0, 800.0), 1.0);

        track.update(1520.0, 1000.0, 800.0, 0.5);
        assert!((track.progress() - 0.5).abs() < 1e-6);
        track.update(1520.0, 1000.0, 800.0, 1.0);
        assert_eq!(track.progress(), 1.0);
    }
}
