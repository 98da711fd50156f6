//! Entrance timeline of the hero section

use super::{
    easing::Ease,
    timeline::{Position, Timeline},
    tween::Pose,
};
use crate::gfx::color::mix_srgb;

pub const INTRO_DELAY: f32 = 0.3;
pub const HERO_DARK: u32 = 0x3C3633;
pub const HERO_LIGHT: u32 = 0xEEEDEB;

const BACKGROUND: &str = "background";
const LETTERS: &str = "letters";
const SUBTITLE: &str = "subtitle";
const CTA: &str = "cta";
const SCROLL_HINT: &str = "scroll hint";

/// Background fade, letter cascade, subtitle, buttons and scroll hint
#[derive(Debug, Clone, PartialEq)]
pub struct HeroIntro {
    timeline: Timeline,
    letter_count: usize,
}

impl HeroIntro {
    pub fn new(letter_count: usize) -> Self {
        let timeline = Timeline::new(INTRO_DELAY)
            .from_to(
                BACKGROUND,
                Pose::default().with_value(0.0),
                Pose::default().with_value(1.0),
                1.8,
                Ease::Power2InOut,
                Position::End,
            )
            .staggered(
                LETTERS,
                Pose::hidden().with_y(80.0).with_rotate_x(-60.0),
                Pose::default(),
                1.2,
                Ease::ExpoOut,
                Position::Relative(-0.8),
                0.07,
                letter_count,
            )
            .from_to(
                SUBTITLE,
                Pose::hidden().with_y(30.0),
                Pose::default(),
                1.0,
                Ease::Power3Out,
                Position::Relative(-0.4),
            )
            .from_to(
                CTA,
                Pose::hidden().with_y(20.0),
                Pose::default(),
                0.8,
                Ease::Power3Out,
                Position::Relative(-0.5),
            )
            .from_to(
                SCROLL_HINT,
                Pose::hidden(),
                Pose::default().with_opacity(0.5),
                0.6,
                Ease::default(),
                Position::Relative(-0.3),
            );

        Self {
            timeline,
            letter_count,
        }
    }

    fn sample(&self, label: &str, index: usize, time: f32) -> Pose {
        self.timeline
            .sample(label, index, time)
            .unwrap_or_default()
    }

    /// Hero section background, as sRGB components
    pub fn background(&self, time: f32) -> [f32; 3] {
        let t = self.sample(BACKGROUND, 0, time).value;
        mix_srgb(HERO_DARK, HERO_LIGHT, t)
    }

    pub fn letter(&self, index: usize, time: f32) -> Pose {
        self.sample(LETTERS, index.min(self.letter_count.saturating_sub(1)), time)
    }

    pub fn subtitle(&self, time: f32) -> Pose {
        self.sample(SUBTITLE, 0, time)
    }

    pub fn call_to_action(&self, time: f32) -> Pose {
        self.sample(CTA, 0, time)
    }

    pub fn scroll_hint(&self, time: f32) -> Pose {
        self.sample(SCROLL_HINT, 0, time)
    }

    pub fn is_finished(&self, time: f32) -> bool {
        self.timeline.is_finished(time)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::color::hex_to_srgb;

    #[test]
    fn background_goes_dark_to_light() {
        let intro = HeroIntro::new(9);
        assert_eq!(intro.background(0.0), hex_to_srgb(HERO_DARK));
        assert_eq!(intro.background(0.3), hex_to_srgb(HERO_DARK));
        let done = intro.background(2.2);
        let light = hex_to_srgb(HERO_LIGHT);
        for (a, b) in done.iter().zip(light.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn letters_overlap_the_background_fade() {
        let intro = HeroIntro::new(9);
        let letters = intro.timeline().entry(LETTERS).unwrap();
        assert!((letters.start - 1.0).abs() < 1e-5);
        assert!(intro.letter(0, 1.35).opacity > 0.0);
        assert_eq!(intro.letter(8, 1.35).opacity, 0.0);
    }

    #[test]
    fn scroll_hint_settles_at_half_opacity() {
        let intro = HeroIntro::new(9);
        let end = INTRO_DELAY + intro.timeline().duration();
        assert!(intro.is_finished(end));
        assert!((intro.scroll_hint(end).opacity - 0.5).abs() < 1e-6);
        assert_eq!(intro.subtitle(end), Pose::default());
    }
}
