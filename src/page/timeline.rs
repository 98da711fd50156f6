//! Sequenced tweens with relative placement and stagger

use std::str::FromStr;

use super::{
    easing::Ease,
    tween::{Pose, PoseTween, Tween},
};
use crate::error::VitrineError;

/// Where an entry starts relative to what is already on the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the current end of the timeline
    End,
    /// Offset from the current end; negative values overlap
    Relative(f32),
    /// Absolute time from the start of the timeline
    At(f32),
}

impl FromStr for Position {
    type Err = VitrineError;

    /// Parses `"-=0.8"`, `"+=0.2"` or an absolute `"1.5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || VitrineError::InvalidContent(format!("bad timeline position '{}'", s));
        if s.is_empty() {
            return Ok(Position::End);
        }
        if let Some(rest) = s.strip_prefix("-=") {
            return rest.parse::<f32>().map(|v| Position::Relative(-v)).map_err(|_| invalid());
        }
        if let Some(rest) = s.strip_prefix("+=") {
            return rest.parse::<f32>().map(Position::Relative).map_err(|_| invalid());
        }
        s.parse::<f32>().map(Position::At).map_err(|_| invalid())
    }
}

/// One labelled animation on a timeline, possibly applied to several
/// targets with a stagger
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub label: String,
    pub start: f32,
    pub animation: PoseTween,
    pub stagger: f32,
    pub count: usize,
}

impl TimelineEntry {
    pub fn end(&self) -> f32 {
        self.start
            + self.animation.tween.duration
            + self.stagger * self.count.saturating_sub(1) as f32
    }
}

/// A GSAP-style timeline; times are seconds since the timeline was created
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    delay: f32,
    entries: Vec<TimelineEntry>,
    duration: f32,
}

impl Timeline {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    /// Appends a single-target animation
    pub fn from_to(
        self,
        label: &str,
        from: Pose,
        to: Pose,
        duration: f32,
        ease: Ease,
        position: Position,
    ) -> Self {
        self.staggered(label, from, to, duration, ease, position, 0.0, 1)
    }

    /// Appends an animation applied to `count` targets, each starting
    /// `stagger` seconds after the previous one
    #[allow(clippy::too_many_arguments)]
    pub fn staggered(
        mut self,
        label: &str,
        from: Pose,
        to: Pose,
        duration: f32,
        ease: Ease,
        position: Position,
        stagger: f32,
        count: usize,
    ) -> Self {
        let start = match position {
            Position::End => self.duration,
            Position::Relative(offset) => (self.duration + offset).max(0.0),
            Position::At(time) => time.max(0.0),
        };
        let entry = TimelineEntry {
            label: label.to_owned(),
            start,
            animation: PoseTween::new(from, to, Tween::new(duration, ease)),
            stagger,
            count: count.max(1),
        };
        self.duration = self.duration.max(entry.end());
        self.entries.push(entry);
        self
    }

    /// Length of the timeline, initial delay excluded
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn entry(&self, label: &str) -> Option<&TimelineEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Pose of target `index` of the entry `label` at `time`
    pub fn sample(&self, label: &str, index: usize, time: f32) -> Option<Pose> {
        let entry = self.entry(label)?;
        let local = time - self.delay - entry.start - entry.stagger * index as f32;
        Some(entry.animation.sample(local))
    }

    pub fn is_finished(&self, time: f32) -> bool {
        time >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_positions_parse() {
        assert_eq!("-=0.8".parse::<Position>().unwrap(), Position::Relative(-0.8));
        assert_eq!("+=0.25".parse::<Position>().unwrap(), Position::Relative(0.25));
        assert_eq!("2".parse::<Position>().unwrap(), Position::At(2.0));
        assert!("soon".parse::<Position>().is_err());
    }

    #[test]
    fn overlaps_and_stagger_place_entries() {
        let timeline = Timeline::new(0.3)
            .from_to("a", Pose::hidden(), Pose::default(), 1.8, Ease::Linear, Position::End)
            .staggered(
                "b",
                Pose::hidden(),
                Pose::default(),
                1.2,
                Ease::Linear,
                Position::Relative(-0.8),
                0.1,
                3,
            );
        let b = timeline.entry("b").unwrap();
        assert!((b.start - 1.0).abs() < 1e-6);
        assert!((timeline.duration() - 2.4).abs() < 1e-6);

        // second target of "b" starts at 0.3 + 1.0 + 0.1
        let before = timeline.sample("b", 1, 1.39).unwrap();
        let after = timeline.sample("b", 1, 1.5).unwrap();
        assert_eq!(before.opacity, 0.0);
        assert!(after.opacity > 0.0);
        assert!(timeline.sample("missing", 0, 1.0).is_none());
    }
}
