//! Scroll reveals of every section, keyed by element

use std::collections::HashMap;

use super::{
    easing::Ease,
    layout::{PageLayout, SectionId},
    reveal::{Reveal, ScrubTrack, Trigger},
    tween::{Pose, PoseTween, Tween},
};
use crate::content::PortfolioContent;

/// Animated elements below the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    AboutText,
    AboutVisual,
    /// Count-up value of an about counter
    CounterValue(usize),
    CounterCard(usize),
    SkillsHeading,
    SkillCard(usize),
    /// Proficiency bar width in percent
    SoftwareBar(usize),
    ExperienceCard,
    Bullet(usize),
    PortfolioHeading,
    PortfolioItem(usize),
    EducationCard,
    ContactHeading,
    ContactInfo,
    ContactForm,
}

impl Element {
    pub fn section(self) -> SectionId {
        match self {
            Element::AboutText
            | Element::AboutVisual
            | Element::CounterValue(_)
            | Element::CounterCard(_) => SectionId::About,
            Element::SkillsHeading | Element::SkillCard(_) | Element::SoftwareBar(_) => {
                SectionId::Skills
            }
            Element::ExperienceCard | Element::Bullet(_) => SectionId::Experience,
            Element::PortfolioHeading | Element::PortfolioItem(_) => SectionId::Portfolio,
            Element::EducationCard => SectionId::Education,
            Element::ContactHeading | Element::ContactInfo | Element::ContactForm => {
                SectionId::Contact
            }
        }
    }
}

/// Offsets of inner trigger elements from their section top
const HEADING_OFFSET: f32 = 80.0;
const COUNTERS_OFFSET: f32 = 420.0;
const EXPERIENCE_CARD_OFFSET: f32 = 160.0;

fn slide(from: Pose, duration: f32, delay: f32) -> PoseTween {
    PoseTween::new(
        from,
        Pose::default(),
        Tween::new(duration, Ease::Power3Out).with_delay(delay),
    )
}

fn count_up(target: f32, duration: f32, delay: f32, ease: Ease) -> PoseTween {
    PoseTween::new(
        Pose::default().with_value(0.0),
        Pose::default().with_value(target),
        Tween::new(duration, ease).with_delay(delay),
    )
}

/// All reveals of the page plus the scrubbed experience line
#[derive(Debug, Clone)]
pub struct SectionReveals {
    reveals: HashMap<Element, Reveal>,
    timeline_line: ScrubTrack,
}

impl SectionReveals {
    pub fn new(content: &PortfolioContent, layout: &PageLayout) -> Self {
        let mut reveals = HashMap::new();
        let mut add = |element: Element, trigger: Trigger, animation: PoseTween| {
            reveals.insert(element, Reveal::new(trigger, animation));
        };

        // about
        add(
            Element::AboutText,
            Trigger::section_top(0.75),
            slide(Pose::hidden().with_x(-80.0), 1.2, 0.0),
        );
        add(
            Element::AboutVisual,
            Trigger::section_top(0.75),
            slide(Pose::hidden().with_x(80.0), 1.2, 0.0),
        );
        for (i, counter) in content.about.counters.iter().enumerate() {
            add(
                Element::CounterValue(i),
                Trigger::new(COUNTERS_OFFSET, 0.85),
                count_up(counter.value as f32, 1.8, 0.0, Ease::Power2Out),
            );
            add(
                Element::CounterCard(i),
                Trigger::section_top(0.65),
                slide(Pose::hidden().with_y(40.0), 0.8, i as f32 * 0.15),
            );
        }

        // skills
        add(
            Element::SkillsHeading,
            Trigger::new(HEADING_OFFSET, 0.8),
            slide(Pose::hidden().with_y(50.0), 1.0, 0.0),
        );
        for i in 0..content.skills.cards.len() {
            add(
                Element::SkillCard(i),
                Trigger::section_top(0.7),
                slide(Pose::hidden().with_y(60.0), 0.8, i as f32 * 0.1),
            );
        }
        for (i, software) in content.skills.software.iter().enumerate() {
            add(
                Element::SoftwareBar(i),
                Trigger::section_top(0.65),
                count_up(software.level as f32, 1.5, i as f32 * 0.15, Ease::Power3Out),
            );
        }

        // experience
        add(
            Element::ExperienceCard,
            Trigger::new(EXPERIENCE_CARD_OFFSET, 0.8),
            slide(Pose::hidden().with_x(50.0), 1.0, 0.0),
        );
        for i in 0..content.experience.bullets.len() {
            add(
                Element::Bullet(i),
                Trigger::new(EXPERIENCE_CARD_OFFSET, 0.75),
                slide(Pose::hidden().with_x(30.0), 0.7, i as f32 * 0.12),
            );
        }

        // portfolio
        add(
            Element::PortfolioHeading,
            Trigger::new(HEADING_OFFSET, 0.8),
            slide(Pose::hidden().with_y(50.0), 1.0, 0.0),
        );
        for i in 0..content.projects.len() {
            add(
                Element::PortfolioItem(i),
                Trigger::section_top(0.65),
                slide(Pose::hidden().with_y(70.0), 0.9, (i % 3) as f32 * 0.15),
            );
        }

        // education
        add(
            Element::EducationCard,
            Trigger::section_top(0.75),
            slide(Pose::hidden().with_y(60.0), 1.0, 0.0),
        );

        // contact
        add(
            Element::ContactHeading,
            Trigger::section_top(0.75),
            slide(Pose::hidden().with_y(50.0), 1.0, 0.0),
        );
        add(
            Element::ContactInfo,
            Trigger::section_top(0.7),
            slide(Pose::hidden().with_x(-50.0), 1.0, 0.0),
        );
        add(
            Element::ContactForm,
            Trigger::section_top(0.7),
            slide(Pose::hidden().with_x(50.0), 1.0, 0.0),
        );

        let timeline_line = ScrubTrack::new(
            Trigger::section_top(0.7),
            Trigger::new(layout.height(SectionId::Experience), 0.6),
        );

        Self {
            reveals,
            timeline_line,
        }
    }

    /// Keeps the scrub end point on the experience section's bottom edge
    pub fn relayout(&mut self, layout: &PageLayout) {
        self.timeline_line.end = Trigger::new(layout.height(SectionId::Experience), 0.6);
    }

    pub fn update(&mut self, scroll: f32, layout: &PageLayout, time: f32, dt: f32) {
        let viewport = layout.viewport_height();
        for (element, reveal) in self.reveals.iter_mut() {
            reveal.update(scroll, layout.top(element.section()), viewport, time);
        }
        self.timeline_line.update(
            scroll,
            layout.top(SectionId::Experience),
            viewport,
            dt,
        );
    }

    pub fn get(&self, element: Element) -> Option<&Reveal> {
        self.reveals.get(&element)
    }

    /// Pose of `element`; unknown elements are shown at rest
    pub fn pose(&self, element: Element, time: f32) -> Pose {
        self.reveals
            .get(&element)
            .map(|reveal| reveal.pose(time))
            .unwrap_or_default()
    }

    /// Vertical scale of the experience timeline line
    pub fn timeline_line_scale(&self) -> f32 {
        Ease::Power2InOut.apply(self.timeline_line.progress())
    }

    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }
}
