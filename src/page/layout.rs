//! Vertical placement of the page sections

use std::fmt;

/// The sections of the page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Experience,
    Portfolio,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Portfolio,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Anchor name, also used as the navbar label
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Portfolio => "portfolio",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Heights of the non-hero sections, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionHeights {
    pub about: f32,
    pub skills: f32,
    pub experience: f32,
    pub portfolio: f32,
    pub education: f32,
    pub contact: f32,
}

impl Default for SectionHeights {
    fn default() -> Self {
        Self {
            about: 900.0,
            skills: 1150.0,
            experience: 950.0,
            portfolio: 1250.0,
            education: 700.0,
            contact: 1050.0,
        }
    }
}

/// Portfolio grid row height, used when sizing the portfolio section
pub const PORTFOLIO_ROW_HEIGHT: f32 = 460.0;
pub const PORTFOLIO_COLUMNS: usize = 3;

impl SectionHeights {
    /// Grows the portfolio section to fit `projects` cards in rows of three
    pub fn with_projects(mut self, projects: usize) -> Self {
        let rows = projects.div_ceil(PORTFOLIO_COLUMNS).max(1);
        self.portfolio = 330.0 + rows as f32 * PORTFOLIO_ROW_HEIGHT;
        self
    }
}

/// Top offset and height of every section; the hero fills the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport_height: f32,
    spans: Vec<(SectionId, f32, f32)>,
}

impl PageLayout {
    pub fn new(viewport_height: f32, heights: SectionHeights) -> Self {
        let viewport_height = viewport_height.max(1.0);
        let sizes = [
            viewport_height,
            heights.about,
            heights.skills,
            heights.experience,
            heights.portfolio,
            heights.education,
            heights.contact,
        ];
        let mut top = 0.0;
        let spans = SectionId::ALL
            .iter()
            .zip(sizes)
            .map(|(&id, height)| {
                let span = (id, top, height);
                top += height;
                span
            })
            .collect();

        Self {
            viewport_height,
            spans,
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn total_height(&self) -> f32 {
        self.spans
            .last()
            .map(|&(_, top, height)| top + height)
            .unwrap_or(0.0)
    }

    /// Largest scroll offset
    pub fn scroll_limit(&self) -> f32 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    pub fn top(&self, section: SectionId) -> f32 {
        self.spans[section.index()].1
    }

    pub fn height(&self, section: SectionId) -> f32 {
        self.spans[section.index()].2
    }

    pub fn bottom(&self, section: SectionId) -> f32 {
        self.top(section) + self.height(section)
    }

    /// Scroll offset that brings `section` to the top of the viewport
    pub fn scroll_target(&self, section: SectionId) -> f32 {
        self.top(section).min(self.scroll_limit())
    }

    /// Section under the upper third of the viewport at `scroll`
    pub fn section_at(&self, scroll: f32) -> SectionId {
        let probe = scroll + self.viewport_height / 3.0;
        self.spans
            .iter()
            .rev()
            .find(|&&(_, top, _)| top <= probe)
            .map(|&(id, _, _)| id)
            .unwrap_or(SectionId::Hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stack_in_order() {
        let layout = PageLayout::new(800.0, SectionHeights::default());
        assert_eq!(layout.top(SectionId::Hero), 0.0);
        assert_eq!(layout.top(SectionId::About), 800.0);
        assert_eq!(layout.top(SectionId::Skills), 1700.0);
        assert_eq!(
            layout.scroll_limit(),
            layout.total_height() - 800.0
        );
    }

    #[test]
    fn active_section_follows_scroll() {
        let layout = PageLayout::new(900.0, SectionHeights::default());
        assert_eq!(layout.section_at(0.0), SectionId::Hero);
        assert_eq!(layout.section_at(700.0), SectionId::About);
        assert_eq!(layout.section_at(layout.scroll_limit()), SectionId::Contact);
    }

    #[test]
    fn portfolio_grows_with_rows() {
        let five = SectionHeights::default().with_projects(5);
        let seven = SectionHeights::default().with_projects(7);
        assert!(seven.portfolio > five.portfolio);
    }
}
