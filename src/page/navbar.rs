//! Navigation bar state

use super::layout::{PageLayout, SectionId};

/// Scroll offset past which the bar switches to its compact style
pub const SCROLLED_THRESHOLD: f32 = 60.0;
/// Viewports narrower than this use the collapsible menu
pub const MOBILE_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Navbar {
    scrolled: bool,
    mobile: bool,
    menu_open: bool,
    active: SectionId,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            scrolled: false,
            mobile: false,
            menu_open: false,
            active: SectionId::Hero,
        }
    }
}

impl Navbar {
    /// Sections linked from the bar; the logo links to the hero
    pub fn links() -> impl Iterator<Item = SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|&section| section != SectionId::Hero)
    }

    pub fn update(&mut self, scroll: f32, layout: &PageLayout) {
        self.scrolled = scroll > SCROLLED_THRESHOLD;
        self.active = layout.section_at(scroll);
    }

    /// Follows the viewport width; leaving mobile width closes the menu
    pub fn set_viewport_width(&mut self, width: f32) {
        self.mobile = width < MOBILE_BREAKPOINT;
        if !self.mobile {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        if self.mobile {
            self.menu_open = !self.menu_open;
        }
    }

    /// Closes the menu and returns the scroll offset for `section`
    pub fn navigate(&mut self, section: SectionId, layout: &PageLayout) -> f32 {
        self.menu_open = false;
        layout.scroll_target(section)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active(&self) -> SectionId {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::layout::SectionHeights;

    #[test]
    fn compact_after_sixty_pixels() {
        let layout = PageLayout::new(800.0, SectionHeights::default());
        let mut navbar = Navbar::default();
        navbar.update(60.0, &layout);
        assert!(!navbar.is_scrolled());
        navbar.update(61.0, &layout);
        assert!(navbar.is_scrolled());
    }

    #[test]
    fn mobile_menu_closes_on_navigation() {
        let layout = PageLayout::new(800.0, SectionHeights::default());
        let mut navbar = Navbar::default();
        navbar.toggle_menu();
        assert!(!navbar.is_menu_open());

        navbar.set_viewport_width(500.0);
        navbar.toggle_menu();
        assert!(navbar.is_menu_open());
        let target = navbar.navigate(SectionId::Skills, &layout);
        assert_eq!(target, layout.top(SectionId::Skills));
        assert!(!navbar.is_menu_open());
    }

    #[test]
    fn hero_is_not_a_link() {
        assert_eq!(Navbar::links().count(), 6);
        assert!(Navbar::links().all(|s| s != SectionId::Hero));
    }
}
