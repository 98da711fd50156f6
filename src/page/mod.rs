//! # Page motion
//!
//! Everything that moves on the page outside the 3D hero: the intro
//! timeline, smooth scrolling, scroll-triggered reveals, the navbar, the
//! custom cursor, skill card tilt, the project modal and the contact form.
//!
//! [`Page`] ties these together. It is driven with a page clock in seconds,
//! so every animation can be stepped deterministically in tests.

pub mod contact;
pub mod cursor;
pub mod easing;
pub mod intro;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod tilt;
pub mod timeline;
pub mod tween;

pub use easing::Ease;
pub use layout::{PageLayout, SectionHeights, SectionId};
pub use sections::Element;
pub use tween::{Pose, Tween};

use crate::content::PortfolioContent;
use contact::ContactForm;
use cursor::CursorFollower;
use intro::HeroIntro;
use modal::{ModalClick, ProjectModal};
use navbar::Navbar;
use scroll::SmoothScroll;
use sections::SectionReveals;
use tilt::Tilt;

/// State of the whole page for one mount of the window
#[derive(Debug, Clone)]
pub struct Page {
    heights: SectionHeights,
    layout: PageLayout,
    viewport_width: f32,
    scroll: SmoothScroll,
    navbar: Navbar,
    cursor: CursorFollower,
    intro: HeroIntro,
    reveals: SectionReveals,
    modal: ProjectModal,
    contact: ContactForm,
    tilts: Vec<Tilt>,
    project_count: usize,
    time: f32,
}

impl Page {
    /// Lays out the page for a viewport of `width` x `height` logical pixels
    pub fn new(content: &PortfolioContent, width: f32, height: f32) -> Self {
        let heights = SectionHeights::default().with_projects(content.projects.len());
        let layout = PageLayout::new(height, heights);
        let reveals = SectionReveals::new(content, &layout);
        let mut navbar = Navbar::default();
        navbar.set_viewport_width(width);

        Self {
            heights,
            scroll: SmoothScroll::new(layout.scroll_limit()),
            layout,
            viewport_width: width,
            navbar,
            cursor: CursorFollower::default(),
            intro: HeroIntro::new(content.title_letters().len()),
            reveals,
            modal: ProjectModal::default(),
            contact: ContactForm::default(),
            tilts: vec![Tilt::default(); content.skills.cards.len()],
            project_count: content.projects.len(),
            time: 0.0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.layout = PageLayout::new(height, self.heights);
        self.scroll.set_limit(self.layout.scroll_limit());
        self.reveals.relayout(&self.layout);
        self.navbar.set_viewport_width(width);
    }

    /// Advances every animation to `time` seconds since mount
    pub fn update(&mut self, time: f32) {
        let dt = (time - self.time).max(0.0);
        self.time = time;

        let offset = self.scroll.update(time);
        self.navbar.update(offset, &self.layout);
        self.reveals.update(offset, &self.layout, time, dt);
        self.modal.update(time);
        self.contact.update(time);
        self.cursor.tick();
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Wheel input in pixels; ignored while the modal is shown
    pub fn on_wheel(&mut self, delta: f32) {
        if !self.modal.is_shown() {
            self.scroll.scroll_by(delta, self.time);
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.cursor.move_to(x, y);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.cursor.set_hovered(hovered);
    }

    /// Glides to `section` and closes the mobile menu
    pub fn navigate(&mut self, section: SectionId) {
        let target = self.navbar.navigate(section, &self.layout);
        self.scroll.scroll_to(target, self.time);
    }

    pub fn toggle_menu(&mut self) {
        self.navbar.toggle_menu();
    }

    pub fn open_project(&mut self, index: usize) {
        if index < self.project_count {
            self.modal.open(index, self.time);
        }
    }

    pub fn modal_click(&mut self, target: ModalClick) {
        self.modal.click(target, self.time);
    }

    /// Returns true when Escape closed the modal
    pub fn escape(&mut self) -> bool {
        self.modal.escape(self.time)
    }

    /// Tilts skill card `index` toward the pointer, or flattens it
    pub fn tilt_card(&mut self, index: usize, pointer: Option<([f32; 2], [f32; 2], [f32; 2])>) {
        if let Some(tilt) = self.tilts.get_mut(index) {
            match pointer {
                Some((position, origin, size)) => {
                    *tilt = Tilt::from_pointer(position[0], position[1], origin, size);
                }
                None => tilt.reset(),
            }
        }
    }

    pub fn submit_contact(&mut self) -> bool {
        self.contact.submit(self.time)
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll.progress()
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn cursor(&self) -> &CursorFollower {
        &self.cursor
    }

    pub fn intro(&self) -> &HeroIntro {
        &self.intro
    }

    pub fn modal(&self) -> &ProjectModal {
        &self.modal
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn tilt(&self, index: usize) -> Tilt {
        self.tilts.get(index).copied().unwrap_or_default()
    }

    pub fn reveal(&self, element: Element) -> Pose {
        self.reveals.pose(element, self.time)
    }

    pub fn timeline_line_scale(&self) -> f32 {
        self.reveals.timeline_line_scale()
    }

    /// Current hero section background as sRGB
    pub fn hero_background(&self) -> [f32; 3] {
        self.intro.background(self.time)
    }
}
