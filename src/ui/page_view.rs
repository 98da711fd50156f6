//! Draws the page sections with ImGui
//!
//! Everything is laid out in logical pixels from the [`PageLayout`] and the
//! current scroll offset. Interactions are resolved by hit-testing the mouse
//! against the rectangles drawn this frame and forwarded to [`Page`].
//!
//! [`PageLayout`]: crate::page::PageLayout

use imgui::{Condition, MouseButton, StyleColor, StyleVar, Ui, WindowFlags};

use super::theme::{self, rgb, rgba};
use crate::{
    content::PortfolioContent,
    page::{
        contact::FormState, modal::ModalClick, navbar::Navbar, Element, Page, Pose, SectionId,
    },
};

const MARGIN: f32 = 72.0;
const NAV_HEIGHT: f32 = 64.0;
const PROGRESS_HEIGHT: f32 = 3.0;

type Rect = ([f32; 2], [f32; 2]);

fn contains(rect: Rect, point: [f32; 2]) -> bool {
    point[0] >= rect.0[0] && point[0] <= rect.1[0] && point[1] >= rect.0[1] && point[1] <= rect.1[1]
}

/// Per-frame drawing context
struct View<'ui> {
    ui: &'ui Ui,
    width: f32,
    height: f32,
    scroll: f32,
    mouse: [f32; 2],
    clicked: bool,
    hovered: bool,
}

impl<'ui> View<'ui> {
    /// Screen y of a point `local` pixels below the top of `section`
    fn y(&self, page: &Page, section: SectionId, local: f32) -> f32 {
        page.layout().top(section) - self.scroll + local
    }

    fn visible(&self, top: f32, bottom: f32) -> bool {
        bottom >= 0.0 && top <= self.height
    }

    fn content_width(&self) -> f32 {
        (self.width - 2.0 * MARGIN).max(200.0)
    }

    /// Registers an interactive rectangle; returns true when clicked
    fn hit(&mut self, rect: Rect) -> bool {
        if contains(rect, self.mouse) {
            self.hovered = true;
            return self.clicked;
        }
        false
    }

    fn fill(&self, rect: Rect, color: [f32; 4], rounding: f32) {
        self.ui
            .get_window_draw_list()
            .add_rect(rect.0, rect.1, color)
            .filled(true)
            .rounding(rounding)
            .build();
    }

    fn text(&self, pos: [f32; 2], color: [f32; 4], scale: f32, text: &str) {
        self.ui.set_window_font_scale(scale);
        self.ui.set_cursor_screen_pos(pos);
        self.ui.text_colored(color, text);
        self.ui.set_window_font_scale(1.0);
    }

    fn wrapped(&self, pos: [f32; 2], wrap_width: f32, color: [f32; 4], text: &str) {
        self.ui.set_cursor_screen_pos(pos);
        let _wrap = self.ui.push_text_wrap_pos_with_pos(pos[0] + wrap_width);
        let _color = self.ui.push_style_color(StyleColor::Text, color);
        self.ui.text_wrapped(text);
    }

    fn text_width(&self, scale: f32, text: &str) -> f32 {
        self.ui.calc_text_size(text)[0] * scale
    }

    /// Pill-shaped text button; returns true when clicked
    fn button(&mut self, pos: [f32; 2], label: &str, fill: u32, ink: u32, alpha: f32) -> bool {
        let size = [self.text_width(1.0, label) + 40.0, 44.0];
        let rect = (pos, [pos[0] + size[0], pos[1] + size[1]]);
        let hovered = contains(rect, self.mouse);
        let fill_alpha = if hovered { alpha * 0.85 } else { alpha };
        self.fill(rect, rgba(fill, fill_alpha), 22.0);
        self.text([pos[0] + 20.0, pos[1] + 12.0], rgba(ink, alpha), 1.0, label);
        self.hit(rect)
    }
}

/// Offsets a section-local position by a reveal pose
fn posed(pos: [f32; 2], pose: &Pose) -> [f32; 2] {
    [pos[0] + pose.x, pos[1] + pose.y]
}

/// Draws the whole page for this frame and applies the interactions
pub fn draw_page(ui: &Ui, page: &mut Page, content: &PortfolioContent) {
    let [width, height] = ui.io().display_size;
    let modal_shown = page.modal().is_shown();
    let clicked = ui.is_mouse_clicked(MouseButton::Left);
    let mut view = View {
        ui,
        width,
        height,
        scroll: page.scroll_offset(),
        mouse: ui.io().mouse_pos,
        clicked: clicked && !modal_shown,
        hovered: false,
    };

    ui.window("page")
        .position([0.0, 0.0], Condition::Always)
        .size([width, height], Condition::Always)
        .flags(
            WindowFlags::NO_DECORATION
                | WindowFlags::NO_BACKGROUND
                | WindowFlags::NO_MOVE
                | WindowFlags::NO_SAVED_SETTINGS
                | WindowFlags::NO_SCROLL_WITH_MOUSE
                | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS,
        )
        .build(|| {
            draw_hero(&mut view, page, content);
            draw_about(&mut view, page, content);
            draw_skills(&mut view, page, content);
            draw_experience(&mut view, page, content);
            draw_portfolio(&mut view, page, content);
            draw_education(&mut view, page, content);
            draw_contact(&mut view, page, content);
            draw_navbar(&mut view, page, content);

            if modal_shown {
                view.clicked = clicked;
                draw_modal(&mut view, page, content);
            }
        });

    page.set_hovered(view.hovered);
    draw_cursor(ui, page);
}

fn draw_hero(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let top = view.y(page, SectionId::Hero, 0.0);
    if !view.visible(top, top + page.layout().height(SectionId::Hero)) {
        return;
    }
    let time = page.time();
    let intro = page.intro().clone();
    let scale = 3.4;

    let letters = content.title_letters();
    let title: String = letters.iter().collect();
    let title_width = view.text_width(scale, &title) + letters.len() as f32 * 4.0;
    let mut x = (view.width - title_width) / 2.0;
    let baseline = top + view.height * 0.36;
    for (i, letter) in letters.iter().enumerate() {
        let pose = intro.letter(i, time);
        let glyph = letter.to_string();
        view.text(
            [x, baseline + pose.y],
            rgba(theme::CHARCOAL, pose.opacity),
            scale,
            &glyph,
        );
        x += view.text_width(scale, &glyph) + 4.0;
    }

    let subtitle = intro.subtitle(time);
    let sub_width = view.text_width(1.0, &content.profile.subtitle);
    view.text(
        [(view.width - sub_width) / 2.0, baseline + 110.0 + subtitle.y],
        rgba(theme::TAUPE, subtitle.opacity),
        1.0,
        &content.profile.subtitle,
    );

    let cta = intro.call_to_action(time);
    let cta_y = baseline + 170.0 + cta.y;
    let center = view.width / 2.0;
    if view.button([center - 200.0, cta_y], "View My Work", theme::CHARCOAL, theme::IVORY, cta.opacity) {
        page.navigate(SectionId::Portfolio);
    }
    if view.button([center + 20.0, cta_y], "Contact Me", theme::SAND, theme::CHARCOAL, cta.opacity) {
        page.navigate(SectionId::Contact);
    }

    let hint = intro.scroll_hint(time);
    let hint_y = top + view.height - 90.0;
    view.text([center - 24.0, hint_y], rgba(theme::CHARCOAL, hint.opacity), 0.8, "Scroll");
    view.ui
        .get_window_draw_list()
        .add_line(
            [center, hint_y + 26.0],
            [center, hint_y + 66.0],
            rgba(theme::CHARCOAL, hint.opacity),
        )
        .thickness(1.0)
        .build();
}

fn section_background(view: &View, page: &Page, section: SectionId) -> Option<f32> {
    let top = view.y(page, section, 0.0);
    let bottom = top + page.layout().height(section);
    if !view.visible(top, bottom) {
        return None;
    }
    let color = theme::SECTION_BACKGROUNDS[section.index() - 1];
    view.fill(([0.0, top], [view.width, bottom]), rgb(color), 0.0);
    Some(top)
}

fn label_and_heading(view: &View, pos: [f32; 2], pose: &Pose, label: &str, heading: &str, ink: u32) {
    let pos = posed(pos, pose);
    view.text(pos, rgba(theme::TAUPE, pose.opacity), 0.8, &label.to_uppercase());
    view.text([pos[0], pos[1] + 28.0], rgba(ink, pose.opacity), 2.0, heading);
}

fn draw_about(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(top) = section_background(view, page, SectionId::About) else {
        return;
    };
    let about = &content.about;
    let half = view.content_width() / 2.0;

    let text = page.reveal(Element::AboutText);
    let heading = format!("{} {}", about.heading, about.emphasis);
    label_and_heading(view, [MARGIN, top + 90.0], &text, "About Me", &heading, theme::CHARCOAL);
    view.wrapped(
        posed([MARGIN, top + 190.0], &text),
        half - 40.0,
        rgba(theme::CHARCOAL, text.opacity * 0.85),
        &about.description,
    );

    for (i, counter) in about.counters.iter().enumerate() {
        let card = page.reveal(Element::CounterCard(i));
        let value = page.reveal(Element::CounterValue(i)).value.round() as u32;
        let pos = posed([MARGIN + i as f32 * 150.0, top + 440.0], &card);
        view.text(
            pos,
            rgba(theme::CHARCOAL, card.opacity),
            2.2,
            &format!("{}{}", value, counter.suffix),
        );
        view.text([pos[0], pos[1] + 56.0], rgba(theme::TAUPE, card.opacity), 0.8, &counter.label);
    }

    let visual = page.reveal(Element::AboutVisual);
    let center = posed([MARGIN + half * 1.5, top + 330.0], &visual);
    {
        let draw_list = view.ui.get_window_draw_list();
        draw_list
            .add_circle(center, 150.0, rgba(theme::SAND, visual.opacity))
            .filled(true)
            .num_segments(96)
            .build();
        for ring in [175.0, 200.0] {
            draw_list
                .add_circle(center, ring, rgba(theme::STONE, visual.opacity * 0.5))
                .num_segments(96)
                .thickness(1.0)
                .build();
        }
    }
    let initials_width = view.text_width(2.4, &content.profile.initials);
    view.text(
        [center[0] - initials_width / 2.0, center[1] - 40.0],
        rgba(theme::CHARCOAL, visual.opacity),
        2.4,
        &content.profile.initials,
    );
    let role_width = view.text_width(0.9, &content.profile.tagline);
    view.text(
        [center[0] - role_width / 2.0, center[1] + 20.0],
        rgba(theme::TAUPE, visual.opacity),
        0.9,
        &content.profile.tagline,
    );
    for (i, tag) in about.tags.iter().enumerate() {
        let angle = -0.9 + i as f32 * 1.4;
        let pos = [center[0] + angle.cos() * 210.0, center[1] + angle.sin() * 210.0];
        let w = view.text_width(0.8, tag) + 24.0;
        view.fill((pos, [pos[0] + w, pos[1] + 30.0]), rgba(theme::IVORY, visual.opacity), 15.0);
        view.text([pos[0] + 12.0, pos[1] + 6.0], rgba(theme::CHARCOAL, visual.opacity), 0.8, tag);
    }
}

fn draw_skills(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(top) = section_background(view, page, SectionId::Skills) else {
        return;
    };
    let heading = page.reveal(Element::SkillsHeading);
    label_and_heading(view, [MARGIN, top + 80.0], &heading, "Expertise", "Skills & Tools", theme::CHARCOAL);

    let columns = if view.width < 768.0 { 1 } else { 3 };
    let gap = 24.0;
    let card_w = (view.content_width() - gap * (columns as f32 - 1.0)) / columns as f32;
    let card_h = 180.0;
    for (i, card) in content.skills.cards.iter().enumerate() {
        let pose = page.reveal(Element::SkillCard(i));
        let origin = [
            MARGIN + (i % columns) as f32 * (card_w + gap),
            top + 190.0 + (i / columns) as f32 * (card_h + gap),
        ];
        let rect = (origin, [origin[0] + card_w, origin[1] + card_h]);
        let over = contains(rect, view.mouse);
        if over {
            view.hovered = true;
            page.tilt_card(i, Some((view.mouse, origin, [card_w, card_h])));
        } else {
            page.tilt_card(i, None);
        }
        let tilt = page.tilt(i);
        let shift = [tilt.rotate_y * 0.4, pose.y - tilt.lift - tilt.rotate_x * 0.4];
        let moved = ([origin[0] + shift[0], origin[1] + shift[1]], [rect.1[0] + shift[0], rect.1[1] + shift[1]]);
        view.fill(moved, rgba(0xFFFFFF, pose.opacity * 0.7), 14.0);
        let inner = [moved.0[0] + 24.0, moved.0[1] + 22.0];
        view.text(inner, rgba(theme::TAUPE, pose.opacity), 1.6, &card.icon);
        view.text([inner[0], inner[1] + 48.0], rgba(theme::CHARCOAL, pose.opacity), 1.1, &card.title);
        view.wrapped(
            [inner[0], inner[1] + 84.0],
            card_w - 48.0,
            rgba(theme::TAUPE, pose.opacity),
            &card.description,
        );
    }

    let rows = content.skills.cards.len().div_ceil(columns) as f32;
    let bars_top = top + 210.0 + rows * (card_h + gap);
    view.text([MARGIN, bars_top], rgb(theme::CHARCOAL), 1.2, "Software Proficiency");
    let track_w = view.content_width();
    for (i, software) in content.skills.software.iter().enumerate() {
        let y = bars_top + 50.0 + i as f32 * 56.0;
        let level = page.reveal(Element::SoftwareBar(i)).value;
        view.text([MARGIN, y], rgb(theme::CHARCOAL), 0.9, &software.name);
        let percent = format!("{}%", software.level);
        view.text(
            [MARGIN + track_w - view.text_width(0.9, &percent), y],
            rgb(theme::TAUPE),
            0.9,
            &percent,
        );
        let track = ([MARGIN, y + 28.0], [MARGIN + track_w, y + 32.0]);
        view.fill(track, rgba(theme::STONE, 0.3), 2.0);
        let filled = ([MARGIN, y + 28.0], [MARGIN + track_w * level / 100.0, y + 32.0]);
        view.fill(filled, rgb(theme::TAUPE), 2.0);
    }
}

fn draw_experience(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(top) = section_background(view, page, SectionId::Experience) else {
        return;
    };
    let experience = &content.experience;
    view.text([MARGIN, top + 80.0], rgb(theme::TAUPE), 0.8, "CAREER");
    view.text([MARGIN, top + 108.0], rgb(theme::CHARCOAL), 2.0, "Experience");

    let line_x = MARGIN + 12.0;
    let line_top = top + 190.0;
    let line_len = page.layout().height(SectionId::Experience) - 260.0;
    view.fill(([line_x, line_top], [line_x + 2.0, line_top + line_len]), rgba(theme::STONE, 0.25), 0.0);
    view.fill(
        ([line_x, line_top], [line_x + 2.0, line_top + line_len * page.timeline_line_scale()]),
        rgb(theme::TAUPE),
        0.0,
    );

    let card = page.reveal(Element::ExperienceCard);
    let origin = posed([MARGIN + 56.0, top + 160.0], &card);
    view.ui
        .get_window_draw_list()
        .add_circle([line_x + 1.0, origin[1] + 30.0], 8.0, rgba(theme::TAUPE, card.opacity))
        .filled(true)
        .build();
    view.text(origin, rgba(theme::TAUPE, card.opacity), 0.85, &experience.dates);
    view.text(
        [origin[0] + 220.0, origin[1]],
        rgba(theme::STONE, card.opacity),
        0.85,
        &experience.company,
    );
    view.text([origin[0], origin[1] + 34.0], rgba(theme::CHARCOAL, card.opacity), 1.5, &experience.role);

    for (i, bullet) in experience.bullets.iter().enumerate() {
        let pose = page.reveal(Element::Bullet(i));
        let pos = posed([MARGIN + 76.0, top + 250.0 + i as f32 * 64.0], &pose);
        view.text([pos[0] - 20.0, pos[1]], rgba(theme::TAUPE, pose.opacity), 1.0, "-");
        view.wrapped(pos, view.content_width() - 100.0, rgba(theme::CHARCOAL, pose.opacity), bullet);
    }
}

fn draw_portfolio(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(top) = section_background(view, page, SectionId::Portfolio) else {
        return;
    };
    let heading = page.reveal(Element::PortfolioHeading);
    label_and_heading(view, [MARGIN, top + 80.0], &heading, "Selected Work", "Portfolio", theme::CHARCOAL);

    let columns = if view.width < 768.0 { 1 } else { 3 };
    let gap = 28.0;
    let card_w = (view.content_width() - gap * (columns as f32 - 1.0)) / columns as f32;
    let card_h = 420.0;
    for (i, project) in content.projects.iter().enumerate() {
        let pose = page.reveal(Element::PortfolioItem(i));
        let origin = posed(
            [
                MARGIN + (i % columns) as f32 * (card_w + gap),
                top + 200.0 + (i / columns) as f32 * (card_h + gap),
            ],
            &pose,
        );
        let rect = (origin, [origin[0] + card_w, origin[1] + card_h]);
        if pose.opacity > 0.5 && view.hit(rect) {
            page.open_project(i);
        }

        let (color, accent) = project.gradient();
        let thumb = (origin, [origin[0] + card_w, origin[1] + 260.0]);
        view.ui.get_window_draw_list().add_rect_filled_multicolor(
            thumb.0,
            thumb.1,
            rgba(color, pose.opacity),
            rgba(color, pose.opacity),
            rgba(accent, pose.opacity),
            rgba(accent, pose.opacity),
        );
        view.fill(
            ([origin[0], origin[1] + 260.0], rect.1),
            rgba(0xFFFFFF, pose.opacity * 0.8),
            0.0,
        );
        view.text(
            [origin[0] + 16.0, origin[1] + 16.0],
            rgba(theme::IVORY, pose.opacity),
            0.75,
            &project.category.to_uppercase(),
        );
        view.text(
            [origin[0] + 16.0, origin[1] + 280.0],
            rgba(theme::CHARCOAL, pose.opacity),
            1.05,
            &project.title,
        );
        view.text(
            [origin[0] + 16.0, origin[1] + 318.0],
            rgba(theme::TAUPE, pose.opacity),
            0.75,
            &project.software.join("  /  "),
        );
        view.text(
            [origin[0] + 16.0, origin[1] + 372.0],
            rgba(theme::CHARCOAL, pose.opacity),
            0.85,
            "View Project ->",
        );
    }
}

fn draw_education(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(top) = section_background(view, page, SectionId::Education) else {
        return;
    };
    let education = &content.education;
    view.text([MARGIN, top + 80.0], rgb(theme::TAUPE), 0.8, "ACADEMIC BACKGROUND");
    view.text([MARGIN, top + 108.0], rgb(theme::CHARCOAL), 2.0, "Education");

    let card = page.reveal(Element::EducationCard);
    let origin = posed([MARGIN, top + 200.0], &card);
    let rect = (origin, [origin[0] + view.content_width(), origin[1] + 300.0]);
    view.fill(rect, rgba(0xFFFFFF, card.opacity * 0.7), 16.0);
    let inner = [origin[0] + 32.0, origin[1] + 32.0];
    view.text(inner, rgba(theme::CHARCOAL, card.opacity), 1.5, &education.degree);
    view.text([inner[0], inner[1] + 46.0], rgba(theme::TAUPE, card.opacity), 1.0, &education.school);
    view.text([inner[0], inner[1] + 78.0], rgba(theme::STONE, card.opacity), 0.85, &education.years);
    view.wrapped(
        [inner[0], inner[1] + 120.0],
        view.content_width() - 64.0,
        rgba(theme::CHARCOAL, card.opacity * 0.85),
        &education.description,
    );
}

fn draw_contact(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(top) = section_background(view, page, SectionId::Contact) else {
        return;
    };
    let contact = &content.contact;
    let half = view.content_width() / 2.0;

    let heading = page.reveal(Element::ContactHeading);
    let title = format!("{} {}", contact.heading, contact.emphasis);
    label_and_heading(view, [MARGIN, top + 80.0], &heading, "Get In Touch", &title, theme::IVORY);
    view.wrapped(
        posed([MARGIN, top + 180.0], &heading),
        view.content_width() * 0.6,
        rgba(theme::SAND, heading.opacity * 0.8),
        &contact.subtitle,
    );

    let info = page.reveal(Element::ContactInfo);
    for (i, item) in contact.items.iter().enumerate() {
        let pos = posed([MARGIN, top + 300.0 + i as f32 * 76.0], &info);
        view.text(pos, rgba(theme::STONE, info.opacity), 0.8, &item.label.to_uppercase());
        let value_pos = [pos[0], pos[1] + 26.0];
        view.text(value_pos, rgba(theme::IVORY, info.opacity), 1.0, &item.value);
        if let Some(link) = &item.link {
            let rect = (value_pos, [value_pos[0] + view.text_width(1.0, &item.value), value_pos[1] + 24.0]);
            if view.hit(rect) {
                log::info!("Contact link selected: {}", link);
            }
        }
    }
    let badge = posed([MARGIN, top + 540.0], &info);
    view.ui
        .get_window_draw_list()
        .add_circle([badge[0] + 6.0, badge[1] + 10.0], 5.0, rgba(0x7FB77E, info.opacity))
        .filled(true)
        .build();
    view.text([badge[0] + 20.0, badge[1]], rgba(theme::SAND, info.opacity), 0.9, &contact.availability);

    let form_pose = page.reveal(Element::ContactForm);
    let submit_pose = page.contact().pose(page.time());
    let origin = posed([MARGIN + half + 24.0, top + 290.0], &form_pose);
    let form_w = half - 24.0;
    let alpha = form_pose.opacity * submit_pose.opacity;
    let _alpha = view.ui.push_style_var(StyleVar::Alpha(alpha.max(0.01)));
    let grow = (submit_pose.scale - 1.0) * form_w / 2.0;
    view.fill(
        ([origin[0] - grow, origin[1] - grow], [origin[0] + form_w + grow, origin[1] + 420.0 + grow]),
        rgba(0x4A4340, alpha),
        16.0,
    );

    if let FormState::Sent { .. } = page.contact().state() {
        let center = [origin[0] + form_w / 2.0, origin[1] + 150.0];
        view.ui
            .get_window_draw_list()
            .add_circle(center, 32.0, rgba(theme::SAND, alpha))
            .thickness(2.0)
            .build();
        view.text([center[0] - 8.0, center[1] - 12.0], rgba(theme::SAND, alpha), 1.2, "OK");
        view.text([origin[0] + 32.0, center[1] + 60.0], rgba(theme::IVORY, alpha), 1.4, "Message Sent!");
        view.wrapped(
            [origin[0] + 32.0, center[1] + 104.0],
            form_w - 64.0,
            rgba(theme::SAND, alpha),
            "Thank you for reaching out. I'll get back to you within 24 hours.",
        );
    } else {
        let field_w = form_w - 64.0;
        let x = origin[0] + 32.0;
        let form = page.contact_mut();
        view.text([x, origin[1] + 28.0], rgba(theme::SAND, alpha), 0.8, "YOUR NAME");
        view.ui.set_cursor_screen_pos([x, origin[1] + 52.0]);
        view.ui.set_next_item_width(field_w);
        view.ui.input_text("##name", &mut form.name).hint("John Smith").build();

        view.text([x, origin[1] + 100.0], rgba(theme::SAND, alpha), 0.8, "EMAIL ADDRESS");
        view.ui.set_cursor_screen_pos([x, origin[1] + 124.0]);
        view.ui.set_next_item_width(field_w);
        view.ui.input_text("##email", &mut form.email).hint("john@example.com").build();

        view.text([x, origin[1] + 172.0], rgba(theme::SAND, alpha), 0.8, "MESSAGE");
        view.ui.set_cursor_screen_pos([x, origin[1] + 196.0]);
        view.ui
            .input_text_multiline("##message", &mut form.message, [field_w, 110.0])
            .build();

        let errors: Vec<String> = page.contact().errors().iter().map(ToString::to_string).collect();
        for (i, error) in errors.iter().enumerate() {
            view.text([x, origin[1] + 316.0 + i as f32 * 20.0], rgba(0xE8A598, alpha), 0.75, error);
        }
        if view.button([x, origin[1] + 366.0], "Send Message ->", theme::SAND, theme::CHARCOAL, alpha) {
            page.submit_contact();
        }
    }

    let footer_y = top + page.layout().height(SectionId::Contact) - 70.0;
    view.fill(([MARGIN, footer_y - 20.0], [MARGIN + view.content_width(), footer_y - 19.0]), rgba(theme::STONE, 0.4), 0.0);
    view.text([MARGIN, footer_y], rgb(theme::STONE), 0.8, &contact.footer_copy);
    let note_w = view.text_width(0.8, &contact.footer_note);
    view.text([MARGIN + view.content_width() - note_w, footer_y], rgb(theme::STONE), 0.8, &contact.footer_note);
}

fn draw_navbar(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let navbar = page.navbar().clone();
    let ink = if navbar.is_scrolled() || page.layout().top(SectionId::About) - view.scroll > NAV_HEIGHT {
        theme::CHARCOAL
    } else {
        theme::IVORY
    };
    if navbar.is_scrolled() {
        view.fill(([0.0, 0.0], [view.width, NAV_HEIGHT]), rgba(theme::IVORY, 0.92), 0.0);
    }

    let progress = page.scroll_progress();
    view.fill(([0.0, 0.0], [view.width * progress, PROGRESS_HEIGHT]), rgb(theme::TAUPE), 0.0);

    let logo = format!("{}.", content.profile.initials.replace('.', ""));
    let logo_pos = [MARGIN, 18.0];
    view.text(logo_pos, rgb(ink), 1.3, &logo);
    let logo_rect = (logo_pos, [logo_pos[0] + view.text_width(1.3, &logo), logo_pos[1] + 30.0]);
    if view.hit(logo_rect) {
        page.navigate(SectionId::Hero);
    }

    if navbar.is_mobile() {
        let burger = ([view.width - MARGIN - 32.0, 18.0], [view.width - MARGIN, 46.0]);
        for i in 0..3 {
            let y = burger.0[1] + 4.0 + i as f32 * 9.0;
            view.fill(([burger.0[0], y], [burger.1[0], y + 2.0]), rgb(ink), 1.0);
        }
        if view.hit(burger) {
            page.toggle_menu();
        }
        if navbar.is_menu_open() {
            let links = Navbar::links().count() as f32;
            view.fill(([0.0, NAV_HEIGHT], [view.width, NAV_HEIGHT + links * 48.0 + 16.0]), rgb(theme::IVORY), 0.0);
            for (i, section) in Navbar::links().enumerate() {
                let pos = [MARGIN, NAV_HEIGHT + 12.0 + i as f32 * 48.0];
                if nav_link(view, pos, section, &navbar) {
                    page.navigate(section);
                }
            }
        }
        return;
    }

    let mut x = view.width - MARGIN;
    let links: Vec<SectionId> = Navbar::links().collect();
    for section in links.into_iter().rev() {
        x -= view.text_width(0.9, section.anchor()) + 32.0;
        if nav_link(view, [x, 22.0], section, &navbar) {
            page.navigate(section);
        }
    }
}

fn nav_link(view: &mut View, pos: [f32; 2], section: SectionId, navbar: &Navbar) -> bool {
    let label = section.anchor();
    let color = if navbar.active() == section {
        rgb(theme::CHARCOAL)
    } else {
        rgb(theme::TAUPE)
    };
    view.text(pos, color, 0.9, label);
    let rect = (pos, [pos[0] + view.text_width(0.9, label), pos[1] + 24.0]);
    view.hit(rect)
}

fn draw_modal(view: &mut View, page: &mut Page, content: &PortfolioContent) {
    let Some(frame) = page.modal().frame(page.time()) else {
        return;
    };
    let Some(project) = content.project(frame.project) else {
        return;
    };

    view.fill(
        ([0.0, 0.0], [view.width, view.height]),
        rgba(0x1E1B19, frame.overlay_opacity * 0.75),
        0.0,
    );

    let panel = frame.panel;
    let w = (view.width * 0.7).clamp(320.0, 900.0) * panel.scale;
    let h = (view.height * 0.8).min(640.0) * panel.scale;
    let origin = [(view.width - w) / 2.0, (view.height - h) / 2.0 + panel.y];
    let rect = (origin, [origin[0] + w, origin[1] + h]);
    view.fill(rect, rgba(theme::IVORY, panel.opacity), 18.0);

    let (color, accent) = project.gradient();
    view.ui.get_window_draw_list().add_rect_filled_multicolor(
        origin,
        [origin[0] + w, origin[1] + h * 0.42],
        rgba(color, panel.opacity),
        rgba(color, panel.opacity),
        rgba(accent, panel.opacity),
        rgba(accent, panel.opacity),
    );
    let hero_bottom = origin[1] + h * 0.42;
    view.text(
        [origin[0] + 32.0, hero_bottom - 90.0],
        rgba(theme::IVORY, panel.opacity),
        0.8,
        &project.category.to_uppercase(),
    );
    view.text(
        [origin[0] + 32.0, hero_bottom - 62.0],
        rgba(theme::IVORY, panel.opacity),
        1.6,
        &project.title,
    );
    view.text(
        [origin[0] + 32.0, hero_bottom + 24.0],
        rgba(theme::TAUPE, panel.opacity),
        0.85,
        &project.software.join("  /  "),
    );
    view.wrapped(
        [origin[0] + 32.0, hero_bottom + 64.0],
        w - 64.0,
        rgba(theme::CHARCOAL, panel.opacity),
        &project.description,
    );

    let bar_y = origin[1] + h - 80.0;
    view.text([origin[0] + 32.0, bar_y - 28.0], rgba(theme::TAUPE, panel.opacity), 0.75, "Before");
    view.text([origin[0] + w - 80.0, bar_y - 28.0], rgba(theme::TAUPE, panel.opacity), 0.75, "After");
    view.ui.get_window_draw_list().add_rect_filled_multicolor(
        [origin[0] + 32.0, bar_y],
        [origin[0] + w - 32.0, bar_y + 6.0],
        rgba(theme::CHARCOAL, 0.2 * panel.opacity),
        rgba(color, panel.opacity),
        rgba(color, panel.opacity),
        rgba(theme::CHARCOAL, 0.2 * panel.opacity),
    );
    view.text(
        [origin[0] + 32.0, bar_y + 18.0],
        rgba(theme::STONE, panel.opacity),
        0.75,
        "Lighting comparison: raw render vs final composite",
    );

    let close = ([origin[0] + w - 56.0, origin[1] + 16.0], [origin[0] + w - 16.0, origin[1] + 56.0]);
    view.fill(close, rgba(theme::IVORY, panel.opacity * 0.8), 20.0);
    view.text([close.0[0] + 14.0, close.0[1] + 9.0], rgba(theme::CHARCOAL, panel.opacity), 1.0, "x");

    if view.hit(close) {
        page.modal_click(ModalClick::CloseButton);
    } else if contains(rect, view.mouse) {
        if view.clicked {
            page.modal_click(ModalClick::Panel);
        }
    } else if view.clicked {
        page.modal_click(ModalClick::Overlay);
    }
}

fn draw_cursor(ui: &Ui, page: &Page) {
    ui.set_mouse_cursor(None);
    let cursor = page.cursor();
    let draw_list = ui.get_foreground_draw_list();
    let dot = [cursor.dot.x, cursor.dot.y];
    let follower = [cursor.follower.x, cursor.follower.y];
    draw_list
        .add_circle(dot, cursor.dot_radius(), rgb(theme::CHARCOAL))
        .filled(true)
        .build();
    draw_list
        .add_circle(follower, cursor.follower_radius(), rgba(theme::TAUPE, 0.8))
        .thickness(1.5)
        .num_segments(48)
        .build();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_hit_test_is_inclusive() {
        let rect = ([10.0, 10.0], [20.0, 30.0]);
        assert!(contains(rect, [10.0, 30.0]));
        assert!(!contains(rect, [9.9, 15.0]));
        assert!(!contains(rect, [15.0, 30.5]));
    }
}
