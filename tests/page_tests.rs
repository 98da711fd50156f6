use vitrine::{
    content::PortfolioContent,
    gfx::color::hex_to_srgb,
    page::{
        contact::FormState,
        intro::{HERO_DARK, HERO_LIGHT},
        modal::{ModalClick, ModalState},
        Element, Page, SectionId,
    },
};

const FRAME: f32 = 1.0 / 60.0;

fn page() -> (PortfolioContent, Page) {
    let content = PortfolioContent::builtin().unwrap();
    let page = Page::new(&content, 1280.0, 800.0);
    (content, page)
}

/// Steps the page frame by frame from its current time to `until`
fn run_until(page: &mut Page, until: f32) {
    let mut time = page.time();
    while time < until {
        time = (time + FRAME).min(until);
        page.update(time);
    }
}

#[test]
fn intro_background_goes_from_dark_to_light() {
    let (_, mut page) = page();
    page.update(0.0);
    assert_eq!(page.hero_background(), hex_to_srgb(HERO_DARK));
    assert_eq!(page.intro().letter(0, 0.0).opacity, 0.0);

    run_until(&mut page, 6.0);
    assert_eq!(page.hero_background(), hex_to_srgb(HERO_LIGHT));
    assert!(page.intro().is_finished(6.0));
    assert_eq!(page.intro().letter(8, 6.0).opacity, 1.0);
}

#[test]
fn navigation_glides_to_section_and_reveals_it() {
    let (content, mut page) = page();
    page.update(0.0);
    assert_eq!(page.reveal(Element::AboutText).opacity, 0.0);
    assert_eq!(page.navbar().active(), SectionId::Hero);

    page.navigate(SectionId::About);
    run_until(&mut page, 0.7);
    let halfway = page.scroll_offset();
    assert!(halfway > 0.0 && halfway < 800.0);

    run_until(&mut page, 5.0);
    assert_eq!(page.scroll_offset(), page.layout().top(SectionId::About));
    assert_eq!(page.navbar().active(), SectionId::About);
    assert!(page.navbar().is_scrolled());

    assert_eq!(page.reveal(Element::AboutText).opacity, 1.0);
    let counter = page.reveal(Element::CounterValue(1)).value;
    assert_eq!(counter, content.about.counters[1].value as f32);
}

#[test]
fn wheel_scrolling_is_clamped_to_the_page() {
    let (_, mut page) = page();
    page.update(0.0);

    page.on_wheel(-500.0);
    run_until(&mut page, 2.0);
    assert_eq!(page.scroll_offset(), 0.0);
    assert_eq!(page.scroll_progress(), 0.0);

    page.on_wheel(1.0e7);
    run_until(&mut page, 4.0);
    assert_eq!(page.scroll_offset(), page.layout().scroll_limit());
    assert_eq!(page.scroll_progress(), 1.0);
    assert_eq!(page.navbar().active(), SectionId::Contact);
}

#[test]
fn modal_blocks_scrolling_until_escape_closes_it() {
    let (content, mut page) = page();
    page.update(0.0);

    page.open_project(content.projects.len());
    assert!(!page.modal().is_shown());

    page.open_project(2);
    run_until(&mut page, 1.0);
    assert_eq!(page.modal().state(), ModalState::Open { project: 2 });

    page.on_wheel(400.0);
    page.modal_click(ModalClick::Panel);
    run_until(&mut page, 2.0);
    assert_eq!(page.scroll_offset(), 0.0);
    assert!(page.modal().is_shown());

    assert!(page.escape());
    run_until(&mut page, 3.0);
    assert_eq!(page.modal().state(), ModalState::Closed);
    assert!(!page.escape());

    page.on_wheel(400.0);
    run_until(&mut page, 5.0);
    assert_eq!(page.scroll_offset(), 400.0);
}

#[test]
fn overlay_click_closes_modal() {
    let (_, mut page) = page();
    page.update(0.0);
    page.open_project(0);
    run_until(&mut page, 1.0);

    page.modal_click(ModalClick::Overlay);
    assert!(matches!(page.modal().state(), ModalState::Closing { project: 0, .. }));
    run_until(&mut page, 2.0);
    assert!(page.modal().frame(page.time()).is_none());
}

#[test]
fn contact_form_validates_then_sends() {
    let (_, mut page) = page();
    page.update(0.0);

    assert!(!page.submit_contact());
    assert_eq!(page.contact().errors().len(), 3);

    let form = page.contact_mut();
    form.name = "Ada".into();
    form.email = "ada at example".into();
    form.message = "Hello".into();
    assert!(!page.submit_contact());
    assert_eq!(page.contact().errors().len(), 1);

    page.contact_mut().email = "ada@example.com".into();
    assert!(page.submit_contact());
    assert!(matches!(page.contact().state(), FormState::Pressing { .. }));
    assert!(!page.submit_contact());

    run_until(&mut page, 1.0);
    assert!(page.contact().is_sent());
    run_until(&mut page, 2.0);
    let pose = page.contact().pose(page.time());
    assert_eq!((pose.opacity, pose.scale), (1.0, 1.0));
}

#[test]
fn mobile_menu_closes_on_navigation_and_on_widening() {
    let (_, mut page) = page();
    page.resize(600.0, 800.0);
    assert!(page.navbar().is_mobile());

    page.toggle_menu();
    assert!(page.navbar().is_menu_open());
    page.navigate(SectionId::Skills);
    assert!(!page.navbar().is_menu_open());

    page.toggle_menu();
    page.resize(1280.0, 800.0);
    assert!(!page.navbar().is_menu_open());

    page.toggle_menu();
    assert!(!page.navbar().is_menu_open());
}

#[test]
fn cursor_follower_trails_the_pointer() {
    let (_, mut page) = page();
    page.on_pointer_move(300.0, 200.0);
    page.update(FRAME);
    let cursor = page.cursor();
    assert_eq!((cursor.dot.x, cursor.dot.y), (300.0, 200.0));
    assert!(cursor.follower.x > 0.0 && cursor.follower.x < 300.0);

    run_until(&mut page, 5.0);
    assert!((page.cursor().follower.x - 300.0).abs() < 0.01);

    let resting = page.cursor().follower_radius();
    page.set_hovered(true);
    assert!(page.cursor().follower_radius() > resting);
}

#[test]
fn skill_card_tilts_toward_the_pointer_and_flattens() {
    let (_, mut page) = page();
    page.tilt_card(0, Some(([400.0, 0.0], [0.0, 0.0], [400.0, 200.0])));
    let tilt = page.tilt(0);
    assert!(tilt.rotate_y > 0.0 && tilt.lift > 0.0);

    page.tilt_card(0, None);
    assert_eq!(page.tilt(0), Default::default());
    assert_eq!(page.tilt(99), Default::default());
}

#[test]
fn experience_line_follows_scroll_with_lag() {
    let (_, mut page) = page();
    page.update(0.0);
    assert_eq!(page.timeline_line_scale(), 0.0);

    page.navigate(SectionId::Education);
    run_until(&mut page, 1.6);
    let lagging = page.timeline_line_scale();
    run_until(&mut page, 8.0);
    let settled = page.timeline_line_scale();
    assert!(settled > lagging);
    assert!((settled - 1.0).abs() < 1e-3);
}
