//! # Page Behaviour Tests
//!
//! Drives a complete landing page through host input and virtual time and
//! checks what the visitor would see: classes, attributes, styles, text and
//! the scroll offset.
//!
//! Run with: cargo test -p vitrine --test page_behaviour

use vitrine::{Document, Element, Key, NodeId, Page, PageConfig, PageError, Rect, Viewport};
use vitrine_core::{EventKind, ListenerTarget, SchedulerError};

// ============================================================================
// FIXTURE
// ============================================================================

struct Landing {
    page: Page,
    toggle: NodeId,
    nav: NodeId,
    nav_contact: NodeId,
    top_link: NodeId,
    hero: NodeId,
    next_btn: NodeId,
    prev_btn: NodeId,
    who_strip: NodeId,
    carousel: NodeId,
    track: NodeId,
    logo_track: NodeId,
    stats: Vec<NodeId>,
    tab_buttons: Vec<NodeId>,
    panes: Vec<NodeId>,
    thumb: NodeId,
    lightbox: NodeId,
    lightbox_img: NodeId,
}

fn section(id: &str, y: f64, height: f64) -> Element {
    Element::new("section")
        .with_id(id)
        .with_layout(Rect::new(0.0, y, 1200.0, height))
}

fn landing() -> Landing {
    landing_with(PageConfig::default())
}

#[allow(clippy::too_many_lines)]
fn landing_with(config: PageConfig) -> Landing {
    let mut doc = Document::new();
    let body = doc.body();

    // Header
    let header = doc.append(body, Element::new("header")).unwrap();
    let toggle = doc
        .append(header, Element::new("button").with_class("mobile-menu-toggle"))
        .unwrap();
    let nav = doc.append(header, Element::new("nav").with_class("nav-menu")).unwrap();
    doc.append(nav, Element::new("a").with_attr("href", "#about")).unwrap();
    let nav_contact = doc
        .append(nav, Element::new("a").with_attr("href", "#contact"))
        .unwrap();

    // Hero
    let hero = doc
        .append(
            body,
            Element::new("section")
                .with_class("hero-slider")
                .with_layout(Rect::new(0.0, 80.0, 1200.0, 600.0)),
        )
        .unwrap();
    for _ in 0..3 {
        doc.append(hero, Element::new("div").with_class("hero-slide")).unwrap();
    }
    doc.append(hero, Element::new("div").with_class("slider-dots")).unwrap();
    let prev_btn = doc
        .append(hero, Element::new("button").with_class("slider-btn prev"))
        .unwrap();
    let next_btn = doc
        .append(hero, Element::new("button").with_class("slider-btn next"))
        .unwrap();

    // About, with the photo marquee
    let about = doc.append(body, section("about", 700.0, 800.0)).unwrap();
    let who_strip = doc
        .append(about, Element::new("div").with_class("who-images-slider"))
        .unwrap();
    for name in ["team", "field", "school"] {
        doc.append(who_strip, Element::new("img").with_attr("src", &format!("{name}.jpg")))
            .unwrap();
    }

    // Testimonials: the fourth card repeats the first
    let carousel = doc
        .append(body, Element::new("div").with_class("testimonials-carousel"))
        .unwrap();
    let track = doc
        .append(carousel, Element::new("div").with_class("testimonials-track"))
        .unwrap();
    for _ in 0..4 {
        doc.append(
            track,
            Element::new("article")
                .with_class("testimonial-card")
                .with_layout(Rect::new(0.0, 1500.0, 300.0, 250.0)),
        )
        .unwrap();
    }

    // Partner logos
    let logo_track = doc.append(body, Element::new("div").with_class("logo-track")).unwrap();
    for partner in ["acme", "globex", "initech"] {
        doc.append(logo_track, Element::new("div").with_class("logo").with_text(partner))
            .unwrap();
    }

    // Stats
    let impact = doc.append(body, section("impact-stats", 2400.0, 400.0)).unwrap();
    let stats = ["72%", "4.5M", "150+", "N/A"]
        .iter()
        .map(|text| {
            doc.append(impact, Element::new("span").with_class("stat-number").with_text(text))
                .unwrap()
        })
        .collect();

    // Gallery
    let gallery = doc.append(body, section("gallery", 2800.0, 400.0)).unwrap();
    let tab_buttons = [("events", true), ("projects", false)]
        .iter()
        .map(|&(tab, active)| {
            let class = if active { "tab-btn active" } else { "tab-btn" };
            doc.append(gallery, Element::new("button").with_class(class).with_attr("data-tab", tab))
                .unwrap()
        })
        .collect();
    let events = doc
        .append(gallery, Element::new("div").with_class("tab-pane active").with_id("events"))
        .unwrap();
    let projects = doc
        .append(gallery, Element::new("div").with_class("tab-pane").with_id("projects"))
        .unwrap();
    let thumb = doc
        .append(events, Element::new("img").with_class("thumb").with_attr("src", "event-1.jpg"))
        .unwrap();

    // Contact, footer, lightbox
    doc.append(body, section("contact", 3200.0, 600.0)).unwrap();
    let top_link = doc.append(body, Element::new("a").with_attr("href", "#")).unwrap();
    let lightbox = doc
        .append(body, Element::new("div").with_id("lightbox").with_class("lightbox"))
        .unwrap();
    let lightbox_img = doc
        .append(lightbox, Element::new("img").with_id("lightbox-img"))
        .unwrap();

    let viewport = Viewport::new(1200.0, 800.0).with_document_height(4000.0);
    let page = Page::ready(doc, viewport, config).unwrap();

    Landing {
        page,
        toggle,
        nav,
        nav_contact,
        top_link,
        hero,
        next_btn,
        prev_btn,
        who_strip,
        carousel,
        track,
        logo_track,
        stats,
        tab_buttons,
        panes: vec![events, projects],
        thumb,
        lightbox,
        lightbox_img,
    }
}

impl Landing {
    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.page.document().get(node).unwrap().has_class(class)
    }

    fn body_locked(&self) -> bool {
        self.has_class(self.page.document().body(), "no-scroll")
    }

    fn text(&self, node: NodeId) -> &str {
        self.page.document().get(node).unwrap().text()
    }

    fn active_slides(&self) -> Vec<usize> {
        let hero = self.page.hero().unwrap();
        (0..hero.len())
            .filter(|&i| self.has_class(hero.slides()[i], "active"))
            .collect()
    }

    fn active_dots(&self) -> Vec<usize> {
        let hero = self.page.hero().unwrap();
        (0..hero.len())
            .filter(|&i| self.has_class(hero.dots()[i], "active"))
            .collect()
    }

    fn assert_single_active_pair(&self) {
        let slides = self.active_slides();
        assert_eq!(slides.len(), 1, "active slides: {slides:?}");
        assert_eq!(slides, self.active_dots());
    }

    fn transform(&self) -> Option<&str> {
        self.page.document().get(self.track).unwrap().style("transform")
    }
}

// ============================================================================
// MENU & SMOOTH SCROLL
// ============================================================================

#[test]
fn menu_toggle_flips_all_three_elements() {
    let mut l = landing();

    l.page.click(l.toggle).unwrap();
    assert!(l.has_class(l.toggle, "active"));
    assert!(l.has_class(l.nav, "active"));
    assert!(l.body_locked());

    l.page.click(l.toggle).unwrap();
    assert!(!l.has_class(l.toggle, "active"));
    assert!(!l.has_class(l.nav, "active"));
    assert!(!l.body_locked());
}

#[test]
fn nav_anchor_closes_menu_and_scrolls_below_header() {
    let mut l = landing();
    l.page.click(l.toggle).unwrap();

    let event = l.page.click(l.nav_contact).unwrap();
    assert!(event.default_prevented());
    assert!(!l.page.menu().unwrap().is_open());
    assert!(!l.body_locked());
    assert!(l.page.smooth_scroll().is_animating());

    l.page.advance(1000).unwrap();
    assert!(!l.page.smooth_scroll().is_animating());
    assert!((l.page.viewport().scroll_y() - 3120.0).abs() < f64::EPSILON);

    // Passing the stats section on the way down starts the counters.
    assert!(l.page.counter().unwrap().has_animated());
}

#[test]
fn bare_hash_anchor_is_swallowed() {
    let mut l = landing();
    let before = l.page.pending_timers().len();

    let event = l.page.click(l.top_link).unwrap();
    assert!(event.default_prevented());
    assert!(!l.page.smooth_scroll().is_animating());
    assert_eq!(l.page.pending_timers().len(), before);
    assert!(l.page.viewport().scroll_y().abs() < f64::EPSILON);
}

// ============================================================================
// HERO SLIDER
// ============================================================================

#[test]
fn hero_next_n_times_returns_to_start() {
    let mut l = landing();
    l.assert_single_active_pair();
    assert_eq!(l.active_slides(), vec![0]);

    for expected in [1, 2, 0] {
        l.page.click(l.next_btn).unwrap();
        l.assert_single_active_pair();
        assert_eq!(l.active_slides(), vec![expected]);
    }

    l.page.click(l.prev_btn).unwrap();
    assert_eq!(l.active_slides(), vec![2]);
}

#[test]
fn hero_autoplay_keeps_single_active_pair() {
    let mut l = landing();

    for tick in 1..=7 {
        l.page.advance(5000).unwrap();
        l.assert_single_active_pair();
        assert_eq!(l.active_slides(), vec![tick % 3]);
    }
}

#[test]
fn hero_dot_click_jumps_and_restarts_after_grace() {
    let mut l = landing();
    let third_dot = l.page.hero().unwrap().dots()[2];

    l.page.click(third_dot).unwrap();
    assert_eq!(l.active_slides(), vec![2]);
    assert!(!l.page.hero().unwrap().is_playing());

    l.page.advance(1000).unwrap();
    assert!(l.page.hero().unwrap().is_playing());

    l.page.advance(4999).unwrap();
    assert_eq!(l.active_slides(), vec![2]);
    l.page.advance(1).unwrap();
    assert_eq!(l.active_slides(), vec![0]);
}

#[test]
fn hero_hover_pauses_autoplay() {
    let mut l = landing();

    l.page.pointer_enter(l.hero).unwrap();
    l.page.advance(20_000).unwrap();
    assert_eq!(l.active_slides(), vec![0]);

    l.page.pointer_leave(l.hero).unwrap();
    l.page.advance(5000).unwrap();
    assert_eq!(l.active_slides(), vec![1]);
}

#[test]
fn hero_hover_cancels_pending_grace_restart() {
    let mut l = landing();

    l.page.click(l.next_btn).unwrap();
    l.page.pointer_enter(l.hero).unwrap();
    l.page.advance(10_000).unwrap();

    assert!(!l.page.hero().unwrap().is_playing());
    assert_eq!(l.active_slides(), vec![1]);
}

// ============================================================================
// TESTIMONIALS & MARQUEES
// ============================================================================

#[test]
fn testimonials_cycle_skips_duplicate_card() {
    let mut l = landing();
    assert_eq!(l.transform(), Some("translateX(-0px)"));

    let mut offsets = Vec::new();
    for _ in 0..6 {
        l.page.advance(3000).unwrap();
        let offset = l.page.testimonials().unwrap().offset();
        assert!(offset < 3);
        offsets.push(offset);
    }
    assert_eq!(offsets, vec![1, 2, 0, 1, 2, 0]);

    l.page.advance(6000).unwrap();
    assert_eq!(l.transform(), Some("translateX(-660px)"));
}

#[test]
fn testimonials_pause_on_hover() {
    let mut l = landing();

    l.page.pointer_enter(l.carousel).unwrap();
    l.page.advance(9000).unwrap();
    assert_eq!(l.page.testimonials().unwrap().offset(), 0);

    l.page.pointer_leave(l.carousel).unwrap();
    l.page.advance(3000).unwrap();
    assert_eq!(l.page.testimonials().unwrap().offset(), 1);
}

#[test]
fn marquee_strips_are_doubled_with_hidden_copies() {
    let l = landing();
    let doc = l.page.document();

    for strip in [l.who_strip, l.logo_track] {
        let items = doc.children(strip);
        assert_eq!(items.len(), 6);
        for i in 0..3 {
            let (orig, copy) = (doc.get(items[i]).unwrap(), doc.get(items[i + 3]).unwrap());
            assert_eq!(orig.attr("aria-hidden"), None);
            assert_eq!(copy.attr("aria-hidden"), Some("true"));
            assert_eq!(orig.attr("src"), copy.attr("src"));
            assert_eq!(orig.text(), copy.text());
        }
    }
}

// ============================================================================
// STAT COUNTERS
// ============================================================================

#[test]
fn counters_wait_for_half_visibility() {
    let mut l = landing();
    assert_eq!(l.text(l.stats[0]), "72%");

    // 100 of 400 px showing
    l.page.scroll_to(1700.0);
    l.page.advance(3000).unwrap();
    assert!(!l.page.counter().unwrap().has_animated());
    assert_eq!(l.text(l.stats[0]), "72%");

    l.page.scroll_to(2000.0);
    assert!(l.page.counter().unwrap().has_animated());
    assert_eq!(l.text(l.stats[0]), "0%");
    assert_eq!(l.text(l.stats[1]), "0.0M");
    assert_eq!(l.text(l.stats[2]), "1+");
}

#[test]
fn counters_end_on_source_text() {
    let mut l = landing();
    l.page.scroll_to(2000.0);

    l.page.advance(1000).unwrap();
    let mid: f64 = l.text(l.stats[0]).trim_end_matches('%').parse().unwrap();
    assert!((30.0..=40.0).contains(&mid), "{mid}");
    assert!(l.text(l.stats[1]).ends_with('M'));

    l.page.advance(2000).unwrap();
    assert_eq!(l.text(l.stats[0]), "72%");
    assert_eq!(l.text(l.stats[1]), "4.5M");
    assert_eq!(l.text(l.stats[2]), "150+");
    assert_eq!(l.text(l.stats[3]), "N/A");
    assert!(!l.page.counter().unwrap().is_running());
}

#[test]
fn counters_run_only_once() {
    let mut l = landing();
    l.page.scroll_to(2000.0);
    l.page.advance(3000).unwrap();

    l.page.scroll_to(0.0);
    l.page.scroll_to(2000.0);
    assert_eq!(l.text(l.stats[0]), "72%");
    assert!(!l.page.counter().unwrap().is_running());
    assert!(!l.page.counter().unwrap().is_observing());
}

#[test]
fn counters_start_when_layout_moves_section_into_view() {
    let mut l = landing();
    let impact = l.page.document().get_element_by_id("impact-stats").unwrap();

    l.page.set_layout(impact, Rect::new(0.0, 200.0, 1200.0, 400.0)).unwrap();
    assert!(l.page.counter().unwrap().has_animated());
}

// ============================================================================
// IMAGES, TABS, LIGHTBOX
// ============================================================================

#[test]
fn loaded_images_get_marker() {
    let mut l = landing();
    let originals = l.page.document().children(l.who_strip).to_vec();

    l.page.image_loaded(originals[0]).unwrap();
    l.page.image_loaded(originals[4]).unwrap();

    assert!(l.has_class(originals[0], "loaded"));
    assert!(l.has_class(originals[4], "loaded"));
    assert!(!l.has_class(originals[1], "loaded"));
    assert!(!l.has_class(l.thumb, "loaded"));
}

#[test]
fn second_tab_replaces_first_pair() {
    let mut l = landing();

    l.page.click(l.tab_buttons[1]).unwrap();
    assert!(!l.has_class(l.tab_buttons[0], "active"));
    assert!(!l.has_class(l.panes[0], "active"));
    assert!(l.has_class(l.tab_buttons[1], "active"));
    assert!(l.has_class(l.panes[1], "active"));
    assert_eq!(l.page.tabs().unwrap().active(), Some(l.tab_buttons[1]));
}

#[test]
fn lightbox_open_and_escape() {
    let mut l = landing();

    assert!(l.page.open_lightbox("x.jpg"));
    let doc = l.page.document();
    assert_eq!(doc.get(l.lightbox_img).unwrap().attr("src"), Some("x.jpg"));
    assert_eq!(doc.get(l.lightbox).unwrap().style("display"), Some("block"));
    assert!(l.body_locked());

    l.page.key_down(Key::Escape);
    assert_eq!(l.page.document().get(l.lightbox).unwrap().style("display"), Some("none"));
    assert!(!l.body_locked());
}

#[test]
fn lightbox_backdrop_click_closes_image_click_does_not() {
    let mut l = landing();
    l.page.open_lightbox("x.jpg");

    l.page.click(l.lightbox_img).unwrap();
    assert!(l.page.lightbox().unwrap().is_visible(l.page.document()));

    l.page.click(l.lightbox).unwrap();
    assert!(!l.page.lightbox().unwrap().is_visible(l.page.document()));
    assert!(!l.body_locked());
}

#[test]
fn escape_with_hidden_lightbox_keeps_menu_lock() {
    let mut l = landing();
    l.page.click(l.toggle).unwrap();

    l.page.key_down(Key::Escape);
    assert!(l.body_locked());
    assert!(l.page.menu().unwrap().is_open());
}

// ============================================================================
// HOST CONTRACT
// ============================================================================

#[test]
fn removed_listener_stops_reacting() {
    let mut l = landing();
    let ids = l
        .page
        .listeners_mut()
        .find(ListenerTarget::Node(l.toggle), EventKind::Click);
    assert_eq!(ids.len(), 1);
    assert!(l.page.listeners_mut().remove(ids[0]));

    l.page.click(l.toggle).unwrap();
    assert!(!l.page.menu().unwrap().is_open());
}

#[test]
fn unknown_node_is_an_error() {
    let mut other = Document::new();
    let body = other.body();
    let mut last = body;
    for _ in 0..200 {
        last = other.append(body, Element::new("div")).unwrap();
    }

    let mut l = landing();
    assert!(matches!(l.page.click(last), Err(PageError::Dom(_))));
    assert!(l.page.set_layout(last, Rect::ZERO).is_err());
}

#[test]
fn runaway_advance_hits_step_limit() {
    let l = landing();
    let mut page = l.page.with_step_limit(3);

    let err = page.advance(20_000).unwrap_err();
    assert!(matches!(
        err,
        PageError::Scheduler(SchedulerError::StepLimitExceeded { limit: 3, .. })
    ));
}

#[test]
fn step_limit_leaves_unrun_tasks_queued() {
    let l = landing();
    let next_btn = l.next_btn;
    let mut page = l.page.with_step_limit(1);

    page.advance(2500).unwrap();
    page.click(next_btn).unwrap();
    assert!(!page.hero().unwrap().is_playing());

    // Testimonials tick at 3000 and the hero restart at 3500 both fall due.
    assert!(page.advance(1000).is_err());
    assert_eq!(page.now_ms(), 3000);
    assert!(page.pending_timers().iter().any(|t| t.due_at == 3500));

    page.advance(500).unwrap();
    assert!(page.hero().unwrap().is_playing());
}

#[test]
fn config_overrides_reach_features() {
    let config = PageConfig::from_toml_str(
        r#"
        [testimonials]
        interval_ms = 4000
        card_margin = 12.5
        "#,
    )
    .unwrap();
    let mut l = landing_with(config);

    l.page.advance(3000).unwrap();
    assert_eq!(l.page.testimonials().unwrap().offset(), 0);
    l.page.advance(1000).unwrap();
    assert_eq!(l.transform(), Some("translateX(-312.5px)"));
}

#[test]
fn invalid_config_is_rejected_at_ready() {
    let mut config = PageConfig::default();
    config.hero.interval_ms = 0;

    let result = Page::ready(Document::new(), Viewport::new(1200.0, 800.0), config);
    assert!(matches!(result, Err(PageError::Config(_))));
}

#[test]
fn long_session_stays_consistent() {
    let mut l = landing();

    for minute in 0..60 {
        if minute % 7 == 0 {
            l.page.click(l.next_btn).unwrap();
        }
        l.page.advance(60_000).unwrap();
        l.assert_single_active_pair();
        assert!(l.page.testimonials().unwrap().offset() < 3);
    }
    assert_eq!(l.page.now_ms(), 3_600_000);
}
