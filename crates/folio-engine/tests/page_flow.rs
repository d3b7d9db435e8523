//! End-to-End Page Behavior Tests
//!
//! Scripted browsing sessions against a measured demo layout, checking the
//! document commands the engine emits along a realistic timeline.

use folio_engine::{
    Card, DomOp, NavLink, PageEngine, PageLayout, PageOptions, Section, Severity, SkillBar,
    Viewport, FORM_SUCCESS_MESSAGE, KONAMI_MESSAGE,
};

/// Layout of a five-section portfolio page, measured top to bottom:
/// hero, about (two highlight cards), skills (six bars), projects
/// (three cards), contact (one card).
fn demo_layout() -> PageLayout {
    PageLayout {
        header_height: 80.0,
        nav_links: vec![
            NavLink::new("home"),
            NavLink::new("about"),
            NavLink::new("skills"),
            NavLink::new("projects"),
            NavLink::new("contact"),
        ],
        sections: vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 700.0),
            Section::new("skills", 1500.0, 900.0),
            Section::new("projects", 2400.0, 1000.0),
            Section::new("contact", 3400.0, 600.0),
        ],
        skill_bars: vec![
            SkillBar::new(1650.0, 12.0, 95.0),
            SkillBar::new(1720.0, 12.0, 90.0),
            SkillBar::new(1790.0, 12.0, 85.0),
            SkillBar::new(1860.0, 12.0, 80.0),
            SkillBar::new(1930.0, 12.0, 75.0),
            SkillBar::new(2000.0, 12.0, 70.0),
        ],
        cards: vec![
            Card::new(900.0, 150.0),
            Card::new(1100.0, 150.0),
            Card::new(2500.0, 300.0),
            Card::new(2850.0, 300.0),
            Card::new(3200.0, 300.0),
            Card::new(3450.0, 80.0),
        ],
        hero_subtitle: Some("Full-Stack Developer".to_string()),
        has_hero_background: true,
    }
}

fn booted() -> PageEngine {
    let mut engine = PageEngine::new(PageOptions::default());
    engine
        .init(demo_layout(), Viewport::new(0.0, 900.0), 0.0)
        .unwrap();
    engine
}

/// Advance animation frames in 16ms steps through `until`, collecting
/// every op drained along the way.
fn pump(engine: &mut PageEngine, from: f64, until: f64) -> Vec<DomOp> {
    let mut ops = Vec::new();
    let mut now = from;
    while now <= until {
        engine.handle_frame(now);
        ops.append(&mut engine.drain_ops());
        now += 16.0;
    }
    ops
}

/// Boot the engine and play out the load timers (overlay, kick,
/// typewriter), leaving a quiet page at t=2200.
fn settled() -> PageEngine {
    let mut engine = booted();
    pump(&mut engine, 0.0, 2200.0);
    engine
}

/// The page-load sequence: overlay in at once, out after its delay,
/// gone after the fade; hero section reveals immediately; the subtitle
/// types out character by character.
#[test]
fn test_page_load_sequence() {
    let mut engine = booted();
    let boot_ops = engine.drain_ops();

    // Overlay covers the page before anything else happens
    assert_eq!(boot_ops[0], DomOp::OverlayInsert);
    // Every section and card is parked in its pre-reveal state
    for section in 0..5 {
        assert!(boot_ops.contains(&DomOp::SectionPrime { section }));
    }
    for card in 0..6 {
        assert!(boot_ops.contains(&DomOp::CardPrime { card }));
    }
    // The hero is on screen from the start and reveals without scrolling
    assert!(boot_ops.contains(&DomOp::SectionAnimate { section: 0 }));
    assert!(!boot_ops.contains(&DomOp::SectionAnimate { section: 2 }));

    // Nothing dramatic before the overlay delay elapses
    let early = pump(&mut engine, 0.0, 1400.0);
    assert!(!early.contains(&DomOp::OverlayHide));

    // First typed character arrives after the typewriter start delay
    assert!(early.contains(&DomOp::TypeText {
        text: "F".to_string()
    }));

    // Fade out, then removal once the fade has played
    let fade = pump(&mut engine, 1408.0, 1900.0);
    assert!(fade.contains(&DomOp::OverlayHide));
    assert!(!fade.contains(&DomOp::OverlayRemove));

    let gone = pump(&mut engine, 1904.0, 2200.0);
    assert!(gone.contains(&DomOp::OverlayRemove));
    assert!(engine.snapshot().overlay_done);

    // Subtitle fully typed by now
    assert!(engine.snapshot().typewriter_finished);
}

/// Scrolling down the page moves the nav highlight from section to
/// section, and the header condenses and slides away on the way down.
#[test]
fn test_scroll_walk_highlights_nav() {
    let mut engine = settled();
    engine.drain_ops();

    // Top of the page, probe still inside the hero
    engine.handle_scroll(10.0);
    assert!(engine
        .drain_ops()
        .contains(&DomOp::NavActivate { link: Some(0) }));

    engine.handle_scroll(750.0);
    let ops = engine.drain_ops();
    assert!(ops.contains(&DomOp::NavActivate { link: Some(1) }));
    assert!(ops.contains(&DomOp::HeaderCondense { condensed: true }));
    assert!(ops.contains(&DomOp::HeaderSlide { hidden: true }));

    engine.handle_scroll(1450.0);
    assert!(engine
        .drain_ops()
        .contains(&DomOp::NavActivate { link: Some(2) }));

    engine.handle_scroll(2350.0);
    assert!(engine
        .drain_ops()
        .contains(&DomOp::NavActivate { link: Some(3) }));

    engine.handle_scroll(3350.0);
    assert!(engine
        .drain_ops()
        .contains(&DomOp::NavActivate { link: Some(4) }));

    // Deeper into the same section: highlight unchanged, no repeat op
    engine.handle_scroll(3500.0);
    assert!(!engine
        .drain_ops()
        .iter()
        .any(|op| matches!(op, DomOp::NavActivate { .. })));

    // Back to the top: hero highlight returns, header comes back
    engine.handle_scroll(0.0);
    let ops = engine.drain_ops();
    assert!(ops.contains(&DomOp::NavActivate { link: Some(0) }));
    assert!(ops.contains(&DomOp::HeaderCondense { condensed: false }));
    assert!(ops.contains(&DomOp::HeaderSlide { hidden: false }));
}

/// Scrolling to the skills section plays the section reveal at once and
/// fills the bars only after the dedicated delay.
#[test]
fn test_skills_reveal_choreography() {
    let mut engine = settled();
    engine.drain_ops();

    // Scroll the whole bar block into view at t=3000
    engine.handle_scroll(1600.0);
    engine.handle_frame(3000.0);
    let ops = engine.drain_ops();
    assert!(ops.contains(&DomOp::SectionAnimate { section: 2 }));
    assert!(!ops.iter().any(|op| matches!(op, DomOp::SkillFill { .. })));

    // Still waiting at t+299
    engine.handle_frame(3299.0);
    assert!(!engine
        .drain_ops()
        .iter()
        .any(|op| matches!(op, DomOp::SkillFill { .. })));

    // All six bars fill with their measured percentages at t+300
    engine.handle_frame(3300.0);
    let ops = engine.drain_ops();
    for (bar, pct) in [95.0, 90.0, 85.0, 80.0, 75.0, 70.0].into_iter().enumerate() {
        assert!(ops.contains(&DomOp::SkillFill { bar, pct }));
    }
    let snapshot = engine.snapshot();
    assert!(snapshot.animated_skills.iter().all(|&b| b));
}

/// Project cards ripple in, staggered by their DOM position, once the
/// projects section scrolls into view.
#[test]
fn test_project_cards_stagger_in() {
    let mut engine = settled();
    engine.drain_ops();

    // Projects in view; cards 2 and 3 intersect the viewport
    engine.handle_scroll(2450.0);
    engine.handle_frame(3000.0);
    engine.drain_ops();

    // Card 2 waits out 200ms of stagger, card 3 another 100ms
    let ops = pump(&mut engine, 3016.0, 3216.0);
    let show_2 = ops.iter().position(|op| *op == DomOp::CardShow { card: 2 });
    assert!(show_2.is_some());
    assert!(!ops.contains(&DomOp::CardShow { card: 3 }));

    let ops = pump(&mut engine, 3232.0, 3350.0);
    assert!(ops.contains(&DomOp::CardShow { card: 3 }));

    // The about cards were skipped past and stay unrevealed
    let snapshot = engine.snapshot();
    assert!(!snapshot.revealed_cards[0]);
    assert!(!snapshot.revealed_cards[1]);
    assert!(snapshot.revealed_cards[2]);
}

/// A contact form submission: pending state, simulated delay, success
/// notification with its full slide-in / auto-dismiss / removal arc.
#[test]
fn test_contact_form_round_trip() {
    let mut engine = settled();
    engine.drain_ops();

    engine
        .handle_submit(
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("email".to_string(), "ada@example.com".to_string()),
                ("message".to_string(), "Hello!".to_string()),
            ],
            5000.0,
        )
        .unwrap();
    assert_eq!(
        engine.drain_ops(),
        vec![DomOp::SubmitPending { pending: true }]
    );

    // A second submit while pending is rejected
    assert!(engine.handle_submit(Vec::new(), 5500.0).is_err());

    // Nothing resolves before the simulated delay
    assert!(pump(&mut engine, 5008.0, 6990.0).is_empty());

    // Completion: success notice, form cleared, button restored, in order
    engine.handle_frame(7000.0);
    let ops = engine.drain_ops();
    assert_eq!(
        ops[0],
        DomOp::NoticeSpawn {
            id: 1,
            message: FORM_SUCCESS_MESSAGE.to_string(),
            severity: Severity::Success,
        }
    );
    assert_eq!(ops[1], DomOp::FormReset);
    assert_eq!(ops[2], DomOp::SubmitPending { pending: false });
    assert!(!engine.snapshot().form_pending);

    // Slide in shortly after spawn
    assert!(pump(&mut engine, 7008.0, 7200.0).contains(&DomOp::NoticeSlideIn { id: 1 }));

    // Auto-dismiss five seconds after creation, removal after the slide
    let ops = pump(&mut engine, 7216.0, 12_400.0);
    assert!(ops.contains(&DomOp::NoticeSlideOut { id: 1 }));
    assert!(ops.contains(&DomOp::NoticeRemove { id: 1 }));
    assert_eq!(engine.snapshot().active_notices, 0);
}

/// The Konami code works with leading noise, turns the rainbow on for
/// its window, and celebrates with a success notification.
#[test]
fn test_konami_easter_egg_session() {
    let mut engine = settled();
    engine.drain_ops();

    // A couple of stray keys, then the full sequence
    let keys = [72, 73, 38, 38, 40, 40, 37, 39, 37, 39, 66, 65];
    let mut now = 10_000.0;
    for &code in &keys {
        engine.handle_key(code, now);
        now += 100.0;
    }

    let ops = engine.drain_ops();
    assert!(ops.contains(&DomOp::RainbowSet { on: true }));
    assert!(ops.iter().any(|op| matches!(
        op,
        DomOp::NoticeSpawn { message, severity: Severity::Success, .. }
            if message == KONAMI_MESSAGE
    )));
    assert!(engine.snapshot().rainbow_active);

    // Last key landed at 11100; the rainbow runs two seconds from there
    engine.handle_frame(13_099.0);
    assert!(!engine.drain_ops().contains(&DomOp::RainbowSet { on: false }));

    engine.handle_frame(13_100.0);
    assert!(engine.drain_ops().contains(&DomOp::RainbowSet { on: false }));
    assert!(!engine.snapshot().rainbow_active);
}

/// Opening the mobile menu and tapping a link: the engine orders a
/// smooth scroll to the section minus the header, closes the menu, and
/// the follow-up scroll event moves the highlight.
#[test]
fn test_mobile_navigation_session() {
    let mut engine = settled();
    engine.drain_ops();

    engine.handle_menu_toggle();
    assert_eq!(engine.drain_ops(), vec![DomOp::MenuSet { open: true }]);

    // Tap "contact"
    assert!(engine.handle_nav_click(4).is_handled());
    let ops = engine.drain_ops();
    assert_eq!(ops[0], DomOp::ScrollTo { top: 3320.0 });
    assert_eq!(ops[1], DomOp::MenuSet { open: false });

    // The browser scrolls there and reports it back
    engine.handle_scroll(3320.0);
    assert!(engine
        .drain_ops()
        .contains(&DomOp::NavActivate { link: Some(4) }));

    // The contact card reveals after its stagger
    let ops = pump(&mut engine, 14_000.0, 14_600.0);
    assert!(ops.contains(&DomOp::CardShow { card: 5 }));
}

/// A resize re-measures the page; earlier reveals survive and the
/// behaviors continue against the new geometry.
#[test]
fn test_resize_mid_session() {
    let mut engine = settled();

    // Reveal the about section first
    engine.handle_scroll(800.0);
    pump(&mut engine, 3000.0, 3100.0);
    assert!(engine.snapshot().revealed_sections[1]);

    // Narrower window: everything shifts down 200px, viewport shrinks
    let mut layout = demo_layout();
    for section in &mut layout.sections {
        section.span.top += 200.0;
    }
    engine
        .refresh_layout(layout, Viewport::new(800.0, 700.0))
        .unwrap();

    let snapshot = engine.snapshot();
    assert!(snapshot.revealed_sections[0]);
    assert!(snapshot.revealed_sections[1]);

    // The scrollspy answers with the shifted spans
    engine.handle_scroll(1750.0);
    assert!(engine
        .drain_ops()
        .contains(&DomOp::NavActivate { link: Some(2) }));
}
