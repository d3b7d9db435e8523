//! Page behavior engine
//!
//! [`PageEngine`] owns every behavior on the page and is the only thing an
//! adapter talks to. Events flow in through the `handle_*` methods; DOM
//! mutations flow out as [`DomOp`] values drained with
//! [`PageEngine::drain_ops`]. The single clock entry point is
//! [`PageEngine::handle_frame`], called once per animation frame with the
//! current time in milliseconds.
//!
//! ## Event flow
//!
//! ```text
//!   scroll ──► handle_scroll ──► scrollspy / header / parallax (sync)
//!                           └──► arms the card reveal check
//!   frame  ──► handle_frame ───► section observer, due reveals, timers
//!   click  ──► handle_nav_click / handle_menu_toggle / handle_resume_click
//!   keydown ─► handle_key ─────► konami buffer
//!   submit ──► handle_submit ──► simulated submission
//! ```

use crate::effects::{self, Parallax};
use crate::error::{PageError, PageResult};
use crate::form::{ContactForm, FORM_SUCCESS_MESSAGE};
use crate::geometry::Viewport;
use crate::header::HeaderEffect;
use crate::konami::{KonamiEgg, KONAMI_MESSAGE};
use crate::layout::PageLayout;
use crate::menu::MobileMenu;
use crate::notify::{NoticeId, NotificationCenter, Severity};
use crate::ops::DomOp;
use crate::options::PageOptions;
use crate::overlay::LoadingOverlay;
use crate::reveal::{CardReveal, SectionObserver};
use crate::scrollspy::ScrollSpy;
use crate::skills::SkillBars;
use crate::snapshot::EngineSnapshot;
use crate::typewriter::Typewriter;

/// Notification shown when the resume link is clicked
pub const RESUME_MESSAGE: &str = "Resume download will be available soon!";

/// Outcome of an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// The event changed engine state or emitted ops
    Handled,
    /// The event did not apply (unknown target, missing element)
    Ignored,
}

impl EventResult {
    /// Whether the event was handled
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Owns all page behaviors and the op buffer connecting them to a document
pub struct PageEngine {
    options: PageOptions,
    layout: PageLayout,
    viewport: Viewport,
    ops: Vec<DomOp>,

    overlay: Option<LoadingOverlay>,
    menu: MobileMenu,
    spy: ScrollSpy,
    observer: SectionObserver,
    cards: CardReveal,
    skills: SkillBars,
    notices: NotificationCenter,
    form: ContactForm,
    header: HeaderEffect,
    parallax: Parallax,
    typewriter: Typewriter,
    konami: KonamiEgg,

    reveal_armed: bool,
    kick_due: Option<f64>,
    initialized: bool,
}

impl Default for PageEngine {
    fn default() -> Self {
        Self::new(PageOptions::default())
    }
}

impl PageEngine {
    /// Create an engine with the given timing options. Behaviors stay
    /// inert until [`Self::init`] installs a layout.
    pub fn new(options: PageOptions) -> Self {
        Self {
            options,
            layout: PageLayout::default(),
            viewport: Viewport::new(0.0, 0.0),
            ops: Vec::new(),
            overlay: None,
            menu: MobileMenu::new(),
            spy: ScrollSpy::new(),
            observer: SectionObserver::new(),
            cards: CardReveal::new(),
            skills: SkillBars::new(),
            notices: NotificationCenter::new(),
            form: ContactForm::new(),
            header: HeaderEffect::new(0.0),
            parallax: Parallax::new(),
            typewriter: Typewriter::new(),
            konami: KonamiEgg::new(),
            reveal_armed: false,
            kick_due: None,
            initialized: false,
        }
    }

    /// Install the measured layout and play the page-load sequence:
    /// loading overlay, section and card priming, the initial visibility
    /// checks, the typewriter schedule, and the post-load kick.
    pub fn init(&mut self, layout: PageLayout, viewport: Viewport, now: f64) -> PageResult<()> {
        if self.initialized {
            return Err(PageError::InvalidOperation {
                op: "init",
                reason: "engine already initialized",
            });
        }
        layout.validate()?;

        self.layout = layout;
        self.viewport = viewport;
        self.header = HeaderEffect::new(viewport.scroll_y);

        self.overlay = Some(LoadingOverlay::new(now, &mut self.ops));
        self.observer.prime(&self.layout, &mut self.ops);
        self.cards.prime(self.layout.cards.len(), &mut self.ops);

        // Sections and cards already in view reveal without waiting for a
        // scroll event
        self.observer.check(
            &self.viewport,
            &self.layout,
            now,
            self.options.skills_delay_ms,
            &mut self.ops,
        );
        self.cards.schedule_visible(
            &self.viewport,
            &self.layout.cards,
            now,
            self.options.card_stagger_ms,
        );
        self.cards.tick(now, &mut self.ops);

        if let Some(text) = self.layout.hero_subtitle.clone() {
            self.typewriter.start(
                &text,
                self.options.typewriter_interval_ms,
                now + self.options.typewriter_start_delay_ms,
            )?;
        }

        self.kick_due = Some(now + self.options.initial_kick_ms);
        self.initialized = true;

        tracing::info!(
            sections = self.layout.sections.len(),
            cards = self.layout.cards.len(),
            skill_bars = self.layout.skill_bars.len(),
            "page engine initialized"
        );
        Ok(())
    }

    /// Replace the layout after the page re-measures (resize). Reveal and
    /// fill flags carry over; geometry is validated like at init.
    pub fn refresh_layout(&mut self, layout: PageLayout, viewport: Viewport) -> PageResult<()> {
        layout.validate()?;
        self.layout = layout;
        self.viewport = viewport;
        Ok(())
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Scroll event: runs the synchronous scroll behaviors and arms the
    /// deferred reveal check for the next frame
    pub fn handle_scroll(&mut self, scroll_y: f32) {
        if !self.initialized {
            return;
        }
        self.viewport = self.viewport.at(scroll_y);

        self.spy.update(scroll_y, &self.layout, &mut self.ops);
        self.header.update(scroll_y, &mut self.ops);
        if self.layout.has_hero_background {
            self.parallax.update(scroll_y, &mut self.ops);
        }

        self.reveal_armed = true;
    }

    /// Animation frame: performs the armed reveal check once and advances
    /// every timed behavior
    pub fn handle_frame(&mut self, now: f64) {
        if !self.initialized {
            return;
        }

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.tick(now, &self.options, &mut self.ops);
        }

        self.observer.check(
            &self.viewport,
            &self.layout,
            now,
            self.options.skills_delay_ms,
            &mut self.ops,
        );

        if self.reveal_armed {
            self.reveal_armed = false;
            self.cards.schedule_visible(
                &self.viewport,
                &self.layout.cards,
                now,
                self.options.card_stagger_ms,
            );
        }

        if self.observer.take_due_skills(now) {
            self.skills
                .animate_visible(&self.viewport, &self.layout.skill_bars, &mut self.ops);
        }

        if self.kick_due.is_some_and(|due| now >= due) {
            self.kick_due = None;
            self.skills
                .animate_visible(&self.viewport, &self.layout.skill_bars, &mut self.ops);
            self.cards.schedule_visible(
                &self.viewport,
                &self.layout.cards,
                now,
                self.options.card_stagger_ms,
            );
        }

        self.cards.tick(now, &mut self.ops);
        self.typewriter.tick(now, &mut self.ops);

        if self.form.complete_due(now, &self.options) {
            self.notices.show(
                FORM_SUCCESS_MESSAGE,
                Severity::Success,
                now,
                &self.options,
                &mut self.ops,
            );
            self.ops.push(DomOp::FormReset);
            self.ops.push(DomOp::SubmitPending { pending: false });
        }

        self.notices.tick(now, &self.options, &mut self.ops);
        self.konami.tick(now, &mut self.ops);
    }

    /// Navigation link click: smooth-scroll to the target section minus
    /// the header height, closing the mobile menu on the way
    pub fn handle_nav_click(&mut self, link: usize) -> EventResult {
        if !self.initialized {
            return EventResult::Ignored;
        }
        let Some(nav) = self.layout.nav_links.get(link) else {
            return EventResult::Ignored;
        };
        let Some(section) = self.layout.section_index(&nav.target) else {
            tracing::debug!(target = %nav.target, "nav click on unknown section");
            return EventResult::Ignored;
        };

        let top = self.layout.sections[section].span.top - self.layout.header_height;
        tracing::debug!(link, target = %nav.target, top, "nav click");
        self.ops.push(DomOp::ScrollTo { top });
        self.menu.close(&mut self.ops);
        EventResult::Handled
    }

    /// Hamburger button click
    pub fn handle_menu_toggle(&mut self) {
        if !self.initialized {
            return;
        }
        self.menu.toggle(&mut self.ops);
    }

    /// Global keydown, feeding the easter-egg buffer
    pub fn handle_key(&mut self, code: u32, now: f64) {
        if !self.initialized {
            return;
        }
        if self.konami.handle_key(code, now, &self.options, &mut self.ops) {
            self.notices.show(
                KONAMI_MESSAGE,
                Severity::Success,
                now,
                &self.options,
                &mut self.ops,
            );
        }
    }

    /// Contact form submit with the collected field values
    pub fn handle_submit(&mut self, fields: Vec<(String, String)>, now: f64) -> PageResult<()> {
        if !self.initialized {
            return Err(PageError::InvalidOperation {
                op: "submit",
                reason: "engine not initialized",
            });
        }
        self.form.submit(fields, now, &mut self.ops)
    }

    /// Pointer entering or leaving a project card
    pub fn handle_card_hover(&mut self, card: usize, lifted: bool) -> EventResult {
        if !self.initialized || card >= self.layout.cards.len() {
            return EventResult::Ignored;
        }
        effects::card_lift(card, lifted, &mut self.ops);
        EventResult::Handled
    }

    /// Resume link click
    pub fn handle_resume_click(&mut self, now: f64) {
        if !self.initialized {
            return;
        }
        self.notices.show(
            RESUME_MESSAGE,
            Severity::Info,
            now,
            &self.options,
            &mut self.ops,
        );
    }

    /// Social link click; the platform name comes from the link's title
    pub fn handle_social_click(&mut self, platform: &str) {
        let platform = if platform.is_empty() { "Unknown" } else { platform };
        tracing::info!(platform, "social link clicked");
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Show a notification directly
    pub fn notify(&mut self, message: &str, severity: Severity, now: f64) -> NoticeId {
        self.notices
            .show(message, severity, now, &self.options, &mut self.ops)
    }

    /// Dismiss a notification before its lifetime is up
    pub fn dismiss_notice(&mut self, id: NoticeId, now: f64) -> PageResult<()> {
        self.notices.dismiss(id, now, &self.options, &mut self.ops)
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Drain the pending document commands
    pub fn drain_ops(&mut self) -> Vec<DomOp> {
        std::mem::take(&mut self.ops)
    }

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Installed layout
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Timing options
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Serializable summary of the engine state
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            menu_open: self.menu.is_open(),
            active_nav: self.spy.active(),
            overlay_done: self.overlay.map(|o| o.is_done()).unwrap_or(false),
            revealed_sections: self.observer.revealed().to_vec(),
            revealed_cards: self.cards.revealed().to_vec(),
            animated_skills: self.skills.animated().to_vec(),
            active_notices: self.notices.active_count(),
            form_pending: self.form.is_pending(),
            typewriter_finished: self.typewriter.is_finished(),
            rainbow_active: self.konami.rainbow_active(),
            header_condensed: self.header.is_condensed(),
            header_hidden: self.header.is_hidden(),
        }
    }
}
