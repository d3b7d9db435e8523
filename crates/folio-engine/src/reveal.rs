//! Scroll-triggered reveals
//!
//! Two mechanisms, matching the page's two reveal styles:
//!
//! - [`SectionObserver`]: sections reveal on the rising edge of "at least
//!   10% visible" against a viewport whose bottom edge is pulled up by
//!   50px. One-shot per section; the skills section additionally schedules
//!   a delayed skill-bar pass on every rising edge.
//! - [`CardReveal`]: cards reveal once their extent intersects the
//!   viewport, staggered by their DOM index. Monotonic: a revealed card
//!   never un-reveals.

use crate::geometry::Viewport;
use crate::layout::{Card, PageLayout};
use crate::ops::DomOp;

/// Minimum visible fraction of a section before it reveals
pub const OBSERVER_THRESHOLD: f32 = 0.1;

/// How far the observation viewport's bottom edge is pulled up, so a
/// section must be scrolled meaningfully into view before it reveals
pub const OBSERVER_BOTTOM_MARGIN: f32 = 50.0;

/// Fragment id of the section whose reveal also fills the skill bars
pub const SKILLS_SECTION_ID: &str = "skills";

// =============================================================================
// Section observer
// =============================================================================

/// Rising-edge reveal tracking for page sections
#[derive(Clone, Debug, Default)]
pub struct SectionObserver {
    engaged: Vec<bool>,
    revealed: Vec<bool>,
    skills_due: Option<f64>,
}

impl SectionObserver {
    /// Create an observer with nothing revealed
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the reveal class to every section
    pub fn prime(&mut self, layout: &PageLayout, ops: &mut Vec<DomOp>) {
        self.engaged = vec![false; layout.sections.len()];
        self.revealed = vec![false; layout.sections.len()];
        for section in 0..layout.sections.len() {
            ops.push(DomOp::SectionPrime { section });
        }
    }

    /// Recompute section visibility and play reveals on rising edges.
    ///
    /// `now` feeds the skills-section delay; the skill-bar pass itself is
    /// collected later via [`Self::take_due_skills`].
    pub fn check(
        &mut self,
        viewport: &Viewport,
        layout: &PageLayout,
        now: f64,
        skills_delay_ms: f64,
        ops: &mut Vec<DomOp>,
    ) {
        if self.engaged.len() < layout.sections.len() {
            self.engaged.resize(layout.sections.len(), false);
            self.revealed.resize(layout.sections.len(), false);
        }

        for (i, section) in layout.sections.iter().enumerate() {
            let ratio = section.span.intersection_ratio(viewport, OBSERVER_BOTTOM_MARGIN);
            let engaged = ratio >= OBSERVER_THRESHOLD;
            let rising = engaged && !self.engaged[i];
            self.engaged[i] = engaged;

            if !rising {
                continue;
            }
            if !self.revealed[i] {
                self.revealed[i] = true;
                ops.push(DomOp::SectionAnimate { section: i });
            }
            if section.id == SKILLS_SECTION_ID {
                self.skills_due = Some(now + skills_delay_ms);
            }
        }
    }

    /// Whether the delayed skill-bar pass has come due; returns true at
    /// most once per scheduled delay
    pub fn take_due_skills(&mut self, now: f64) -> bool {
        match self.skills_due {
            Some(due) if now >= due => {
                self.skills_due = None;
                true
            }
            _ => false,
        }
    }

    /// Per-section reveal flags, in DOM order
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }
}

// =============================================================================
// Card reveal
// =============================================================================

/// A card waiting for its staggered reveal time
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingReveal {
    card: usize,
    due: f64,
}

/// Staggered one-shot reveal state for the page's cards
#[derive(Clone, Debug, Default)]
pub struct CardReveal {
    revealed: Vec<bool>,
    scheduled: Vec<bool>,
    pending: Vec<PendingReveal>,
}

impl CardReveal {
    /// Create with no card revealed
    pub fn new() -> Self {
        Self::default()
    }

    /// Park every card below its resting position
    pub fn prime(&mut self, count: usize, ops: &mut Vec<DomOp>) {
        self.revealed = vec![false; count];
        self.scheduled = vec![false; count];
        for card in 0..count {
            ops.push(DomOp::CardPrime { card });
        }
    }

    /// Schedule reveals for cards intersecting the viewport. The delay is
    /// the card's DOM index times `stagger_ms`, so a batch ripples down
    /// the page in order.
    pub fn schedule_visible(
        &mut self,
        viewport: &Viewport,
        cards: &[Card],
        now: f64,
        stagger_ms: f64,
    ) {
        if self.revealed.len() < cards.len() {
            self.revealed.resize(cards.len(), false);
            self.scheduled.resize(cards.len(), false);
        }

        for (i, card) in cards.iter().enumerate() {
            if self.scheduled[i] || self.revealed[i] {
                continue;
            }
            if card.span.visible_in(viewport) {
                self.scheduled[i] = true;
                self.pending.push(PendingReveal {
                    card: i,
                    due: now + (i as f64) * stagger_ms,
                });
            }
        }
    }

    /// Play every reveal that has come due, in due order
    pub fn tick(&mut self, now: f64, ops: &mut Vec<DomOp>) {
        if self.pending.is_empty() {
            return;
        }

        let mut due: Vec<PendingReveal> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.partial_cmp(&b.due).unwrap_or(std::cmp::Ordering::Equal));

        for p in due {
            self.revealed[p.card] = true;
            ops.push(DomOp::CardShow { card: p.card });
        }
    }

    /// Per-card reveal flags, in DOM order
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Whether any reveal is still waiting on its stagger delay
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
