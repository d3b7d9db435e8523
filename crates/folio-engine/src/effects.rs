//! Parallax and hover presentation effects
//!
//! Purely cosmetic, no state survives between events beyond op dedup. The
//! hero background drifts against the scroll direction; project cards lift
//! under the pointer and settle when it leaves.

use crate::ops::DomOp;

/// Vertical drift of the hero background per scrolled pixel
pub const PARALLAX_RATE: f32 = -0.5;

/// Parallax offset tracking for the hero background
#[derive(Clone, Copy, Debug, Default)]
pub struct Parallax {
    last_offset: Option<f32>,
}

impl Parallax {
    /// Create with no offset applied yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the background offset for a scroll event
    pub fn update(&mut self, scroll_y: f32, ops: &mut Vec<DomOp>) {
        let offset = scroll_y * PARALLAX_RATE;
        if self.last_offset != Some(offset) {
            self.last_offset = Some(offset);
            ops.push(DomOp::HeroParallax { offset });
        }
    }
}

/// Raise or settle a card under the pointer
pub fn card_lift(card: usize, lifted: bool, ops: &mut Vec<DomOp>) {
    ops.push(DomOp::CardLift { card, lifted });
}
