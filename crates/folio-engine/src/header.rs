//! Header scroll effect
//!
//! Two independent toggles driven by the scroll offset: the header gains
//! an opaque background and shadow once the page has scrolled a little,
//! and slides out of view while scrolling down past a deeper threshold.
//! Scroll direction compares against the offset of the previous event.

use crate::ops::DomOp;

/// Scroll offset past which the header condenses
pub const HEADER_CONDENSE_THRESHOLD: f32 = 100.0;

/// Scroll offset past which downward scrolling hides the header
pub const HEADER_HIDE_THRESHOLD: f32 = 200.0;

/// Condensed/hidden state of the fixed page header
#[derive(Clone, Copy, Debug)]
pub struct HeaderEffect {
    last_scroll_y: f32,
    condensed: bool,
    hidden: bool,
}

impl HeaderEffect {
    /// Create at the given starting scroll offset
    pub fn new(scroll_y: f32) -> Self {
        Self {
            last_scroll_y: scroll_y,
            condensed: false,
            hidden: false,
        }
    }

    /// Recompute both toggles for a scroll event
    pub fn update(&mut self, scroll_y: f32, ops: &mut Vec<DomOp>) {
        let condensed = scroll_y > HEADER_CONDENSE_THRESHOLD;
        if condensed != self.condensed {
            self.condensed = condensed;
            ops.push(DomOp::HeaderCondense { condensed });
        }

        let downward = scroll_y > self.last_scroll_y;
        let hidden = downward && scroll_y > HEADER_HIDE_THRESHOLD;
        if hidden != self.hidden {
            self.hidden = hidden;
            ops.push(DomOp::HeaderSlide { hidden });
        }

        self.last_scroll_y = scroll_y;
    }

    /// Whether the header currently has its condensed style
    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    /// Whether the header is currently slid out of view
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
