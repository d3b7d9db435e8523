//! Loading overlay lifecycle
//!
//! The overlay is inserted as soon as the engine starts, fades out after a
//! fixed delay, and is removed from the document once the fade has played.
//! One-shot: the phase machine only moves forward.

use crate::ops::DomOp;
use crate::options::PageOptions;

/// Lifecycle phase of the loading overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Overlay is covering the page
    Shown,
    /// Fade-out transition is playing
    Hiding,
    /// Overlay has been removed from the document
    Removed,
}

/// Phase machine for the transient loading overlay
#[derive(Clone, Copy, Debug)]
pub struct LoadingOverlay {
    started_at: f64,
    phase: OverlayPhase,
}

impl LoadingOverlay {
    /// Insert the overlay and start its clock
    pub fn new(now: f64, ops: &mut Vec<DomOp>) -> Self {
        ops.push(DomOp::OverlayInsert);
        Self {
            started_at: now,
            phase: OverlayPhase::Shown,
        }
    }

    /// Advance the phase machine. A long gap between frames can move
    /// through both remaining phases in a single call, in order.
    pub fn tick(&mut self, now: f64, opts: &PageOptions, ops: &mut Vec<DomOp>) {
        let elapsed = now - self.started_at;

        if self.phase == OverlayPhase::Shown && elapsed >= opts.overlay_hide_delay_ms {
            self.phase = OverlayPhase::Hiding;
            ops.push(DomOp::OverlayHide);
        }

        if self.phase == OverlayPhase::Hiding
            && elapsed >= opts.overlay_hide_delay_ms + opts.overlay_remove_lag_ms
        {
            self.phase = OverlayPhase::Removed;
            ops.push(DomOp::OverlayRemove);
        }
    }

    /// Current phase
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay has left the document
    pub fn is_done(&self) -> bool {
        self.phase == OverlayPhase::Removed
    }
}
