//! Engine state diagnostics
//!
//! A serializable view of the engine's current state, exported through the
//! browser adapter for debugging from the console.

use serde::{Deserialize, Serialize};

/// Point-in-time summary of every behavior's state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Whether the mobile menu panel is open
    pub menu_open: bool,
    /// Highlighted navigation link index
    pub active_nav: Option<usize>,
    /// Whether the loading overlay has been removed
    pub overlay_done: bool,
    /// Per-section reveal flags, in DOM order
    pub revealed_sections: Vec<bool>,
    /// Per-card reveal flags, in DOM order
    pub revealed_cards: Vec<bool>,
    /// Per-skill-bar fill flags, in DOM order
    pub animated_skills: Vec<bool>,
    /// Notifications currently in the document
    pub active_notices: usize,
    /// Whether a form submission is in flight
    pub form_pending: bool,
    /// Whether the hero typewriter has finished
    pub typewriter_finished: bool,
    /// Whether the easter-egg rainbow is running
    pub rainbow_active: bool,
    /// Whether the header has its condensed style
    pub header_condensed: bool,
    /// Whether the header is slid out of view
    pub header_hidden: bool,
}
