//! Engine timing configuration
//!
//! Every deferred effect on the page runs on a delay that was a literal in
//! the hand-written version of this site. [`PageOptions`] gathers those
//! delays in one serializable struct so tests and embedders can tune them;
//! the defaults reproduce the shipped page exactly.
//!
//! Fixed behavioral thresholds (scrollspy lookahead, header thresholds,
//! parallax rate, observer margins) are named constants in their modules,
//! not options. They define what the behaviors mean, not how fast they run.

use serde::{Deserialize, Serialize};

/// Timing knobs for the page behavior engine, all in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Delay before the loading overlay starts its fade-out
    pub overlay_hide_delay_ms: f64,
    /// Additional delay before the faded overlay is removed from the document
    pub overlay_remove_lag_ms: f64,
    /// Delay before the hero subtitle typewriter starts
    pub typewriter_start_delay_ms: f64,
    /// Interval between typed characters for the hero subtitle
    pub typewriter_interval_ms: f64,
    /// Simulated network delay for the contact form submission
    pub submit_delay_ms: f64,
    /// Delay before a spawned notification slides into view
    pub notice_slide_in_ms: f64,
    /// Lifetime of a notification before it starts sliding out
    pub notice_dismiss_ms: f64,
    /// Additional delay before a slid-out notification is removed
    pub notice_remove_lag_ms: f64,
    /// Per-card stagger between reveal animations in one batch
    pub card_stagger_ms: f64,
    /// Delay between the skills section entering view and the bars filling
    pub skills_delay_ms: f64,
    /// Delay before the post-load animation kick (skill + card re-check)
    pub initial_kick_ms: f64,
    /// How long the easter-egg rainbow animation stays on the page
    pub rainbow_duration_ms: f64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            overlay_hide_delay_ms: 1500.0,
            overlay_remove_lag_ms: 500.0,
            typewriter_start_delay_ms: 1000.0,
            typewriter_interval_ms: 50.0,
            submit_delay_ms: 2000.0,
            notice_slide_in_ms: 100.0,
            notice_dismiss_ms: 5000.0,
            notice_remove_lag_ms: 300.0,
            card_stagger_ms: 100.0,
            skills_delay_ms: 300.0,
            initial_kick_ms: 500.0,
            rainbow_duration_ms: 2000.0,
        }
    }
}
