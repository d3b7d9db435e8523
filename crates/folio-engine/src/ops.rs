//! Typed document commands
//!
//! Behaviors never mutate a document directly. They append [`DomOp`] values
//! to the engine's op buffer; the browser adapter drains the buffer and
//! applies each op to the live page. Tests drain the same buffer and assert
//! on it instead of a DOM.
//!
//! Element references are indices into the installed [`PageLayout`]
//! (`crate::layout`), in DOM order.

use serde::{Deserialize, Serialize};

use crate::notify::{NoticeId, Severity};

/// A single document mutation requested by the engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DomOp {
    /// Insert the loading overlay into the document
    OverlayInsert,
    /// Start the overlay fade-out (CSS transition)
    OverlayHide,
    /// Remove the overlay from the document
    OverlayRemove,

    /// Open or close the mobile navigation panel (panel + hamburger shape)
    MenuSet {
        open: bool,
    },

    /// Smooth-scroll the document to an absolute offset
    ScrollTo {
        top: f32,
    },
    /// Mark one navigation link active and clear all others
    /// (`None` clears every link)
    NavActivate {
        link: Option<usize>,
    },

    /// Attach the scroll-reveal class to a section at init
    SectionPrime {
        section: usize,
    },
    /// Play a section's reveal animation
    SectionAnimate {
        section: usize,
    },
    /// Hide a card below its resting position at init
    CardPrime {
        card: usize,
    },
    /// Reveal a card (fade in and rise to its resting position)
    CardShow {
        card: usize,
    },
    /// Raise or settle a card under the pointer
    CardLift {
        card: usize,
        lifted: bool,
    },
    /// Animate a skill bar to its target fill percentage
    SkillFill {
        bar: usize,
        pct: f32,
    },

    /// Switch the submit button between resting and pending state
    SubmitPending {
        pending: bool,
    },
    /// Clear all contact form fields
    FormReset,

    /// Create a notification element, parked off-screen
    NoticeSpawn {
        id: NoticeId,
        message: String,
        severity: Severity,
    },
    /// Slide a notification into view
    NoticeSlideIn {
        id: NoticeId,
    },
    /// Slide a notification out of view
    NoticeSlideOut {
        id: NoticeId,
    },
    /// Remove a notification element from the document
    NoticeRemove {
        id: NoticeId,
    },

    /// Switch the header between resting and condensed (opaque + shadow)
    HeaderCondense {
        condensed: bool,
    },
    /// Slide the header out of view or back in
    HeaderSlide {
        hidden: bool,
    },

    /// Offset the hero background for the parallax effect
    HeroParallax {
        offset: f32,
    },
    /// Replace the hero subtitle text with the typed prefix
    TypeText {
        text: String,
    },

    /// Start or stop the easter-egg rainbow animation on the body
    RainbowSet {
        on: bool,
    },
}
