//! Page Behavior Engine for Folio
//!
//! This crate provides every interactive behavior of the portfolio page:
//! - Loading overlay and page-load choreography
//! - Mobile menu, smooth-scroll navigation, scrollspy highlighting
//! - Scroll-triggered reveals (sections, cards, skill bars)
//! - Simulated contact form and stacked notifications
//! - Header scroll effects, hero parallax, typewriter, Konami easter egg
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`geometry`]: Vertical spans and the scrolling viewport
//! - [`layout`]: Measured page snapshot handed to the engine at mount
//! - [`ops`]: Document commands the engine emits instead of touching a DOM
//! - [`overlay`], [`reveal`], [`skills`], [`typewriter`]: timed load and
//!   scroll effects driven by animation frames
//! - [`scrollspy`], [`header`], [`effects`]: synchronous scroll behaviors
//! - [`menu`], [`form`], [`notify`], [`konami`]: interaction behaviors
//!
//! ## Example
//!
//! ```rust
//! use folio_engine::{NavLink, PageEngine, PageLayout, PageOptions, Section, Viewport};
//!
//! let mut engine = PageEngine::new(PageOptions::default());
//! engine.init(
//!     PageLayout {
//!         nav_links: vec![NavLink::new("home")],
//!         sections: vec![Section::new("home", 0.0, 600.0)],
//!         ..Default::default()
//!     },
//!     Viewport::new(0.0, 800.0),
//!     0.0,
//! ).unwrap();
//!
//! // Events in, document commands out
//! engine.handle_scroll(40.0);
//! engine.handle_frame(16.0);
//! assert!(!engine.drain_ops().is_empty());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All page state is pure Rust, testable without a browser
//! 2. **Explicit Time**: Every timed behavior takes the clock as a parameter
//! 3. **Commands Out**: The engine emits [`DomOp`] values; an adapter applies them
//! 4. **Measured Once**: Geometry comes from a layout snapshot, refreshed on resize

pub mod effects;
pub mod error;
pub mod form;
pub mod geometry;
pub mod header;
pub mod konami;
pub mod layout;
pub mod menu;
pub mod notify;
pub mod ops;
pub mod options;
pub mod overlay;
pub mod reveal;
pub mod scrollspy;
pub mod skills;
pub mod typewriter;

mod engine;
mod snapshot;

// Re-export core types for convenience
pub use error::{PageError, PageResult};
pub use geometry::{VSpan, Viewport};
pub use layout::{Card, NavLink, PageLayout, Section, SkillBar};
pub use notify::{NoticeId, NotificationCenter, Severity};
pub use ops::DomOp;
pub use options::PageOptions;
pub use overlay::{LoadingOverlay, OverlayPhase};

pub use engine::{EventResult, PageEngine, RESUME_MESSAGE};
pub use snapshot::EngineSnapshot;

/// Notification shown when the Konami code lands
pub use konami::KONAMI_MESSAGE;

/// Notification shown when the simulated submission completes
pub use form::FORM_SUCCESS_MESSAGE;

/// How far below the scroll position the scrollspy probes, in pixels
pub use scrollspy::SCROLLSPY_LOOKAHEAD;
