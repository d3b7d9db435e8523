//! Page layout snapshot
//!
//! The engine never touches a document. The browser adapter measures the
//! page once at mount (and again on resize) into a [`PageLayout`], and the
//! engine derives every behavior from that snapshot plus scroll events.
//!
//! Optional page elements are simply absent from the snapshot (empty vec,
//! `None`, `false` flag) and their behaviors never emit anything.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::geometry::VSpan;

/// A navigation link and the section fragment it targets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Target section id, without the leading `#`
    pub target: String,
}

impl NavLink {
    /// Create a link targeting a section id
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// A content section with a fragment id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Fragment id (`section[id]` in the document)
    pub id: String,
    /// Vertical extent in document coordinates
    pub span: VSpan,
}

impl Section {
    /// Create a section record
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            span: VSpan::new(top, height),
        }
    }
}

/// A skill bar with its target fill percentage
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillBar {
    /// Vertical extent in document coordinates
    pub span: VSpan,
    /// Target fill width in percent, from the bar's data attribute
    pub target_pct: f32,
}

impl SkillBar {
    /// Create a skill bar record
    pub const fn new(top: f32, height: f32, target_pct: f32) -> Self {
        Self {
            span: VSpan::new(top, height),
            target_pct,
        }
    }
}

/// A revealable card (project, achievement, or contact entry)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Vertical extent in document coordinates
    pub span: VSpan,
}

impl Card {
    /// Create a card record
    pub const fn new(top: f32, height: f32) -> Self {
        Self {
            span: VSpan::new(top, height),
        }
    }
}

/// Measured snapshot of everything the engine needs from the document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Header height, subtracted from smooth-scroll targets
    pub header_height: f32,
    /// Navigation links in DOM order
    pub nav_links: Vec<NavLink>,
    /// Sections with fragment ids, in DOM order
    pub sections: Vec<Section>,
    /// Skill bars, in DOM order
    pub skill_bars: Vec<SkillBar>,
    /// Revealable cards, in DOM order
    pub cards: Vec<Card>,
    /// Original hero subtitle text, if the element exists
    pub hero_subtitle: Option<String>,
    /// Whether a hero background element exists for the parallax effect
    pub has_hero_background: bool,
}

impl PageLayout {
    /// Index of the first section with the given fragment id
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Check the snapshot for geometry the behaviors cannot work with
    pub fn validate(&self) -> PageResult<()> {
        if !self.header_height.is_finite() || self.header_height < 0.0 {
            return Err(PageError::InvalidLayout {
                reason: format!("header height {} is not usable", self.header_height),
            });
        }

        for section in &self.sections {
            Self::check_span(&section.span, &format!("section '{}'", section.id))?;
        }
        for (i, bar) in self.skill_bars.iter().enumerate() {
            Self::check_span(&bar.span, &format!("skill bar {}", i))?;
            if !bar.target_pct.is_finite() || bar.target_pct < 0.0 {
                return Err(PageError::InvalidLayout {
                    reason: format!("skill bar {} has fill {}", i, bar.target_pct),
                });
            }
        }
        for (i, card) in self.cards.iter().enumerate() {
            Self::check_span(&card.span, &format!("card {}", i))?;
        }

        Ok(())
    }

    fn check_span(span: &VSpan, what: &str) -> PageResult<()> {
        if !span.top.is_finite() || !span.height.is_finite() || span.height < 0.0 {
            return Err(PageError::InvalidLayout {
                reason: format!("{} has extent top={} height={}", what, span.top, span.height),
            });
        }
        Ok(())
    }
}
