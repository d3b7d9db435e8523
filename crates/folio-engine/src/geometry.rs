//! Vertical page geometry
//!
//! All page behaviors reason about a single axis: document-space Y. This
//! module provides the two primitives they share:
//!
//! - [`VSpan`]: the vertical extent of an element (top offset + height)
//! - [`Viewport`]: the visible window onto the document (scroll offset + height)
//!
//! Coordinates are document-space pixels, increasing downward. Conversions
//! from viewport-relative rects happen in the browser adapter.

use serde::{Deserialize, Serialize};

/// Vertical extent of a page element in document coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VSpan {
    /// Distance from the document top to the element top
    pub top: f32,
    /// Element height
    pub height: f32,
}

impl VSpan {
    /// Zero-extent span at the document top
    pub const ZERO: VSpan = VSpan {
        top: 0.0,
        height: 0.0,
    };

    /// Create a new span
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Bottom edge (top + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Whether a document Y coordinate falls inside [top, top + height)
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Whether any part of the span is inside the viewport (strict edges:
    /// a span exactly touching the viewport boundary does not count)
    pub fn visible_in(&self, viewport: &Viewport) -> bool {
        self.top < viewport.bottom() && self.bottom() > viewport.scroll_y
    }

    /// Fraction of the span visible in the viewport after pulling the
    /// viewport's bottom edge up by `bottom_margin`.
    ///
    /// Mirrors how an intersection observer reports its ratio on the
    /// vertical axis: 0.0 when fully outside, 1.0 when fully inside, and
    /// for zero-height spans 1.0 if the point is inside and 0.0 otherwise.
    pub fn intersection_ratio(&self, viewport: &Viewport, bottom_margin: f32) -> f32 {
        let view_top = viewport.scroll_y;
        let view_bottom = viewport.bottom() - bottom_margin;

        if self.height <= 0.0 {
            return if self.top >= view_top && self.top <= view_bottom {
                1.0
            } else {
                0.0
            };
        }

        let visible = self.bottom().min(view_bottom) - self.top.max(view_top);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// The visible window onto the document
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current scroll offset (document Y at the viewport top)
    pub scroll_y: f32,
    /// Viewport height
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport
    pub const fn new(scroll_y: f32, height: f32) -> Self {
        Self { scroll_y, height }
    }

    /// Document Y at the viewport bottom
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }

    /// Viewport scrolled to a new offset, height unchanged
    pub fn at(&self, scroll_y: f32) -> Self {
        Self {
            scroll_y,
            height: self.height,
        }
    }
}
