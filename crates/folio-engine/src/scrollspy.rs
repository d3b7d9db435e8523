//! Active navigation link tracking
//!
//! On every scroll event the spy probes the document slightly below the
//! viewport top and marks the navigation link of the section under the
//! probe. When several sections contain the probe the last one in DOM
//! order wins; when none does, the previous active link stays lit.

use crate::layout::PageLayout;
use crate::ops::DomOp;

/// Lookahead added to the scroll offset before matching sections, so a
/// section counts as current slightly before its top reaches the viewport
pub const SCROLLSPY_LOOKAHEAD: f32 = 100.0;

/// Tracks which navigation link is highlighted
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollSpy {
    active: Option<usize>,
}

impl ScrollSpy {
    /// Create a spy with no link highlighted
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the active link for a scroll offset and emit an update
    /// when it changes.
    ///
    /// A matched section with no navigation link clears every link; no
    /// matched section at all leaves the highlight untouched.
    pub fn update(&mut self, scroll_y: f32, layout: &PageLayout, ops: &mut Vec<DomOp>) {
        let probe = scroll_y + SCROLLSPY_LOOKAHEAD;

        let mut matched: Option<&str> = None;
        for section in &layout.sections {
            if section.span.contains(probe) {
                matched = Some(&section.id);
            }
        }

        let Some(id) = matched else {
            return;
        };

        let link = layout.nav_links.iter().position(|l| l.target == id);
        if self.active != link {
            self.active = link;
            ops.push(DomOp::NavActivate { link });
        }
    }

    /// Currently highlighted link index, if any
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{NavLink, Section};

    fn demo_layout() -> PageLayout {
        PageLayout {
            nav_links: vec![NavLink::new("home"), NavLink::new("about"), NavLink::new("skills")],
            sections: vec![
                Section::new("home", 0.0, 600.0),
                Section::new("about", 600.0, 500.0),
                Section::new("skills", 1100.0, 700.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_probe_leads_scroll_by_lookahead() {
        let layout = demo_layout();
        let mut spy = ScrollSpy::new();
        let mut ops = Vec::new();

        // Scroll 501: probe 601 lands in 'about' even though the viewport
        // top is still inside 'home'
        spy.update(501.0, &layout, &mut ops);
        assert_eq!(spy.active(), Some(1));
        assert_eq!(ops, vec![DomOp::NavActivate { link: Some(1) }]);
    }

    #[test]
    fn test_boundary_belongs_to_next_section() {
        let layout = demo_layout();
        let mut spy = ScrollSpy::new();
        let mut ops = Vec::new();

        // Probe exactly at a section boundary: [top, top + height) puts it
        // in the following section
        spy.update(500.0, &layout, &mut ops);
        assert_eq!(spy.active(), Some(1));
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        let mut layout = demo_layout();
        // Make 'about' overlap the tail of 'home'
        layout.sections[1] = Section::new("about", 400.0, 500.0);

        let mut spy = ScrollSpy::new();
        let mut ops = Vec::new();

        spy.update(400.0, &layout, &mut ops);
        assert_eq!(spy.active(), Some(1), "Later section in DOM order wins");
    }

    #[test]
    fn test_no_match_keeps_previous_active() {
        let mut layout = demo_layout();
        // Leave a gap between 'about' and 'skills'
        layout.sections[2] = Section::new("skills", 1400.0, 700.0);

        let mut spy = ScrollSpy::new();
        let mut ops = Vec::new();

        spy.update(700.0, &layout, &mut ops);
        assert_eq!(spy.active(), Some(1));

        ops.clear();
        spy.update(1150.0, &layout, &mut ops);
        assert_eq!(spy.active(), Some(1), "Gap keeps the previous link lit");
        assert!(ops.is_empty());
    }

    #[test]
    fn test_linkless_section_clears_all() {
        let mut layout = demo_layout();
        layout.sections.push(Section::new("footer", 1800.0, 300.0));

        let mut spy = ScrollSpy::new();
        let mut ops = Vec::new();

        spy.update(0.0, &layout, &mut ops);
        assert_eq!(spy.active(), Some(0));

        ops.clear();
        spy.update(1800.0, &layout, &mut ops);
        assert_eq!(spy.active(), None);
        assert_eq!(ops, vec![DomOp::NavActivate { link: None }]);
    }

    #[test]
    fn test_emits_only_on_change() {
        let layout = demo_layout();
        let mut spy = ScrollSpy::new();
        let mut ops = Vec::new();

        spy.update(0.0, &layout, &mut ops);
        spy.update(10.0, &layout, &mut ops);
        spy.update(20.0, &layout, &mut ops);

        assert_eq!(ops.len(), 1, "Still inside 'home', one activation total");
    }
}
