//! Skill bar fill animation
//!
//! Bars fill to their target percentage the first time they are visible
//! when a check runs. A per-bar flag makes the animation one-shot; later
//! checks skip filled bars.

use crate::geometry::Viewport;
use crate::layout::SkillBar;
use crate::ops::DomOp;

/// One-shot fill state for the page's skill bars
#[derive(Clone, Debug, Default)]
pub struct SkillBars {
    animated: Vec<bool>,
}

impl SkillBars {
    /// Create with no bar filled
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every visible, not-yet-filled bar
    pub fn animate_visible(&mut self, viewport: &Viewport, bars: &[SkillBar], ops: &mut Vec<DomOp>) {
        if self.animated.len() < bars.len() {
            self.animated.resize(bars.len(), false);
        }

        for (i, bar) in bars.iter().enumerate() {
            if self.animated[i] {
                continue;
            }
            if bar.span.visible_in(viewport) {
                self.animated[i] = true;
                ops.push(DomOp::SkillFill {
                    bar: i,
                    pct: bar.target_pct,
                });
            }
        }
    }

    /// Per-bar fill flags, in DOM order
    pub fn animated(&self) -> &[bool] {
        &self.animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<SkillBar> {
        vec![
            SkillBar::new(100.0, 8.0, 90.0),
            SkillBar::new(200.0, 8.0, 75.0),
            SkillBar::new(2000.0, 8.0, 60.0),
        ]
    }

    #[test]
    fn test_fills_only_visible_bars() {
        let mut skills = SkillBars::new();
        let mut ops = Vec::new();
        let viewport = Viewport::new(0.0, 800.0);

        skills.animate_visible(&viewport, &bars(), &mut ops);

        assert_eq!(
            ops,
            vec![
                DomOp::SkillFill { bar: 0, pct: 90.0 },
                DomOp::SkillFill { bar: 1, pct: 75.0 },
            ]
        );
        assert_eq!(skills.animated(), &[true, true, false]);
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut skills = SkillBars::new();
        let mut ops = Vec::new();
        let viewport = Viewport::new(0.0, 800.0);
        let bars = bars();

        skills.animate_visible(&viewport, &bars, &mut ops);
        let first = ops.len();

        skills.animate_visible(&viewport, &bars, &mut ops);
        skills.animate_visible(&viewport, &bars, &mut ops);
        assert_eq!(ops.len(), first, "Re-running fills nothing new");
    }

    #[test]
    fn test_later_scroll_fills_remaining_bars() {
        let mut skills = SkillBars::new();
        let mut ops = Vec::new();
        let bars = bars();

        skills.animate_visible(&Viewport::new(0.0, 800.0), &bars, &mut ops);
        ops.clear();

        skills.animate_visible(&Viewport::new(1900.0, 800.0), &bars, &mut ops);
        assert_eq!(ops, vec![DomOp::SkillFill { bar: 2, pct: 60.0 }]);
        assert_eq!(skills.animated(), &[true, true, true]);
    }

    #[test]
    fn test_bar_touching_viewport_edge_stays_empty() {
        let mut skills = SkillBars::new();
        let mut ops = Vec::new();
        // Bar top sits exactly at the viewport bottom
        let bars = vec![SkillBar::new(800.0, 8.0, 50.0)];

        skills.animate_visible(&Viewport::new(0.0, 800.0), &bars, &mut ops);
        assert!(ops.is_empty());
    }
}
