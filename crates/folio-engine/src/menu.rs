//! Mobile navigation menu state

use crate::ops::DomOp;

/// Open/closed state of the mobile navigation panel
#[derive(Clone, Copy, Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Create a closed menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu and request the matching panel + hamburger update
    pub fn toggle(&mut self, ops: &mut Vec<DomOp>) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "mobile menu toggled");
        ops.push(DomOp::MenuSet { open: self.open });
    }

    /// Close the menu if it is open (after a navigation click)
    pub fn close(&mut self, ops: &mut Vec<DomOp>) {
        if self.open {
            self.open = false;
            ops.push(DomOp::MenuSet { open: false });
        }
    }

    /// Whether the panel is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }
}
