//! Transient notification overlays
//!
//! Notifications spawn off-screen, slide in shortly after, and dismiss
//! themselves after a fixed lifetime. Both timers anchor at creation, so a
//! notification is gone roughly 5.3 seconds after it was shown. Concurrent
//! notifications run their lifecycles independently; there is no queue and
//! no dedup.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::ops::DomOp;
use crate::options::PageOptions;

/// Unique identifier for a spawned notification
pub type NoticeId = u64;

/// Visual severity of a notification, mapped to a background gradient by
/// the adapter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    /// Lowercase name, used in the notification's class name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Lifecycle phase of a live notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NoticePhase {
    /// Spawned off-screen, waiting for its slide-in
    Spawned,
    /// Slid into view, waiting out its lifetime
    Visible,
    /// Sliding out, waiting for removal
    Leaving,
}

/// A live notification and its next phase deadline
#[derive(Clone, Debug)]
struct Notice {
    id: NoticeId,
    created_at: f64,
    phase: NoticePhase,
    due: f64,
}

/// Owns every live notification and advances their lifecycles
#[derive(Clone, Debug)]
pub struct NotificationCenter {
    notices: Vec<Notice>,
    next_id: NoticeId,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Create an empty center
    pub fn new() -> Self {
        Self {
            notices: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn a notification and start its lifecycle clock
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: f64,
        opts: &PageOptions,
        ops: &mut Vec<DomOp>,
    ) -> NoticeId {
        let id = self.next_id;
        self.next_id += 1;

        let message = message.into();
        tracing::info!(id, severity = severity.as_str(), %message, "notification shown");
        ops.push(DomOp::NoticeSpawn {
            id,
            message,
            severity,
        });
        self.notices.push(Notice {
            id,
            created_at: now,
            phase: NoticePhase::Spawned,
            due: now + opts.notice_slide_in_ms,
        });
        id
    }

    /// Start a notification's slide-out before its lifetime is up.
    /// Dismissing one that is already leaving is a no-op.
    pub fn dismiss(
        &mut self,
        id: NoticeId,
        now: f64,
        opts: &PageOptions,
        ops: &mut Vec<DomOp>,
    ) -> PageResult<()> {
        let notice = self
            .notices
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(PageError::NoticeNotFound(id))?;

        if notice.phase != NoticePhase::Leaving {
            notice.phase = NoticePhase::Leaving;
            notice.due = now + opts.notice_remove_lag_ms;
            ops.push(DomOp::NoticeSlideOut { id });
        }
        Ok(())
    }

    /// Advance every notification whose deadline has passed. A long gap
    /// between frames can walk one notification through several phases.
    pub fn tick(&mut self, now: f64, opts: &PageOptions, ops: &mut Vec<DomOp>) {
        let mut removed: Vec<NoticeId> = Vec::new();

        for notice in &mut self.notices {
            loop {
                if now < notice.due {
                    break;
                }
                match notice.phase {
                    NoticePhase::Spawned => {
                        notice.phase = NoticePhase::Visible;
                        notice.due = notice.created_at + opts.notice_dismiss_ms;
                        ops.push(DomOp::NoticeSlideIn { id: notice.id });
                    }
                    NoticePhase::Visible => {
                        notice.phase = NoticePhase::Leaving;
                        notice.due = now + opts.notice_remove_lag_ms;
                        ops.push(DomOp::NoticeSlideOut { id: notice.id });
                    }
                    NoticePhase::Leaving => {
                        removed.push(notice.id);
                        ops.push(DomOp::NoticeRemove { id: notice.id });
                        break;
                    }
                }
            }
        }

        self.notices.retain(|n| !removed.contains(&n.id));
    }

    /// Number of notifications currently in the document
    pub fn active_count(&self) -> usize {
        self.notices.len()
    }
}
