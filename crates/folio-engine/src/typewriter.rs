//! Hero subtitle typewriter
//!
//! Reveals the subtitle one character per interval, starting after a
//! delay. The first character lands at the start instant, so the visible
//! prefix is a pure function of elapsed time. Runs once per page load;
//! a cancelled run cannot be restarted.

use crate::error::{PageError, PageResult};
use crate::ops::DomOp;

/// Typing interval when none is configured
pub const DEFAULT_TYPE_INTERVAL_MS: f64 = 100.0;

#[derive(Clone, Debug)]
struct TypeRun {
    text: Vec<char>,
    interval_ms: f64,
    start_at: f64,
    emitted: Option<usize>,
}

/// One-shot typewriter over the hero subtitle text
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    run: Option<TypeRun>,
    finished: bool,
}

impl Typewriter {
    /// Create an idle typewriter
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a run over `text` beginning at `start_at`. Fails if a run
    /// was already scheduled or has already played.
    pub fn start(&mut self, text: &str, interval_ms: f64, start_at: f64) -> PageResult<()> {
        if self.finished || self.run.is_some() {
            return Err(PageError::InvalidOperation {
                op: "typewriter_start",
                reason: "typewriter already ran",
            });
        }

        self.run = Some(TypeRun {
            text: text.chars().collect(),
            interval_ms: if interval_ms > 0.0 {
                interval_ms
            } else {
                DEFAULT_TYPE_INTERVAL_MS
            },
            start_at,
            emitted: None,
        });
        Ok(())
    }

    /// Emit the visible prefix for `now` when it has grown
    pub fn tick(&mut self, now: f64, ops: &mut Vec<DomOp>) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if now < run.start_at {
            return;
        }

        let elapsed = now - run.start_at;
        let typed = ((elapsed / run.interval_ms).floor() as usize + 1).min(run.text.len());

        if run.emitted != Some(typed) {
            run.emitted = Some(typed);
            ops.push(DomOp::TypeText {
                text: run.text[..typed].iter().collect(),
            });
        }

        if typed == run.text.len() {
            self.run = None;
            self.finished = true;
        }
    }

    /// Stop mid-word. The run cannot be restarted afterwards.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            self.finished = true;
        }
    }

    /// Whether a run is scheduled or typing
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// Whether the run has played (or was cancelled)
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
