//! Simulated contact form submission
//!
//! There is no transport. Submission collects the field values, holds the
//! button in a pending state for a fixed delay, then reports success. The
//! collected values are retained on the state machine and go nowhere.

use std::collections::BTreeMap;

use crate::error::{PageError, PageResult};
use crate::ops::DomOp;
use crate::options::PageOptions;

/// Success message shown when the simulated submission completes
pub const FORM_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// State machine for the contact form's simulated submission
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pending_since: Option<f64>,
    last_submission: BTreeMap<String, String>,
}

impl ContactForm {
    /// Create an idle form
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a simulated submission with the collected field values.
    /// Fails while a previous submission is still pending.
    pub fn submit(
        &mut self,
        fields: Vec<(String, String)>,
        now: f64,
        ops: &mut Vec<DomOp>,
    ) -> PageResult<()> {
        if self.pending_since.is_some() {
            return Err(PageError::InvalidOperation {
                op: "submit",
                reason: "submission already in progress",
            });
        }

        self.last_submission = fields.into_iter().collect();
        self.pending_since = Some(now);
        tracing::info!(fields = self.last_submission.len(), "contact form submitted");
        ops.push(DomOp::SubmitPending { pending: true });
        Ok(())
    }

    /// Whether the simulated delay has elapsed; consumes the pending state
    /// and returns true exactly once per submission
    pub fn complete_due(&mut self, now: f64, opts: &PageOptions) -> bool {
        match self.pending_since {
            Some(since) if now - since >= opts.submit_delay_ms => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a submission is in flight
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Field values from the most recent submission
    pub fn last_submission(&self) -> &BTreeMap<String, String> {
        &self.last_submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<(String, String)> {
        vec![
            ("name".to_string(), "Ada".to_string()),
            ("message".to_string(), "hello".to_string()),
        ]
    }

    #[test]
    fn test_submit_enters_pending() {
        let mut form = ContactForm::new();
        let mut ops = Vec::new();

        form.submit(fields(), 0.0, &mut ops).unwrap();
        assert!(form.is_pending());
        assert_eq!(ops, vec![DomOp::SubmitPending { pending: true }]);
        assert_eq!(form.last_submission().get("name").unwrap(), "Ada");
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = ContactForm::new();
        let mut ops = Vec::new();

        form.submit(fields(), 0.0, &mut ops).unwrap();
        let err = form.submit(fields(), 100.0, &mut ops).unwrap_err();
        assert_eq!(
            err,
            PageError::InvalidOperation {
                op: "submit",
                reason: "submission already in progress",
            }
        );
    }

    #[test]
    fn test_completes_after_delay() {
        let mut form = ContactForm::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        form.submit(fields(), 1000.0, &mut ops).unwrap();

        assert!(!form.complete_due(2999.0, &opts));
        assert!(form.complete_due(3000.0, &opts));
        assert!(!form.is_pending());
        assert!(!form.complete_due(3100.0, &opts), "Completes exactly once");
    }

    #[test]
    fn test_can_submit_again_after_completion() {
        let mut form = ContactForm::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        form.submit(fields(), 0.0, &mut ops).unwrap();
        assert!(form.complete_due(2000.0, &opts));

        form.submit(vec![("name".to_string(), "Grace".to_string())], 3000.0, &mut ops)
            .unwrap();
        assert_eq!(form.last_submission().get("name").unwrap(), "Grace");
    }
}
