//! Error types for the page behavior engine
//!
//! This module provides structured error types for all fallible operations
//! in the engine crate, following the project's error handling conventions.

use crate::notify::NoticeId;

/// Errors that can occur in page engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Notification with the given ID was not found
    NoticeNotFound(NoticeId),

    /// A layout snapshot failed validation
    InvalidLayout {
        /// Why the layout was rejected
        reason: String,
    },

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoticeNotFound(id) => write!(f, "notification not found: {}", id),
            Self::InvalidLayout { reason } => write!(f, "invalid layout: {}", reason),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
        }
    }
}

impl std::error::Error for PageError {}

/// Result type alias for page engine operations
pub type PageResult<T> = Result<T, PageError>;
