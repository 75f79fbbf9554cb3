//! Error types for the CSS backend.

use thiserror::Error;

/// Errors surfaced by a [`StyleSink`](crate::host::StyleSink).
///
/// A rejected rule is never fatal: the scheduler catches it per rule
/// and falls back to appending the raw text as literal sheet content.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The underlying engine refused the rule (malformed, for any
    /// reason).
    #[error("style rule rejected by sink: {0}")]
    Rejected(String),
}
