//! Fatal validation errors.
//!
//! Annotation problems are reported as diagnostics. Only trees that cannot
//! be walked at all abort the run.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidateError {
    /// A regular token whose HEAD column is `_` or empty.
    #[error("invalid head '_' at token {token} in {sent_id} ({filename})")]
    MissingHead {
        sent_id: String,
        token: usize,
        filename: String,
    },

    /// A HEAD that points past the last word of the sentence.
    #[error("head {head} of token {token} is out of range in {sent_id} ({filename})")]
    DanglingHead {
        sent_id: String,
        token: usize,
        head: usize,
        filename: String,
    },
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
