//! Error types for lexicon loading.

use thiserror::Error;

/// Errors raised while parsing the embedded tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// A table row could not be read.
    #[error("Failed to parse {file}: {source}")]
    CsvParse {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A feature specification did not have the `Name=Value` shape.
    #[error("Invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: &'static str,
    },
}

/// Result type for lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;
