//! Error types for CoNLL-U ingestion.

use std::path::PathBuf;

use neaten_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading or assembling corpus files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CoNLL-U Errors ===
    /// Token line without exactly ten tab-separated columns.
    #[error("{file}:{line}: expected 10 columns, found {found}")]
    ColumnCount {
        file: String,
        line: usize,
        found: usize,
    },

    /// Column value that cannot be parsed.
    #[error("{file}:{line}: invalid {field} column: {source}")]
    InvalidField {
        file: String,
        line: usize,
        field: &'static str,
        #[source]
        source: ModelError,
    },

    /// Sentence block without a `# sent_id` comment.
    #[error("{file}:{line}: sentence has no sent_id")]
    MissingSentId { file: String, line: usize },

    // === Corpus Assembly Errors ===
    /// Line in a split file that does not belong to any document.
    #[error("{path}:{line}: {reason}")]
    CorpusFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
