//! CoNLL-U ingestion for the neatEN validator.
//!
//! This crate reads treebank files into [`neaten_model::Sentence`] values and
//! manages the on-disk corpus layout.
//!
//! # Features
//!
//! - **Reading**: Stream sentences from a CoNLL-U file, tracking `# newdoc id`
//! - **Discovery**: Find the released `en_ewt-ud-*.conllu` splits
//! - **Assembly**: Build split files from per-document sources, and split them back
//!
//! # Example
//!
//! ```ignore
//! use neaten_ingest::{ConlluReader, default_inputs};
//!
//! for path in default_inputs()? {
//!     for sentence in ConlluReader::open(&path)? {
//!         let sentence = sentence?;
//!         println!("{} ({} words)", sentence.sent_id, sentence.word_count());
//!     }
//! }
//! ```

mod conllu;
mod corpus;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CoNLL-U Reading ===
pub use conllu::{ConlluReader, parse_str, read_file};

// === File Discovery ===
pub use discovery::{
    CONLLU_SUFFIX, DEFAULT_INPUT_DIR, DEFAULT_INPUT_PREFIX, default_inputs, list_matching,
};

// === Corpus Assembly ===
pub use corpus::{CorpusLayout, DEFAULT_PREFIX, SPLITS, SplitSummary, build, unbuild};
