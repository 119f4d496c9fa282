//! English-specific validation rules for UD treebanks.
//!
//! Sentences are normalized (typos resolved, `goeswith` pieces merged), then
//! every word is checked against the English tagset, morphology and
//! closed-class lexicon. Lemma choices are collected across the corpus so
//! that minority lemmas can be reported once all input has been read.
//!
//! # Features
//!
//! - **Normalization**: Typo resolution and `goeswith` merging before any rule runs
//! - **Word rules**: Tag inventory, dependency shapes, morphology and fixed expressions
//! - **Lexicon**: Pronoun, determiner and pronominal adverb feature bundles
//! - **Passives**: Voice, auxiliary order and `obl:agent` checks per sentence
//! - **Corpus analysis**: Rare lemmas per (form, XPOS) and suspicious NNS lemmas
//!
//! # Example
//!
//! ```ignore
//! use neaten_ingest::read_file;
//! use neaten_validate::Validator;
//!
//! let mut validator = Validator::new();
//! for mut sentence in read_file(path)? {
//!     for diagnostic in validator.validate_sentence(&mut sentence)? {
//!         println!("{diagnostic}");
//!     }
//! }
//! let report = validator.finish();
//! ```

pub mod checks;
mod context;
mod engine;
mod error;
mod findings;
mod normalize;
mod registry;

// === Error Types ===
pub use error::{Result, ValidateError};

// === Validation Driver ===
pub use engine::{CorpusReport, Validator};

// === Corpus State ===
pub use registry::{LemmaRegistry, RARE_LEMMA};

// === Normalization ===
pub use normalize::{corrected_form, normalize};

// === Sentence Context ===
pub use checks::check_token;
pub use context::{Position, Prev, SentenceView, TokenContext};
pub use findings::Findings;
