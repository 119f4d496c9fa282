//! Closed-class lexicon for English UD validation.
//!
//! Tables are embedded CSV files parsed once into a [`Lexicon`]:
//!
//! - **Pronouns**: personal, possessive, reflexive, colloquial and indefinite forms
//! - **Reciprocals**: `each other`, `one another`
//! - **Determiners** and **pronominal adverbs**
//! - **Fixed expressions** with their permitted `ExtPos`
//!
//! Each entry maps a (form-or-lemma, XPOS) key to a canonical lemma and an
//! expected feature bundle built from [`Expected`] values.

pub mod embedded;
mod entry;
mod error;
mod lexicon;
pub mod lists;
pub mod tagset;

pub use entry::{Expected, LexEntry};
pub use error::{LexiconError, Result};
pub use lexicon::{Lexicon, extpos_functions, lexicon};
