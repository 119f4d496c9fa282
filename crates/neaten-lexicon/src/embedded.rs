//! Embedded lexicon tables.
//!
//! All tables are embedded at compile time using `include_str!()`, so the
//! validator needs no data files at runtime.

/// Personal, possessive, reflexive and indefinite pronouns.
pub const PRONOUNS: &str = include_str!("../data/pronouns.csv");

/// Two-word reciprocals, keyed by their first word's XPOS.
pub const RECIPROCALS: &str = include_str!("../data/reciprocals.csv");

/// Articles, demonstratives, quantifiers and WH determiners.
pub const DETERMINERS: &str = include_str!("../data/determiners.csv");

/// Pronominal adverbs.
pub const ADVERBS: &str = include_str!("../data/adverbs.csv");

/// Two-word fixed expressions and their permitted `ExtPos` values.
pub const FIXED_EXPRESSIONS: &str = include_str!("../data/fixed_expressions.csv");
