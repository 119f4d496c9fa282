use serde::{Deserialize, Serialize};

use crate::token::Token;

/// One CoNLL-U tree with its metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub sent_id: String,
    /// Most recent `newdoc id` in the same file.
    pub doc: Option<String>,
    /// Basename of the source file.
    pub filename: String,
    /// Raw comment lines without the leading `#`.
    pub comments: Vec<String>,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Regular words, skipping multiword spans and empty nodes.
    pub fn words(&self) -> impl DoubleEndedIterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_regular())
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}
