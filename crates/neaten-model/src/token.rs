//! Token rows of a CoNLL-U sentence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::features::{Features, Misc};

/// Token identifier: a regular word, a multiword span or an empty node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenId {
    Word(usize),
    Range(usize, usize),
    Empty(usize, usize),
}

impl TokenId {
    /// The word index for regular tokens.
    pub fn word(self) -> Option<usize> {
        match self {
            Self::Word(id) => Some(id),
            Self::Range(..) | Self::Empty(..) => None,
        }
    }
}

impl FromStr for TokenId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidId(s.to_string());
        if let Some((start, end)) = s.split_once('-') {
            let start = start.parse().map_err(|_| invalid())?;
            let end = end.parse().map_err(|_| invalid())?;
            return Ok(Self::Range(start, end));
        }
        if let Some((word, sub)) = s.split_once('.') {
            let word = word.parse().map_err(|_| invalid())?;
            let sub = sub.parse().map_err(|_| invalid())?;
            return Ok(Self::Empty(word, sub));
        }
        s.parse().map(Self::Word).map_err(|_| invalid())
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(id) => write!(f, "{id}"),
            Self::Range(start, end) => write!(f, "{start}-{end}"),
            Self::Empty(word, sub) => write!(f, "{word}.{sub}"),
        }
    }
}

/// Universal part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    /// Anything outside the universal inventory, kept verbatim.
    Other(String),
}

impl Upos {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Parse a tag, keeping unknown values as [`Upos::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            "X" => Self::X,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Upos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Head of an enhanced dependency, which may be an empty node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnhancedHead {
    Word(usize),
    Empty(usize, usize),
}

impl EnhancedHead {
    pub fn word(self) -> Option<usize> {
        match self {
            Self::Word(id) => Some(id),
            Self::Empty(..) => None,
        }
    }
}

impl FromStr for EnhancedHead {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<TokenId>() {
            Ok(TokenId::Word(id)) => Ok(Self::Word(id)),
            Ok(TokenId::Empty(word, sub)) => Ok(Self::Empty(word, sub)),
            _ => Err(ModelError::InvalidHead(s.to_string())),
        }
    }
}

impl fmt::Display for EnhancedHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(id) => write!(f, "{id}"),
            Self::Empty(word, sub) => write!(f, "{word}.{sub}"),
        }
    }
}

/// One arc of the enhanced graph: `head:relation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedDep {
    pub relation: String,
    pub head: EnhancedHead,
}

impl EnhancedDep {
    pub fn is(&self, relation: &str, head: usize) -> bool {
        self.relation == relation && self.head == EnhancedHead::Word(head)
    }
}

impl FromStr for EnhancedDep {
    type Err = ModelError;

    /// Splits on the first `:` so relation subtypes stay intact.
    fn from_str(s: &str) -> Result<Self> {
        let (head, relation) = s
            .split_once(':')
            .ok_or_else(|| ModelError::InvalidEnhancedDep(s.to_string()))?;
        Ok(Self {
            relation: relation.to_string(),
            head: head.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub form: String,
    pub lemma: String,
    pub upos: Upos,
    pub xpos: String,
    pub feats: Features,
    /// `None` when the HEAD column is `_`.
    pub head: Option<usize>,
    pub deprel: String,
    /// `None` when the DEPS column is `_`.
    pub deps: Option<Vec<EnhancedDep>>,
    pub misc: Misc,
    /// Set when a following `goeswith` token was folded into this one.
    #[serde(default)]
    pub merged: bool,
}

impl Token {
    pub fn is_regular(&self) -> bool {
        matches!(self.id, TokenId::Word(_))
    }

    /// `CorrectForm` from MISC when present and non-empty, else the form.
    pub fn effective_form(&self) -> &str {
        match self.misc.value("CorrectForm") {
            Some(correct) if !correct.is_empty() => correct,
            _ => &self.form,
        }
    }
}
