//! Lexicon entries and expected feature values.

use std::collections::BTreeMap;

use crate::error::{LexiconError, Result};

/// Expected value of one feature on a closed-class item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Must be present with exactly this value.
    Required(String),
    /// Must be present with one of these values.
    OneOf(Vec<String>),
    /// May be absent; when present must be one of these values.
    Optional(Vec<String>),
}

impl Expected {
    /// Whether an observed value (or its absence) satisfies the expectation.
    pub fn admits(&self, observed: Option<&str>) -> bool {
        match (self, observed) {
            (Self::Optional(_), None) => true,
            (_, None) => false,
            (Self::Required(value), Some(seen)) => value == seen,
            (Self::OneOf(values) | Self::Optional(values), Some(seen)) => {
                values.iter().any(|value| value == seen)
            }
        }
    }

    /// Comma-joined list of acceptable values, as written in messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Required(value) => value.clone(),
            Self::OneOf(values) | Self::Optional(values) => values.join(","),
        }
    }

    /// Parse the right-hand side of a spec such as `Case=Acc,Nom`.
    fn parse(optional: bool, values: &str) -> Self {
        let list: Vec<String> = values.split(',').map(str::to_string).collect();
        match (optional, list.len()) {
            (true, _) => Self::Optional(list),
            (false, 1) => Self::Required(values.to_string()),
            (false, _) => Self::OneOf(list),
        }
    }
}

/// Canonical lemma and expected features for a (form, XPOS) key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexEntry {
    pub lemma: String,
    /// Expectations on FEATS.
    pub features: BTreeMap<String, Expected>,
    /// Expectations on MISC (`CorrectForm`, `ModernForm`).
    pub misc: BTreeMap<String, Expected>,
}

impl LexEntry {
    pub fn feature(&self, name: &str) -> Option<&Expected> {
        self.features.get(name)
    }

    pub fn misc(&self, name: &str) -> Option<&Expected> {
        self.misc.get(name)
    }
}

/// Parse `Name=V1,V2|Other?=V` into expectations. A `?` after the name
/// marks the feature optional.
pub(crate) fn parse_spec(spec: &str, file: &'static str) -> Result<BTreeMap<String, Expected>> {
    let mut parsed = BTreeMap::new();
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(parsed);
    }
    for part in spec.split('|') {
        let Some((name, values)) = part.split_once('=') else {
            return Err(LexiconError::InvalidValue {
                field: "features",
                value: part.to_string(),
                file,
            });
        };
        let (name, optional) = match name.strip_suffix('?') {
            Some(stripped) => (stripped, true),
            None => (name, false),
        };
        if name.is_empty() || values.is_empty() {
            return Err(LexiconError::InvalidValue {
                field: "features",
                value: part.to_string(),
                file,
            });
        }
        parsed.insert(name.to_string(), Expected::parse(optional, values));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_list_and_optional() {
        let spec = parse_spec("Case=Gen|Gender?=Neut|Number=Plur,Sing", "test").unwrap();
        assert_eq!(spec["Case"], Expected::Required("Gen".into()));
        assert_eq!(spec["Gender"], Expected::Optional(vec!["Neut".into()]));
        assert_eq!(
            spec["Number"],
            Expected::OneOf(vec!["Plur".into(), "Sing".into()])
        );
    }

    #[test]
    fn admits_follows_value_kind() {
        let optional = Expected::Optional(vec!["Neut".into()]);
        assert!(optional.admits(None));
        assert!(optional.admits(Some("Neut")));
        assert!(!optional.admits(Some("Fem")));

        let one_of = Expected::OneOf(vec!["Acc".into(), "Nom".into()]);
        assert!(!one_of.admits(None));
        assert!(one_of.admits(Some("Nom")));
        assert_eq!(one_of.describe(), "Acc,Nom");

        let required = Expected::Required("Acc".into());
        assert!(!required.admits(Some("Acc,Nom")));
    }

    #[test]
    fn rejects_malformed_spec() {
        assert!(parse_spec("Case", "test").is_err());
        assert!(parse_spec("=Acc", "test").is_err());
        assert!(parse_spec("", "test").unwrap().is_empty());
    }
}
