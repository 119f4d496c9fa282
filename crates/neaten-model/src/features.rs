//! FEATS and MISC columns.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Morphological features. Multi-valued features such as `PronType=Int,Rel`
/// are kept as a single string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Features(BTreeMap<String, String>);

impl Features {
    /// Parse a FEATS column; `_` is the empty bundle.
    pub fn parse(column: &str) -> Self {
        let mut map = BTreeMap::new();
        if column != "_" && !column.is_empty() {
            for pair in column.split('|') {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                map.insert(name.to_string(), value.to_string());
            }
        }
        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// True when `name` is present with exactly `value`.
    pub fn is(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("_");
        }
        let joined: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&joined.join("|"))
    }
}

/// Side annotations. A bare key or a `_` value parses as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Misc(BTreeMap<String, Option<String>>);

impl Misc {
    pub fn parse(column: &str) -> Self {
        let mut map = BTreeMap::new();
        if column != "_" && !column.is_empty() {
            for pair in column.split('|') {
                match pair.split_once('=') {
                    Some((key, "_")) => map.insert(key.to_string(), None),
                    Some((key, value)) => map.insert(key.to_string(), Some(value.to_string())),
                    None => map.insert(pair.to_string(), None),
                };
            }
        }
        Self(map)
    }

    /// The value of `key`, or `None` when absent or null.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Option::as_deref)
    }

    /// True when `key` is present, even without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is(&self, key: &str, value: &str) -> bool {
        self.value(key) == Some(value)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
