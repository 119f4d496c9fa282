//! Validation findings.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Per-token or per-sentence annotation warning.
    Warning,
    /// Corpus-level lemma inconsistency.
    Suspicious,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Warning => "WARN",
            Self::Suspicious => "SUSPICIOUS",
        }
    }
}

/// A single finding. Diagnostics are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable rule identifier, e.g. `aux-pass-lemma`.
    pub code: &'static str,
    pub message: String,
    pub sent_id: String,
    pub token: Option<usize>,
    pub form: Option<String>,
    pub filename: String,
}

impl Diagnostic {
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            sent_id: String::new(),
            token: None,
            form: None,
            filename: String::new(),
        }
    }

    #[must_use]
    pub fn in_sentence(mut self, sent_id: &str, filename: &str) -> Self {
        self.sent_id = sent_id.to_string();
        self.filename = filename.to_string();
        self
    }

    #[must_use]
    pub fn at_token(mut self, id: usize, form: &str) -> Self {
        self.token = Some(id);
        self.form = Some(form.to_string());
        self
    }

    /// Ordering key for merging output produced out of order.
    pub fn location_key(&self) -> (&str, &str, Option<usize>) {
        (&self.filename, &self.sent_id, self.token)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.severity == Severity::Suspicious {
            return write!(f, "! {}", self.message);
        }
        write!(f, "{}: {} in {}", self.severity.label(), self.message, self.sent_id)?;
        if let Some(id) = self.token {
            write!(f, " @ token {id}")?;
            if let Some(form) = &self.form {
                write!(f, " ({form})")?;
            }
        }
        if !self.filename.is_empty() {
            write!(f, " {}", self.filename)?;
        }
        Ok(())
    }
}
