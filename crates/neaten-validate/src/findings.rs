//! Collector for the diagnostics of one sentence.

use neaten_model::Diagnostic;

use crate::context::TokenContext;

/// Diagnostics in evaluation order, plus the facts other passes need.
#[derive(Debug, Default)]
pub struct Findings {
    sent_id: String,
    filename: String,
    diagnostics: Vec<Diagnostic>,
    nns_lemmas: Vec<String>,
}

impl Findings {
    pub fn new(sent_id: &str, filename: &str) -> Self {
        Self {
            sent_id: sent_id.to_string(),
            filename: filename.to_string(),
            ..Self::default()
        }
    }

    /// Warn about the word in `ctx`.
    pub fn token(&mut self, ctx: &TokenContext<'_>, code: &'static str, message: impl Into<String>) {
        self.word(ctx.id, ctx.tok, code, message);
    }

    /// Warn about word `id` with effective form `form`.
    pub fn word(&mut self, id: usize, form: &str, code: &'static str, message: impl Into<String>) {
        self.diagnostics.push(
            Diagnostic::warning(code, message)
                .in_sentence(&self.sent_id, &self.filename)
                .at_token(id, form),
        );
    }

    /// An NNS lemma that equals its form, for the corpus summary.
    pub fn note_nns_lemma(&mut self, lemma: &str) {
        self.nns_lemmas.push(lemma.to_string());
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<Diagnostic>, Vec<String>) {
        (self.diagnostics, self.nns_lemmas)
    }
}
