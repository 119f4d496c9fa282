//! Validation driver: one pass per sentence, one report per corpus.

use std::collections::BTreeSet;

use neaten_model::{Diagnostic, Sentence};
use tracing::{debug, info};

use crate::checks::{check_token, passive};
use crate::context::{Prev, SentenceView};
use crate::error::Result;
use crate::findings::Findings;
use crate::normalize::normalize;
use crate::registry::LemmaRegistry;

/// Findings that need the whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    /// Minority lemmas for a (form, XPOS), in sorted key order.
    pub rare_lemmas: Vec<Diagnostic>,
    /// NNS lemmas identical to their form, most frequent first.
    pub suspicious_nns: Vec<String>,
    pub sentences: usize,
    pub merges: usize,
}

impl CorpusReport {
    /// Number of suspicious lemma types, as announced on stderr.
    pub fn suspicious_lemma_types(&self) -> usize {
        self.rare_lemmas.len()
    }
}

/// Validates sentences in input order and accumulates corpus state.
#[derive(Debug, Default)]
pub struct Validator {
    registry: LemmaRegistry,
    /// NNS lemma hit counts in first-seen order.
    nns_lemmas: Vec<(String, usize)>,
    sentences: usize,
    merges: usize,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and check one sentence.
    ///
    /// Diagnostics come back in evaluation order: every word-level rule for
    /// word 1, then word 2, and so on, followed by the passive checks. A
    /// malformed head is returned as an error before any rule runs.
    pub fn validate_sentence(&mut self, sentence: &mut Sentence) -> Result<Vec<Diagnostic>> {
        self.merges += normalize(sentence, &mut self.registry);
        self.sentences += 1;

        let view = SentenceView::new(sentence)?;
        let mut findings = Findings::new(view.sent_id(), view.filename());
        let mut passive_verbs = BTreeSet::new();
        let mut prev = Prev::default();
        for id in view.ids() {
            let ctx = view.context(id, prev);
            if ctx.has_feat("Voice", "Pass") {
                passive_verbs.insert(id);
            }
            check_token(&view, &ctx, &mut findings);
            if ctx.func.contains(":pass") && ctx.parent_id != 0 {
                passive_verbs.insert(ctx.parent_id);
            }
            prev = ctx.as_prev();
        }
        passive::check(&view, &passive_verbs, &mut findings);

        let (diagnostics, nns_lemmas) = findings.into_parts();
        for lemma in nns_lemmas {
            self.note_nns_lemma(lemma);
        }
        debug!(
            sent_id = %view.sent_id(),
            words = view.len(),
            diagnostics = diagnostics.len(),
            "validated sentence"
        );
        Ok(diagnostics)
    }

    /// Validate a batch of sentences, stopping at the first fatal error.
    pub fn validate_all<'a>(
        &mut self,
        sentences: impl IntoIterator<Item = &'a mut Sentence>,
    ) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        for sentence in sentences {
            diagnostics.extend(self.validate_sentence(sentence)?);
        }
        Ok(diagnostics)
    }

    pub fn registry(&self) -> &LemmaRegistry {
        &self.registry
    }

    /// Fold another validator's corpus state into this one.
    pub fn merge(&mut self, other: Validator) {
        self.registry.merge(other.registry);
        for (lemma, count) in other.nns_lemmas {
            self.add_nns_lemma(lemma, count);
        }
        self.sentences += other.sentences;
        self.merges += other.merges;
    }

    /// Run the cross-corpus analysis.
    pub fn finish(self) -> CorpusReport {
        let rare_lemmas = self.registry.report();
        let mut nns = self.nns_lemmas;
        // Stable: ties keep first-seen order.
        nns.sort_by(|a, b| b.1.cmp(&a.1));
        info!(
            sentences = self.sentences,
            merges = self.merges,
            rare_lemmas = rare_lemmas.len(),
            "corpus analysis complete"
        );
        CorpusReport {
            rare_lemmas,
            suspicious_nns: nns.into_iter().map(|(lemma, _)| lemma).collect(),
            sentences: self.sentences,
            merges: self.merges,
        }
    }

    fn note_nns_lemma(&mut self, lemma: String) {
        self.add_nns_lemma(lemma, 1);
    }

    fn add_nns_lemma(&mut self, lemma: String, count: usize) {
        match self.nns_lemmas.iter_mut().find(|(seen, _)| *seen == lemma) {
            Some((_, total)) => *total += count,
            None => self.nns_lemmas.push((lemma, count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nns_lemmas_rank_by_count_then_first_seen() {
        let mut validator = Validator::new();
        for lemma in ["bells", "whistles", "kudos", "whistles"] {
            validator.note_nns_lemma(lemma.to_string());
        }
        let report = validator.finish();
        assert_eq!(report.suspicious_nns, ["whistles", "bells", "kudos"]);
    }

    #[test]
    fn merge_combines_nns_counts() {
        let mut left = Validator::new();
        left.note_nns_lemma("bells".to_string());
        let mut right = Validator::new();
        right.note_nns_lemma("kudos".to_string());
        right.note_nns_lemma("kudos".to_string());
        left.merge(right);
        assert_eq!(left.finish().suspicious_nns, ["kudos", "bells"]);
    }
}
