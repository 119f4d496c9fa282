//! Cross-corpus lemma consistency.
//!
//! Every regular token is tallied under its effective form and XPOS. After
//! the whole corpus has been read, lemmas that lose to a majority lemma for
//! the same (form, XPOS) are reported as suspicious.

use std::collections::{BTreeMap, BTreeSet};

use neaten_model::{Diagnostic, Severity};

/// Rule code of rare-lemma findings.
pub const RARE_LEMMA: &str = "rare-lemma";

/// Known minority lemmas that are correct.
const ALLOWED_RARE_LEMMAS: &[(&str, &str, &str)] = &[
    ("Democratic", "JJ", "Democratic"),
    ("Water", "NNP", "Waters"),
    ("Sun", "NNP", "Sunday"),
    ("a", "IN", "of"),
    ("a", "IN", "as"),
    ("car", "NN", "card"),
    ("lay", "VB", "lay"),
    ("that", "IN", "than"),
    ("da", "NNP", "Danish"),
    ("Jan", "NNP", "Jan"),
    ("Jan", "NNP", "January"),
    ("'s", "VBZ", "have"),
    ("’s", "VBZ", "have"),
    ("`s", "VBZ", "have"),
    ("'d", "VBD", "do"),
    ("'d", "VBD", "have"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LemmaTally {
    lemma: String,
    count: usize,
    sentences: BTreeSet<String>,
}

/// Lemma counts per (form, XPOS), in first-seen lemma order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaRegistry {
    entries: BTreeMap<(String, String), Vec<LemmaTally>>,
}

impl LemmaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, form: &str, xpos: &str, lemma: &str, sent_id: &str) {
        let tally = self.tally_mut(form, xpos, lemma);
        tally.count += 1;
        tally.sentences.insert(sent_id.to_string());
    }

    /// Undo one earlier `record`. Sentence ids stay attached.
    ///
    /// Returns `false` when there was nothing to retract.
    pub fn retract(&mut self, form: &str, xpos: &str, lemma: &str) -> bool {
        let Some(tallies) = self.entries.get_mut(&(form.to_string(), xpos.to_string())) else {
            return false;
        };
        match tallies.iter_mut().find(|tally| tally.lemma == lemma) {
            Some(tally) if tally.count > 0 => {
                tally.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Current count of `lemma` for (form, XPOS).
    pub fn count(&self, form: &str, xpos: &str, lemma: &str) -> usize {
        self.entries
            .get(&(form.to_string(), xpos.to_string()))
            .and_then(|tallies| tallies.iter().find(|tally| tally.lemma == lemma))
            .map_or(0, |tally| tally.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries
            .values()
            .flat_map(|tallies| tallies.iter().map(|tally| tally.count))
            .sum()
    }

    /// Fold another registry into this one. Lemmas new to a key are appended
    /// after the ones already seen here.
    pub fn merge(&mut self, other: LemmaRegistry) {
        for ((form, xpos), tallies) in other.entries {
            for other_tally in tallies {
                let tally = self.tally_mut(&form, &xpos, &other_tally.lemma);
                tally.count += other_tally.count;
                tally.sentences.extend(other_tally.sentences);
            }
        }
    }

    /// Rare lemmas over the whole corpus, in sorted (form, XPOS) order.
    pub fn report(&self) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for ((form, xpos), tallies) in &self.entries {
            let total: usize = tallies.iter().map(|tally| tally.count).sum();
            if total <= 1 {
                continue;
            }
            let mut ranked: Vec<&LemmaTally> =
                tallies.iter().filter(|tally| tally.lemma != "_").collect();
            // Stable: equal counts keep first-seen order.
            ranked.sort_by(|a, b| b.count.cmp(&a.count));
            let Some((majority, rest)) = ranked.split_first() else {
                continue;
            };
            for tally in rest {
                if tally.count == 0 || is_allowed(form, xpos, &tally.lemma) {
                    continue;
                }
                let sentences: Vec<&str> = tally.sentences.iter().map(String::as_str).collect();
                findings.push(Diagnostic {
                    severity: Severity::Suspicious,
                    code: RARE_LEMMA,
                    message: format!(
                        "rare lemma {} for {form}/{xpos} in {} (majority: {})",
                        tally.lemma,
                        sentences.join(", "),
                        majority.lemma
                    ),
                    sent_id: String::new(),
                    token: None,
                    form: Some(form.clone()),
                    filename: String::new(),
                });
            }
        }
        findings
    }

    fn tally_mut(&mut self, form: &str, xpos: &str, lemma: &str) -> &mut LemmaTally {
        let tallies = self
            .entries
            .entry((form.to_string(), xpos.to_string()))
            .or_default();
        let index = match tallies.iter().position(|tally| tally.lemma == lemma) {
            Some(index) => index,
            None => {
                tallies.push(LemmaTally {
                    lemma: lemma.to_string(),
                    ..LemmaTally::default()
                });
                tallies.len() - 1
            }
        };
        &mut tallies[index]
    }
}

fn is_allowed(form: &str, xpos: &str, lemma: &str) -> bool {
    ALLOWED_RARE_LEMMAS
        .iter()
        .any(|&(f, x, l)| f == form && x == xpos && l == lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(registry: &LemmaRegistry) -> Vec<String> {
        registry.report().into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn reports_minority_lemma_with_sorted_sentences() {
        let mut registry = LemmaRegistry::new();
        registry.record("saw", "VBD", "see", "s1");
        registry.record("saw", "VBD", "see", "s2");
        registry.record("saw", "VBD", "saw", "s4");
        registry.record("saw", "VBD", "saw", "s3");
        registry.record("saw", "VBD", "see", "s5");
        assert_eq!(
            messages(&registry),
            ["rare lemma saw for saw/VBD in s3, s4 (majority: see)"]
        );
    }

    #[test]
    fn single_occurrence_is_never_reported() {
        let mut registry = LemmaRegistry::new();
        registry.record("saw", "VBD", "saw", "s1");
        assert!(registry.report().is_empty());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut registry = LemmaRegistry::new();
        registry.record("left", "VBD", "leave", "s1");
        registry.record("left", "VBD", "left", "s2");
        assert_eq!(
            messages(&registry),
            ["rare lemma left for left/VBD in s2 (majority: leave)"]
        );
    }

    #[test]
    fn underscore_lemma_counts_but_is_not_ranked() {
        let mut registry = LemmaRegistry::new();
        registry.record("gon", "VBG", "_", "s1");
        registry.record("gon", "VBG", "_", "s2");
        registry.record("gon", "VBG", "go", "s3");
        assert!(registry.report().is_empty());
    }

    #[test]
    fn allow_list_suppresses_known_lemmas() {
        let mut registry = LemmaRegistry::new();
        registry.record("'s", "VBZ", "be", "s1");
        registry.record("'s", "VBZ", "be", "s2");
        registry.record("'s", "VBZ", "have", "s3");
        assert!(registry.report().is_empty());
    }

    #[test]
    fn retracted_lemma_is_not_reported() {
        let mut registry = LemmaRegistry::new();
        registry.record("some", "DT", "some", "s1");
        registry.record("some", "DT", "some", "s2");
        registry.record("some", "DT", "somebody", "s3");
        assert!(registry.retract("some", "DT", "somebody"));
        assert!(!registry.retract("some", "DT", "somebody"));
        assert!(registry.report().is_empty());
        assert_eq!(registry.total(), 2);
    }

    #[test]
    fn merge_adds_counts() {
        let mut left = LemmaRegistry::new();
        left.record("ran", "VBD", "run", "s1");
        let mut right = LemmaRegistry::new();
        right.record("ran", "VBD", "run", "s2");
        right.record("ran", "VBD", "ran", "s3");
        left.merge(right);
        assert_eq!(left.count("ran", "VBD", "run"), 2);
        assert_eq!(
            messages(&left),
            ["rare lemma ran for ran/VBD in s3 (majority: run)"]
        );
    }
}
