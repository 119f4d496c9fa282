//! Property tests for lemma tallies under `goeswith` merging.

use neaten_ingest::parse_str;
use neaten_validate::{LemmaRegistry, Validator};
use proptest::prelude::*;

const WORDS: &[(&str, &str)] = &[
    ("every", "AFX"),
    ("thing", "NN"),
    ("some", "DT"),
    ("where", "WRB"),
    ("be", "VB"),
];

/// A sentence of `(word, attached_with_goeswith)` pairs, the first being the root.
fn sentence(pieces: &[(usize, bool)]) -> String {
    let mut conllu = String::from("# sent_id = prop-0001\n");
    for (index, &(word, goeswith)) in pieces.iter().enumerate() {
        let id = index + 1;
        let (form, xpos) = WORDS[word];
        let (head, deprel) = match (id, goeswith) {
            (1, _) => (0, "root"),
            (_, true) => (id - 1, "goeswith"),
            (_, false) => (1, "dep"),
        };
        conllu.push_str(&format!(
            "{id}\t{form}\t{form}\tX\t{xpos}\t_\t{head}\t{deprel}\t_\t_\n"
        ));
    }
    conllu.push('\n');
    conllu
}

fn pieces() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0..WORDS.len(), any::<bool>()), 1..12)
}

proptest! {
    #[test]
    fn every_word_is_tallied_once_per_merge(pieces in pieces()) {
        let mut sentences = parse_str(&sentence(&pieces), "prop.conllu").unwrap();
        let mut validator = Validator::new();
        validator.validate_all(sentences.iter_mut()).unwrap();
        let total = validator.registry().total();
        let report = validator.finish();
        prop_assert_eq!(total + report.merges, pieces.len());
    }

    #[test]
    fn merged_registries_sum_counts(
        left in prop::collection::vec(0..WORDS.len(), 0..20),
        right in prop::collection::vec(0..WORDS.len(), 0..20),
    ) {
        let mut merged = LemmaRegistry::new();
        let mut other = LemmaRegistry::new();
        for &word in &left {
            let (form, xpos) = WORDS[word];
            merged.record(form, xpos, form, "left");
        }
        for &word in &right {
            let (form, xpos) = WORDS[word];
            other.record(form, xpos, form, "right");
        }
        merged.merge(other);
        prop_assert_eq!(merged.total(), left.len() + right.len());
        for (word, &(form, xpos)) in WORDS.iter().enumerate() {
            let expected = left.iter().chain(&right).filter(|&&w| w == word).count();
            prop_assert_eq!(merged.count(form, xpos, form), expected);
        }
    }
}
