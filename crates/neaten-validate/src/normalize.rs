//! Tree normalization ahead of rule checking.
//!
//! Wrongly split words (`goeswith`) are folded back together so that later
//! checks see the intended word, and the lemma registry is fed with the
//! forms that result.

use neaten_model::{Sentence, Token};
use tracing::trace;

use crate::registry::LemmaRegistry;

const GOESWITH: &str = "goeswith";

/// XPOS values that stand in for the tag of a whole `goeswith` chain.
const PLACEHOLDER_XPOS: [&str; 2] = ["AFX", "GW"];

/// Normalize `sentence` in place and tally its lemmas.
///
/// Returns the number of `goeswith` merges performed.
pub fn normalize(sentence: &mut Sentence, registry: &mut LemmaRegistry) -> usize {
    let positions: Vec<usize> = sentence
        .tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_regular())
        .map(|(index, _)| index)
        .collect();

    let mut merges = 0;
    let mut prev_key: Option<(String, String)> = None;
    for (k, &index) in positions.iter().enumerate() {
        let key = {
            let token = &sentence.tokens[index];
            (token.effective_form().to_string(), token.xpos.clone())
        };
        let prev_index = k.checked_sub(1).map(|p| positions[p]);
        let is_goeswith = sentence.tokens[index].deprel == GOESWITH;

        if let (true, Some(prev_index)) = (is_goeswith, prev_index) {
            let prev = &sentence.tokens[prev_index];
            let upos = prev.upos.clone();
            let mut feats = prev.feats.clone();
            feats.remove("Typo");
            let token = &mut sentence.tokens[index];
            token.upos = upos;
            token.feats = feats;
        }

        match (is_goeswith, prev_index, &prev_key) {
            (true, Some(prev_index), Some((prev_form, prev_xpos)))
                if sentence.tokens[prev_index].deprel != GOESWITH =>
            {
                let piece = sentence.tokens[index].form.clone();
                let prev = &mut sentence.tokens[prev_index];
                registry.retract(prev_form, prev_xpos, &prev.lemma);
                prev.merged = true;
                prev.form.push_str(&piece);
                registry.record(
                    prev.effective_form(),
                    &prev.xpos,
                    &prev.lemma,
                    &sentence.sent_id,
                );
                merges += 1;
                trace!(sent_id = %sentence.sent_id, form = %prev.form, "merged goeswith");
            }
            _ => {
                let token = &sentence.tokens[index];
                registry.record(&key.0, &key.1, &token.lemma, &sentence.sent_id);
            }
        }
        prev_key = Some(key);
    }

    // Backwards, so the substantive tag at the end of a chain reaches its start.
    for pair in positions.windows(2).rev() {
        let (index, next) = (pair[0], pair[1]);
        if sentence.tokens[next].deprel == GOESWITH
            && PLACEHOLDER_XPOS.contains(&sentence.tokens[index].xpos.as_str())
        {
            let xpos = sentence.tokens[next].xpos.clone();
            sentence.tokens[index].xpos = xpos;
        }
    }

    merges
}

/// Form to check a token's closed-class entry against.
///
/// With `Typo=Yes` the correction comes from `CorrectForm`, or from a
/// `goeswith` merge. Returns `None` when a typo has neither.
pub fn corrected_form(token: &Token) -> Option<&str> {
    if !token.feats.is("Typo", "Yes") {
        return Some(&token.form);
    }
    if token.misc.contains("CorrectForm") {
        return Some(match token.misc.value("CorrectForm") {
            Some(correct) if !correct.is_empty() => correct,
            _ => &token.form,
        });
    }
    token.merged.then_some(token.form.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neaten_model::{Features, Misc, TokenId, Upos};

    fn token(id: usize, form: &str, lemma: &str, upos: Upos, xpos: &str, deprel: &str) -> Token {
        Token {
            id: TokenId::Word(id),
            form: form.into(),
            lemma: lemma.into(),
            upos,
            xpos: xpos.into(),
            feats: Features::default(),
            head: Some(0),
            deprel: deprel.into(),
            deps: None,
            misc: Misc::default(),
            merged: false,
        }
    }

    fn split_word() -> Sentence {
        let mut first = token(1, "every", "everything", Upos::Pron, "AFX", "root");
        first.feats = Features::parse("Number=Sing|PronType=Tot|Typo=Yes");
        Sentence {
            sent_id: "s1".into(),
            tokens: vec![
                first,
                token(2, "thing", "_", Upos::X, "GW", "goeswith"),
                token(3, "s", "_", Upos::X, "NN", "goeswith"),
            ],
            ..Sentence::default()
        }
    }

    #[test]
    fn goeswith_copies_tags_and_merges_form() {
        let mut sentence = split_word();
        let mut registry = LemmaRegistry::new();
        assert_eq!(normalize(&mut sentence, &mut registry), 1);

        let first = &sentence.tokens[0];
        assert!(first.merged);
        assert_eq!(first.form, "everything");
        let second = &sentence.tokens[1];
        assert_eq!(second.upos, Upos::Pron);
        assert!(!second.feats.contains("Typo"));
        assert!(second.feats.is("PronType", "Tot"));
        // Chained goeswith tokens copy from their own predecessor.
        assert_eq!(sentence.tokens[2].upos, Upos::Pron);
    }

    #[test]
    fn merge_replaces_partial_tally() {
        let mut sentence = split_word();
        let mut registry = LemmaRegistry::new();
        normalize(&mut sentence, &mut registry);
        assert_eq!(registry.count("every", "AFX", "everything"), 0);
        assert_eq!(registry.count("everything", "AFX", "everything"), 1);
        assert_eq!(registry.count("s", "NN", "_"), 1);
        assert_eq!(registry.total(), 2);
    }

    #[test]
    fn placeholder_xpos_propagates_backwards() {
        let mut sentence = split_word();
        normalize(&mut sentence, &mut LemmaRegistry::new());
        let tags: Vec<_> = sentence.tokens.iter().map(|t| t.xpos.as_str()).collect();
        assert_eq!(tags, ["NN", "NN", "NN"]);
    }

    #[test]
    fn corrected_form_prefers_correct_form() {
        let mut typo = token(1, "teh", "the", Upos::Det, "DT", "det");
        typo.feats = Features::parse("Typo=Yes");
        assert_eq!(corrected_form(&typo), None);

        typo.misc = Misc::parse("CorrectForm=the");
        assert_eq!(corrected_form(&typo), Some("the"));

        typo.misc = Misc::parse("CorrectForm=_");
        assert_eq!(corrected_form(&typo), Some("teh"));

        let plain = token(1, "the", "the", Upos::Det, "DT", "det");
        assert_eq!(corrected_form(&plain), Some("the"));
    }
}
