//! Passive constructions, checked once per sentence.
//!
//! A verb with a `*:pass` dependent is passive: it should carry
//! `Voice=Pass`, be tagged VBN, take only passive subjects, have
//! `aux:pass` as its last auxiliary and no copula. `obl:agent` must be a
//! `by` phrase on a passive verb, and a bare VBN with no auxiliary is
//! itself expected to be passive.

use std::collections::BTreeSet;

use neaten_model::Token;

use crate::context::SentenceView;
use crate::findings::Findings;

/// Sentence missing its `be` aux:pass.
const MISSING_AUX_PASS_SENTENCE: &str = "answers-20111106035951AADq0Qg_ans-0012";

/// VBN without auxiliaries read as perfect.
const PERFECT_VBN_SENTENCES: &[&str] = &[
    "reviews-122564-0003",
    "answers-20111108104724AAuBUR7_ans-0001",
];

const PASSIVE_SUBJECTS: &[&str] = &["nsubj:pass", "csubj:pass", "nsubj:outer", "csubj:outer"];

fn is_voice_pass(token: &Token) -> bool {
    token.feats.is("Voice", "Pass")
}

/// Check the passive verbs collected for the sentence, then the
/// `obl:agent` and VBN rules over all words.
pub fn check(view: &SentenceView<'_>, passive_verbs: &BTreeSet<usize>, out: &mut Findings) {
    for &verb in passive_verbs {
        check_passive_verb(view, verb, out);
    }
    check_agents(view, out);
    check_participles(view, out);
}

fn check_passive_verb(view: &SentenceView<'_>, verb: usize, out: &mut Findings) {
    let token = view.word(verb);
    let form = view.form(verb);
    let lemma = &token.lemma;
    let funcs: Vec<&str> = view
        .dependents(verb)
        .iter()
        .map(|&child| view.deprel(child))
        .collect();

    if !is_voice_pass(token) {
        out.word(
            verb,
            form,
            "passive-voice",
            format!("Passive verb with lemma '{lemma}' should have Voice=Pass"),
        );
    }
    if !matches!(token.xpos.as_str(), "VBN" | "MD") {
        out.word(
            verb,
            form,
            "passive-tag",
            format!("Passive verb with lemma '{lemma}' should be VBN"),
        );
    }

    // Dependents are in id order already.
    let auxiliaries: Vec<&str> = funcs
        .iter()
        .copied()
        .filter(|func| func.starts_with("aux"))
        .collect();
    if let Some((last, earlier)) = auxiliaries.split_last() {
        let well_ordered = earlier.iter().all(|&func| func == "aux") && *last == "aux:pass";
        if !well_ordered && view.sent_id() != MISSING_AUX_PASS_SENTENCE {
            out.word(
                verb,
                form,
                "passive-aux",
                format!(
                    "Passive verb with lemma '{lemma}' has suspicious aux(:pass) dependents (only the last should be aux:pass)"
                ),
            );
        }
    }

    let subjects: BTreeSet<&str> = funcs
        .iter()
        .copied()
        .filter(|func| func.contains("subj"))
        .collect();
    let strict_subset = subjects.iter().all(|func| PASSIVE_SUBJECTS.contains(func))
        && subjects.len() < PASSIVE_SUBJECTS.len();
    if !strict_subset {
        let listed: Vec<String> = subjects.iter().map(|func| format!("'{func}'")).collect();
        out.word(
            verb,
            form,
            "passive-subject",
            format!(
                "Passive verb with lemma '{lemma}' has subject dependents {{{}}}",
                listed.join(", ")
            ),
        );
    }

    if funcs.contains(&"cop") {
        let raised = funcs.contains(&"aux:pass") && funcs.iter().any(|func| func.contains(":outer"));
        if !raised {
            out.word(
                verb,
                form,
                "passive-cop",
                format!("Passive verb with lemma '{lemma}' has cop dependent"),
            );
        }
    }
}

fn check_agents(view: &SentenceView<'_>, out: &mut Findings) {
    for id in view.ids() {
        if view.deprel(id) != "obl:agent" {
            continue;
        }
        let head = view.head(id);
        let head_token = (head != 0).then(|| view.word(head));
        let lemmas = format!(
            "{} <- {}",
            view.word(id).lemma,
            head_token.map_or("", |token| token.lemma.as_str())
        );
        if !head_token.is_some_and(is_voice_pass) {
            out.word(
                id,
                view.form(id),
                "agent-voice",
                format!("Voice=Pass missing from verb that heads obl:agent (lemmas: {lemmas})"),
            );
        }
        let has_by = view
            .dependents(id)
            .iter()
            .any(|&child| view.word(child).lemma == "by" && view.deprel(child) == "case");
        if !has_by {
            out.word(
                id,
                view.form(id),
                "agent-by",
                format!("obl:agent without 'by' (lemmas: {lemmas})"),
            );
        }
    }
}

fn check_participles(view: &SentenceView<'_>, out: &mut Findings) {
    for id in view.ids() {
        let token = view.word(id);
        if token.xpos != "VBN" {
            continue;
        }
        let form = view.form(id);
        let voice_pass = is_voice_pass(token);
        if matches!(view.deprel(id), "aux" | "aux:pass" | "cop") {
            if voice_pass {
                out.word(
                    id,
                    form,
                    "participle-voice",
                    "Voice=Pass prohibited on verbs functioning as auxiliaries",
                );
            }
            continue;
        }
        // "(be) supposed (to)"
        if token.lemma == "suppose" {
            if !voice_pass {
                out.word(id, form, "participle-voice", "'supposed (to)' missing Voice=Pass?");
            }
            continue;
        }

        let funcs: Vec<&str> = view
            .dependents(id)
            .iter()
            .map(|&child| view.deprel(child))
            .collect();
        let pass_marked = funcs
            .iter()
            .any(|func| func.contains(":pass") || *func == "obl:agent");
        let has_aux = funcs.contains(&"aux");

        if !voice_pass && !pass_marked && !has_aux {
            let head = view.head(id);
            // "have" can scope over a coordination; "I (have) got to leave".
            let exempt = (view.deprel(id) == "conj" && head != 0 && view.word(head).xpos == "VBN")
                || token.lemma == "get"
                || PERFECT_VBN_SENTENCES.contains(&view.sent_id());
            if !exempt {
                out.word(
                    id,
                    form,
                    "participle-voice",
                    "Voice=Pass missing from VBN verb with no aux dependent",
                );
            }
        } else if voice_pass && !pass_marked && has_aux {
            out.word(
                id,
                form,
                "participle-voice",
                "VBN with aux but no aux:pass dependent incompatible with Voice=Pass",
            );
        }
    }
}
