//! Closed-class lexicon checks for pronouns, determiners and pronominal adverbs.
//!
//! The word is looked up by form or lemma and XPOS, and its lemma and
//! features are compared against the entry.

use neaten_lexicon::{Expected, LexEntry, lexicon};
use neaten_model::{Features, Misc};

use crate::context::TokenContext;
use crate::findings::Findings;

/// Features compared against the entry, in reporting order.
const ENTRY_FEATURES: &[&str] = &[
    "Case", "Definite", "Gender", "Number", "Person", "Poss", "PronType", "Style", "ExtPos",
    "NumForm", "NumType",
];

/// Two-word pronouns keyed as "first second".
const BIGRAM_PRONOUNS: &[(&str, &str)] = &[("no", "one"), ("one", "another"), ("each", "other")];

/// The parts of a word the lexicon comparison reads.
struct Subject<'a> {
    form: String,
    pos: &'a str,
    feats: &'a Features,
    misc: &'a Misc,
}

pub fn check(ctx: &TokenContext<'_>, out: &mut Findings) {
    let lex = lexicon();
    let prev_lower = ctx.prev.tok.to_lowercase();
    let empty_feats = Features::default();
    let empty_misc = Misc::default();

    if matches!(
        (prev_lower.as_str(), ctx.lemma),
        ("one", "another") | ("each", "other")
    ) {
        // Reciprocals: the entry lives under the first word's tag and features.
        let subject = Subject {
            form: ctx.form.to_string(),
            pos: ctx.prev.pos,
            feats: ctx.prev.feats.unwrap_or(&empty_feats),
            misc: ctx.prev.misc.unwrap_or(&empty_misc),
        };
        check_entry(ctx, &subject, out);
    } else if ctx.upos == "PRON"
        || (ctx.upos == "DET" && ctx.extpos() != Some("PRON"))
        || (ctx.upos == "ADV" && lex.is_adverb_form(ctx.lemma))
    {
        if ctx.lemma == "however" && !relative_however(ctx) {
            if ctx.pos == "WRB" {
                out.token(
                    ctx,
                    "however-tag",
                    format!("should however/{} be tagged RB?", ctx.pos),
                );
            }
        } else if ctx.lemma == "however" && ctx.pos == "RB" {
            out.token(
                ctx,
                "however-tag",
                format!("should however/{} be tagged WRB?", ctx.pos),
            );
        } else {
            // "all of" (quantity) and "that is" carry ExtPos=ADV.
            let mut feats = ctx.feats.clone();
            if matches!(ctx.lemma, "all" | "that") && feats.is("ExtPos", "ADV") {
                feats.remove("ExtPos");
            }
            let subject = Subject {
                form: ctx.form.to_string(),
                pos: ctx.pos,
                feats: &feats,
                misc: ctx.misc,
            };
            check_entry(ctx, &subject, out);
        }
    } else if lex.is_pronoun_lemma(ctx.lemma) {
        // Pronoun-numeral "one", Roman numeral "I", laughter "he".
        let allowed = (ctx.lemma == "one" && matches!(ctx.upos, "NOUN" | "NUM"))
            || (ctx.lemma == "I" && ctx.upos == "NUM")
            || (ctx.lemma == "he" && ctx.upos == "INTJ")
            || ctx.upos == "DET";
        if !allowed {
            out.token(
                ctx,
                "pronoun-upos",
                format!("invalid pronoun UPOS tag {}", ctx.upos),
            );
        }
    } else if ctx.upos == "NUM" && !(ctx.feats.contains("NumForm") && ctx.feats.contains("NumType"))
    {
        out.token(ctx, "num-features", "NUM should have NumForm and NumType");
    }
}

/// `however` heading a relative clause or modifying a predicate, as
/// opposed to the discourse connective, which gets no PronType.
fn relative_however(ctx: &TokenContext<'_>) -> bool {
    ctx.has_child_func("advcl:relcl")
        || (ctx.func == "advmod"
            && matches!(ctx.parent_upos, "ADJ" | "ADV")
            && !ctx.is_parent_copular)
}

/// Lexicon key: lowercased form for pronouns, the form for adverbs,
/// otherwise the lemma. Two-word pronouns are keyed on both words.
fn lookup_key(ctx: &TokenContext<'_>, form: &str) -> String {
    let lower = form.to_lowercase();
    let prev_lower = ctx.prev.tok.to_lowercase();
    if BIGRAM_PRONOUNS.contains(&(prev_lower.as_str(), lower.as_str())) {
        format!("{prev_lower} {lower}")
    } else if ctx.upos == "PRON" || matches!(lower.as_str(), "these" | "those") {
        lower
    } else if lexicon().is_adverb_form(form) {
        form.to_string()
    } else {
        ctx.lemma.to_string()
    }
}

fn check_entry(ctx: &TokenContext<'_>, subject: &Subject<'_>, out: &mut Findings) {
    let form = subject.form.replace('’', "'");
    let key = lookup_key(ctx, &form);
    let Some(entry) = lexicon().lookup(&key, subject.pos) else {
        if matches!(subject.pos, "PRP" | "PRP$") {
            out.token(
                ctx,
                "pronoun-entry",
                format!(
                    "FORM '{form}' with XPOS={} does not have a corresponding feature mapping",
                    subject.pos
                ),
            );
        }
        return;
    };

    if ctx.lemma != entry.lemma {
        out.token(
            ctx,
            "pronoun-lemma",
            format!("FORM '{form}' should correspond with LEMMA={}", entry.lemma),
        );
    }

    // Determiners may be abbreviated and carry a CorrectForm.
    if ctx.upos == "PRON" || !subject.feats.is("Abbr", "Yes") {
        compare_feats(ctx, &form, "Abbr", subject.feats, entry, out);
        // A typo's CorrectForm was handled when the form was resolved.
        if !subject.feats.is("Typo", "Yes") {
            compare_misc(ctx, &form, "CorrectForm", subject.misc, entry, out);
        }
    }
    for &name in ENTRY_FEATURES {
        compare_feats(ctx, &form, name, subject.feats, entry, out);
    }
    compare_misc(ctx, &form, "ModernForm", subject.misc, entry, out);
}

fn compare_feats(
    ctx: &TokenContext<'_>,
    form: &str,
    name: &str,
    feats: &Features,
    entry: &LexEntry,
    out: &mut Findings,
) {
    compare_feature(
        ctx,
        form,
        name,
        feats.get(name),
        feats.contains(name),
        entry.feature(name),
        out,
    );
}

fn compare_misc(
    ctx: &TokenContext<'_>,
    form: &str,
    name: &str,
    misc: &Misc,
    entry: &LexEntry,
    out: &mut Findings,
) {
    compare_feature(
        ctx,
        form,
        name,
        misc.value(name),
        misc.contains(name),
        entry.misc(name),
        out,
    );
}

fn compare_feature(
    ctx: &TokenContext<'_>,
    form: &str,
    name: &str,
    observed: Option<&str>,
    present: bool,
    expected: Option<&Expected>,
    out: &mut Findings,
) {
    match expected {
        None if present => out.token(
            ctx,
            "pronoun-feature",
            format!("FORM '{form}' should not have feature {name}"),
        ),
        None => {}
        Some(expected) if !expected.admits(observed) => out.token(
            ctx,
            "pronoun-feature",
            format!(
                "FORM '{form}' should correspond with {name}={}",
                expected.describe()
            ),
        ),
        Some(_) => {}
    }
}
