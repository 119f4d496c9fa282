//! Clause-level rules: fixed expressions, relative clauses, the enhanced
//! graph, flat structures and clausal subjects.

use neaten_lexicon::{extpos_functions, lexicon};
use neaten_model::EnhancedDep;

use crate::context::{SentenceView, TokenContext};
use crate::findings::Findings;

/// Sentence whose fragment begins with a relative "Which".
const FRAGMENT_RELATIVE_SENTENCE: &str =
    "weblog-blogspot.com_tacitusproject_20040712123425_ENG_20040712_123425-0032";

pub fn check(view: &SentenceView<'_>, ctx: &TokenContext<'_>, out: &mut Findings) {
    check_fixed(ctx, out);
    check_relative_pronoun_type(ctx, out);
    check_relative_ref(view, ctx, out);
    check_enhanced_copy(ctx, out);
    check_flat_type(ctx, out);
    check_infinitive_subject(ctx, out);
    check_nominative_object(ctx, out);
    check_post_head_csubj(view, ctx, out);
}

/// Normalize inflected or misspelled second words of fixed expressions.
fn fixed_dependent(form: &str) -> String {
    match form {
        "a" => "of",
        "is" => "be",
        "opposed" => "oppose",
        "t" => "to",
        other => other,
    }
    .to_lowercase()
}

fn check_fixed(ctx: &TokenContext<'_>, out: &mut Findings) {
    let lex = lexicon();
    if ctx.func == "fixed" {
        let head = ctx.parent_lemma.to_lowercase();
        if !lex.is_fixed_expression(&head, &ctx.lemma.to_lowercase()) {
            out.token(ctx, "unlisted-fixed", "unlisted fixed expression");
        }
        return;
    }
    let Some(child) = ctx.child_with_func("fixed") else {
        return;
    };
    let head = ctx.lemma.to_lowercase();
    let dependent = fixed_dependent(child);
    let Some(allowed) = lex.fixed_extpos(&head, &dependent) else {
        out.token(
            ctx,
            "fixed-entry",
            format!("fixed expression missing entry: ('{head}', '{dependent}')"),
        );
        return;
    };
    let Some(extpos) = ctx.extpos() else {
        out.token(ctx, "fixed-extpos", "fixed head missing ExtPos");
        return;
    };
    if !allowed.iter().any(|candidate| candidate == extpos) {
        out.token(
            ctx,
            "fixed-extpos",
            format!(
                "fixed head ExtPos={extpos} but one of {} expected",
                allowed.join(" ")
            ),
        );
        return;
    }
    let promoted_clause = extpos == "SCONJ" && ctx.func == "ccomp" && ctx.is_promoted();
    if ctx.func != "conj" && !extpos_functions(extpos).contains(&ctx.func) && !promoted_clause {
        out.token(
            ctx,
            "fixed-function",
            format!("fixed head ExtPos={extpos} in unexpected function {}", ctx.func),
        );
    }
}

/// WH words that may head a free relative: pronouns, WRB adverbs, and
/// goeswith pieces carrying PronType.
fn is_wh_head(upos: &str, xpos: &str, has_pron_type: bool) -> bool {
    upos == "PRON" || (upos == "ADV" && (xpos == "WRB" || (xpos == "GW" && has_pron_type)))
}

fn check_relative_pronoun_type(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !ctx.func.ends_with(":relcl") {
        return;
    }
    if is_wh_head(ctx.upos, ctx.pos, ctx.feats.contains("PronType"))
        && ctx.has_feat("PronType", "Int")
    {
        out.token(
            ctx,
            "relative-pron-type",
            "Looks like a WH word as internal root of relative clause, should be PronType=Rel?",
        );
    }
    let parent_pron_type = ctx.parent_feat("PronType");
    if is_wh_head(ctx.parent_upos, ctx.parent_pos, parent_pron_type.is_some())
        && parent_pron_type == Some("Int")
    {
        out.token(
            ctx,
            "relative-pron-type",
            "Looks like a WH word-headed free relative, should be PronType=Rel",
        );
    }
}

fn check_relative_ref(view: &SentenceView<'_>, ctx: &TokenContext<'_>, out: &mut Findings) {
    let Some(edeps) = ctx.edeps else {
        return;
    };
    if ctx.func == "goeswith" || !ctx.has_feat("PronType", "Rel") {
        return;
    }
    let relcl = ["acl:relcl", "advcl:relcl"];
    match edeps {
        [only] if only.relation == "ref" => {
            let antecedent_heads_relcl = only
                .head
                .word()
                .filter(|&head| head != 0 && head <= view.len())
                .is_some_and(|head| {
                    view.dependents(head)
                        .iter()
                        .any(|&child| relcl.contains(&view.deprel(child)))
                });
            if !antecedent_heads_relcl {
                out.token(ctx, "relative-ref", "`ref` antecedent lacks :relcl dependent");
            }
        }
        _ => {
            // Free relatives head their own clause; a fragment may begin with "Which".
            if !ctx.has_any_child_func(&relcl)
                && ctx.id > 1
                && ctx.sent_id != FRAGMENT_RELATIVE_SENTENCE
            {
                out.token(
                    ctx,
                    "relative-ref",
                    "PronType=Rel should have `ref` as its sole enhanced dependency",
                );
            }
        }
    }
}

/// Most basic dependencies are repeated in the enhanced graph.
fn check_enhanced_copy(ctx: &TokenContext<'_>, out: &mut Findings) {
    let Some(edeps) = ctx.edeps else {
        return;
    };
    let is_ref = |deps: &[EnhancedDep]| {
        deps.first().is_some_and(|dep| dep.relation == "ref")
    };
    if is_ref(edeps) || is_ref(ctx.parent_edeps) || ctx.func == "orphan" {
        return;
    }
    let subtyped = format!("{}:", ctx.func);
    let copied = edeps.iter().any(|dep| {
        dep.is(ctx.func, ctx.parent_id)
            || (dep.relation.starts_with(&subtyped) && dep.head.word() == Some(ctx.parent_id))
    });
    if copied || ctx.is_promoted() || ctx.is_parent_promoted() {
        return;
    }
    // Preposition stranding moves the enhanced head.
    if matches!(ctx.func, "obl" | "case") && edeps.iter().any(|dep| dep.relation == "case") {
        return;
    }
    out.token(
        ctx,
        "enhanced-copy",
        format!(
            "dependency `{}:{}` appears in basic tree but not enhanced graph",
            ctx.parent_id, ctx.func
        ),
    );
}

fn check_flat_type(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.upos == "PROPN"
        || !ctx.has_child_func("flat")
        || ctx.feats.contains("Foreign")
        || ctx.misc.contains("FlatType")
    {
        return;
    }
    // "# 1", "number 5", "Sri/ADJ Lankan/ADJ"
    let conventional = (ctx.upos == "SYM" && ctx.lemma == "#")
        || (ctx.upos == "NOUN" && matches!(ctx.lemma, "number" | "no."))
        || (ctx.upos == "ADJ" && ctx.lemma == "Sri");
    if !conventional {
        out.token(
            ctx,
            "flat-type",
            "non-PROPN non-Foreign flat expression lacks FlatType",
        );
    }
}

fn check_infinitive_subject(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !ctx.has_feat("VerbForm", "Inf")
        || ctx.has_any_child_func(&["mark", "aux", "aux:pass", "cop"])
    {
        return;
    }
    let Some(subject) = ctx.child_with_func("nsubj") else {
        return;
    };
    if !matches!(subject.to_lowercase().as_str(), "anyone" | "anybody") {
        out.token(
            ctx,
            "infinitive-subject",
            format!(
                "verb {}/VB has an nsubj ('{subject}'); should it be finite?",
                ctx.tok
            ),
        );
    }
}

fn check_nominative_object(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.has_feat("Case", "Nom") && matches!(ctx.func, "obj" | "iobj" | "obl") {
        out.token(
            ctx,
            "nominative-object",
            format!("{} with Case=Nom", ctx.func),
        );
    }
}

/// A clausal subject after its head is usually extraposed and needs `expl`.
fn check_post_head_csubj(view: &SentenceView<'_>, ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "root" | "parataxis") && matches!(ctx.upos, "ADJ" | "VERB") {
        return;
    }
    if !ctx.has_child_func("csubj") || ctx.has_child_func("expl") {
        return;
    }
    // "a real pleasure to meet you"
    let exempt = ctx.func == "root" && matches!(ctx.tok, "pleasure" | "joy" | "move");
    for &child in &ctx.child_ids {
        if child > ctx.id && view.deprel(child) == "csubj" && !exempt {
            out.token(ctx, "post-head-csubj", "suspicious post-head `csubj`");
        }
    }
}
