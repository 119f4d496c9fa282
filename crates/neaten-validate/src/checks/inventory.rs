//! Tag inventory and lemma blacklists.

use neaten_lexicon::tagset::{compatible_xpos, is_xpos};

use crate::context::TokenContext;
use crate::findings::Findings;

/// Lemmas that are always wrong, compared lowercased.
const INVALID_LEMMAS: &[&str] = &["them", "me", "him", "n't"];
/// Lemmas that are wrong when capitalized.
const INVALID_CAPITALIZED_LEMMAS: &[&str] = &["There", "How", "Why", "Where", "When"];
/// (XPOS, lowercased lemma) pairs that are wrong.
const INVALID_LEMMA_TAGS: &[(&str, &str)] = &[("MD", "wo"), ("PRP", "us"), ("DT", "an")];

pub fn check(ctx: &TokenContext<'_>, out: &mut Findings) {
    check_typo(ctx, out);
    check_tags(ctx, out);
    check_lemma(ctx, out);
}

fn check_typo(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.typo_unresolved {
        out.token(
            ctx,
            "typo-correction",
            format!(
                "FORM '{}' with Typo=Yes should have feature CorrectForm or a following goeswith dependency",
                ctx.token.form
            ),
        );
    }
}

fn check_tags(ctx: &TokenContext<'_>, out: &mut Findings) {
    let compatible = compatible_xpos(ctx.upos);
    if compatible.is_none() {
        out.token(ctx, "upos-tag", format!("invalid UPOS tag {}", ctx.upos));
    }
    if !is_xpos(ctx.pos) {
        out.token(ctx, "xpos-tag", format!("invalid POS tag {}", ctx.pos));
    }
    let Some(compatible) = compatible else {
        return;
    };
    if compatible.contains(&ctx.pos) {
        return;
    }
    match (ctx.pos, ctx.upos) {
        ("CD", "PRON") => {
            if !ctx.has_feat("PronType", "Rcp") {
                out.token(
                    ctx,
                    "tag-combination",
                    "CD/PRON combination requires PronType=Rcp ('one another')",
                );
            }
        }
        ("FW", "NOUN") if ctx.lemma == "etc." => {}
        _ => out.token(
            ctx,
            "tag-combination",
            format!("invalid POS tag {} for UPOS {}", ctx.pos, ctx.upos),
        ),
    }
}

fn check_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    let lower = ctx.lemma.to_lowercase();
    if ctx.upos == "DET" && lower == "them" {
        // Vernacular substitute for "those".
        if ctx.pos != "DT" {
            out.token(ctx, "vernacular-them", "vernacular 'them'/DET should be DT");
        }
        if !ctx.has_feat("Style", "Vrnc") {
            out.token(
                ctx,
                "vernacular-them",
                "vernacular 'them'/DET should have Style=Vrnc",
            );
        }
    } else if INVALID_LEMMAS.contains(&lower.as_str())
        || INVALID_CAPITALIZED_LEMMAS.contains(&ctx.lemma)
    {
        out.token(ctx, "invalid-lemma", format!("invalid lemma {}", ctx.lemma));
    } else if INVALID_LEMMA_TAGS.contains(&(ctx.pos, lower.as_str())) {
        out.token(
            ctx,
            "invalid-lemma",
            format!("invalid lemma {} for POS {}", ctx.lemma, ctx.pos),
        );
    } else if ctx.lemma == "which" && ctx.pos != "WDT" {
        out.token(
            ctx,
            "invalid-lemma-tag",
            format!("invalid pos {} for lemma which", ctx.pos),
        );
    }
}
