//! Agreement between tags and morphological features.
//!
//! Most rules are biconditionals of the form "tag X iff feature Y"; the
//! verb rules also check the feature bundle each Penn verb tag implies.

use neaten_lexicon::lists::{DECADE_WORDS, NNPS_PTAN_LEMMAS, NNS_PTAN_LEMMAS};

use super::deps::PLURAL_YEAR_REGEX;
use crate::context::TokenContext;
use crate::findings::Findings;

/// Morphological features read by the rules, absent as `None`.
struct Morph<'s> {
    degree: Option<&'s str>,
    number: Option<&'s str>,
    num_type: Option<&'s str>,
    num_form: Option<&'s str>,
    person: Option<&'s str>,
    poss: Option<&'s str>,
    pron_type: Option<&'s str>,
    tense: Option<&'s str>,
    verb_form: Option<&'s str>,
    mood: Option<&'s str>,
    style: Option<&'s str>,
}

impl<'s> Morph<'s> {
    fn of(ctx: &TokenContext<'s>) -> Self {
        Self {
            degree: ctx.feat("Degree"),
            number: ctx.feat("Number"),
            num_type: ctx.feat("NumType"),
            num_form: ctx.feat("NumForm"),
            person: ctx.feat("Person"),
            poss: ctx.feat("Poss"),
            pron_type: ctx.feat("PronType"),
            tense: ctx.feat("Tense"),
            verb_form: ctx.feat("VerbForm"),
            mood: ctx.feat("Mood"),
            style: ctx.feat("Style"),
        }
    }

    fn finite(&self, tense: &str, mood: &str) -> bool {
        self.verb_form == Some("Fin") && self.tense == Some(tense) && self.mood == Some(mood)
    }

    /// Present-tense agreement of `are`: any plural person, or singular 1st/2nd.
    fn present_plural_agreement(&self) -> bool {
        (self.number == Some("Plur") && matches!(self.person, Some("1" | "2" | "3")))
            || (self.number == Some("Sing") && matches!(self.person, Some("1" | "2")))
    }

    fn past_plural_agreement(&self) -> bool {
        self.number == Some("Plur") || self.person == Some("2")
    }
}

pub fn check(ctx: &TokenContext<'_>, out: &mut Findings) {
    let morph = Morph::of(ctx);
    check_degree(ctx, &morph, out);
    check_nominal(ctx, &morph, out);
    check_polarity(ctx, out);
    check_pronoun_type(ctx, &morph, out);
    check_proper_noun(ctx, &morph, out);
    check_base_verb(ctx, &morph, out);
    check_finite_verb(ctx, &morph, out);
    check_participles(ctx, &morph, out);
    check_present_verb(ctx, &morph, out);
    if ctx.lemma == "be" {
        check_copula(ctx, &morph, out);
    }
}

fn check_degree(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    // ADJ+NNP occurs in proper noun phrases.
    if ctx.upos == "ADJ"
        && (ctx.pos == "JJ") != (m.degree == Some("Pos"))
        && !matches!(ctx.pos, "NNP" | "AFX")
    {
        out.token(ctx, "degree", "ADJ+JJ should correspond with Degree=Pos");
    }
    let comparative =
        (ctx.upos == "ADJ" && ctx.pos == "JJR") || (ctx.upos == "ADV" && ctx.pos == "RBR");
    if comparative != (m.degree == Some("Cmp")) && ctx.pos != "NNP" {
        out.token(
            ctx,
            "degree",
            "ADJ+JJR or ADV+RBR should correspond with Degree=Cmp",
        );
    }
    let superlative =
        (ctx.upos == "ADJ" && ctx.pos == "JJS") || (ctx.upos == "ADV" && ctx.pos == "RBS");
    if superlative != (m.degree == Some("Sup")) && ctx.pos != "NNP" {
        out.token(
            ctx,
            "degree",
            "ADJ+JJS or ADV+RBS should correspond with Degree=Sup",
        );
    }
    if m.degree.is_some() && !matches!(ctx.upos, "ADJ" | "ADV") {
        out.token(ctx, "degree", "Degree should only apply to ADJ or ADV");
    }
    if ctx.upos == "ADJ" && m.degree.is_none() {
        out.token(ctx, "degree", "ADJ should have Degree");
    }
}

fn check_nominal(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    if m.number.is_some()
        && !matches!(
            ctx.upos,
            "NOUN" | "PRON" | "PROPN" | "SYM" | "AUX" | "DET" | "VERB"
        )
    {
        out.token(
            ctx,
            "number",
            format!("Number should not apply to {}", ctx.upos),
        );
    }
    // NumType=Frac covers decimals.
    if ctx.upos == "NUM" && ctx.pos == "CD" && !matches!(m.num_type, Some("Card" | "Frac")) {
        out.token(
            ctx,
            "num-type",
            "NUM+CD should correspond with NumType=Card or NumType=Frac",
        );
    }
    let alphanumeric = ctx.lemma.chars().any(|c| c.is_alphanumeric() || c == '_');
    if ctx.pos == "LS" && ctx.upos != "NUM" && alphanumeric {
        out.token(ctx, "list-marker", "alphanumeric LS should be NUM");
    }
    if ctx.upos == "NOUN" && (ctx.pos == "NN") != (m.number == Some("Sing")) && ctx.pos != "GW" {
        out.token(ctx, "number", "NOUN+NN should correspond with Number=Sing");
    }

    let plural_year = PLURAL_YEAR_REGEX.is_match(ctx.lemma);
    let ptan_lemma = NNS_PTAN_LEMMAS.contains(&ctx.lemma);
    if ctx.lemma == "etc." {
        let expected = ctx.pos == "FW"
            && ctx.upos == "NOUN"
            && m.number == Some("Plur")
            && ctx.has_feat("Abbr", "Yes");
        if !expected {
            out.token(
                ctx,
                "etc",
                "'etc.' should correspond with NOUN+FW, Abbr=Yes|Number=Plur",
            );
        }
    } else if ctx.upos == "NOUN"
        && [
            ctx.pos == "NNS",
            ptan_lemma || plural_year,
            m.number == Some("Ptan"),
        ]
        .into_iter()
        .filter(|&held| held)
        .count()
            == 2
    {
        out.token(
            ctx,
            "plurale-tantum",
            format!(
                "pluralia tantum should have NNS, Number=Ptan: {}",
                ctx.lemma
            ),
        );
    } else if ctx.upos == "NOUN"
        && (ctx.pos == "NNS") != (m.number == Some("Plur"))
        && !ptan_lemma
        && !plural_year
    {
        out.token(ctx, "number", "NOUN+NNS should correspond with Number=Plur");
    }

    if m.number != Some("Ptan") {
        return;
    }
    if plural_year {
        if m.num_type != Some("Card") || m.num_form != Some("Combi") {
            out.token(
                ctx,
                "plural-year",
                "pluralized decimal year expecting NumForm=Combi|NumType=Card",
            );
        }
        if !ctx.lemma.ends_with('s') || (ctx.lemma.contains('\'') && !ctx.lemma.starts_with('\''))
        {
            out.token(
                ctx,
                "plural-year",
                format!(
                    "pluralized year expecting simplified lemma instead of: {}",
                    ctx.lemma
                ),
            );
        }
    } else if ctx
        .lemma
        .rsplit('-')
        .next()
        .is_some_and(|last| DECADE_WORDS.contains(&last))
        && (m.num_type != Some("Card") || m.num_form != Some("Word"))
    {
        out.token(
            ctx,
            "plural-year",
            "pluralized spelled-out year expecting NumForm=Word|NumType=Card",
        );
    }
}

fn check_polarity(ctx: &TokenContext<'_>, out: &mut Findings) {
    let negative = (ctx.upos == "PART" && ctx.lemma == "not")
        || (ctx.upos == "INTJ" && ctx.lemma == "no")
        || (ctx.upos == "CCONJ" && matches!(ctx.lemma, "nor" | "neither"));
    if negative != ctx.has_feat("Polarity", "Neg") {
        out.token(
            ctx,
            "polarity",
            "not/PART and no/INTJ should correspond with Polarity=Neg",
        );
    }
    let positive = ctx.upos == "INTJ" && ctx.lemma == "yes";
    if positive != ctx.has_feat("Polarity", "Pos") {
        out.token(ctx, "polarity", "yes/INTJ should correspond with Polarity=Pos");
    }
}

fn check_pronoun_type(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    let wh_type = matches!(m.pron_type, Some("Int" | "Rel"));
    if ctx.upos == "PRON" && (ctx.pos == "WP$") != (m.poss == Some("Yes") && wh_type) {
        out.token(
            ctx,
            "pron-type",
            "PRON+WP$ should correspond with Poss=Yes|PronType=Int,Rel",
        );
    }
    // X marks goeswith pieces.
    if ctx.upos == "X" {
        return;
    }
    let wh_tag = matches!(ctx.pos, "WDT" | "WP" | "WRB");
    if !wh_tag && m.poss.is_none() && wh_type {
        out.token(
            ctx,
            "pron-type",
            "PronType=Int,Rel and not poss implies WP|WDT|WRB",
        );
    } else if wh_tag
        && !(m.poss.is_none() && matches!(m.pron_type, Some("Dem" | "Int" | "Rel")))
    {
        out.token(
            ctx,
            "pron-type",
            "WP|WDT|WRB implies not poss and PronType=Dem,Int,Rel",
        );
    }
}

fn check_proper_noun(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    if ctx.upos != "PROPN" {
        return;
    }
    if (ctx.pos == "NNP") != (m.number == Some("Sing")) {
        out.token(ctx, "number", "PROPN+NNP should correspond with Number=Sing");
    }
    if (ctx.pos == "NNPS") != (m.number == Some("Plur")) && !NNPS_PTAN_LEMMAS.contains(&ctx.lemma)
    {
        out.token(ctx, "number", "PROPN+NNPS should correspond with Number=Plur");
    }
}

/// VB is subjunctive, imperative or infinitive.
fn check_base_verb(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    if ctx.pos != "VB" {
        return;
    }
    let inflected = m.number.is_some() || m.person.is_some() || m.tense.is_some();
    let message = if m.verb_form.is_none() {
        "VB should have VerbForm"
    } else if m.verb_form == Some("Fin") && m.mood == Some("Sub") {
        if m.number.is_some() && m.person.is_some() && m.tense == Some("Pres") {
            return;
        }
        "VB/Mood=Sub should have Number, Person, and Tense=Pres"
    } else if inflected {
        "non-subjunctive VB should not have Number, Person, or Tense"
    } else if m.verb_form == Some("Inf") {
        if m.mood.is_none() {
            return;
        }
        "VB/VerbForm=Inf should not have Mood"
    } else if !(m.verb_form == Some("Fin") && m.mood == Some("Imp")) {
        "non-inf VB should correspond with Mood=Imp, VerbForm=Fin"
    } else if ctx.feat("Voice").is_some() {
        "VB should not have Voice"
    } else {
        return;
    };
    out.token(ctx, "verb-form", message);
}

/// VBD, VBP and VBZ are finite indicatives.
fn check_finite_verb(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    let all_inflected =
        m.number.is_some() && m.person.is_some() && m.tense.is_some() && m.mood.is_some();
    let has_voice = ctx.feat("Voice").is_some();
    match ctx.pos {
        "VBD" => {
            if m.verb_form != Some("Fin") {
                out.token(ctx, "verb-form", "VBD should correspond with VerbForm=Fin");
            }
            if !all_inflected {
                out.token(
                    ctx,
                    "verb-form",
                    "VBD should have Number, Person, Tense, and Mood",
                );
            } else if (m.tense != Some("Past") || m.mood != Some("Ind"))
                && !(ctx.lemma == "be" && m.tense == Some("Past") && m.mood == Some("Sub"))
            {
                out.token(
                    ctx,
                    "verb-form",
                    "VBD should correspond with Tense=Past and Mood=Ind (or Mood=Sub for 'were')",
                );
            }
            if has_voice {
                out.token(ctx, "verb-form", "VBD should not have Voice");
            }
        }
        "VBP" | "VBZ" => {
            if m.verb_form != Some("Fin") {
                out.token(
                    ctx,
                    "verb-form",
                    format!("{} should correspond with VerbForm=Fin", ctx.pos),
                );
            }
            if !all_inflected {
                out.token(
                    ctx,
                    "verb-form",
                    format!("{} should have Number, Person, Tense, and Mood", ctx.pos),
                );
            } else if m.tense != Some("Pres") || m.mood != Some("Ind") {
                out.token(
                    ctx,
                    "verb-form",
                    format!("{} should correspond with Mood=Ind, Tense=Pres", ctx.pos),
                );
            } else if ctx.pos == "VBZ" && (m.number != Some("Sing") || m.person != Some("3")) {
                out.token(ctx, "verb-form", "VBZ should have Number=Sing, Person=3");
            }
            if has_voice {
                out.token(
                    ctx,
                    "verb-form",
                    format!("{} should not have Voice", ctx.pos),
                );
            }
        }
        _ => {}
    }
}

fn check_participles(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    match ctx.pos {
        "VBG" if m.verb_form == Some("Part") => {
            if m.tense != Some("Pres") {
                out.token(ctx, "verb-form", "VBG should correspond with Tense=Pres");
            }
        }
        "VBG" if m.verb_form != Some("Ger") => {
            if matches!(ctx.upos, "AUX" | "VERB") {
                out.token(
                    ctx,
                    "verb-form",
                    format!("{}+VBG should correspond with VerbForm=Ger,Part", ctx.upos),
                );
            } else if ctx.upos == "ADJ" && m.degree != Some("Pos") {
                out.token(ctx, "verb-form", "ADJ+VBG should correspond with Degree=Pos");
            }
        }
        "VBN" => {
            if m.verb_form != Some("Part") {
                out.token(ctx, "verb-form", "VBN should correspond with VerbForm=Part");
            }
            if m.tense != Some("Past") {
                out.token(ctx, "verb-form", "VBN should correspond with Tense=Past");
            }
        }
        _ => {}
    }
}

fn check_present_verb(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    match ctx.pos {
        "VBZ" => {
            for (held, expected) in [
                (m.number == Some("Sing"), "Number=Sing"),
                (m.person == Some("3"), "Person=3"),
                (m.tense == Some("Pres"), "Tense=Pres"),
                (m.verb_form == Some("Fin"), "VerbForm=Fin"),
            ] {
                if !held {
                    out.token(
                        ctx,
                        "verb-form",
                        format!("VBZ should correspond with {expected}"),
                    );
                }
            }
        }
        "VBP" => {
            let person_12 = matches!(m.person, Some("1" | "2"));
            if !matches!(m.number, Some("Sing" | "Plur")) {
                out.token(
                    ctx,
                    "verb-form",
                    "VBP should correspond with Number=Sing|Plur",
                );
            } else if m.number == Some("Sing")
                && !person_12
                && !ctx.misc.is("CorrectNumber", "Sing")
            {
                out.token(
                    ctx,
                    "verb-form",
                    "singular VBP should correspond with Person=1|2",
                );
            } else if !matches!(m.person, Some("1" | "2" | "3")) {
                out.token(
                    ctx,
                    "verb-form",
                    "plural VBP should correspond with Person=1|2|3",
                );
            }
            if m.tense != Some("Pres") {
                out.token(ctx, "verb-form", "VBP should correspond with Tense=Pres");
            }
            if m.verb_form != Some("Fin") {
                out.token(ctx, "verb-form", "VBP should correspond with VerbForm=Fin");
            }
        }
        _ => {}
    }
}

/// Each surface form of `be` licenses one tag and feature bundle.
fn check_copula(ctx: &TokenContext<'_>, m: &Morph<'_>, out: &mut Findings) {
    let form = ctx.tok.to_lowercase();
    let pos = ctx.pos;
    let ok = match form.as_str() {
        // "the be all end all"
        "be" if ctx.upos == "NOUN"
            && ctx.sent_id
                == "newsgroup-groups.google.com_INTPunderground_b2c62e87877e4a22_ENG_20050906_165900-0025" =>
        {
            true
        }
        "be" => {
            pos == "VB"
                && (m.verb_form == Some("Inf")
                    || m.finite("Pres", "Sub")
                    || (m.verb_form == Some("Fin") && m.mood == Some("Imp")))
        }
        "am" | "'m" | "’m" => {
            pos == "VBP"
                && m.finite("Pres", "Ind")
                && m.person == Some("1")
                && m.number == Some("Sing")
        }
        // "aren't I"
        "are" => pos == "VBP" && m.finite("Pres", "Ind") && m.present_plural_agreement(),
        "is" | "'s" | "’s" => {
            let correct_number = ctx.misc.value("CorrectNumber");
            (pos == "VBZ" || ctx.misc.contains("CorrectNumber"))
                && m.finite("Pres", "Ind")
                && m.person == Some("3")
                && correct_number.or(m.number) == Some("Sing")
        }
        "art" => {
            pos == "VBP"
                && m.finite("Pres", "Ind")
                && m.number == Some("Sing")
                && m.person == Some("2")
                && m.style == Some("Arch")
        }
        // ain't
        "ai" => matches!(pos, "VBP" | "VBZ") && m.finite("Pres", "Ind") && m.style == Some("Vrnc"),
        "was" => pos == "VBD" && m.finite("Past", "Ind") && m.number == Some("Sing"),
        "were" => {
            pos == "VBD"
                && m.verb_form == Some("Fin")
                && m.tense == Some("Past")
                && ((m.mood == Some("Ind") && m.past_plural_agreement())
                    || (m.mood == Some("Sub") && m.number == Some("Sing")))
        }
        "'re" | "’re" => match pos {
            "VBD" => m.finite("Past", "Ind") && m.past_plural_agreement(),
            "VBP" => m.finite("Pres", "Ind") && m.present_plural_agreement(),
            _ => {
                out.token(
                    ctx,
                    "be-form",
                    format!("unexpected XPOS for 'be' verb: '{form}'"),
                );
                true
            }
        },
        "been" | "being" => {
            let expected = if form == "been" { "VBN" } else { "VBG" };
            if pos != expected {
                out.token(
                    ctx,
                    "be-form",
                    format!("'{form}' should be {expected}"),
                );
            }
            true
        }
        _ => {
            out.token(ctx, "be-form", format!("unknown 'be' form: {form}"));
            true
        }
    };
    if !ok {
        out.token(
            ctx,
            "be-form",
            format!("unexpected morphology for 'be' verb: '{form}'"),
        );
    }
}
