//! Structural dependency rules.
//!
//! Each rule inspects one word with its head and dependents. Rules run in
//! the order of [`RULES`]; rules that share a trigger are written as a single
//! `if`/`else if` chain so only the first matching alternative fires.

use std::sync::LazyLock;

use neaten_lexicon::lists::{NNPS_PTAN_LEMMAS, NNS_PTAN_LEMMAS, SING_AND_PLUR_S_LEMMAS};
use regex::Regex;

use super::Rule;
use crate::context::{Position, TokenContext};
use crate::findings::Findings;

/// Pluralized years such as `1920s` or `80's`.
pub(crate) static PLURAL_YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+'?s$").expect("Invalid plural year regex"));

static NEGATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)never|not|no|n't|n’t|’t|'t|nt|ne|pas|nit").expect("Invalid negation regex")
});

static NON_ASCII_LEMMA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)“|”|n’t|n`t|[’`](s|ve|d|ll|m|re|t)").expect("Invalid lemma regex")
});

static NUMERIC_LEMMA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\W_]*\d[\d\W_]*$").expect("Invalid numeric lemma regex"));

/// Irregular participles and past forms spelled like their lemma.
const UNCHANGED_VBN: &[&str] = &["become", "come", "overcome", "run", "outrun", "overrun"];
const UNCHANGED_PAST: &[&str] = &[
    "put", "shut", "cut", "pre-cut", "undercut", "cost", "cast", "broadcast", "forecast", "let",
    "set", "upset", "shed", "spread", "hurt", "burst", "bust", "beat", "read", "re-read", "bit",
    "fit", "hit", "knit", "slit", "split", "bid", "outbid", "l-", "g-",
];

const NNPS_SAME_AS_LEMMA: &[&str] = &[
    "Netherlands", "Analytics", "Olympics", "Commons", "Paralympics", "Vans", "Andes", "Forties",
    "Philippines",
];

/// NN modifiers of proper nouns that stay `compound`.
const PROPN_COMPOUND_LEMMAS: &[&str] = &[
    "rat", "planet", "person", "house", "extremist", "degree", "state", "piece", "day",
    "downtown", "age", "level", "era", "foot", "defence", "force", "re-run",
];
const PROPN_COMPOUND_SENTENCES: &[(&str, &str)] = &[
    (
        "assistant",
        "newsgroup-groups.google.com_alt.animals_0084bdc731bfc8d8_ENG_20040905_212000-0068",
    ),
    (
        "polyglot",
        "weblog-juancole.com_juancole_20041018060600_ENG_20041018_060600-0012",
    ),
    ("boy", "answers-20111107200249AAIyCy5_ans-0005"),
    ("man", "answers-20111107200249AAIyCy5_ans-0005"),
    (
        "majority",
        "weblog-blogspot.com_dakbangla_20041028153019_ENG_20041028_153019-0017",
    ),
];

const ACL_EXCEPTION_SENTENCES: &[&str] = &[
    "newsgroup-groups.google.com_alt.animals_0084bdc731bfc8d8_ENG_20040905_212000-0001",
    "reviews-093655-0007",
];

/// Functions a token with lemma `be` may have.
const BE_FUNCTIONS: &[&str] = &[
    "root", "cop", "aux", "aux:pass", "csubj", "ccomp", "xcomp", "acl", "acl:relcl", "advcl",
    "advcl:relcl", "conj", "parataxis", "reparandum",
];

const DITRANSITIVE_LEMMAS: &[&str] = &[
    "tell", "show", "give", "pay", "charge", "bill", "teach", "owe", "text", "write",
];

/// Verbs that license iobj alongside a clausal complement.
const IOBJ_CLAUSE_LEMMAS: &[&str] = &[
    "tell", "ask", "show", "allow", "permit", "cause", "pardon", "pay", "thank", "believe",
    "trust", "explain", "convince", "persuade", "teach", "urge", "advise", "inform", "notify",
    "warn", "command", "instruct", "remind", "email", "cc", "bcc", "promise", "assure",
    "reassure", "guarantee",
];

/// Functions that may carry their own subject.
const CLAUSAL_FUNCTIONS: &[&str] = &[
    "csubj", "ccomp", "xcomp", "advcl", "acl", "acl:relcl", "advcl:relcl", "csubj:pass", "root",
    "list", "parataxis", "conj", "appos", "reparandum", "dislocated", "orphan", "compound",
];

/// IN tokens whose lemma differs from the lowercased form, typos included.
const IN_IRREGULAR_FORMS: &[&str] = &[
    "vs", "vs.", "v", "ca", "that", "then", "a", "fro", "too", "til", "wether", "b/c",
];

const MODAL_LEMMAS: &[&str] = &[
    "can", "must", "will", "shall", "would", "could", "may", "might", "ought", "should", "need",
    "dare",
];

const NOT_FUNCTIONS: &[&str] = &[
    "advmod", "root", "ccomp", "amod", "parataxis", "reparandum", "advcl", "conj", "orphan",
    "fixed",
];

const INDEFINITE_PROFORMS: &[&str] = &[
    "anytime", "anyplace", "anywhere", "sometime", "someplace", "somewhere", "nowhere",
];

/// Enhanced relations that place a relativized word inside its clause.
const RELATIVIZED_RELATIONS: &[&str] = &[
    "nsubj", "csubj", "obj", "obl", "nmod", "advmod", "ccomp", "xcomp",
];

/// (previous form, previous XPOS, lemma, XPOS); `*` matches anything.
const SUSPICIOUS_BIGRAMS: &[(&str, &str, &str, &str)] =
    &[("*", "DT", "only", "RB"), ("no", "RB", "matter", "RB")];

pub(crate) const RULES: &[Rule] = &[
    amod_finite_verb,
    one_with_modifier,
    demonstrative_tags,
    amod_head,
    acl_head,
    appos_head,
    back_pointing,
    propn_flat_noun,
    forward_pointing,
    aux_pass_lemma,
    get_aux,
    possessive_tag,
    possessive_function,
    participle_lemma,
    nnps_lemma,
    nns_lemma,
    propn_compound,
    particle_in,
    cc_tag_function,
    cc_parent_function,
    particle_function,
    cc_function_tag,
    preconj_lemma,
    gerund_very,
    interjection_advmod,
    wh_mark,
    preposition_discourse,
    gerund_case,
    verb_nmod,
    degree_lemma,
    negation,
    gerund_compound,
    s_got,
    verb_nominal_function,
    noun_amod,
    be_function,
    ditransitive_person_object,
    iobj_with_clause,
    aux_lemma,
    finite_xcomp,
    noun_xcomp,
    be_xcomp,
    subject_of_non_clause,
    preposition_lemma,
    an_lemma,
    non_ascii_lemma,
    possessive_lemma,
    goeswith_lemma,
    obj_case,
    infinitival_relcl,
    adverb_relcl,
    adverb_nominal,
    adverb_amod,
    at_adverb,
    relativized_enhanced,
    gerund_det,
    let_help_ccomp,
    modal_lemma,
    like_interjection,
    copular_object,
    object_case,
    deprecated_subtype,
    unmarked_case,
    nominal_of_determiner,
    passive_parent,
    be_obl,
    agent_shape,
    multiple_agents,
    subject_and_agent,
    finite_aux,
    not_function,
    perception_xcomp,
    have_ccomp,
    obj_and_ccomp,
    multiple_comps,
    adjacent_acl,
    nominal_advcl,
    unmarked_adverb,
    here_there_case,
    sconj_case,
    indefinite_proform,
    existential_there,
    what_det,
    numeric_lemma,
    quotation_position,
    kind_sort_fixed,
    rather_than,
    suspicious_bigram,
    fixed_bigrams,
];

pub(crate) fn check(ctx: &TokenContext<'_>, out: &mut Findings) {
    for rule in RULES {
        rule(ctx, out);
    }
}

fn base(func: &str) -> &str {
    func.split(':').next().unwrap_or(func)
}

fn amod_finite_verb(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "amod" && ctx.pos == "VBD" {
        out.token(ctx, "amod-finite-verb", "finite past verb labeled amod");
    }
}

fn one_with_modifier(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "amod" | "det") && ctx.parent_lemma == "one" && ctx.parent_pos == "CD" {
        out.token(
            ctx,
            "one-modifier",
            format!(
                "'one' with {} dependent should be NN/NOUN not CD/NUM",
                ctx.func
            ),
        );
    }
}

fn demonstrative_tags(ctx: &TokenContext<'_>, out: &mut Findings) {
    let is_det = matches!(ctx.func, "det" | "det:predet");
    let expected = if is_det
        && matches!(ctx.lemma, "this" | "that")
        && !(ctx.pos == "DT" && ctx.upos == "DET")
    {
        "DT/DET"
    } else if !is_det
        && matches!(ctx.lemma, "that" | "which")
        && ctx.pos == "WDT"
        && ctx.upos != "PRON"
    {
        "WDT/PRON"
    } else if !is_det
        && matches!(ctx.lemma, "this" | "that")
        && !matches!(ctx.pos, "IN" | "RB" | "WDT")
        && !(ctx.pos == "DT" && ctx.upos == "PRON")
    {
        "DT/PRON"
    } else {
        return;
    };
    out.token(
        ctx,
        "demonstrative-tag",
        format!(
            "'{}' attaching as {} should be {expected} not {}/{}",
            ctx.tok, ctx.func, ctx.pos, ctx.upos
        ),
    );
}

fn amod_head(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func != "amod"
        || matches!(ctx.parent_upos, "NOUN" | "PRON" | "PROPN" | "NUM" | "SYM" | "ADJ")
        || ctx.parent_pos == "ADD"
    {
        return;
    }
    let postpositive = match ctx.parent_upos {
        "ADV" => matches!(
            ctx.parent_lemma,
            "somewhere" | "anywhere" | "someplace" | "somehow" | "sometime"
        ),
        "DET" => matches!(ctx.parent_lemma, "all" | "both"),
        "VERB" => {
            matches!(ctx.parent_pos, "VBN" | "VBG")
                && matches!(ctx.parent_lemma, "bear" | "train" | "range" | "look")
        }
        _ => false,
    };
    if !postpositive {
        out.token(
            ctx,
            "amod-head",
            format!("{} shouldn't have amod dependent", ctx.parent_upos),
        );
    }
}

fn acl_head(ctx: &TokenContext<'_>, out: &mut Findings) {
    if base(ctx.func) != "acl"
        || matches!(ctx.parent_upos, "NOUN" | "PRON" | "PROPN" | "NUM" | "SYM")
    {
        return;
    }
    let allowed = (ctx.func == "acl" && matches!(ctx.parent_lemma, "much" | "more" | "enough"))
        || (ctx.func == "acl:relcl" && ctx.parent_upos == "ADJ")
        || (ctx.func == "acl:relcl"
            && ctx.parent_upos == "DET"
            && matches!(ctx.parent_lemma, "all" | "some" | "any"))
        || ctx.parent_tok.to_lowercase() == "those"
        || ACL_EXCEPTION_SENTENCES.contains(&ctx.sent_id);
    if !allowed {
        out.token(
            ctx,
            "acl-head",
            format!("{} shouldn't have {} dependent", ctx.parent_upos, ctx.func),
        );
    }
}

fn appos_head(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func != "appos"
        || matches!(
            ctx.parent_upos,
            "NOUN" | "PRON" | "PROPN" | "NUM" | "SYM" | "ADJ" | "DET"
        )
        || ctx.parent_pos == "ADD"
    {
        return;
    }
    // Key-value lists and "here (California)".
    if ctx.parent_func == "root" || (ctx.parent_upos == "ADV" && ctx.parent_lemma == "here") {
        return;
    }
    out.token(
        ctx,
        "appos-head",
        format!("{} shouldn't have appos dependent", ctx.parent_upos),
    );
}

fn back_pointing(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "fixed" | "goeswith" | "flat" | "conj") && ctx.id < ctx.parent_id {
        out.token(
            ctx,
            "back-pointing",
            format!("back-pointing func {}", ctx.func),
        );
    }
}

fn propn_flat_noun(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "flat" && ctx.parent_upos == "PROPN" && ctx.upos == "NOUN" {
        out.token(
            ctx,
            "propn-flat-noun",
            "PROPN-[flat]->NOUN - should be compound? flat",
        );
    }
}

fn forward_pointing(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "cc:preconj" | "cc" | "nmod:poss")
        && ctx.id > ctx.parent_id
        && ctx.tok != "mia"
    {
        out.token(
            ctx,
            "forward-pointing",
            format!("forward-pointing func {}", ctx.func),
        );
    }
}

fn aux_pass_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "aux:pass" && !matches!(ctx.lemma, "be" | "get") {
        out.token(ctx, "aux-pass-lemma", "aux:pass must be 'be' or 'get'");
    }
}

fn get_aux(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.lemma == "get" && ctx.upos == "AUX" && ctx.func != "aux:pass" {
        out.token(ctx, "get-aux", "get/AUX should be aux:pass");
    }
}

fn possessive_tag(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.lemma == "'s" && ctx.pos != "POS" {
        out.token(ctx, "possessive-tag", "possessive 's must be tagged POS");
    }
}

fn possessive_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "POS" && !matches!(ctx.func, "case" | "reparandum" | "goeswith") {
        out.token(ctx, "possessive-function", "tag POS must have function case");
    }
}

fn participle_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !matches!(ctx.pos, "VBG" | "VBN" | "VBD") {
        return;
    }
    let form = ctx.tok.to_lowercase();
    if ctx.lemma.to_lowercase() != form {
        return;
    }
    let irregular = (ctx.pos == "VBN" && UNCHANGED_VBN.contains(&form.as_str()))
        || (matches!(ctx.pos, "VBN" | "VBD") && UNCHANGED_PAST.contains(&form.as_str()));
    if !irregular {
        out.token(
            ctx,
            "verb-lemma",
            format!("tag {} should have lemma distinct from word form", ctx.pos),
        );
    }
}

fn nnps_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "NNPS"
        && ctx.tok == ctx.lemma
        && ctx.tok.ends_with('s')
        && ctx.func != "goeswith"
        && !NNPS_SAME_AS_LEMMA.contains(&ctx.tok)
    {
        out.token(
            ctx,
            "nnps-lemma",
            "tag NNPS should have lemma distinct from word form",
        );
    }
}

fn nns_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos != "NNS"
        || ctx.tok.to_lowercase() != ctx.lemma.to_lowercase()
        || !ctx.lemma.ends_with('s')
        || ctx.func == "goeswith"
    {
        return;
    }
    let listed = NNS_PTAN_LEMMAS.contains(&ctx.lemma)
        || NNPS_PTAN_LEMMAS.contains(&ctx.lemma)
        || SING_AND_PLUR_S_LEMMAS.contains(&ctx.lemma);
    if !listed && !PLURAL_YEAR_REGEX.is_match(ctx.lemma) {
        out.token(
            ctx,
            "nns-lemma",
            "tag NNS should have lemma distinct from word form",
        );
        out.note_nns_lemma(ctx.lemma);
    }
}

fn propn_compound(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !(matches!(ctx.pos, "NN" | "NNS") && ctx.parent_upos == "PROPN" && ctx.func == "compound") {
        return;
    }
    let allowed = PROPN_COMPOUND_LEMMAS.contains(&ctx.lemma)
        || ctx.lemma.starts_with(|c: char| c.is_ascii_digit())
        || PROPN_COMPOUND_SENTENCES.contains(&(ctx.lemma, ctx.sent_id));
    if !allowed {
        out.token(
            ctx,
            "compound-nmod-desc",
            "consider nmod:desc instead of compound",
        );
    }
}

fn particle_in(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "IN" && ctx.func == "compound:prt" {
        out.token(
            ctx,
            "particle-tag",
            "function compound:prt should have pos RP, not IN",
        );
    }
}

fn cc_tag_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos != "CC"
        || matches!(
            ctx.func,
            "cc" | "cc:preconj" | "conj" | "reparandum" | "root" | "dep"
        )
        || (ctx.parent_lemma == "whether" && ctx.func == "fixed")
    {
        return;
    }
    // Metalinguistic "and" in the languages how-to.
    let about_languages = ctx.tok == "and"
        && [ctx.sent_id, ctx.parent_tok, ctx.filename]
            .iter()
            .any(|s| s.contains("languages"));
    if !about_languages {
        out.token(
            ctx,
            "cc-function",
            format!(
                "pos CC should normally have function cc or cc:preconj, not {}",
                ctx.func
            ),
        );
    }
}

fn cc_parent_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "cc"
        && !matches!(
            ctx.parent_func,
            "root" | "ccomp" | "conj" | "reparandum" | "parataxis"
        )
        && ctx.sent_id != "email-enronsent23_08-0006"
    {
        out.token(
            ctx,
            "cc-parent",
            format!(
                "function cc should not have parent function {}",
                ctx.parent_func
            ),
        );
    }
}

fn particle_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    let is_prt = ctx.func == "compound:prt";
    if (ctx.pos == "RP" && !is_prt && ctx.func != "conj") || (ctx.pos != "RP" && is_prt) {
        out.token(
            ctx,
            "particle-function",
            format!(
                "pos {} should not normally have function {}",
                ctx.pos, ctx.func
            ),
        );
    }
}

fn cc_function_tag(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "CC" || !matches!(ctx.func, "cc" | "cc:preconj") {
        return;
    }
    if ctx.func == "cc:preconj"
        || !matches!(ctx.lemma, "/" | "rather" | "as" | "et" | "+" | "let" | "-")
    {
        out.token(
            ctx,
            "cc-tag",
            format!(
                "function {} should normally have pos CC, not {}",
                ctx.func, ctx.pos
            ),
        );
    }
}

fn preconj_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "cc:preconj" && !matches!(ctx.lemma, "both" | "either" | "neither") {
        out.token(
            ctx,
            "preconj-lemma",
            format!(
                "cc:preconj should be restricted to both/either/neither, not {}",
                ctx.pos
            ),
        );
    }
}

fn gerund_very(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "VBG" && ctx.has_child("very") {
        out.token(
            ctx,
            "gerund-very",
            "pos VBG should not normally have child 'very'",
        );
    }
}

fn interjection_advmod(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "UH" && ctx.func == "advmod" {
        out.token(
            ctx,
            "interjection-advmod",
            "pos UH should not normally have function 'advmod'",
        );
    }
}

fn wh_mark(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "mark"
        && matches!(
            ctx.lemma,
            "when" | "how" | "where" | "why" | "whenever" | "wherever" | "however"
        )
    {
        out.token(
            ctx,
            "wh-mark",
            "WH adverbs should attach as advmod, not mark",
        );
    }
}

fn preposition_discourse(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "IN" && ctx.func == "discourse" {
        out.token(
            ctx,
            "preposition-discourse",
            "pos IN should not normally have function 'discourse'",
        );
    }
}

fn gerund_case(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "VBG" && ctx.has_child_func("case") {
        out.token(
            ctx,
            "gerund-case",
            "pos VBG should not normally have child function 'case'",
        );
    }
}

fn verb_nmod(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos.starts_with('V') && ctx.child_funcs.iter().any(|f| f.starts_with("nmod")) {
        out.token(
            ctx,
            "verb-nmod",
            format!(
                "pos {} should not normally have child function 'nmod.*'",
                ctx.pos
            ),
        );
    }
}

fn degree_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.pos, "JJR" | "JJS" | "RBR" | "RBS")
        && ctx.lemma == ctx.tok
        && !matches!(ctx.lemma, "least" | "further" | "less" | "more")
        && !ctx.lemma.ends_with("most")
    {
        out.token(
            ctx,
            "degree-lemma",
            format!(
                "comparative or superlative {} with tag {} should have positive lemma not {}",
                ctx.tok, ctx.pos, ctx.lemma
            ),
        );
    }
}

fn negation(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "neg" && !NEGATION_REGEX.is_match(ctx.tok) {
        out.token(ctx, "negation", "mistagged negative");
    }
}

fn gerund_compound(ctx: &TokenContext<'_>, out: &mut Findings) {
    // "'we're losing $X - fix it' levels of pressure"
    if ctx.pos == "VBG" && ctx.func == "compound" && ctx.tok != "losing" {
        out.token(
            ctx,
            "gerund-compound",
            "gerund compound modifier should be tagged as NN not VBG",
        );
    }
}

fn s_got(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "VBZ"
        && ctx.lemma == "be"
        && matches!(ctx.func, "aux" | "aux:pass")
        && ctx.parent_lemma == "get"
        && ctx.parent_pos == "VBN"
    {
        out.token(
            ctx,
            "s-got",
            "\"'s got\" clitic lemma should be \"have\" not \"be\"?",
        );
    }
}

fn verb_nominal_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.upos != "VERB"
        || !matches!(
            base(ctx.func),
            "obj" | "nsubj" | "iobj" | "nmod" | "obl" | "expl"
        )
    {
        return;
    }
    // Nominalized "the following/attached".
    let nominalized =
        (ctx.pos == "VBG" && ctx.tok == "following") || (ctx.pos == "VBN" && ctx.tok == "attached");
    if !nominalized {
        out.token(
            ctx,
            "verb-nominal-function",
            format!(
                "verb should not have nominal argument structure function {}",
                ctx.func
            ),
        );
    }
}

fn noun_amod(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos.starts_with("NN") && !ctx.pos.starts_with("NNP") && ctx.func == "amod" {
        out.token(
            ctx,
            "noun-amod",
            format!("tag {} should not be amod", ctx.pos),
        );
    }
}

fn be_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.lemma != "be" || BE_FUNCTIONS.contains(&ctx.func) {
        return;
    }
    // "that is", "be all, end all", key-value appos.
    let allowed = (ctx.parent_lemma == "that" && ctx.func == "fixed")
        || (ctx.parent_lemma == "all" && ctx.func == "compound")
        || (ctx.func == "appos" && ctx.parent_func == "root");
    if !allowed {
        out.token(
            ctx,
            "be-function",
            format!("invalid dependency of lemma 'be' > {}", ctx.func),
        );
    }
}

fn ditransitive_person_object(ctx: &TokenContext<'_>, out: &mut Findings) {
    if DITRANSITIVE_LEMMAS.contains(&ctx.parent_lemma)
        && matches!(ctx.tok, "him" | "her" | "me" | "us" | "you")
        && ctx.func == "obj"
    {
        out.token(
            ctx,
            "ditransitive-object",
            "person object of ditransitive expected to be iobj, not obj",
        );
    }
}

fn iobj_with_clause(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !(ctx.has_child_func("obj")
        && ctx.has_any_child_func(&["ccomp", "xcomp"])
        && IOBJ_CLAUSE_LEMMAS.contains(&ctx.lemma))
    {
        return;
    }
    let message = if matches!(ctx.lemma, "believe" | "show") {
        format!(
            "verb expects iobj, not obj, with ccomp/xcomp ({} -- OK if raising-to-object)",
            ctx.lemma
        )
    } else {
        format!("verb expects iobj, not obj, with ccomp/xcomp ({})", ctx.lemma)
    };
    out.token(ctx, "iobj-with-clause", message);
}

fn aux_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "aux"
        && !matches!(ctx.lemma.to_lowercase().as_str(), "be" | "have" | "do")
        && !matches!(ctx.pos, "MD" | "TO")
    {
        out.token(ctx, "aux-lemma", "aux must be modal, 'be,' 'have,' or 'do'");
    }
}

fn finite_xcomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "xcomp"
        && matches!(ctx.pos, "VBP" | "VBZ" | "VBD")
        && !matches!(ctx.parent_lemma, "=" | "seem")
    {
        out.token(
            ctx,
            "finite-xcomp",
            format!("xcomp verb should be non-finite, not tag {}", ctx.pos),
        );
    }
}

fn noun_xcomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "xcomp" && ctx.pos == "VB" && ctx.parent_pos.starts_with('N') {
        out.token(
            ctx,
            "noun-xcomp",
            "infinitive child of a noun should be acl not xcomp",
        );
    }
}

fn be_xcomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "xcomp" && ctx.parent_lemma == "be" {
        out.token(
            ctx,
            "be-xcomp",
            "verb lemma 'be' should not have xcomp child",
        );
    }
}

fn subject_of_non_clause(ctx: &TokenContext<'_>, out: &mut Findings) {
    if CLAUSAL_FUNCTIONS.contains(&ctx.func)
        || !ctx.has_any_child_func(&["csubj", "nsubj", "nsubj:pass", "csubj:pass"])
    {
        return;
    }
    // Sentences used as names; "god forbid", "you know", "I mean".
    let allowed = ctx.extpos() == Some("PROPN")
        || (ctx.func == "discourse"
            && matches!(ctx.lemma, "forbid" | "guess" | "know" | "mean" | "think"));
    if !allowed {
        out.token(
            ctx,
            "subject-of-non-clause",
            format!("{} should not have subject child", ctx.func),
        );
    }
}

fn preposition_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos != "IN" || ctx.func == "goeswith" || ctx.has_child_func("goeswith") {
        return;
    }
    let lower = ctx.tok.to_lowercase();
    if !IN_IRREGULAR_FORMS.contains(&lower.as_str()) && ctx.lemma != lower {
        out.token(
            ctx,
            "preposition-lemma",
            "pos IN should have lemma identical to lower cased token",
        );
    }
}

fn an_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "DT" && ctx.lemma == "an" {
        out.token(ctx, "an-lemma", "lemma of 'an' should be 'a'");
    }
}

fn non_ascii_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if NON_ASCII_LEMMA_REGEX.is_match(ctx.lemma) {
        out.token(ctx, "non-ascii-lemma", "non-ASCII character in lemma");
    }
}

fn possessive_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "POS" && ctx.lemma != "'s" && ctx.func != "goeswith" {
        out.token(ctx, "possessive-lemma", "tag POS must have lemma \"'s\"");
    }
}

fn goeswith_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "goeswith" && ctx.lemma != "_" {
        out.token(ctx, "goeswith-lemma", "deprel goeswith must have lemma '_'");
    }
}

fn obj_case(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "obj"
        && ctx.has_child_func("case")
        && !(ctx.pos == "NNP" && ctx.has_any_child(&["'s", "’s"]))
    {
        out.token(
            ctx,
            "obj-case",
            format!(
                "obj should not have child case (children: {})",
                ctx.children.join(", ")
            ),
        );
    }
}

fn infinitival_relcl(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "acl:relcl"
        && ctx.pos == "VB"
        && ctx.has_child("to")
        && !ctx.has_any_child_func(&["cop", "aux"])
    {
        out.token(
            ctx,
            "infinitival-relcl",
            "infinitive with tag VB should be acl not acl:relcl",
        );
    }
}

fn adverb_relcl(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "acl:relcl" && ctx.parent_upos == "ADV" {
        out.token(
            ctx,
            "adverb-relcl",
            "dependent of adverb should be advcl:relcl not acl:relcl",
        );
    }
}

fn adverb_nominal(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.upos != "ADV" {
        return;
    }
    if ["nsubj", "obj", "iobj"]
        .iter()
        .any(|prefix| ctx.func.starts_with(prefix))
    {
        out.token(
            ctx,
            "adverb-core-function",
            format!("ADV with core nominal function {}", ctx.func),
        );
    } else if ctx.func.starts_with("obl") && !ctx.has_any_child_func(&["case", "det"]) {
        out.token(
            ctx,
            "adverb-obl",
            format!("ADV with function {} and no case or det dependent", ctx.func),
        );
    }
}

fn adverb_amod(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.upos == "ADV" && base(ctx.func) == "amod" {
        out.token(ctx, "adverb-amod", "ADV should not be amod");
    }
}

fn at_adverb(ctx: &TokenContext<'_>, out: &mut Findings) {
    if (ctx.upos == "ADV" || ctx.pos.starts_with("RB")) && ctx.lemma == "at" {
        out.token(ctx, "at-adverb", "at/ADV/RB is forbidden");
    }
}

fn relativized_enhanced(ctx: &TokenContext<'_>, out: &mut Findings) {
    let Some(edeps) = ctx.edeps else {
        return;
    };
    if !ctx.has_any_child_func(&["acl:relcl", "advcl:relcl"]) {
        return;
    }
    let inside_clause = edeps.iter().any(|dep| {
        RELATIVIZED_RELATIONS
            .iter()
            .any(|prefix| dep.relation.starts_with(prefix))
            && dep.head.word().is_some_and(|head| head > ctx.id)
    });
    if edeps.len() <= 1 || !inside_clause {
        out.token(
            ctx,
            "relativized-enhanced",
            "relativized word should have enhanced dependency within the relative clause",
        );
    }
}

fn gerund_det(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "VBG"
        && ctx.has_child_func("det")
        && !matches!(ctx.tok, "prioritizing" | "following")
    {
        out.token(
            ctx,
            "gerund-det",
            "tag VBG should not have a determiner 'det'",
        );
    }
}

fn let_help_ccomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.parent_lemma, "let" | "help") && ctx.func == "ccomp" {
        out.token(
            ctx,
            "let-help-ccomp",
            format!(
                "verb '{}' should take xcomp clausal object, not ccomp",
                ctx.parent_lemma
            ),
        );
    }
}

fn modal_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.pos == "MD" && !MODAL_LEMMAS.contains(&ctx.lemma) && ctx.func != "goeswith" {
        out.token(
            ctx,
            "modal-lemma",
            format!("lemma '{}' is not a known modal verb for tag MD", ctx.lemma),
        );
    }
}

fn like_interjection(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.lemma == "like"
        && ctx.pos == "UH"
        && !matches!(ctx.func, "discourse" | "conj" | "reparandum")
    {
        out.token(
            ctx,
            "like-interjection",
            format!(
                "lemma 'like' with tag UH should have deprel discourse, not {}",
                ctx.func
            ),
        );
    }
}

fn copular_object(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "iobj" | "obj") && matches!(ctx.parent_lemma, "become" | "remain" | "stay") {
        out.token(
            ctx,
            "copular-object",
            format!(
                "verb '{}' should take xcomp not {} argument",
                ctx.parent_lemma, ctx.func
            ),
        );
    }
}

fn object_case(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "iobj" | "obj")
        && ctx.has_child_func("case")
        && !ctx.child_pos.contains(&"POS")
    {
        out.token(
            ctx,
            "object-case",
            format!(
                "function {} should not have non-possessive 'case' dependents",
                ctx.func
            ),
        );
    }
}

fn deprecated_subtype(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func.contains(":tmod") || ctx.func.contains(":npmod") {
        out.token(
            ctx,
            "deprecated-subtype",
            format!("function {} is deprecated, use :unmarked instead", ctx.func),
        );
    }
}

fn unmarked_case(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.func, "nmod:unmarked" | "obl:unmarked") && ctx.has_child_func("case") {
        out.token(
            ctx,
            "unmarked-case",
            format!("function {} should not have 'case' dependents", ctx.func),
        );
    }
}

fn nominal_of_determiner(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !matches!(ctx.parent_upos, "DET" | "NUM") {
        return;
    }
    if ctx.func.starts_with("nmod") && ctx.parent_func.starts_with("det") {
        out.token(
            ctx,
            "nmod-of-det",
            format!(
                "nominal dependent of {} dependent should be obl, not nmod",
                ctx.parent_func
            ),
        );
    } else if ctx.func.starts_with("obl")
        && (ctx.parent_func.starts_with("nummod") || ctx.parent_func.starts_with("compound"))
    {
        out.token(
            ctx,
            "obl-of-nummod",
            format!(
                "nominal dependent of {} dependent should be nmod, not obl",
                ctx.parent_func
            ),
        );
    }
}

fn passive_parent(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !matches!(ctx.func, "aux:pass" | "nsubj:pass") || ctx.parent_pos == "VBN" {
        return;
    }
    let allowed = (ctx.sent_id.contains("stardust") && ctx.parent_lemma == "would")
        || ctx.parent_lemma == "Rated";
    if !allowed {
        out.token(
            ctx,
            "pass-dependent-head",
            format!(
                "function {} should not be the child of pos {}",
                ctx.func, ctx.parent_pos
            ),
        );
    }
}

fn be_obl(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "obl"
        && ctx.parent_lemma == "be"
        && ctx.points_right()
        && !ctx.parent_child_funcs.contains(&"expl")
        && !ctx.is_parent_promoted()
    {
        out.token(ctx, "be-obl", "'be' should not be the head of 'be' + PP");
    }
}

fn agent_shape(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "obl:agent" && (ctx.parent_pos != "VBN" || !ctx.has_child_lower(&["by"])) {
        out.token(
            ctx,
            "agent-shape",
            format!(
                "function obl:agent must be child of VBN with a 'by' dependent (head is {})",
                ctx.parent_pos
            ),
        );
    }
}

fn multiple_agents(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.child_func_count("obl:agent") > 1 {
        out.token(
            ctx,
            "multiple-agents",
            "a token may have at most one obl:agent dependent",
        );
    }
}

fn subject_and_agent(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.has_child_func("obl:agent")
        && ctx.has_any_child_func(&["nsubj", "csubj"])
        && !ctx.has_child_func("nsubj:pass")
    {
        out.token(
            ctx,
            "subject-and-agent",
            "a token cannot have both a *subj relation and obl:agent",
        );
    }
}

fn finite_aux(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.pos, "VBD" | "VBP")
        && ctx.has_child_func("aux")
        && !ctx.has_child_func("nsubj:outer")
    {
        out.token(
            ctx,
            "finite-aux",
            format!("tag {} should not have auxiliaries 'aux'", ctx.pos),
        );
    }
}

fn not_function(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.lemma == "not" && !NOT_FUNCTIONS.contains(&ctx.func) {
        out.token(
            ctx,
            "not-function",
            format!("deprel {} should not be used with lemma 'not'", ctx.func),
        );
    }
}

fn perception_xcomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "xcomp" && matches!(ctx.parent_lemma, "see" | "hear" | "notice") {
        out.token(
            ctx,
            "perception-xcomp",
            format!(
                "deprel xcomp should not be used with perception verb lemma '{}' (should this be nsubj+ccomp?)",
                ctx.parent_lemma
            ),
        );
    }
}

fn have_ccomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    // "have no idea/clue that", "rumor has it that".
    let idiom = ctx.has_child_func("obj") && ctx.has_any_child(&["idea", "clue"]);
    if ctx.lemma == "have" && ctx.has_child_func("ccomp") && !idiom && !ctx.has_child_func("expl")
    {
        out.token(
            ctx,
            "have-ccomp",
            "'have' token has suspicious ccomp dependent (should it be xcomp?)",
        );
    }
}

fn obj_and_ccomp(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.has_child_func("obj") && ctx.has_child_func("ccomp") {
        out.token(ctx, "obj-and-ccomp", "token has both obj and ccomp children");
    }
}

fn multiple_comps(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.child_func_count("ccomp") + ctx.child_func_count("xcomp") > 1
        && !ctx.has_child_func("expl")
    {
        out.token(
            ctx,
            "multiple-comps",
            "token has multiple (c|x)comp dependents (usually an error if not extraposition)",
        );
    }
}

fn adjacent_acl(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "acl"
        && (ctx.pos.ends_with('G') || ctx.pos.ends_with('N'))
        && ctx.parent_id == ctx.id + 1
    {
        out.token(
            ctx,
            "adjacent-acl",
            "back-pointing acl for adjacent premodifier (should be amod?)",
        );
    }
}

fn nominal_advcl(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "advcl"
        && ctx.upos == "VERB"
        && (ctx.pos.ends_with('G') || ctx.pos.ends_with('N'))
        && matches!(
            ctx.parent_upos,
            "NUM" | "SYM" | "NOUN" | "PRON" | "PROPN" | "DET"
        )
        && !ctx.is_parent_copular
        && ctx.parent_func != "root"
    {
        out.token(
            ctx,
            "nominal-advcl",
            "non-predicate non-root nominal should not have advcl dependent (should be acl?)",
        );
    }
}

fn unmarked_adverb(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func.ends_with("unmarked") && ctx.pos.starts_with("RB") {
        out.token(ctx, "unmarked-adverb", "adverbs should not be unmarked");
    }
}

fn here_there_case(ctx: &TokenContext<'_>, out: &mut Findings) {
    // Adjacency matters: "out of there" is fine.
    if ctx.func == "case"
        && matches!(ctx.lemma, "back" | "down" | "over" | "out" | "up")
        && matches!(ctx.parent_lemma, "here" | "there")
        && ctx.id + 1 == ctx.parent_id
    {
        out.token(
            ctx,
            "here-there-case",
            format!(
                "'{} {}' should probably be advmod not case",
                ctx.lemma, ctx.parent_lemma
            ),
        );
    }
}

fn sconj_case(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "case" && ctx.upos == "SCONJ" && !ctx.has_child_func("fixed") {
        out.token(ctx, "sconj-case", "SCONJ/case combination is invalid");
    }
}

fn indefinite_proform(ctx: &TokenContext<'_>, out: &mut Findings) {
    if !INDEFINITE_PROFORMS.contains(&ctx.lemma) {
        return;
    }
    let message = format!(
        "indefinite time or place pro-form tagging {}/{} is invalid, should be ADV/RB",
        ctx.upos, ctx.pos
    );
    if ctx.pos != "RB" || ctx.upos != "ADV" {
        out.token(ctx, "indefinite-proform", message.clone());
    }
    if ctx.func.starts_with("obl:") {
        out.token(ctx, "indefinite-proform", message);
    }
}

fn existential_there(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.func == "reparandum" {
        return;
    }
    let ex_tag = ctx.pos == "EX";
    let expl_there = ctx.func == "expl" && ctx.lemma == "there";
    if ex_tag != expl_there || (ex_tag && ctx.upos != "PRON") {
        out.token(
            ctx,
            "existential-there",
            format!("'there' with {} and {}", ctx.pos, ctx.upos),
        );
    }
    if ctx.lemma == "there" && !ex_tag && ctx.func.contains("nsubj") {
        out.token(
            ctx,
            "existential-there",
            "subject 'there' not tagged as EX/expl",
        );
    }
    if ex_tag && ctx.parent_lemma == "be" && ctx.parent_upos != "VERB" {
        out.token(
            ctx,
            "existential-be",
            format!("existential BE should be VERB, is {}", ctx.parent_upos),
        );
    }
}

fn what_det(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.lemma == "what" && (ctx.pos == "WDT") != matches!(ctx.func, "det" | "det:predet") {
        out.token(
            ctx,
            "what-det",
            "what/WDT should correspond with det or det:predet",
        );
    }
}

fn numeric_lemma(ctx: &TokenContext<'_>, out: &mut Findings) {
    // Pluralized years like "1960s" are NOUN/NNS.
    if !matches!(ctx.upos, "NUM" | "X")
        && NUMERIC_LEMMA_REGEX.is_match(ctx.lemma)
        && ctx.pos != "NNS"
        && ctx.lemma != "<3"
    {
        out.token(
            ctx,
            "numeric-lemma",
            format!("numeric lemma '{}' is not NUM", ctx.lemma),
        );
    }
}

fn quotation_position(ctx: &TokenContext<'_>, out: &mut Findings) {
    let Some(position) = ctx.position else {
        return;
    };
    let wrong = match position {
        Position::First => ctx.pos == "''",
        Position::Last => ctx.pos == "``",
    };
    if wrong {
        out.token(
            ctx,
            "quotation-position",
            format!(
                "incorrect quotation mark tag {} at {} position in sentence",
                ctx.pos,
                position.as_str()
            ),
        );
    }
}

fn kind_sort_fixed(ctx: &TokenContext<'_>, out: &mut Findings) {
    if matches!(ctx.tok, "sort" | "kind") && ctx.has_child_func("det") && ctx.has_child_func("fixed")
    {
        out.token(ctx, "kind-sort-fixed", "mistagged fixed expression");
    }
}

fn rather_than(ctx: &TokenContext<'_>, out: &mut Findings) {
    if ctx.tok == "rather" && ctx.has_child_func("fixed") && !matches!(ctx.func, "cc" | "mark") {
        out.token(
            ctx,
            "rather-than",
            "'rather than' fixed expression must be cc or mark",
        );
    }
}

fn suspicious_bigram(ctx: &TokenContext<'_>, out: &mut Findings) {
    let prev_lower = ctx.prev.tok.to_lowercase();
    for &(w1, pos1, w2, pos2) in SUSPICIOUS_BIGRAMS {
        if (w1 == "*" || w1 == prev_lower)
            && (pos1 == "*" || pos1 == ctx.prev.pos)
            && (w2 == "*" || w2 == ctx.lemma)
            && (pos2 == "*" || pos2 == ctx.pos)
        {
            out.token(
                ctx,
                "suspicious-bigram",
                format!(
                    "suspicious n-gram {}/{} {}/{}",
                    ctx.prev.tok, ctx.prev.pos, ctx.tok, ctx.pos
                ),
            );
        }
    }
}

/// Two-word expressions with a fixed analysis, checked on their second word.
fn fixed_bigrams(ctx: &TokenContext<'_>, out: &mut Findings) {
    let prev_lower = ctx.prev.tok.to_lowercase();
    let prev = ctx.prev;
    match (prev_lower.as_str(), ctx.lemma) {
        ("no", "one") => {
            if ctx.upos != "PRON" {
                out.token(
                    ctx,
                    "no-one",
                    format!("UPOS should be one/PRON in 'no one': {}", ctx.upos),
                );
            }
        }
        ("one", "another") | ("each", "other") => {
            check_fixed_pair(ctx, out, &prev_lower, None);
        }
        ("kind" | "sort" | "instead", "of") | ("rather", "than") | ("at", "least")
            if ctx.func == "fixed" =>
        {
            check_fixed_pair(ctx, out, &prev_lower, Some(prev.func));
        }
        ("a", "couple") => {
            let well_formed = prev.func == "det"
                && prev.parent_lemma == "couple"
                && !matches!(ctx.func, "nummod" | "compound" | "fixed")
                && (ctx.func != "nmod" || ctx.has_child_func("case"));
            if !well_formed {
                out.token(
                    ctx,
                    "a-couple",
                    "structure of 'a couple NOUN' should be det(couple, a), nmod:unmarked(NOUN, couple)",
                );
            }
        }
        ("and", "/") => {
            let well_formed = prev.pos == "CC"
                && prev.upos == "CCONJ"
                && ctx.func == "cc"
                && ctx.parent_lemma == "or"
                && ctx.pos == "SYM"
                && ctx.upos == "SYM"
                && ctx.has_edep("cc", ctx.parent_id);
            if !well_formed {
                out.token(
                    ctx,
                    "and-or",
                    "structure of 'and/or' should be conj(and/CC/CCONJ, cc(or/CC/CCONJ, '/'/SYM/SYM)) and E:cc(or, '/')",
                );
            }
        }
        ("/", "or") => {
            let well_formed = prev.pos == "SYM"
                && prev.upos == "SYM"
                && ctx.func == "conj"
                && ctx.parent_lemma == "and"
                && ctx.pos == "CC"
                && ctx.upos == "CCONJ"
                && ctx.has_edep("conj:slash", ctx.parent_id)
                && ctx
                    .edeps
                    .is_some_and(|deps| deps.iter().any(|dep| dep.relation == "cc"));
            if !well_formed {
                out.token(
                    ctx,
                    "and-or",
                    "structure of 'and/or' should be conj(and/CC/CCONJ, cc(or/CC/CCONJ, '/'/SYM/SYM)) and E:conj(and, or) and E:cc(*, or)",
                );
            }
        }
        _ => {}
    }
}

/// Verify the tags and attachment of a two-word fixed expression whose
/// first word is the previous token. `outer` is the first word's function.
fn check_fixed_pair(ctx: &TokenContext<'_>, out: &mut Findings, w1: &str, outer: Option<&str>) {
    let w2 = ctx.lemma;
    let (pos1, upos1, pos2, upos2) = (ctx.prev.pos, ctx.prev.upos, ctx.pos, ctx.upos);
    let tags_match = matches!(
        (w1, w2, pos1, upos1, pos2, upos2),
        ("one", "another", "CD", "PRON", "DT", "DET")
            | ("each", "other", "DT", "DET", "JJ", "ADJ")
            | ("kind" | "sort", "of", "NN", "NOUN", "IN", "ADP")
            | ("at", "least", "IN", "ADP", "JJS", "ADJ")
            | ("rather", "than", "RB", "ADV", "IN", "ADP" | "SCONJ")
            | ("instead", "of", "RB", "ADV", "IN", "ADP" | "SCONJ")
    );
    if !(ctx.func == "fixed" && ctx.parent_lemma == w1 && tags_match) {
        out.token(
            ctx,
            "fixed-bigram",
            format!(
                "structure of '{w1} {w2}' should not be fixed({w1}/{pos1}/{upos1}, {w2}/{pos2}/{upos2})"
            ),
        );
    }
    if matches!((w1, w2), ("kind" | "sort", "of") | ("at", "least")) && outer != Some("advmod") {
        out.token(
            ctx,
            "fixed-bigram-attachment",
            format!(
                "fixed expr '{w1} {w2}' should attach as advmod not {}",
                outer.unwrap_or("None")
            ),
        );
    }
}
