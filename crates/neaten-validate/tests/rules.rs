//! End-to-end rule tests over small CoNLL-U fragments.

use neaten_ingest::parse_str;
use neaten_model::Diagnostic;
use neaten_validate::{ValidateError, Validator};

const FILENAME: &str = "en_ewt-ud-dev.conllu";

fn validate(conllu: &str) -> Vec<Diagnostic> {
    let mut sentences = parse_str(conllu, FILENAME).expect("parse fragment");
    let mut validator = Validator::new();
    validator
        .validate_all(sentences.iter_mut())
        .expect("validate fragment")
}

fn with_prefix<'a>(diagnostics: &'a [Diagnostic], prefix: &str) -> Vec<&'a Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.code.starts_with(prefix))
        .collect()
}

fn with_code<'a>(diagnostics: &'a [Diagnostic], code: &str) -> Vec<&'a Diagnostic> {
    diagnostics.iter().filter(|d| d.code == code).collect()
}

fn messages(diagnostics: &[&Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(|d| d.message.clone()).collect()
}

fn rendered(diagnostics: &[&Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn passive_sentence(verb_xpos: &str, verb_feats: &str) -> String {
    format!(
        "# sent_id = reviews-000001-0001\n\
         # text = It was eaten.\n\
         1\tIt\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t3\tnsubj:pass\t3:nsubj:pass\t_\n\
         2\twas\tbe\tAUX\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t3\taux:pass\t3:aux:pass\t_\n\
         3\teaten\teat\tVERB\t{verb_xpos}\t{verb_feats}\t0\troot\t0:root\tSpaceAfter=No\n\
         4\t.\t.\tPUNCT\t.\t_\t3\tpunct\t3:punct\t_\n\
         \n"
    )
}

fn pronoun_sentence(her_feats: &str) -> String {
    format!(
        "# sent_id = email-000002-0001\n\
         # text = I saw her\n\
         1\tI\tI\tPRON\tPRP\tCase=Nom|Number=Sing|Person=1|PronType=Prs\t2\tnsubj\t2:nsubj\t_\n\
         2\tsaw\tsee\tVERB\tVBD\tMood=Ind|Number=Sing|Person=1|Tense=Past|VerbForm=Fin\t0\troot\t0:root\t_\n\
         3\ther\tshe\tPRON\tPRP\t{her_feats}\t2\tobj\t2:obj\t_\n\
         \n"
    )
}

#[test]
fn well_formed_passive_is_quiet() {
    let diagnostics = validate(&passive_sentence("VBN", "Tense=Past|VerbForm=Part|Voice=Pass"));
    assert!(with_prefix(&diagnostics, "passive-").is_empty());
    assert!(with_prefix(&diagnostics, "participle-").is_empty());
}

#[test]
fn passive_without_voice_is_reported_once() {
    let diagnostics = validate(&passive_sentence("VBN", "Tense=Past|VerbForm=Part"));
    let passive = with_prefix(&diagnostics, "passive-");
    assert_eq!(passive.len(), 1);
    assert_eq!(passive[0].code, "passive-voice");
    assert_eq!(passive[0].token, Some(3));
}

#[test]
fn passive_with_past_tense_tag_needs_voice_and_vbn() {
    let diagnostics = validate(&passive_sentence("VBD", "Tense=Past|VerbForm=Part"));
    let codes: Vec<_> = with_prefix(&diagnostics, "passive-")
        .iter()
        .map(|d| d.code)
        .collect();
    assert_eq!(codes, ["passive-voice", "passive-tag"]);
}

#[test]
fn passive_diagnostics_render_with_location() {
    let diagnostics = validate(&passive_sentence("VBD", "Tense=Past|VerbForm=Part"));
    insta::assert_snapshot!(rendered(&with_prefix(&diagnostics, "passive-")), @r"
    WARN: Passive verb with lemma 'eat' should have Voice=Pass in reviews-000001-0001 @ token 3 (eaten) en_ewt-ud-dev.conllu
    WARN: Passive verb with lemma 'eat' should be VBN in reviews-000001-0001 @ token 3 (eaten) en_ewt-ud-dev.conllu
    ");
}

#[test]
fn accusative_her_matches_lexicon() {
    let diagnostics = validate(&pronoun_sentence(
        "Case=Acc|Gender=Fem|Number=Sing|Person=3|PronType=Prs",
    ));
    assert!(with_prefix(&diagnostics, "pronoun-").is_empty());
}

#[test]
fn nominative_her_gets_one_case_finding() {
    let diagnostics = validate(&pronoun_sentence(
        "Case=Nom|Gender=Fem|Number=Sing|Person=3|PronType=Prs",
    ));
    let pronoun = with_prefix(&diagnostics, "pronoun-");
    assert_eq!(pronoun.len(), 1);
    assert_eq!(pronoun[0].message, "FORM 'her' should correspond with Case=Acc");
    assert_eq!(pronoun[0].token, Some(3));
}

#[test]
fn unlisted_fixed_expression_is_reported_once() {
    let conllu = "# sent_id = answers-000003-0001\n\
        # text = Go as planned\n\
        1\tGo\tgo\tVERB\tVB\tMood=Imp|VerbForm=Fin\t0\troot\t0:root\t_\n\
        2\tas\tas\tSCONJ\tIN\tExtPos=SCONJ\t3\tmark\t3:mark\t_\n\
        3\tplanned\tplan\tVERB\tVBN\tTense=Past|VerbForm=Part\t2\tfixed\t2:fixed\t_\n\
        \n";
    let diagnostics = validate(conllu);
    let unlisted: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.message == "unlisted fixed expression")
        .collect();
    assert_eq!(unlisted.len(), 1);
    assert_eq!(unlisted[0].token, Some(3));
}

#[test]
fn missing_head_stops_before_next_sentence() {
    let conllu = "# sent_id = weblog-000004-0001\n\
        1\tHi\thi\tINTJ\tUH\t_\t_\troot\t_\t_\n\
        \n\
        # sent_id = weblog-000004-0002\n\
        1\tBye\tbye\tINTJ\tUH\t_\t0\troot\t0:root\t_\n\
        \n";
    let mut sentences = parse_str(conllu, FILENAME).expect("parse fragment");
    let mut validator = Validator::new();
    let err = validator
        .validate_all(sentences.iter_mut())
        .expect_err("missing head is fatal");
    assert_eq!(
        err,
        ValidateError::MissingHead {
            sent_id: "weblog-000004-0001".into(),
            token: 1,
            filename: FILENAME.into(),
        }
    );
    assert_eq!(validator.finish().sentences, 1);
}

#[test]
fn rare_lemma_surfaces_in_report() {
    let conllu = "# sent_id = s1\n\
        1\tsaw\tsee\tVERB\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t0\troot\t0:root\t_\n\
        \n\
        # sent_id = s2\n\
        1\tsaw\tsee\tVERB\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t0\troot\t0:root\t_\n\
        \n\
        # sent_id = s3\n\
        1\tsaw\tsaw\tVERB\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t0\troot\t0:root\t_\n\
        \n";
    let mut sentences = parse_str(conllu, FILENAME).expect("parse fragment");
    let mut validator = Validator::new();
    validator
        .validate_all(sentences.iter_mut())
        .expect("validate fragment");
    let report = validator.finish();
    assert_eq!(report.suspicious_lemma_types(), 1);
    assert_eq!(
        report.rare_lemmas[0].to_string(),
        "! rare lemma saw for saw/VBD in s3 (majority: see)"
    );
}

// === Structural rules ===

#[test]
fn ccomp_with_mark_child_is_accepted() {
    let conllu = "# sent_id = email-000009-0001\n\
        # text = I said because it rained\n\
        1\tI\tI\tPRON\tPRP\tCase=Nom|Number=Sing|Person=1|PronType=Prs\t2\tnsubj\t2:nsubj\t_\n\
        2\tsaid\tsay\tVERB\tVBD\tMood=Ind|Number=Sing|Person=1|Tense=Past|VerbForm=Fin\t0\troot\t0:root\t_\n\
        3\tbecause\tbecause\tSCONJ\tIN\t_\t5\tmark\t5:mark\t_\n\
        4\tit\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t5\tnsubj\t5:nsubj\t_\n\
        5\trained\train\tVERB\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t2\tccomp\t2:ccomp\t_\n\
        \n";
    let diagnostics = validate(conllu);
    assert!(
        diagnostics
            .iter()
            .all(|d| !d.message.contains("ccomp should not have child mark"))
    );
}

fn demonstrative_sentence(form: &str, upos: &str, xpos: &str, deprel: &str) -> String {
    format!(
        "# sent_id = email-000005-0001\n\
         1\t{form}\t{form}\t{upos}\t{xpos}\t_\t2\t{deprel}\t2:{deprel}\t_\n\
         2\tbook\tbook\tNOUN\tNN\tNumber=Sing\t0\troot\t0:root\t_\n\
         \n"
    )
}

#[test]
fn demonstrative_tags_report_the_first_matching_expectation() {
    let cases = [
        (
            ("that", "PRON", "WDT", "det"),
            "'that' attaching as det should be DT/DET not WDT/PRON",
        ),
        (
            ("that", "DET", "WDT", "nsubj"),
            "'that' attaching as nsubj should be WDT/PRON not WDT/DET",
        ),
        (
            ("this", "DET", "DT", "nsubj"),
            "'this' attaching as nsubj should be DT/PRON not DT/DET",
        ),
    ];
    for ((form, upos, xpos, deprel), expected) in cases {
        let diagnostics = validate(&demonstrative_sentence(form, upos, xpos, deprel));
        let found = with_code(&diagnostics, "demonstrative-tag");
        assert_eq!(messages(&found), [expected], "{form} {upos} {xpos} {deprel}");
        assert_eq!(found[0].token, Some(1));
    }
}

#[test]
fn demonstratives_with_expected_tags_are_quiet() {
    for (form, upos, xpos, deprel) in [
        ("that", "PRON", "WDT", "nsubj"),
        ("this", "DET", "DT", "det"),
        ("this", "PRON", "DT", "nsubj"),
        ("that", "SCONJ", "IN", "mark"),
    ] {
        let diagnostics = validate(&demonstrative_sentence(form, upos, xpos, deprel));
        assert!(
            with_code(&diagnostics, "demonstrative-tag").is_empty(),
            "{form} {upos} {xpos} {deprel}"
        );
    }
}

// === Tag inventory and typos ===

fn single_word(form: &str, lemma: &str, upos: &str, xpos: &str, feats: &str, misc: &str) -> String {
    format!(
        "# sent_id = weblog-000006-0001\n\
         1\t{form}\t{lemma}\t{upos}\t{xpos}\t{feats}\t0\troot\t0:root\t{misc}\n\
         \n"
    )
}

#[test]
fn unknown_tags_are_reported() {
    let diagnostics = validate(&single_word("run", "run", "NOUNY", "NNZ", "_", "_"));
    assert_eq!(
        messages(&with_code(&diagnostics, "upos-tag")),
        ["invalid UPOS tag NOUNY"]
    );
    assert_eq!(
        messages(&with_code(&diagnostics, "xpos-tag")),
        ["invalid POS tag NNZ"]
    );
    assert!(with_code(&diagnostics, "tag-combination").is_empty());
}

#[test]
fn incompatible_tag_pair_is_reported() {
    let diagnostics = validate(&single_word("run", "run", "VERB", "NN", "_", "_"));
    assert_eq!(
        messages(&with_code(&diagnostics, "tag-combination")),
        ["invalid POS tag NN for UPOS VERB"]
    );
}

#[test]
fn tag_pair_exceptions_are_quiet() {
    let etc = validate(&single_word("etc.", "etc.", "NOUN", "FW", "_", "_"));
    assert!(with_code(&etc, "tag-combination").is_empty());

    let reciprocal = validate(&single_word(
        "one",
        "one",
        "PRON",
        "CD",
        "ExtPos=PRON|PronType=Rcp",
        "_",
    ));
    assert!(with_code(&reciprocal, "tag-combination").is_empty());

    let indefinite = validate(&single_word("one", "one", "PRON", "CD", "PronType=Ind", "_"));
    assert_eq!(
        messages(&with_code(&indefinite, "tag-combination")),
        ["CD/PRON combination requires PronType=Rcp ('one another')"]
    );
}

fn typo_sentence(misc: &str) -> String {
    format!(
        "# sent_id = reviews-000007-0001\n\
         1\tteh\tthe\tDET\tDT\tDefinite=Def|PronType=Art|Typo=Yes\t2\tdet\t2:det\t{misc}\n\
         2\tbook\tbook\tNOUN\tNN\tNumber=Sing\t0\troot\t0:root\t_\n\
         \n"
    )
}

#[test]
fn typo_without_correction_is_reported() {
    let diagnostics = validate(&typo_sentence("_"));
    let typo = with_code(&diagnostics, "typo-correction");
    assert_eq!(
        messages(&typo),
        ["FORM 'teh' with Typo=Yes should have feature CorrectForm or a following goeswith dependency"]
    );
    assert_eq!(typo[0].token, Some(1));
}

#[test]
fn typo_with_correct_form_is_quiet() {
    let diagnostics = validate(&typo_sentence("CorrectForm=the"));
    assert!(with_code(&diagnostics, "typo-correction").is_empty());
}

// === Copula forms ===

fn copula_sentence(form: &str) -> String {
    format!(
        "# sent_id = answers-000008-0001\n\
         1\tIt\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t3\tnsubj\t3:nsubj\t_\n\
         2\t{form}\tbe\tAUX\tVBZ\tMood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin\t3\tcop\t3:cop\t_\n\
         3\tfine\tfine\tADJ\tJJ\tDegree=Pos\t0\troot\t0:root\t_\n\
         \n"
    )
}

#[test]
fn copula_forms_follow_their_morphology() {
    assert!(with_code(&validate(&copula_sentence("is")), "be-form").is_empty());

    let unknown = validate(&copula_sentence("iz"));
    assert_eq!(
        messages(&with_code(&unknown, "be-form")),
        ["unknown 'be' form: iz"]
    );

    let mistagged = validate(&copula_sentence("was"));
    assert_eq!(
        messages(&with_code(&mistagged, "be-form")),
        ["unexpected morphology for 'be' verb: 'was'"]
    );
}

// === Closed-class lexicon ===

fn reciprocal_sentence(one_feats: &str) -> String {
    format!(
        "# sent_id = email-000010-0001\n\
         # text = They help one another\n\
         1\tThey\tthey\tPRON\tPRP\tCase=Nom|Number=Plur|Person=3|PronType=Prs\t2\tnsubj\t2:nsubj\t_\n\
         2\thelp\thelp\tVERB\tVBP\tMood=Ind|Number=Plur|Person=3|Tense=Pres|VerbForm=Fin\t0\troot\t0:root\t_\n\
         3\tone\tone\tPRON\tCD\t{one_feats}\t2\tobj\t2:obj\t_\n\
         4\tanother\tanother\tDET\tDT\t_\t3\tfixed\t3:fixed\t_\n\
         \n"
    )
}

fn at_token<'a>(diagnostics: &[&'a Diagnostic], token: usize) -> Vec<&'a Diagnostic> {
    diagnostics
        .iter()
        .copied()
        .filter(|d| d.token == Some(token))
        .collect()
}

#[test]
fn reciprocal_is_looked_up_as_two_words() {
    let diagnostics = validate(&reciprocal_sentence("ExtPos=PRON|PronType=Rcp"));
    assert!(at_token(&with_prefix(&diagnostics, "pronoun-"), 4).is_empty());
}

#[test]
fn reciprocal_reads_features_from_first_word() {
    let diagnostics = validate(&reciprocal_sentence("ExtPos=PRON|PronType=Ind"));
    let found = at_token(&with_prefix(&diagnostics, "pronoun-"), 4);
    assert_eq!(
        messages(&found),
        ["FORM 'another' should correspond with PronType=Rcp"]
    );
}

fn possessive_sentence(feats: &str) -> String {
    format!(
        "# sent_id = reviews-000011-0001\n\
         1\ttheir\ttheir\tPRON\tPRP$\t{feats}\t2\tnmod:poss\t2:nmod:poss\t_\n\
         2\tbooks\tbook\tNOUN\tNNS\tNumber=Plur\t0\troot\t0:root\t_\n\
         \n"
    )
}

fn pronoun_messages(feats: &str) -> Vec<String> {
    let diagnostics = validate(&possessive_sentence(feats));
    messages(&at_token(&with_prefix(&diagnostics, "pronoun-"), 1))
}

#[test]
fn optional_feature_may_be_absent() {
    assert!(pronoun_messages("Case=Gen|Number=Plur|Person=3|Poss=Yes|PronType=Prs").is_empty());
    assert!(
        pronoun_messages("Case=Gen|Gender=Neut|Number=Sing|Person=3|Poss=Yes|PronType=Prs")
            .is_empty()
    );
}

#[test]
fn optional_feature_when_present_must_match() {
    assert_eq!(
        pronoun_messages("Case=Gen|Gender=Masc|Number=Plur|Person=3|Poss=Yes|PronType=Prs"),
        ["FORM 'their' should correspond with Gender=Neut"]
    );
}

#[test]
fn listed_values_are_required_when_not_optional() {
    assert_eq!(
        pronoun_messages("Case=Gen|Person=3|Poss=Yes|PronType=Prs"),
        ["FORM 'their' should correspond with Number=Plur,Sing"]
    );
}

#[test]
fn unexpected_feature_is_reported() {
    assert_eq!(
        pronoun_messages("Case=Gen|Definite=Def|Number=Plur|Person=3|Poss=Yes|PronType=Prs"),
        ["FORM 'their' should not have feature Definite"]
    );
}

// === Agents ===

fn agent_sentence(subject_rel: &str, verb_feats: &str, case: &str) -> String {
    format!(
        "# sent_id = reviews-000012-0001\n\
         # text = It was eaten {case} dogs\n\
         1\tIt\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t3\t{subject_rel}\t3:{subject_rel}\t_\n\
         2\twas\tbe\tAUX\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t3\taux:pass\t3:aux:pass\t_\n\
         3\teaten\teat\tVERB\tVBN\t{verb_feats}\t0\troot\t0:root\t_\n\
         4\t{case}\t{case}\tADP\tIN\t_\t5\tcase\t5:case\t_\n\
         5\tdogs\tdog\tNOUN\tNNS\tNumber=Plur\t3\tobl:agent\t3:obl:agent\t_\n\
         \n"
    )
}

const PASSIVE_FEATS: &str = "Tense=Past|VerbForm=Part|Voice=Pass";

const AGENT_CODES: &[&str] = &[
    "agent-by",
    "agent-voice",
    "agent-shape",
    "multiple-agents",
    "subject-and-agent",
];

fn agent_findings(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| AGENT_CODES.contains(&d.code))
        .collect()
}

#[test]
fn by_agent_of_passive_verb_is_quiet() {
    let diagnostics = validate(&agent_sentence("nsubj:pass", PASSIVE_FEATS, "by"));
    assert!(agent_findings(&diagnostics).is_empty());
    assert!(with_prefix(&diagnostics, "passive-").is_empty());
}

#[test]
fn agent_without_by_is_reported() {
    let diagnostics = validate(&agent_sentence("nsubj:pass", PASSIVE_FEATS, "with"));
    let by = with_code(&diagnostics, "agent-by");
    assert_eq!(messages(&by), ["obl:agent without 'by' (lemmas: dog <- eat)"]);
    assert_eq!(by[0].token, Some(5));
    assert_eq!(
        messages(&with_code(&diagnostics, "agent-shape")),
        ["function obl:agent must be child of VBN with a 'by' dependent (head is VBN)"]
    );
}

#[test]
fn agent_of_active_verb_needs_voice() {
    let diagnostics = validate(&agent_sentence("nsubj:pass", "Tense=Past|VerbForm=Part", "by"));
    let voice = with_code(&diagnostics, "agent-voice");
    assert_eq!(
        messages(&voice),
        ["Voice=Pass missing from verb that heads obl:agent (lemmas: dog <- eat)"]
    );
    assert_eq!(voice[0].token, Some(5));
}

#[test]
fn active_subject_with_agent_is_reported() {
    let diagnostics = validate(&agent_sentence("nsubj", PASSIVE_FEATS, "by"));
    let both = with_code(&diagnostics, "subject-and-agent");
    assert_eq!(
        messages(&both),
        ["a token cannot have both a *subj relation and obl:agent"]
    );
    assert_eq!(both[0].token, Some(3));
    assert_eq!(
        messages(&with_code(&diagnostics, "passive-subject")),
        ["Passive verb with lemma 'eat' has subject dependents {'nsubj'}"]
    );
}

#[test]
fn second_agent_is_reported_on_the_verb() {
    let conllu = "# sent_id = reviews-000013-0001\n\
        1\tIt\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t3\tnsubj:pass\t3:nsubj:pass\t_\n\
        2\twas\tbe\tAUX\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t3\taux:pass\t3:aux:pass\t_\n\
        3\teaten\teat\tVERB\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t0\troot\t0:root\t_\n\
        4\tby\tby\tADP\tIN\t_\t5\tcase\t5:case\t_\n\
        5\tdogs\tdog\tNOUN\tNNS\tNumber=Plur\t3\tobl:agent\t3:obl:agent\t_\n\
        6\tby\tby\tADP\tIN\t_\t7\tcase\t7:case\t_\n\
        7\tcats\tcat\tNOUN\tNNS\tNumber=Plur\t3\tobl:agent\t3:obl:agent\t_\n\
        \n";
    let diagnostics = validate(conllu);
    let multiple = with_code(&diagnostics, "multiple-agents");
    assert_eq!(
        messages(&multiple),
        ["a token may have at most one obl:agent dependent"]
    );
    assert_eq!(multiple[0].token, Some(3));
}

// === Passive auxiliaries and copulas ===

fn auxiliary_sentence(sent_id: &str, second: &str, third: &str) -> String {
    format!(
        "# sent_id = {sent_id}\n\
         1\tIt\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t4\tnsubj:pass\t4:nsubj:pass\t_\n\
         2\t{second}\t_\n\
         3\t{third}\t_\n\
         4\teaten\teat\tVERB\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t0\troot\t0:root\t_\n\
         \n"
    )
}

const HAS_AUX: &str =
    "has\thave\tAUX\tVBZ\tMood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin\t4\taux\t4:aux";
const BEEN_AUX_PASS: &str = "been\tbe\tAUX\tVBN\tTense=Past|VerbForm=Part\t4\taux:pass\t4:aux:pass";
const WAS_AUX_PASS: &str =
    "was\tbe\tAUX\tVBD\tMood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin\t4\taux:pass\t4:aux:pass";
const BEING_AUX: &str = "being\tbe\tAUX\tVBG\tVerbForm=Ger\t4\taux\t4:aux";

#[test]
fn aux_pass_must_be_the_last_auxiliary() {
    let ordered = validate(&auxiliary_sentence(
        "email-000014-0001",
        HAS_AUX,
        BEEN_AUX_PASS,
    ));
    assert!(with_code(&ordered, "passive-aux").is_empty());

    let reversed = validate(&auxiliary_sentence(
        "email-000014-0002",
        WAS_AUX_PASS,
        BEING_AUX,
    ));
    let aux = with_code(&reversed, "passive-aux");
    assert_eq!(
        messages(&aux),
        ["Passive verb with lemma 'eat' has suspicious aux(:pass) dependents (only the last should be aux:pass)"]
    );
    assert_eq!(aux[0].token, Some(4));
}

#[test]
fn listed_sentence_is_exempt_from_aux_order() {
    let diagnostics = validate(&auxiliary_sentence(
        "answers-20111106035951AADq0Qg_ans-0012",
        WAS_AUX_PASS,
        BEING_AUX,
    ));
    assert!(with_code(&diagnostics, "passive-aux").is_empty());
}

fn copular_passive(subject_rel: &str) -> String {
    format!(
        "# sent_id = answers-000015-0001\n\
         1\tIt\tit\tPRON\tPRP\tCase=Nom|Gender=Neut|Number=Sing|Person=3|PronType=Prs\t4\t{subject_rel}\t4:{subject_rel}\t_\n\
         2\t{WAS_AUX_PASS}\t_\n\
         3\tbeen\tbe\tAUX\tVBN\tTense=Past|VerbForm=Part\t4\tcop\t4:cop\t_\n\
         4\teaten\teat\tVERB\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t0\troot\t0:root\t_\n\
         \n"
    )
}

#[test]
fn passive_with_copula_is_reported() {
    let diagnostics = validate(&copular_passive("nsubj:pass"));
    assert_eq!(
        messages(&with_code(&diagnostics, "passive-cop")),
        ["Passive verb with lemma 'eat' has cop dependent"]
    );
}

#[test]
fn raised_subject_allows_copula() {
    let diagnostics = validate(&copular_passive("nsubj:outer"));
    assert!(with_code(&diagnostics, "passive-cop").is_empty());
}

// === Bare participles ===

fn participle_sentence(form: &str, lemma: &str, feats: &str) -> String {
    format!(
        "# sent_id = reviews-000016-0001\n\
         1\tthe\tthe\tDET\tDT\tDefinite=Def|PronType=Art\t3\tdet\t3:det\t_\n\
         2\t{form}\t{lemma}\tVERB\tVBN\t{feats}\t3\tamod\t3:amod\t_\n\
         3\tcake\tcake\tNOUN\tNN\tNumber=Sing\t0\troot\t0:root\t_\n\
         \n"
    )
}

fn participle_messages(conllu: &str) -> Vec<String> {
    messages(&with_code(&validate(conllu), "participle-voice"))
}

#[test]
fn bare_participle_needs_voice() {
    assert_eq!(
        participle_messages(&participle_sentence("eaten", "eat", "Tense=Past|VerbForm=Part")),
        ["Voice=Pass missing from VBN verb with no aux dependent"]
    );
    assert!(participle_messages(&participle_sentence("eaten", "eat", PASSIVE_FEATS)).is_empty());
}

#[test]
fn get_participle_is_exempt() {
    assert!(
        participle_messages(&participle_sentence("got", "get", "Tense=Past|VerbForm=Part"))
            .is_empty()
    );
}

#[test]
fn supposed_needs_voice() {
    assert_eq!(
        participle_messages(&participle_sentence(
            "supposed",
            "suppose",
            "Tense=Past|VerbForm=Part"
        )),
        ["'supposed (to)' missing Voice=Pass?"]
    );
    assert!(
        participle_messages(&participle_sentence("supposed", "suppose", PASSIVE_FEATS)).is_empty()
    );
}

#[test]
fn auxiliary_participle_must_not_be_passive() {
    let conllu = auxiliary_sentence(
        "email-000017-0001",
        HAS_AUX,
        "been\tbe\tAUX\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t4\taux:pass\t4:aux:pass",
    );
    assert_eq!(
        participle_messages(&conllu),
        ["Voice=Pass prohibited on verbs functioning as auxiliaries"]
    );
}

#[test]
fn coordinated_participle_shares_its_head_auxiliary() {
    let conllu = "# sent_id = reviews-000018-0001\n\
        1\tcake\tcake\tNOUN\tNN\tNumber=Sing\t0\troot\t0:root\t_\n\
        2\tbaked\tbake\tVERB\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t1\tacl\t1:acl\t_\n\
        3\tand\tand\tCCONJ\tCC\t_\t4\tcc\t4:cc\t_\n\
        4\teaten\teat\tVERB\tVBN\tTense=Past|VerbForm=Part\t2\tconj\t2:conj\t_\n\
        \n";
    assert!(participle_messages(conllu).is_empty());
}
