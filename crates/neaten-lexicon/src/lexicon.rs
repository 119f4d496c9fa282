//! Loaded lexicon registry.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::embedded;
use crate::entry::{LexEntry, parse_spec};
use crate::error::{LexiconError, Result};

static LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::load().expect("Invalid embedded lexicon tables"));

/// The process-wide lexicon, parsed on first use.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

/// Grammatical function expected of a fixed-expression head with `ExtPos`.
pub fn extpos_functions(extpos: &str) -> &'static [&'static str] {
    match extpos {
        "ADP" => &["case"],
        "SCONJ" => &["mark"],
        "ADV" => &["advmod"],
        "CCONJ" => &["cc"],
        "PRON" => &["obj", "iobj", "obl", "nmod", "nmod:poss"],
        _ => &[],
    }
}

// =============================================================================
// CSV Row Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct EntryCsvRow {
    form: String,
    xpos: String,
    lemma: String,
    features: String,
    misc: String,
}

#[derive(Debug, Deserialize)]
struct FixedCsvRow {
    head: String,
    dependent: String,
    extpos: String,
}

type EntryTable = HashMap<(String, String), LexEntry>;

/// Closed-class tables plus the fixed-expression inventory.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pronouns: EntryTable,
    determiners: EntryTable,
    adverbs: EntryTable,
    pronoun_lemmas: HashSet<String>,
    adverb_forms: HashSet<String>,
    fixed: HashMap<(String, String), Vec<String>>,
}

impl Lexicon {
    /// Parse all embedded tables.
    pub fn load() -> Result<Self> {
        let mut pronouns = load_entries_from_str(embedded::PRONOUNS, "pronouns.csv")?;
        // Reciprocals join the pronoun table after the lemma set is taken,
        // so "other" and "another" never count as pronoun lemmas.
        let pronoun_lemmas = pronouns.values().map(|entry| entry.lemma.clone()).collect();
        pronouns.extend(load_entries_from_str(
            embedded::RECIPROCALS,
            "reciprocals.csv",
        )?);
        let determiners = load_entries_from_str(embedded::DETERMINERS, "determiners.csv")?;
        let adverbs = load_entries_from_str(embedded::ADVERBS, "adverbs.csv")?;
        let adverb_forms = adverbs.keys().map(|(form, _)| form.clone()).collect();
        let fixed = load_fixed_from_str(embedded::FIXED_EXPRESSIONS)?;
        Ok(Self {
            pronouns,
            determiners,
            adverbs,
            pronoun_lemmas,
            adverb_forms,
            fixed,
        })
    }

    /// Look `key` up in the pronoun, determiner and adverb tables, in that order.
    pub fn lookup(&self, key: &str, xpos: &str) -> Option<&LexEntry> {
        let key = (key.to_string(), xpos.to_string());
        self.pronouns
            .get(&key)
            .or_else(|| self.determiners.get(&key))
            .or_else(|| self.adverbs.get(&key))
    }

    /// Canonical lemmas of the pronoun table, reciprocals excluded.
    pub fn is_pronoun_lemma(&self, lemma: &str) -> bool {
        self.pronoun_lemmas.contains(lemma)
    }

    /// Surface forms listed in the adverb table.
    pub fn is_adverb_form(&self, form: &str) -> bool {
        self.adverb_forms.contains(form)
    }

    /// Permitted `ExtPos` values for a listed fixed expression.
    pub fn fixed_extpos(&self, head: &str, dependent: &str) -> Option<&[String]> {
        self.fixed
            .get(&(head.to_string(), dependent.to_string()))
            .map(Vec::as_slice)
    }

    pub fn is_fixed_expression(&self, head: &str, dependent: &str) -> bool {
        self.fixed_extpos(head, dependent).is_some()
    }
}

// =============================================================================
// Loading Functions
// =============================================================================

fn load_entries_from_str(content: &str, file: &'static str) -> Result<EntryTable> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    let mut table = HashMap::new();
    for result in reader.deserialize::<EntryCsvRow>() {
        let row = result.map_err(|source| LexiconError::CsvParse { file, source })?;
        if row.form.is_empty() || row.xpos.is_empty() {
            continue;
        }
        let entry = LexEntry {
            lemma: row.lemma,
            features: parse_spec(&row.features, file)?,
            misc: parse_spec(&row.misc, file)?,
        };
        table.insert((row.form, row.xpos), entry);
    }
    Ok(table)
}

fn load_fixed_from_str(content: &str) -> Result<HashMap<(String, String), Vec<String>>> {
    let file = "fixed_expressions.csv";
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    let mut fixed = HashMap::new();
    for result in reader.deserialize::<FixedCsvRow>() {
        let row = result.map_err(|source| LexiconError::CsvParse { file, source })?;
        let extpos: Vec<String> = row.extpos.split_whitespace().map(str::to_string).collect();
        if extpos.is_empty() {
            return Err(LexiconError::InvalidValue {
                field: "extpos",
                value: row.extpos,
                file,
            });
        }
        fixed.insert((row.head, row.dependent), extpos);
    }
    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Expected;

    #[test]
    fn embedded_tables_load() {
        let lexicon = Lexicon::load().unwrap();
        let her = lexicon.lookup("her", "PRP").unwrap();
        assert_eq!(her.lemma, "she");
        assert_eq!(her.feature("Case"), Some(&Expected::Required("Acc".into())));
        let her_poss = lexicon.lookup("her", "PRP$").unwrap();
        assert_eq!(her_poss.lemma, "her");
    }

    #[test]
    fn lookup_prefers_pronouns_then_determiners_then_adverbs() {
        let lexicon = lexicon();
        assert_eq!(lexicon.lookup("that", "WDT").unwrap().lemma, "that");
        assert_eq!(lexicon.lookup("those", "DT").unwrap().lemma, "that");
        assert_eq!(lexicon.lookup("when", "IN").unwrap().lemma, "when");
        assert!(lexicon.lookup("table", "NN").is_none());
    }

    #[test]
    fn reciprocals_are_not_pronoun_lemmas() {
        let lexicon = lexicon();
        assert!(lexicon.lookup("each other", "DT").is_some());
        assert!(!lexicon.is_pronoun_lemma("other"));
        assert!(!lexicon.is_pronoun_lemma("another"));
        assert!(lexicon.is_pronoun_lemma("no-one"));
        assert!(lexicon.is_pronoun_lemma("I"));
    }

    #[test]
    fn generated_indefinites_cover_every_combination() {
        let lexicon = lexicon();
        for body in ["body", "one", "thing"] {
            for prefix in ["any", "some", "every"] {
                let form = format!("{prefix}{body}");
                assert!(lexicon.lookup(&form, "NN").is_some(), "{form}");
            }
        }
        assert!(lexicon.lookup("no-one", "NN").is_some());
        assert!(lexicon.lookup("noone", "NN").is_none());
        assert_eq!(lexicon.lookup("no one", "NN").unwrap().lemma, "one");
    }

    #[test]
    fn fixed_expression_table() {
        let lexicon = lexicon();
        assert_eq!(
            lexicon.fixed_extpos("rather", "than").unwrap(),
            ["CCONJ", "ADP", "SCONJ"]
        );
        assert!(lexicon.is_fixed_expression("whether", "not"));
        assert!(!lexicon.is_fixed_expression("out", "of"));
        assert_eq!(extpos_functions("PRON").len(), 5);
        assert!(extpos_functions("ADJ").is_empty());
    }

    #[test]
    fn adverb_forms_are_case_sensitive() {
        let lexicon = lexicon();
        assert!(lexicon.is_adverb_form("NEEEEEEEEEVERRRR"));
        assert!(lexicon.is_adverb_form("however"));
        assert!(!lexicon.is_adverb_form("However"));
    }
}
