//! The default command: validate CoNLL-U files and report.
//!
//! Per-token diagnostics and rare-lemma lines go to `out` (stdout). The
//! corpus summaries and the optional per-rule table go to `err` (stderr).

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use neaten_ingest::ConlluReader;
use neaten_model::Diagnostic;
use neaten_validate::{CorpusReport, Validator};

use crate::summary::rule_table;

/// How each diagnostic is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The human-readable line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub format: OutputFormat,
    /// Print the per-rule count table after the run.
    pub summary: bool,
}

/// What a completed run found.
#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    pub files: usize,
    /// Per-token diagnostics written, by rule code.
    pub by_code: BTreeMap<&'static str, usize>,
    pub report: CorpusReport,
}

impl CheckOutcome {
    pub fn diagnostics(&self) -> usize {
        self.by_code.values().sum()
    }
}

/// Validate `paths` in order, streaming diagnostics as each sentence is
/// checked.
///
/// A malformed file or an unwalkable tree aborts the run. Diagnostics
/// already written stay written; the corpus report is not produced.
pub fn run_check<O: Write, E: Write>(
    paths: &[PathBuf],
    options: &CheckOptions,
    out: &mut O,
    err: &mut E,
) -> Result<CheckOutcome> {
    let mut validator = Validator::new();
    let mut by_code = BTreeMap::new();

    for path in paths {
        let span = info_span!("file", path = %path.display());
        let _guard = span.enter();
        let reader = ConlluReader::open(path)
            .with_context(|| format!("open {}", path.display()))?;
        let mut sentences = 0usize;
        for sentence in reader {
            let mut sentence = sentence.with_context(|| format!("read {}", path.display()))?;
            let diagnostics = validator.validate_sentence(&mut sentence)?;
            for diagnostic in &diagnostics {
                *by_code.entry(diagnostic.code).or_insert(0) += 1;
                write_diagnostic(out, diagnostic, options.format)?;
            }
            sentences += 1;
        }
        info!(sentences, "checked file");
    }

    let report = validator.finish();
    for diagnostic in &report.rare_lemmas {
        write_diagnostic(out, diagnostic, options.format)?;
    }
    out.flush().context("flush diagnostics")?;

    let suspicious = report.suspicious_lemma_types();
    if suspicious > 0 {
        writeln!(err, "! {suspicious} suspicious lemma types detected")?;
    }
    if !report.suspicious_nns.is_empty() {
        writeln!(
            err,
            "!suspicious NNS lemmas: {}",
            report.suspicious_nns.join(" ")
        )?;
    }
    if options.summary {
        writeln!(err, "{}", rule_table(&by_code, report.sentences))?;
    }

    Ok(CheckOutcome {
        files: paths.len(),
        by_code,
        report,
    })
}

/// Validate with nothing to read: warn and succeed.
pub fn warn_no_inputs<E: Write>(err: &mut E) -> Result<()> {
    warn!("no input files");
    writeln!(err, "warning: no CoNLL-U input files found")?;
    Ok(())
}

fn write_diagnostic<O: Write>(
    out: &mut O,
    diagnostic: &Diagnostic,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{diagnostic}")?,
        OutputFormat::Json => {
            let line = serde_json::to_string(diagnostic).context("serialize diagnostic")?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
