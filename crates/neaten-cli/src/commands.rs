use std::io;

use anyhow::{Context, Result};
use tracing::info;

use neaten_cli::check::{CheckOptions, OutputFormat, run_check, warn_no_inputs};
use neaten_cli::summary::split_table;
use neaten_ingest::{CorpusLayout, IngestError, build, default_inputs, unbuild};

use crate::cli::{CheckArgs, CorpusArgs, OutputFormatArg};

pub fn run_check_command(args: &CheckArgs) -> Result<()> {
    let paths = if args.files.is_empty() {
        match default_inputs() {
            Ok(paths) => paths,
            Err(IngestError::DirectoryNotFound { .. }) => Vec::new(),
            Err(error) => return Err(error).context("discover default inputs"),
        }
    } else {
        args.files.clone()
    };
    let mut stderr = io::stderr().lock();
    if paths.is_empty() {
        return warn_no_inputs(&mut stderr);
    }
    let options = CheckOptions {
        format: match args.format {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        },
        summary: args.summary,
    };
    let mut stdout = io::stdout().lock();
    let outcome = run_check(&paths, &options, &mut stdout, &mut stderr)?;
    info!(
        files = outcome.files,
        diagnostics = outcome.diagnostics(),
        "validation finished"
    );
    Ok(())
}

pub fn run_build(args: &CorpusArgs) -> Result<()> {
    let layout = CorpusLayout::new(&args.root, &args.prefix);
    let summaries = build(&layout)
        .with_context(|| format!("build splits under {}", args.root.display()))?;
    println!("{}", split_table(&summaries));
    Ok(())
}

pub fn run_unbuild(args: &CorpusArgs) -> Result<()> {
    let layout = CorpusLayout::new(&args.root, &args.prefix);
    let documents = unbuild(&layout)
        .with_context(|| format!("unbuild splits under {}", args.root.display()))?;
    println!("Wrote {documents} documents to {}", layout.sources_dir().display());
    Ok(())
}
