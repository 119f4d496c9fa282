//! CLI argument definitions for the neatEN validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use neaten_ingest::DEFAULT_PREFIX;

#[derive(Parser)]
#[command(
    name = "neaten",
    version,
    about = "neatEN - English-specific checks for UD treebanks",
    long_about = "Validate CoNLL-U files against English Web Treebank conventions.\n\n\
                  With no FILES, checks ../../en_ewt-ud-*.conllu. Diagnostics go to\n\
                  stdout; corpus summaries go to stderr.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble the split files from per-document sources.
    Build(CorpusArgs),

    /// Split the split files back into per-document sources.
    Unbuild(CorpusArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// CoNLL-U files to validate.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Diagnostic line format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print a per-rule count table to stderr.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Treebank root holding the split files and `not-to-release/`.
    #[arg(long = "root", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Split file prefix, as in `<PREFIX>-train.conllu`.
    #[arg(long = "prefix", default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_without_subcommand_check() {
        let cli = Cli::try_parse_from(["neaten", "a.conllu", "b.conllu", "--summary"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.check.files.len(), 2);
        assert!(cli.check.summary);
    }

    #[test]
    fn build_takes_root_and_prefix() {
        let cli = Cli::try_parse_from(["neaten", "build", "--root", "ud", "--prefix", "en_x"])
            .unwrap();
        let Some(Command::Build(args)) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.root, PathBuf::from("ud"));
        assert_eq!(args.prefix, "en_x");
    }

    #[test]
    fn unbuild_defaults_prefix() {
        let cli = Cli::try_parse_from(["neaten", "unbuild"]).unwrap();
        let Some(Command::Unbuild(args)) = cli.command else {
            panic!("expected unbuild");
        };
        assert_eq!(args.prefix, DEFAULT_PREFIX);
    }
}
