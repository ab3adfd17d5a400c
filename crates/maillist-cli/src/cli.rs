//! CLI argument definitions for the mailing-list extractor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "maillist",
    version,
    about = "Mailing-list extractor - clean patient purchase exports",
    long_about = "Turn a patient/purchase CSV export into a mailing-list extract.\n\n\
                  Removes invalid and duplicate contacts, prunes purchase columns,\n\
                  renames the contact columns and derives a first-name field."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow contact addresses and names in log output.
    ///
    /// Row-level values are redacted by default; the extract itself is
    /// unaffected.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process an export and write the mailing-list extract.
    Process(ProcessArgs),

    /// Show the fixed column schema: renames, derived and pruned columns.
    Columns,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: processed_file.csv beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Process and report without writing the extract.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
