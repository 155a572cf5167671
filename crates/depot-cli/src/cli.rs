//! CLI argument definitions for the depot toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "umuti-depot",
    version,
    about = "Umuti Depot - medical depot management toolkit",
    long_about = "Manage a medical depot from the terminal.\n\n\
                  Imports CSV price lists and pharmacy order sheets with flexible\n\
                  column-name matching, and inspects the seeded demo depot."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV upload and print the normalized records.
    Import(ImportArgs),

    /// List the demo depot's incoming requisitions.
    Requests(RequestsArgs),

    /// Show demand and revenue analytics for the demo depot.
    Analytics,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the uploaded CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// What the file contains: an inventory price list or a pharmacy
    /// order sheet.
    #[arg(long = "kind", value_enum, default_value = "inventory")]
    pub kind: ImportKindArg,

    /// Print the normalized records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RequestsArgs {
    /// Only show requisitions in this state (pending, accepted, rejected).
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ImportKindArg {
    Inventory,
    Requisition,
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
