//! CLI argument definitions for the division code converter.

use std::path::PathBuf;

use adcode_core::{ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adcode",
    version,
    about = "Convert administrative division code tables to JSON",
    long_about = "Convert a whitespace-delimited administrative division code table\n\
                  (one `code name` pair per line) into a JSON object, and resolve\n\
                  codes against a generated table.\n\n\
                  Without a subcommand, converts the default input path to the\n\
                  default output path."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a code table into a JSON object.
    Convert(ConvertArgs),

    /// Resolve division codes into province-prefecture-county names.
    Lookup(LookupArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Whitespace-delimited code table to read.
    #[arg(long = "input", short = 'i', value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// JSON file to create or overwrite.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl ConvertArgs {
    pub fn to_config(&self) -> ConvertConfig {
        ConvertConfig::default()
            .with_input(&self.input)
            .with_output(&self.output)
    }
}

#[derive(Args)]
pub struct LookupArgs {
    /// JSON table produced by `convert`.
    #[arg(long = "table", short = 't', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub table: PathBuf,

    /// Six-digit division codes to resolve.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
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
