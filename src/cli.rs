use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Pattern-based source analysis - scan text for style issues")]
#[command(long_about = "Applies a registry of pattern rules to source text and reports \
    severity-classified findings with locations and fix suggestions.\n\n\
    Exit codes:\n  \
    0 - No error-severity findings\n  \
    1 - Error-severity findings present\n  \
    2 - Configuration or startup error (including input not found)")]
pub struct Cli {
    /// File to analyze
    #[arg(required_unless_present = "dir", conflicts_with = "dir")]
    pub path: Option<PathBuf>,

    /// Analyze every eligible file under a directory (batch mode)
    #[arg(long, value_name = "DIRECTORY")]
    pub dir: Option<PathBuf>,

    /// File extensions to analyze in batch mode (comma-separated, e.g., js,ts,html)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
