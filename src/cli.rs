use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::report::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "archive-guard")]
#[command(author, version, about = "Archive guard - validate archival fund directories before ingestion")]
#[command(long_about = "Validates fund / inventory / unit directory trees and the image files \
    inside each unit against configurable naming rules.\n\n\
    Exit codes:\n  \
    0 - Validation finished (violations in --continue-on-error runs are logged)\n  \
    1 - Validation aborted at a violation\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v verbose, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate source roots against the naming rules
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Source roots containing fund directories (replaces configured roots)
    pub sources: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Destination archive root to check for duplicates (can be repeated)
    #[arg(long = "dest")]
    pub destinations: Vec<PathBuf>,

    /// Directory base name to skip (can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Allowed image extensions (comma-separated, e.g., jpg,tif)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Zero-padded width of the image index
    #[arg(long)]
    pub number_length: Option<usize>,

    /// Expect image names prefixed with the archive prefix and unit name
    #[arg(long)]
    pub prefix: bool,

    /// Archive prefix used in image names
    #[arg(long)]
    pub archive_prefix: Option<String>,

    /// Regex fragment for fund directory names
    #[arg(long)]
    pub fund_pattern: Option<String>,

    /// Regex fragment for the inventory part of inventory names
    #[arg(long)]
    pub inventory_pattern: Option<String>,

    /// Regex fragment for the unit part of unit names
    #[arg(long)]
    pub unit_pattern: Option<String>,

    /// Delimiter between name components
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Run the integrity tool on every image
    #[arg(long)]
    pub verify_images: bool,

    /// Name of the integrity tool executable
    #[arg(long)]
    pub image_tool: Option<String>,

    /// Directory containing the integrity tool (default: search PATH)
    #[arg(long)]
    pub tool_dir: Option<PathBuf>,

    /// Append log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log every violation and keep going instead of stopping at the first
    #[arg(long)]
    pub continue_on_error: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and naming patterns
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
