use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::integrity::DEFAULT_TOOL;

/// Default fund name fragment: an optional Cyrillic series prefix (`Р-`)
/// followed by the fund number and an optional lowercase letter.
pub const DEFAULT_FUND_PATTERN: &str = "(?:[А-ЯЁ]{1,2}-)?[0-9]+[а-яё]?";
/// Default inventory fragment: number with an optional `_Letter` part.
pub const DEFAULT_INVENTORY_PATTERN: &str = "[0-9]+(?:_[А-ЯЁ]+)?";
/// Default unit fragment: number, optional lowercase letter, optional `_Letter` part.
pub const DEFAULT_UNIT_PATTERN: &str = "[0-9]+[а-яё]?(?:_[А-ЯЁ]+)?";
pub const DEFAULT_DELIMITER: &str = "-";
pub const DEFAULT_EXTENSION: &str = ".jpg";
pub const DEFAULT_NUMBER_LENGTH: usize = 6;

/// Top-level configuration (`.archive-guard.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Keep traversing after a violation instead of stopping the run.
    #[serde(default)]
    pub continue_on_error: bool,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where to look and what to skip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Source roots; each contains fund directories.
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Archive roots checked for already-ingested units.
    #[serde(default)]
    pub destinations: Vec<PathBuf>,

    /// Base names skipped at fund, inventory and unit level.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Directory name fragments per level and the delimiter joining them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default = "default_fund_pattern")]
    pub fund_pattern: String,

    #[serde(default = "default_inventory_pattern")]
    pub inventory_pattern: String,

    #[serde(default = "default_unit_pattern")]
    pub unit_pattern: String,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            fund_pattern: default_fund_pattern(),
            inventory_pattern: default_inventory_pattern(),
            unit_pattern: default_unit_pattern(),
            delimiter: default_delimiter(),
        }
    }
}

/// Image file naming and integrity checking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImagesConfig {
    /// Allowed extensions; a leading dot is optional.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Zero-padded width of the image index.
    #[serde(default = "default_number_length")]
    pub number_length: usize,

    /// Prefix image names with the archive prefix and unit name.
    #[serde(default)]
    pub prefix: bool,

    #[serde(default)]
    pub archive_prefix: String,

    /// Run the external integrity tool on every image.
    #[serde(default)]
    pub verify: bool,

    #[serde(default = "default_tool")]
    pub tool: String,

    /// Directory containing `tool`; searched on `PATH` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_dir: Option<PathBuf>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            number_length: default_number_length(),
            prefix: false,
            archive_prefix: String::new(),
            verify: false,
            tool: default_tool(),
            tool_dir: None,
        }
    }
}

/// Log file and verbosity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Append log lines to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub debug: bool,
}

fn default_fund_pattern() -> String {
    DEFAULT_FUND_PATTERN.to_string()
}

fn default_inventory_pattern() -> String {
    DEFAULT_INVENTORY_PATTERN.to_string()
}

fn default_unit_pattern() -> String {
    DEFAULT_UNIT_PATTERN.to_string()
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

const fn default_number_length() -> usize {
    DEFAULT_NUMBER_LENGTH
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
