use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid name pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("Image verification tool '{tool}' not found in {location}")]
    MissingTool { tool: String, location: String },

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write log file: {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ArchiveGuardError {
    /// Short category label used as the heading of console error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::MissingTool { .. } => "MissingTool",
            Self::DirectoryRead { .. } => "DirectoryRead",
            Self::LogFile { .. } => "LogFile",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Message without the category prefix, plus the underlying cause when present.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::InvalidPattern { pattern, source } => format!("'{pattern}': {source}"),
            Self::MissingTool { tool, location } => format!("'{tool}' not found in {location}"),
            Self::DirectoryRead { path, source } => format!("{}: {source}", path.display()),
            Self::LogFile { path, source } => format!("{}: {source}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
