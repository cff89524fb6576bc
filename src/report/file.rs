use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::{LogSink, Severity};
use crate::error::{ArchiveGuardError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends `[timestamp] LEVEL: message` lines to a log file.
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    /// Returns `LogFile` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ArchiveGuardError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

/// Render one log line (without the trailing newline).
#[must_use]
pub fn format_line(timestamp: &str, severity: Severity, message: &str) -> String {
    format!("[{timestamp}] {}: {message}", severity.label())
}

impl LogSink for FileSink {
    fn write(&mut self, severity: Severity, message: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_line(&timestamp, severity, message);
        writeln!(self.file, "{line}").map_err(|source| ArchiveGuardError::LogFile {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
