//! Run reporting: severities, sinks and the [`Reporter`] that fans messages
//! out to them.
//!
//! Informational and error messages always reach every sink. Verbose and
//! debug messages are opt-in per sink through [`SeverityFilter`].

mod console;
mod file;
#[cfg(test)]
mod memory;

pub use console::{ConsoleSink, print_error};
pub use file::FileSink;
#[cfg(test)]
pub use memory::MemorySink;

use std::fmt;

use crate::error::Result;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Verbose,
    Info,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which optional severities a sink accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityFilter {
    pub verbose: bool,
    pub debug: bool,
}

impl SeverityFilter {
    #[must_use]
    pub const fn new(verbose: bool, debug: bool) -> Self {
        Self { verbose, debug }
    }

    #[must_use]
    pub const fn allows(self, severity: Severity) -> bool {
        match severity {
            Severity::Info | Severity::Error => true,
            Severity::Verbose => self.verbose,
            Severity::Debug => self.debug,
        }
    }
}

/// Destination for reported messages.
pub trait LogSink {
    /// Write one message.
    ///
    /// # Errors
    /// Returns an error if a persistent sink cannot be written.
    fn write(&mut self, severity: Severity, message: &str) -> Result<()>;
}

/// Sends every message to each sink whose filter accepts it.
#[derive(Default)]
pub struct Reporter {
    sinks: Vec<(SeverityFilter, Box<dyn LogSink>)>,
}

impl Reporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sink(mut self, filter: SeverityFilter, sink: impl LogSink + 'static) -> Self {
        self.sinks.push((filter, Box::new(sink)));
        self
    }

    /// # Errors
    /// Returns the first sink write error.
    pub fn log(&mut self, severity: Severity, message: &str) -> Result<()> {
        for (filter, sink) in &mut self.sinks {
            if filter.allows(severity) {
                sink.write(severity, message)?;
            }
        }
        Ok(())
    }

    /// # Errors
    /// Returns the first sink write error.
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.log(Severity::Info, message)
    }

    /// # Errors
    /// Returns the first sink write error.
    pub fn verbose(&mut self, message: &str) -> Result<()> {
        self.log(Severity::Verbose, message)
    }

    /// # Errors
    /// Returns the first sink write error.
    pub fn debug(&mut self, message: &str) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    /// # Errors
    /// Returns the first sink write error.
    pub fn error(&mut self, message: &str) -> Result<()> {
        self.log(Severity::Error, message)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
