//! Colored console output.
//!
//! Informational, verbose and debug messages go to stdout; errors go to
//! stderr with a `✖` marker.

use std::io::{IsTerminal, Write};

use super::{ColorMode, LogSink, Severity, ansi};
use crate::error::Result;

/// Console sink with optional ANSI colors, decided separately for stdout
/// and stderr.
pub struct ConsoleSink {
    stdout_colors: bool,
    stderr_colors: bool,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::for_terminals(
            mode,
            std::io::stdout().is_terminal(),
            std::io::stderr().is_terminal(),
        )
    }

    fn for_terminals(mode: ColorMode, stdout_tty: bool, stderr_tty: bool) -> Self {
        Self {
            stdout_colors: Self::should_use_colors(mode, stdout_tty),
            stderr_colors: Self::should_use_colors(mode, stderr_tty),
        }
    }

    fn should_use_colors(mode: ColorMode, is_terminal: bool) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !is_no_color_set() && is_terminal,
        }
    }

    const fn uses_colors(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error => self.stderr_colors,
            Severity::Debug | Severity::Verbose | Severity::Info => self.stdout_colors,
        }
    }

    /// Writes one message to a writer (for testing).
    pub fn write_line<W: Write>(&self, w: &mut W, severity: Severity, message: &str) {
        // Console write failures (closed pipe, redirected terminal) are not
        // recoverable here and must not abort validation.
        let _ = match (severity, self.uses_colors(severity)) {
            (Severity::Error, true) => writeln!(
                w,
                "{}{}✖{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            ),
            (Severity::Error, false) => writeln!(w, "✖ {message}"),
            (Severity::Info, _) | (Severity::Verbose, false) => writeln!(w, "{message}"),
            (Severity::Verbose, true) => writeln!(w, "{}{message}{}", ansi::DIM, ansi::RESET),
            (Severity::Debug, true) => {
                writeln!(w, "{}debug:{} {message}", ansi::CYAN, ansi::RESET)
            }
            (Severity::Debug, false) => writeln!(w, "debug: {message}"),
        };
    }
}

impl LogSink for ConsoleSink {
    fn write(&mut self, severity: Severity, message: &str) -> Result<()> {
        if severity == Severity::Error {
            self.write_line(&mut std::io::stderr().lock(), severity, message);
        } else {
            self.write_line(&mut std::io::stdout().lock(), severity, message);
        }
        Ok(())
    }
}

/// Checks if `NO_COLOR` environment variable is set.
/// Per <https://no-color.org> spec: presence of the variable (any value) disables color.
fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Prints a configuration or runtime error to stderr.
///
/// Format: `✖ {error_type}: {message}`
pub fn print_error(error_type: &str, message: &str) {
    let use_colors = !is_no_color_set() && std::io::stderr().is_terminal();
    let mut stderr = std::io::stderr().lock();
    let _ = if use_colors {
        writeln!(
            stderr,
            "{}{}✖ {error_type}:{} {message}",
            ansi::BOLD,
            ansi::RED,
            ansi::RESET
        )
    } else {
        writeln!(stderr, "✖ {error_type}: {message}")
    };
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
