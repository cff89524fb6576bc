//! Image integrity checking through an external executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{ArchiveGuardError, Result};

/// Default verification tool (`identify` from ImageMagick).
pub const DEFAULT_TOOL: &str = "identify";

/// Decides whether an image file is intact.
pub trait ImageVerifier {
    /// Returns true if the image at `path` is valid.
    fn verify(&self, path: &Path) -> bool;
}

/// Verifier backed by an external program: it is run once per file with the
/// file path as its only argument, and only its exit status is consulted.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: PathBuf,
}

impl ExternalTool {
    /// Locate `tool` inside `tool_dir` when given, otherwise on `PATH`.
    ///
    /// # Errors
    /// Returns `MissingTool` if the tool cannot be found.
    pub fn locate(tool: &str, tool_dir: Option<&Path>) -> Result<Self> {
        let program = match tool_dir {
            Some(dir) => {
                let candidate = dir.join(format!("{tool}{}", std::env::consts::EXE_SUFFIX));
                if !candidate.is_file() {
                    return Err(ArchiveGuardError::MissingTool {
                        tool: tool.to_string(),
                        location: dir.display().to_string(),
                    });
                }
                dunce::canonicalize(&candidate).unwrap_or(candidate)
            }
            None => which::which(tool).map_err(|_| ArchiveGuardError::MissingTool {
                tool: tool.to_string(),
                location: "PATH".to_string(),
            })?,
        };

        tracing::debug!(program = %program.display(), "resolved image verification tool");
        Ok(Self { program })
    }
}

impl ImageVerifier for ExternalTool {
    fn verify(&self, path: &Path) -> bool {
        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                tracing::trace!(file = %path.display(), %status, "image verification finished");
                status.success()
            }
            Err(e) => {
                tracing::debug!(
                    program = %self.program.display(),
                    file = %path.display(),
                    error = %e,
                    "failed to run image verification tool"
                );
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "integrity_tests.rs"]
mod tests;
