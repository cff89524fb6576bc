//! Image sequence validation inside a unit directory.

use crate::integrity::ImageVerifier;
use crate::naming::ImageNaming;
use crate::path::ArchivalPath;

use super::violation::{Subject, Violation, ViolationKind};

/// Validates that a unit's naturally ordered entries form an unbroken
/// zero-based sequence of correctly named images.
///
/// Indices are assigned to every entry in order, whatever its type, so a
/// stray entry shifts the expected name of every sibling after it.
pub struct ImageSequenceValidator<'a> {
    naming: &'a ImageNaming,
    verifier: Option<&'a dyn ImageVerifier>,
}

impl<'a> ImageSequenceValidator<'a> {
    #[must_use]
    pub const fn new(naming: &'a ImageNaming, verifier: Option<&'a dyn ImageVerifier>) -> Self {
        Self { naming, verifier }
    }

    /// Name checks for the entry at position `index` of unit `unit_name`.
    ///
    /// The integrity verdict is left to [`Self::verify_entry`] so a caller
    /// can stop before the external tool runs.
    #[must_use]
    pub fn check_entry(&self, unit_name: &str, index: usize, entry: &ArchivalPath) -> Vec<Violation> {
        let name = entry.name();
        let violation = |kind| Violation::new(entry.path(), name, Subject::Image, kind);
        let mut violations = Vec::new();

        if !entry.is_file() {
            violations.push(violation(ViolationKind::NotAFile));
        }

        if self.naming.matched_extension(name).is_none() {
            violations.push(violation(ViolationKind::BadExtension {
                allowed: self.naming.extensions.iter().cloned().collect(),
            }));
        }

        let expected =
            self.naming
                .expected_name(unit_name, index, self.naming.extension_for(name));
        if expected != name {
            violations.push(violation(ViolationKind::BadFileName { expected }));
        }

        violations
    }

    /// Run the verifier on `entry`. Directories and disabled verification
    /// yield nothing.
    #[must_use]
    pub fn verify_entry(&self, entry: &ArchivalPath) -> Option<Violation> {
        let verifier = self.verifier?;
        if !entry.is_file() || verifier.verify(entry.path()) {
            return None;
        }
        Some(Violation::new(
            entry.path(),
            entry.name(),
            Subject::Image,
            ViolationKind::CorruptImage,
        ))
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
