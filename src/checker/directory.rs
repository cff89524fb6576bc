use crate::error::Result;
use crate::naming::LevelRule;
use crate::path::{ArchivalPath, has_children};

use super::violation::{Subject, Violation, ViolationKind};

/// Check the name and type of one fund, inventory or unit directory.
///
/// Evaluates, in order: the entry is a directory, its name fully matches the
/// composed level pattern, and its name starts with `required_prefix` (the
/// parent directory's name, empty for funds). All checks run regardless of
/// earlier failures. Emptiness needs a directory read and is checked
/// separately by [`check_not_empty`].
#[must_use]
pub fn check_directory(dir: &ArchivalPath, rule: &LevelRule, required_prefix: &str) -> Vec<Violation> {
    let subject = Subject::Directory(rule.level());
    let violation = |kind| Violation::new(dir.path(), dir.name(), subject, kind);
    let mut violations = Vec::new();

    if !dir.is_dir() {
        violations.push(violation(ViolationKind::NotADirectory));
    }

    if !rule.is_full_match(dir.name()) {
        violations.push(violation(ViolationKind::PatternMismatch {
            pattern: rule.pattern().to_string(),
        }));
    }

    if !dir.name().starts_with(required_prefix) {
        violations.push(violation(ViolationKind::PrefixMismatch {
            prefix: required_prefix.to_string(),
        }));
    }

    violations
}

/// `EmptyDirectory` if `dir` is an existing directory without entries.
///
/// # Errors
/// Returns an IO error if an existing directory cannot be read.
pub fn check_not_empty(dir: &ArchivalPath, rule: &LevelRule) -> Result<Option<Violation>> {
    if !dir.is_dir() || has_children(dir.path())? {
        return Ok(None);
    }
    Ok(Some(Violation::new(
        dir.path(),
        dir.name(),
        Subject::Directory(rule.level()),
        ViolationKind::EmptyDirectory,
    )))
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
