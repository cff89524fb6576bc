use std::fmt;
use std::path::PathBuf;

use crate::naming::Level;

/// Type of structure violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    NotADirectory,
    /// Name does not fully match the composed level pattern.
    PatternMismatch {
        pattern: String,
    },
    /// Name does not start with the parent directory's name.
    PrefixMismatch {
        prefix: String,
    },
    EmptyDirectory,
    NotAFile,
    /// File name ends with none of the allowed extensions.
    BadExtension {
        allowed: Vec<String>,
    },
    /// File name differs from the one its position requires.
    BadFileName {
        expected: String,
    },
    /// The external integrity tool rejected the file.
    CorruptImage,
    /// The unit is already present under a destination root.
    AlreadyExists {
        destination: PathBuf,
    },
}

impl ViolationKind {
    /// Stable identifier used in log lines.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotADirectory => "NotADirectory",
            Self::PatternMismatch { .. } => "PatternMismatch",
            Self::PrefixMismatch { .. } => "PrefixMismatch",
            Self::EmptyDirectory => "EmptyDirectory",
            Self::NotAFile => "NotAFile",
            Self::BadExtension { .. } => "BadExtension",
            Self::BadFileName { .. } => "BadFileName",
            Self::CorruptImage => "CorruptImage",
            Self::AlreadyExists { .. } => "AlreadyExists",
        }
    }
}

/// What the violating entry is: a directory at some level or an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Root,
    Directory(Level),
    Image,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("source root"),
            Self::Directory(level) => write!(f, "{level}"),
            Self::Image => f.write_str("image"),
        }
    }
}

/// A single rule violation found during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub name: String,
    pub subject: Subject,
    pub kind: ViolationKind,
}

impl Violation {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        subject: Subject,
        kind: ViolationKind,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            subject,
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.kind.code();
        let subject = self.subject;
        let name = &self.name;
        let path = self.path.display();
        match &self.kind {
            ViolationKind::NotADirectory => {
                write!(f, "[{code}] {subject} '{name}' is not a directory: {path}")
            }
            ViolationKind::PatternMismatch { pattern } => write!(
                f,
                "[{code}] {subject} name '{name}' does not match pattern '{pattern}': {path}"
            ),
            ViolationKind::PrefixMismatch { prefix } => write!(
                f,
                "[{code}] {subject} name '{name}' does not start with '{prefix}': {path}"
            ),
            ViolationKind::EmptyDirectory => {
                write!(f, "[{code}] {subject} directory '{name}' is empty: {path}")
            }
            ViolationKind::NotAFile => write!(f, "[{code}] '{name}' is not a file: {path}"),
            ViolationKind::BadExtension { allowed } => write!(
                f,
                "[{code}] '{name}' has an unexpected extension (allowed: {}): {path}",
                allowed.join(", ")
            ),
            ViolationKind::BadFileName { expected } => write!(
                f,
                "[{code}] '{name}' is named incorrectly, expected '{expected}': {path}"
            ),
            ViolationKind::CorruptImage => {
                write!(f, "[{code}] '{name}' failed the integrity check: {path}")
            }
            ViolationKind::AlreadyExists { destination } => write!(
                f,
                "[{code}] {subject} '{name}' already exists in destination: {}",
                destination.display()
            ),
        }
    }
}
