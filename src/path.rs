//! Directory and file locations inside an archival tree.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ArchiveGuardError, Result};
use crate::naming::natural_cmp;

/// A directory or file location plus its base name.
///
/// File-system facts are resolved on first use and cached; everything else
/// is derived from the stored path.
#[derive(Debug, Clone)]
pub struct ArchivalPath {
    path: PathBuf,
    name: String,
    kind: OnceCell<EntryKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Missing,
    Directory,
    File,
    Other,
}

impl ArchivalPath {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = base_name(&path);
        Self {
            path,
            name,
            kind: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name without trailing separators.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind() == EntryKind::File
    }

    fn kind(&self) -> EntryKind {
        *self.kind.get_or_init(|| match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(_) => EntryKind::Missing,
        })
    }
}

fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || {
            path.to_string_lossy()
                .trim_end_matches(['/', '\\'])
                .to_string()
        },
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Immediate children of `dir` in natural order of their names.
///
/// # Errors
/// Returns `DirectoryRead` if `dir` or one of its entries cannot be read.
pub fn list_children(dir: &Path) -> Result<Vec<ArchivalPath>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| {
            natural_cmp(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
        })
        .into_iter()
        .map(|entry| {
            entry
                .map(|e| ArchivalPath::new(e.into_path()))
                .map_err(|source| ArchiveGuardError::DirectoryRead {
                    path: dir.to_path_buf(),
                    source,
                })
        })
        .collect()
}

/// True if `dir` has at least one entry.
///
/// # Errors
/// Returns an IO error if `dir` cannot be read.
pub fn has_children(dir: &Path) -> Result<bool> {
    Ok(std::fs::read_dir(dir)?.next().is_some())
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
