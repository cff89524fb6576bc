#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal config validating `scan` with continue-on-error.
pub const BASIC_CONFIG: &str = r#"continue_on_error = true

[source]
roots = ["scan"]
exclude = ["tmp"]

[images]
extensions = ["jpg", "tif"]
"#;

/// Creates an `assert_cmd` Command for the archive-guard binary.
#[macro_export]
macro_rules! archive_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("archive-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative_path` inside the fixture.
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Writes `.archive-guard.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".archive-guard.toml", content);
    }

    /// Creates `<root>/<fund>/<inventory>/<unit>` holding empty image files.
    pub fn create_unit(&self, root: &str, fund: &str, inventory: &str, unit: &str, images: &[&str]) {
        let dir = format!("{root}/{fund}/{inventory}/{unit}");
        self.create_dir(&dir);
        for image in images {
            self.create_file(&format!("{dir}/{image}"), "");
        }
    }

    /// A small valid tree under `root`: two funds, three inventories, four units.
    pub fn create_valid_tree(&self, root: &str) {
        self.create_unit(root, "42", "42-1", "42-1-1", &["000000.jpg", "000001.jpg"]);
        self.create_unit(root, "42", "42-1", "42-1-2", &["000000.jpg"]);
        self.create_unit(root, "42", "42-2", "42-2-1", &["000000.jpg"]);
        self.create_unit(root, "Р-7", "Р-7-1_А", "Р-7-1_А-3а", &["000000.jpg", "000001.jpg"]);
    }
}
