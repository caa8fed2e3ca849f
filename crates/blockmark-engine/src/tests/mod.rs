//! Shared helpers for unit tests.

use std::fs;

use tempfile::TempDir;

/// An empty temporary directory, removed when dropped.
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Write `content` to `relative` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}
