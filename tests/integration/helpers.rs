//! Shared fixture helpers

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir so tests can modify or delete it.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}
