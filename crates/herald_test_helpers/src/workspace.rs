//! Temporary files for configuration tests

use assert_fs::TempDir;
use std::fs;
use std::path::PathBuf;

/// Create a temporary directory for testing
///
/// The directory will be automatically cleaned up when the `TempDir` is dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `herald.toml` with the given content into a fresh temp directory
///
/// # Returns
///
/// Tuple of (TempDir, PathBuf) where PathBuf is the path to the config file
pub fn config_file(content: &str) -> (TempDir, PathBuf) {
    let temp = temp_dir();
    let file_path = temp.path().join("herald.toml");
    fs::write(&file_path, content).expect("Failed to write temp config file");
    (temp, file_path)
}
