//! Shared helpers for CLI integration tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the admin-colors binary
pub fn admin_colors_bin() -> &'static str {
    env!("CARGO_BIN_EXE_admin-colors")
}

/// Writes a settings file with the given variant and raw color values.
///
/// Returns the file path and the temp dir guard keeping it alive.
pub fn temp_config(variant: &str, colors: &[(&str, &str)]) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");

    let mut content = format!("variant = \"{variant}\"\n\n[colors]\n");
    for (slot, value) in colors {
        content.push_str(&format!("{slot} = \"{value}\"\n"));
    }

    fs::write(&path, content).expect("Failed to write settings file");
    (path, dir)
}

/// Returns a path for a settings file that does not exist yet.
pub fn empty_config_path() -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    (path, dir)
}
