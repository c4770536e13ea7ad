//! Fixture loader for koki golden estimate scenarios.
//!
//! Golden files live under `test-fixtures/golden/` and are plain JSON,
//! deserialized into whatever type the calling test declares.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Subdirectory holding the end-to-end estimate scenarios.
pub const GOLDEN_ESTIMATES: &str = "golden/estimates";

/// This crate's own directory holds the fixture tree.
fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a fixture by path relative to the fixture root.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    load_fixture_at(&fixtures_root().join(relative_path))
}

/// Load and deserialize a fixture from an absolute path, as returned by [`list_fixtures`].
pub fn load_fixture_at<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).is_file()
}

/// JSON files in a fixture subdirectory, sorted by file name.
/// A missing directory yields an empty list.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixtures_root().join(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}
