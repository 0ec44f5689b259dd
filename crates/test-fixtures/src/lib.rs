//! Test fixture loader for campus assistant snapshots and golden conversations.
//!
//! Fixture JSON lives beside this crate; helpers here find it from any crate
//! in the workspace and deserialize it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Golden file: one snapshot, one fixed date, many utterances.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentGolden {
    /// Path of the snapshot fixture, relative to the fixtures root.
    pub snapshot: String,
    /// `YYYY-MM-DD` used as "today".
    pub today: String,
    pub cases: Vec<IntentCase>,
}

/// One utterance and what its reply must (and must not) contain.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentCase {
    pub utterance: String,
    /// Intent in its serialized snake_case form.
    pub intent: String,
    #[serde(default)]
    pub contains: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as a string, for callers with their own parser.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Every golden intent file, parsed.
pub fn load_intent_goldens() -> Vec<(PathBuf, IntentGolden)> {
    list_fixtures("golden/intents")
        .into_iter()
        .map(|path| {
            let relative = format!(
                "golden/intents/{}",
                path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
            );
            let golden: IntentGolden = load_fixture(&relative);
            (path, golden)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_intent_files_exist() {
        let files = [
            "golden/intents/announcements.json",
            "golden/intents/canned.json",
            "golden/intents/courses.json",
            "golden/intents/events.json",
            "golden/intents/grades.json",
            "golden/intents/notes.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_files_reference_existing_snapshots() {
        let goldens = load_intent_goldens();
        assert_eq!(goldens.len(), 6);
        for (path, golden) in &goldens {
            assert!(
                fixture_exists(&golden.snapshot),
                "{} references missing snapshot {}",
                path.display(),
                golden.snapshot
            );
            assert!(!golden.cases.is_empty(), "{} has no cases", path.display());
        }
    }

    #[test]
    fn fixture_path_points_at_files() {
        assert!(fixture_path("snapshots/sample_student.json").is_file());
        assert!(fixture_path("config/campus.toml").is_file());
        assert!(!fixture_path("snapshots/missing.json").exists());
    }

    #[test]
    fn sample_snapshot_has_every_collection() {
        let snapshot = load_fixture_value("snapshots/sample_student.json");
        for key in ["courses", "events", "announcements", "notes"] {
            assert!(
                snapshot[key].as_array().is_some_and(|a| !a.is_empty()),
                "sample snapshot missing {}",
                key
            );
        }
        assert_eq!(snapshot["profile"]["name"], "Asha Raman");
    }
}
