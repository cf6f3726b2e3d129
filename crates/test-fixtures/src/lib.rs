//! Test fixture loader for Iron Laws golden adjudication scenarios.
//!
//! Provides typed deserialization of scenario JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Directory, relative to the fixtures root, holding golden scenarios.
pub const SCENARIO_DIR: &str = "scenarios";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.join(SCENARIO_DIR).exists() && path.ends_with("test-fixtures") {
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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
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

/// One golden adjudication: inputs plus the outcome they must produce.
///
/// Inputs stay as raw JSON so this crate does not depend on the engine's types;
/// tests deserialize `character` and `world` themselves and feed `action`
/// through the normalizer unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub action: serde_json::Value,
    pub character: serde_json::Value,
    #[serde(default)]
    pub world: serde_json::Value,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedOutcome {
    pub initial_result: String,
    /// Acceptable final verdicts; any one of them passes.
    pub overall_result: Vec<String>,
    /// Law codes of the first-pass violations, in report order.
    #[serde(default)]
    pub violation_codes: Vec<String>,
    #[serde(default)]
    pub has_final_action: bool,
    #[serde(default)]
    pub final_action_type: Option<String>,
    #[serde(default)]
    pub final_duration: Option<f64>,
    /// Substrings that must each appear somewhere in the repair log.
    #[serde(default)]
    pub repair_log_contains: Vec<String>,
}

/// Load a scenario by file stem, e.g. `"friendly_fire"`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("{SCENARIO_DIR}/{name}.json"))
}

/// Every scenario in the scenario directory, sorted by file name.
pub fn all_scenarios() -> Vec<Scenario> {
    list_fixtures(SCENARIO_DIR)
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
