//! Test fixture loader for the fanmatch corpus, reference scenarios, and
//! golden expectations.
//!
//! Layout under `test-fixtures/`:
//! - `corpus/*.json`: one team record per file, read in sorted order
//! - `scenarios/default.json`: the ten reference scenarios
//! - `golden/*.json`: expected categories, exclusions, and pair breakdowns

use std::path::PathBuf;

use fanmatch_core::corpus::parse_records;
use fanmatch_core::{Corpus, Scenario};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("corpus").exists() {
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
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Directory holding one JSON record per team.
pub fn corpus_dir() -> PathBuf {
    fixture_path("corpus")
}

/// All JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixture_path(subdir);
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load the fixture corpus in sorted file order.
pub fn load_corpus() -> Corpus {
    let mut records = Vec::new();
    for file in list_fixtures("corpus") {
        let content = std::fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
        records.extend(
            parse_records(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e)),
        );
    }
    Corpus::from_records(records).unwrap_or_else(|e| panic!("Invalid fixture corpus: {e}"))
}

/// The ten reference scenarios.
pub fn load_scenarios() -> Vec<Scenario> {
    load_fixture("scenarios/default.json")
}

/// Expected category and self-excluded candidates of one reference scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    /// Index into [`load_scenarios`].
    pub scenario: usize,
    pub category: String,
    pub excluded: Vec<String>,
}

pub fn load_scenario_expectations() -> Vec<ScenarioExpectation> {
    load_fixture("golden/default_expectations.json")
}

/// A single (scenario, candidate) case with the breakdown fields it must show.
#[derive(Debug, Clone, Deserialize)]
pub struct PairCase {
    pub name: String,
    pub anchor: String,
    pub query: String,
    pub candidate: String,
    pub expect: PairExpectation,
}

/// Only the fields present are checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PairExpectation {
    pub excluded: bool,
    pub score: Option<f64>,
    pub category: Option<String>,
    pub penalty: Option<f64>,
    pub relational: Option<f64>,
    pub relational_source: Option<String>,
    pub semantic: Option<f64>,
}

impl PairCase {
    pub fn scenario(&self) -> Scenario {
        Scenario::new(&self.anchor, &self.query)
    }
}

pub fn load_pair_cases() -> Vec<PairCase> {
    load_fixture("golden/pair_cases.json")
}
