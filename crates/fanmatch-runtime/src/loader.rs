//! Corpus and scenario file loading.

use std::path::{Path, PathBuf};

use fanmatch_core::corpus::{parse_records, EntityRecord};
use fanmatch_core::errors::{CorpusError, FanmatchResult};
use fanmatch_core::{Corpus, Scenario};

use crate::corpus_span;
use crate::tracing_setup::events;

/// Load every `*.json` file in `dir`, in sorted path order.
///
/// Each file holds one record or an array of records. Subdirectories and
/// other files are skipped with a warning. Names must be unique across files.
pub fn load_corpus_dir(dir: &Path) -> FanmatchResult<Corpus> {
    let _span = corpus_span!(dir.display()).entered();

    let entries = std::fs::read_dir(dir).map_err(|e| read_failed(dir, e))?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| read_failed(dir, e))?.path();
        if path.is_dir() {
            events::corpus_file_skipped(&path, "directory");
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        } else {
            events::corpus_file_skipped(&path, "not a .json file");
        }
    }
    files.sort();

    let mut records: Vec<EntityRecord> = Vec::new();
    for file in &files {
        records.extend(read_records(file)?);
    }

    let corpus = Corpus::from_records(records)?;
    events::corpus_loaded(corpus.len(), &dir.display().to_string());
    Ok(corpus)
}

/// Load a single JSON file holding one record or an array of records.
pub fn load_corpus_file(path: &Path) -> FanmatchResult<Corpus> {
    let _span = corpus_span!(path.display()).entered();
    let corpus = Corpus::from_records(read_records(path)?)?;
    events::corpus_loaded(corpus.len(), &path.display().to_string());
    Ok(corpus)
}

/// Parse a JSON array of `{ "anchor", "query" }` objects.
pub fn parse_scenarios(json: &str) -> Result<Vec<Scenario>, CorpusError> {
    serde_json::from_str(json).map_err(|e| CorpusError::ParseFailed {
        source_name: "scenarios".to_string(),
        reason: e.to_string(),
    })
}

pub fn load_scenarios_file(path: &Path) -> FanmatchResult<Vec<Scenario>> {
    let content = std::fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
    parse_scenarios(&content).map_err(|e| with_source(e, path).into())
}

fn read_records(path: &Path) -> Result<Vec<EntityRecord>, CorpusError> {
    let content = std::fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
    parse_records(&content).map_err(|e| with_source(e, path))
}

fn read_failed(path: &Path, e: std::io::Error) -> CorpusError {
    CorpusError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Attach the file path to a parse error.
fn with_source(err: CorpusError, path: &Path) -> CorpusError {
    match err {
        CorpusError::ParseFailed { reason, .. } => CorpusError::ParseFailed {
            source_name: path.display().to_string(),
            reason,
        },
        other => other,
    }
}
