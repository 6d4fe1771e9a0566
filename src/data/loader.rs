use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{AnswerEntry, AnswerPool, Question};

/// Error raised while reading quiz data files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        source: serde_json::Error,
    },
    #[error("{what} must contain at least one question")]
    NoQuestions { what: String },
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    let questions = parse_questions_named(&content, &path.display().to_string())?;
    info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

pub fn load_answer_pool_from_json<P: AsRef<Path>>(path: P) -> Result<AnswerPool, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    let pool = parse_answer_pool_named(&content, &path.display().to_string())?;
    info!(
        path = %path.display(),
        categories = pool.category_count(),
        entries = pool.len(),
        "loaded answer pool"
    );
    Ok(pool)
}

/// Parses a JSON array of questions.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    parse_questions_named(json, "questions")
}

/// Parses a JSON object mapping category names to arrays of answer records.
///
/// Each record is checked on its own: anything that is not an object with a
/// non-empty string `name` is skipped, and a category whose value is not an
/// array is kept empty.
pub fn parse_answer_pool(json: &str) -> Result<AnswerPool, LoadError> {
    parse_answer_pool_named(json, "answers")
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_questions_named(json: &str, what: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        what: what.to_string(),
        source,
    })?;

    if questions.is_empty() {
        return Err(LoadError::NoQuestions {
            what: what.to_string(),
        });
    }

    Ok(questions)
}

fn parse_answer_pool_named(json: &str, what: &str) -> Result<AnswerPool, LoadError> {
    let raw: IndexMap<String, Value> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            what: what.to_string(),
            source,
        })?;

    let categories = raw
        .into_iter()
        .map(|(category, records)| {
            let entries = match records {
                Value::Array(records) => collect_entries(&category, &records),
                _ => {
                    warn!(%category, "category is not a list, treating it as empty");
                    Vec::new()
                }
            };
            (category, entries)
        })
        .collect();

    Ok(AnswerPool::new(categories))
}

fn collect_entries(category: &str, records: &[Value]) -> Vec<AnswerEntry> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let entry = entry_from_record(record);
            if entry.is_none() {
                debug!(category, index, "skipped answer record without a name");
            }
            entry
        })
        .collect()
}

/// Converts one answer record. Only a non-empty string `name` is required;
/// a missing or non-string description becomes empty.
fn entry_from_record(record: &Value) -> Option<AnswerEntry> {
    let name = record
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())?;
    let description = ["desc", "description"]
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
        .unwrap_or_default();

    Some(AnswerEntry::new(name, description))
}
