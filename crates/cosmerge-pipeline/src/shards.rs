//! Concatenation of per-batch review files.
//!
//! The review scraper writes one file per product batch, named
//! `oliveyoung_{category}_{N}_reviews_{kind}.json`. Batches are joined in
//! numeric order of `N`, so batch 10 follows batch 9.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::Value;

use crate::error::PipelineError;

/// Which flavour of batch file to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardKind {
    Preprocessed,
    Raw,
}

impl ShardKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ShardKind::Preprocessed => "preprocessed",
            ShardKind::Raw => "raw",
        }
    }
}

impl fmt::Display for ShardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joined batch content plus the files that contributed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShardConcat {
    pub values: Vec<Value>,
    /// Files read successfully, in join order.
    pub files: Vec<PathBuf>,
    /// Matching files that could not be read or parsed.
    pub skipped: Vec<PathBuf>,
}

/// Joins every batch file of `kind` for `category` found directly in `dir`.
///
/// A top-level array contributes its elements; any other top-level value
/// contributes itself as one element. Unreadable batches are logged and
/// skipped.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] if `dir` cannot be listed.
pub fn concat_review_shards(
    dir: &Path,
    category: &str,
    kind: ShardKind,
) -> Result<ShardConcat, PipelineError> {
    let pattern = format!(
        r"^oliveyoung_{}_(\d+)_reviews_{}\.json$",
        regex::escape(category),
        kind.as_str()
    );
    let re = Regex::new(&pattern).map_err(|source| PipelineError::InvalidShardPattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut batches: Vec<(u64, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PipelineError::io(dir, e))? {
        let entry = entry.map_err(|e| PipelineError::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(index) = re
            .captures(name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
        else {
            continue;
        };
        batches.push((index, entry.path()));
    }
    batches.sort_by_key(|(index, _)| *index);

    let mut out = ShardConcat {
        values: Vec::new(),
        files: Vec::new(),
        skipped: Vec::new(),
    };
    for (_, path) in batches {
        match read_value(&path) {
            Ok(Value::Array(items)) => {
                out.values.extend(items);
                out.files.push(path);
            }
            Ok(other) => {
                out.values.push(other);
                out.files.push(path);
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping unreadable review batch");
                out.skipped.push(path);
            }
        }
    }

    tracing::info!(
        category,
        kind = %kind,
        files = out.files.len(),
        skipped = out.skipped.len(),
        records = out.values.len(),
        "joined review batches"
    );
    Ok(out)
}

fn read_value(path: &Path) -> Result<Value, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| PipelineError::json(path, e))
}
