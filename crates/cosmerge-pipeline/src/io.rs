//! JSON array files shared between pipeline stages.
//!
//! Output is pretty-printed UTF-8 with non-ASCII text written literally.
//! Writes go to a sibling temporary file that is renamed into place, so a
//! failed run never leaves a half-written artifact behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PipelineError;

/// Reads a JSON array of records.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] if the file cannot be opened and
/// [`PipelineError::Json`] if it is not an array of valid records. A single
/// malformed record fails the whole file.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    let records: Vec<T> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PipelineError::json(path, e))?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Writes `records` as a pretty-printed JSON array, replacing `path`
/// atomically. Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] on any filesystem failure and
/// [`PipelineError::Json`] if a record cannot be serialized.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    let result = write_pretty(&tmp, records).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| PipelineError::io(path, e))
    });
    if result.is_err() {
        // Best effort; the write error is what gets reported.
        let _ = fs::remove_file(&tmp);
    }
    result?;

    tracing::debug!(path = %path.display(), count = records.len(), "wrote records");
    Ok(())
}

fn write_pretty<T: Serialize>(tmp: &Path, records: &[T]) -> Result<(), PipelineError> {
    let file = File::create(tmp).map_err(|e| PipelineError::io(tmp, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| PipelineError::json(tmp, e))?;
    writer.write_all(b"\n").map_err(|e| PipelineError::io(tmp, e))?;
    writer
        .into_inner()
        .map_err(|e| PipelineError::io(tmp, e.into_error()))?
        .sync_all()
        .map_err(|e| PipelineError::io(tmp, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn write_then_read_keeps_korean_text_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![json!({"brand_name": "헤라", "texts": ["발색 좋아요"]})];

        write_records(&path, &records).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("헤라"), "non-ASCII should not be escaped: {raw}");
        assert!(raw.contains("\n  {"), "expected two-space indentation: {raw}");
        let back: Vec<Value> = read_records(&path).unwrap();
        assert_eq!(back, records);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        write_records(&path, &[json!({"a": 1})]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records::<Value>(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }), "got: {err:?}");
    }

    #[test]
    fn read_invalid_json_is_json_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"brand_name\": ").unwrap();
        let err = read_records::<Value>(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Json { .. }), "got: {err:?}");
        assert!(err.to_string().contains("broken.json"), "got: {err}");
    }

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path(Path::new("data/merged.json")),
            Path::new("data/merged.json.tmp")
        );
    }
}
