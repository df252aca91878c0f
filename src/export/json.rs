use crate::error::ExportError;
use crate::model::EstimateResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// `AI-Estimate-<unix-ms>.json`
#[must_use]
pub fn default_file_name(now: DateTime<Utc>) -> String {
    format!("AI-Estimate-{}.json", now.timestamp_millis())
}

/// Writes `value` as pretty-printed UTF-8 JSON.
pub fn export_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    info!(path = %path_ref.display(), "exported JSON");
    Ok(())
}

/// Writes the estimate into `dir` under [`default_file_name`] and returns the
/// full path.
pub fn export_to_dir<P: AsRef<Path>>(
    result: &EstimateResult,
    dir: P,
) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(default_file_name(Utc::now()));
    export_json(result, &path)?;
    Ok(path)
}

/// Reads an estimate written by [`export_json`].
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<EstimateResult, ExportError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| ExportError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
