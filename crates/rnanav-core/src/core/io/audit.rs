use super::ExportError;
use crate::core::models::result::SimulationResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const AUDIT_FILE_PREFIX: &str = "RNA_Audit_";

/// File name for an audit, derived from the result's timestamp in Unix
/// milliseconds.
pub fn audit_file_name(result: &SimulationResult) -> String {
    format!(
        "{}{}.json",
        AUDIT_FILE_PREFIX,
        result.timestamp.timestamp_millis()
    )
}

pub fn to_json_string(result: &SimulationResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Writes `result` as pretty JSON into `dir`, creating the directory if
/// needed, and returns the path of the new file.
pub fn write_audit(result: &SimulationResult, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(audit_file_name(result));
    let content = to_json_string(result)?;
    fs::write(&path, content).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    info!("Audit exported as JSON to {:?}", &path);
    Ok(path)
}

pub fn read_audit(path: &Path) -> Result<SimulationResult, ExportError> {
    let content = fs::read_to_string(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&content)?)
}
