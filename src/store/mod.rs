//! Baseline Store
//!
//! Encodes baseline sets as pretty-printed JSON (4-space indent) and moves them
//! between memory and dated artifact files.

pub mod artifact;

use crate::error::StoreError;
use crate::types::BaselineSet;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Encode any artifact as pretty JSON with a 4-space indent.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Encode a baseline set.
pub fn serialize(set: &BaselineSet) -> Result<Vec<u8>, StoreError> {
    to_pretty_json(set)
}

/// Decode a baseline set. A baseline without a root path is rejected.
pub fn deserialize(bytes: &[u8]) -> Result<BaselineSet, serde_json::Error> {
    let set: BaselineSet = serde_json::from_slice(bytes)?;
    if set.root_path.is_empty() {
        return Err(<serde_json::Error as serde::de::Error>::custom(
            "baselinePath is empty",
        ));
    }
    Ok(set)
}

/// Write encoded baseline bytes to `<dir>/<name>_Baseline: <today>.json`.
pub fn write_baseline(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
    let file_name = artifact::baseline_file_name(name, artifact::today());
    let path = artifact::write_artifact(dir, &file_name, bytes)?;
    info!(path = %path.display(), "Generated baseline file");
    Ok(path)
}

/// Read and decode a baseline artifact.
///
/// Missing, unreadable, and malformed files each produce their own error.
pub fn read_baseline(path: &Path) -> Result<BaselineSet, StoreError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::ReadFailure {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let set = deserialize(&bytes).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        path = %path.display(),
        root = %set.root_path,
        record_count = set.records.len(),
        "Loaded baseline"
    );
    Ok(set)
}
