//! Artifact file naming and writing

use crate::error::StoreError;
use chrono::{Local, NaiveDate};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Calendar date format embedded in artifact names
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `<name>_Baseline: <YYYY-MM-DD>.json`
pub fn baseline_file_name(name: &str, date: NaiveDate) -> String {
    format!("{}_Baseline: {}.json", name, date.format(DATE_FORMAT))
}

/// `Compare <YYYY-MM-DD>: <baseline file name>`
///
/// Only the final component of `baseline_file` is used.
pub fn compare_file_name(baseline_file: &Path, date: NaiveDate) -> String {
    let base = baseline_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| baseline_file.to_string_lossy().into_owned());
    format!("Compare {}: {}", date.format(DATE_FORMAT), base)
}

/// Write `bytes` to `dir/file_name`, creating `dir` if needed.
///
/// An existing artifact with the same name is replaced.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
    let path = dir.join(file_name);
    let write_failure = |source: io::Error| StoreError::WriteFailure {
        path: path.clone(),
        source,
    };

    if file_name.is_empty() || file_name.contains(|c: char| c == '/' || c == '\\') {
        return Err(write_failure(io::Error::new(
            io::ErrorKind::InvalidInput,
            "artifact name must be a single file name",
        )));
    }

    fs::create_dir_all(dir).map_err(write_failure)?;
    let mut file = File::create(&path).map_err(write_failure)?;
    file.write_all(bytes).map_err(write_failure)?;
    file.flush().map_err(write_failure)?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote artifact");
    Ok(path)
}
