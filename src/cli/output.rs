//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ScanError, StoreError};

/// Map domain/service errors to a single diagnostic line for stderr.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Store(StoreError::NotFound { path }) => {
            format!("Error: baseline file {} does not exist", path.display())
        }
        ApiError::Store(StoreError::Malformed { path, reason }) => format!(
            "Error: {} is not a valid baseline ({})",
            path.display(),
            reason
        ),
        ApiError::Scan(ScanError::RootUnreadable { path, source }) => format!(
            "Error: cannot scan {}: {}",
            path.display(),
            source
        ),
        other => format!("Error: {}", other),
    }
}
