//! Per-file failure policy for hashing passes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

/// What to do with a file that cannot be opened or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Skip the file, log it, keep going.
    #[default]
    Tolerant,
    /// Skip vanished and permission-denied files like `Tolerant`; abort the
    /// whole pass on any other read failure.
    Strict,
}

/// Outcome of applying a policy to one error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Skip,
    Abort,
}

impl FailurePolicy {
    pub fn disposition(&self, err: &io::Error) -> Disposition {
        match self {
            FailurePolicy::Tolerant => Disposition::Skip,
            FailurePolicy::Strict if is_expected_skip(err) => Disposition::Skip,
            FailurePolicy::Strict => Disposition::Abort,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Tolerant => "tolerant",
            FailurePolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tolerant" => Ok(FailurePolicy::Tolerant),
            "strict" => Ok(FailurePolicy::Strict),
            other => Err(format!(
                "Invalid failure policy: {} (must be 'tolerant' or 'strict')",
                other
            )),
        }
    }
}

/// Whether an I/O error is the quiet kind (entry vanished or is off limits).
pub fn is_expected_skip(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}
