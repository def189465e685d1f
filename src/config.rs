//! Configuration System
//!
//! Layered configuration for scanning, artifact output, and logging. Values come
//! from built-in defaults, a global file, a local `fileguard.toml`, and
//! `FILEGUARD__*` environment variables, in increasing precedence.

use crate::logging::LoggingConfig;
use crate::tree::hasher::HashAlgorithm;
use crate::tree::policy::FailurePolicy;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::local_file::LOCAL_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileguardConfig {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Traversal and hashing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Digest used for new baselines
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Per-file failure policy when generating a baseline
    #[serde(default = "default_baseline_policy")]
    pub baseline_policy: FailurePolicy,

    /// Per-file failure policy when rescanning for a comparison
    #[serde(default = "default_compare_policy")]
    pub compare_policy: FailurePolicy,

    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum traversal depth (unset = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Path component names pruned from every scan
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_baseline_policy() -> FailurePolicy {
    FailurePolicy::Tolerant
}

fn default_compare_policy() -> FailurePolicy {
    FailurePolicy::Strict
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            baseline_policy: default_baseline_policy(),
            compare_policy: default_compare_policy(),
            follow_symlinks: false,
            max_depth: None,
            ignore: Vec::new(),
        }
    }
}

impl ScanConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Artifact output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving baseline and compare artifacts
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Scan(String),
    Output(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FileguardConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.scan.max_depth == Some(0) {
            errors.push(ValidationError::Scan(
                "max_depth must be at least 1".to_string(),
            ));
        }
        for pattern in &self.scan.ignore {
            if pattern.trim().is_empty() {
                errors.push(ValidationError::Scan(
                    "ignore entries cannot be empty".to_string(),
                ));
            }
        }
        if self.output.dir.as_os_str().is_empty() {
            errors.push(ValidationError::Output(
                "Output directory cannot be empty".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
