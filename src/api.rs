//! Baseline APIs
//!
//! The three entry points the command surface drives: scan a root into encoded
//! baseline bytes, persist those bytes as a dated artifact, and compare a stored
//! baseline against the live filesystem.

use crate::config::{FileguardConfig, ScanConfig};
use crate::diff::Differ;
use crate::error::ApiError;
use crate::report;
use crate::store;
use crate::tree;
use crate::tree::hasher::{HashAlgorithm, Hasher};
use crate::tree::policy::FailurePolicy;
use crate::tree::walker::WalkerConfig;
use crate::types::{BaselineSet, DiffResult};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Baseline API service
///
/// Holds the scan settings and the directory artifacts are written to. Every
/// call is independent; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct BaselineApi {
    output_dir: PathBuf,
    walker_config: WalkerConfig,
    algorithm: HashAlgorithm,
    baseline_policy: FailurePolicy,
    compare_policy: FailurePolicy,
}

impl BaselineApi {
    pub fn new(output_dir: PathBuf, scan: &ScanConfig) -> Self {
        Self {
            output_dir,
            walker_config: scan.walker_config(),
            algorithm: scan.algorithm,
            baseline_policy: scan.baseline_policy,
            compare_policy: scan.compare_policy,
        }
    }

    pub fn from_config(config: &FileguardConfig) -> Self {
        Self::new(config.output.dir.clone(), &config.scan)
    }

    /// Digest used for new baselines. Comparisons always use the stored one.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_baseline_policy(mut self, policy: FailurePolicy) -> Self {
        self.baseline_policy = policy;
        self
    }

    pub fn with_compare_policy(mut self, policy: FailurePolicy) -> Self {
        self.compare_policy = policy;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Walk and hash `root` under the baseline policy.
    pub fn scan(&self, root: &Path) -> Result<BaselineSet, ApiError> {
        let hasher = Hasher::new(self.algorithm, self.baseline_policy);
        Ok(tree::scan(root, &self.walker_config, &hasher)?)
    }

    /// Scan `root` and encode the result as baseline artifact bytes.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn scan_and_serialize(&self, root: &Path) -> Result<Vec<u8>, ApiError> {
        let set = self.scan(root)?;
        Ok(store::serialize(&set)?)
    }

    /// Persist encoded baseline bytes and return the artifact path.
    pub fn write_baseline(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ApiError> {
        Ok(store::write_baseline(&self.output_dir, name, bytes)?)
    }

    /// Read `baseline_file`, rescan its root, and persist the comparison.
    ///
    /// Returns the differences and the compare artifact path. When the read or
    /// the rescan fails no artifact is written.
    #[instrument(skip(self), fields(baseline = %baseline_file.display()))]
    pub fn compare_against_baseline(
        &self,
        baseline_file: &Path,
    ) -> Result<(DiffResult, PathBuf), ApiError> {
        let baseline = store::read_baseline(baseline_file)?;
        let differ = Differ::new(self.walker_config.clone(), self.compare_policy);
        let diff = differ.compare(&baseline)?;
        let artifact = report::persist(&self.output_dir, baseline_file, &baseline.root_path, &diff)?;
        info!(artifact = %artifact.display(), "Comparison persisted");
        Ok((diff, artifact))
    }
}
