//! Differ
//!
//! Rescans a baseline's recorded root and classifies every path as changed,
//! added, or removed. Paths with identical digests on both sides are omitted.

use crate::error::ApiError;
use crate::tree;
use crate::tree::hasher::Hasher;
use crate::tree::policy::FailurePolicy;
use crate::tree::walker::WalkerConfig;
use crate::types::{BaselineSet, DiffResult};
use std::path::Path;
use tracing::{info, instrument};

/// Three-way difference of `fresh` against `stored`.
pub fn diff(stored: &BaselineSet, fresh: &BaselineSet) -> DiffResult {
    let before = stored.digest_map();
    let after = fresh.digest_map();
    let mut result = DiffResult::default();

    for (path, digest) in &after {
        match before.get(path) {
            Some(old) if old != digest => {
                result.changed.insert((*path).to_string());
            }
            Some(_) => {}
            None => {
                result.added.insert((*path).to_string());
            }
        }
    }

    for path in before.keys() {
        if !after.contains_key(path) {
            result.removed.insert((*path).to_string());
        }
    }

    result
}

/// Compares stored baselines against the live filesystem.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    walker_config: WalkerConfig,
    policy: FailurePolicy,
}

impl Differ {
    pub fn new(walker_config: WalkerConfig, policy: FailurePolicy) -> Self {
        Self {
            walker_config,
            policy,
        }
    }

    /// Rescan `baseline.root_path` with the baseline's own algorithm and diff.
    ///
    /// Fails with [`ApiError::RescanFailure`] when the root cannot be walked or,
    /// under a strict policy, when any file cannot be hashed.
    #[instrument(skip(self, baseline), fields(root = %baseline.root_path, policy = %self.policy))]
    pub fn compare(&self, baseline: &BaselineSet) -> Result<DiffResult, ApiError> {
        let hasher = Hasher::new(baseline.algorithm, self.policy);
        let fresh = tree::scan(Path::new(&baseline.root_path), &self.walker_config, &hasher)
            .map_err(|source| ApiError::RescanFailure {
                root: baseline.root_path.clone(),
                source,
            })?;

        let result = diff(baseline, &fresh);
        info!(
            changed = result.changed.len(),
            added = result.added.len(),
            removed = result.removed.len(),
            "Comparison complete"
        );
        Ok(result)
    }
}
