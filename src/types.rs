//! Artifact data model: file records, baseline sets, and comparison results.

use crate::tree::hasher::HashAlgorithm;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Older artifacts encode an empty list as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One hashed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path as yielded by the traversal (relative or absolute, following the root).
    pub path: String,
    /// Lowercase hex digest of the full file content.
    #[serde(rename = "hash")]
    pub digest: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            digest: digest.into(),
        }
    }
}

/// The result of one full scan of a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineSet {
    /// Directory the scan was rooted at, reused verbatim when rescanning.
    #[serde(rename = "baselinePath")]
    pub root_path: String,

    /// Digest algorithm used for every record in this set.
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    #[serde(rename = "files", default, deserialize_with = "null_as_empty")]
    pub records: Vec<FileRecord>,
}

impl BaselineSet {
    pub fn new(
        root_path: impl Into<String>,
        algorithm: HashAlgorithm,
        records: Vec<FileRecord>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            algorithm,
            records,
        }
    }

    /// Path to digest lookup. Duplicate paths resolve to the last record.
    pub fn digest_map(&self) -> HashMap<&str, &str> {
        self.records
            .iter()
            .map(|r| (r.path.as_str(), r.digest.as_str()))
            .collect()
    }

    /// Equality that ignores record order.
    pub fn same_contents(&self, other: &BaselineSet) -> bool {
        if self.root_path != other.root_path || self.algorithm != other.algorithm {
            return false;
        }
        let mut a: Vec<&FileRecord> = self.records.iter().collect();
        let mut b: Vec<&FileRecord> = other.records.iter().collect();
        a.sort_by(|x, y| (&x.path, &x.digest).cmp(&(&y.path, &y.digest)));
        b.sort_by(|x, y| (&x.path, &x.digest).cmp(&(&y.path, &y.digest)));
        a == b
    }
}

/// Three-way difference between a stored baseline and a fresh scan.
///
/// Each path lands in at most one of the three sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    #[serde(
        rename = "hashDifferences",
        alias = "HashDifferences",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub changed: BTreeSet<String>,

    #[serde(
        rename = "addedFiles",
        alias = "AddedFiles",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub added: BTreeSet<String>,

    #[serde(
        rename = "removedFiles",
        alias = "RemovedFiles",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub removed: BTreeSet<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.changed.len() + self.added.len() + self.removed.len()
    }
}

/// Persisted output of a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareReport {
    #[serde(rename = "baselinePath")]
    pub root_path: String,

    #[serde(rename = "differences")]
    pub diff: DiffResult,
}
