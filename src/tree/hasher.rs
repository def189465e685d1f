//! Content hashing for scanned files
//!
//! Files are streamed through the digest in fixed-size chunks, one open handle
//! at a time. SHA-256 is the default; BLAKE3 is available for large trees.

use crate::error::ScanError;
use crate::tree::policy::{is_expected_skip, Disposition, FailurePolicy};
use crate::types::{BaselineSet, FileRecord};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// Read buffer size for streaming (8 KiB)
const BUFFER_SIZE: usize = 8192;

/// Supported 256-bit content digests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    fn digester(&self) -> Digester {
        match self {
            HashAlgorithm::Sha256 => Digester::Sha256(Sha256::new()),
            HashAlgorithm::Blake3 => Digester::Blake3(Box::new(blake3::Hasher::new())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!(
                "Unsupported hash algorithm: {} (must be 'sha256' or 'blake3')",
                other
            )),
        }
    }
}

enum Digester {
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl Digester {
    fn update(&mut self, data: &[u8]) {
        match self {
            Digester::Sha256(h) => Digest::update(h, data),
            Digester::Blake3(h) => {
                h.update(data);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Digester::Sha256(h) => hex::encode(h.finalize()),
            Digester::Blake3(h) => hex::encode(h.finalize().as_bytes()),
        }
    }
}

/// Compute the lowercase hex digest of in-memory content
pub fn compute_content_hash(content: &[u8], algorithm: HashAlgorithm) -> String {
    let mut digester = algorithm.digester();
    digester.update(content);
    digester.finalize_hex()
}

/// Stream a reader to EOF and return its lowercase hex digest
pub fn hash_reader<R: Read>(mut reader: R, algorithm: HashAlgorithm) -> io::Result<String> {
    let mut digester = algorithm.digester();
    let mut buffer = [0u8; BUFFER_SIZE];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        digester.update(&buffer[..read]);
    }
    Ok(digester.finalize_hex())
}

/// Hash the full content of one file
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> io::Result<String> {
    let file = File::open(path)?;
    hash_reader(file, algorithm)
}

/// Path string stored in a record.
///
/// Non-UTF-8 names are stored lossily, so two such names can map to the same
/// string and shadow each other in a comparison.
fn record_path(path: &Path) -> String {
    match path.to_str() {
        Some(s) => s.to_string(),
        None => {
            let lossy = path.to_string_lossy().into_owned();
            warn!(path = %lossy, "Path is not valid UTF-8, recording it lossily");
            lossy
        }
    }
}

/// Turns a sequence of paths into a [`BaselineSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    algorithm: HashAlgorithm,
    policy: FailurePolicy,
}

impl Hasher {
    pub fn new(algorithm: HashAlgorithm, policy: FailurePolicy) -> Self {
        Self { algorithm, policy }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Hash every path and collect the records under `root`.
    ///
    /// Records keep the input order. Vanished and permission-denied files are
    /// logged and left out under both policies. Any other read failure is also
    /// skipped under [`FailurePolicy::Tolerant`] but aborts the pass under
    /// [`FailurePolicy::Strict`]. A path that turned into a directory since it
    /// was listed is skipped either way.
    #[instrument(skip(self, paths), fields(root = %root.display(), algorithm = %self.algorithm, policy = %self.policy))]
    pub fn hash_all<I>(&self, root: &Path, paths: I) -> Result<BaselineSet, ScanError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let start = Instant::now();
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for path in paths {
            match self.hash_one(&path) {
                Ok(Some(digest)) => {
                    trace!(path = %path.display(), digest = %digest, "Hashed file");
                    records.push(FileRecord::new(record_path(&path), digest));
                }
                Ok(None) => {
                    debug!(path = %path.display(), "Path is now a directory, skipping");
                    skipped += 1;
                }
                Err(err) => match self.policy.disposition(&err) {
                    Disposition::Skip => {
                        if is_expected_skip(&err) {
                            debug!(path = %path.display(), error = %err, "Skipping unreadable file");
                        } else {
                            warn!(path = %path.display(), error = %err, "Error reading file, skipping");
                        }
                        skipped += 1;
                    }
                    Disposition::Abort => {
                        warn!(path = %path.display(), error = %err, "Error reading file, aborting hash pass");
                        return Err(ScanError::FileUnreadable { path, source: err });
                    }
                },
            }
        }

        info!(
            record_count = records.len(),
            skipped,
            duration_ms = start.elapsed().as_millis(),
            "Finished processing files"
        );

        Ok(BaselineSet::new(
            root.to_string_lossy(),
            self.algorithm,
            records,
        ))
    }

    fn hash_one(&self, path: &Path) -> io::Result<Option<String>> {
        if fs::metadata(path)?.is_dir() {
            return Ok(None);
        }
        hash_file(path, self.algorithm).map(Some)
    }
}
