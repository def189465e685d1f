//! Filesystem walker yielding the regular files under a root directory

use crate::error::ScanError;
use crate::tree::policy::is_expected_skip;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Path component names to prune (e.g. ".git")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a walk over the root.
    ///
    /// Fails only when the root itself is missing, is not a directory, or cannot
    /// be listed. Everything below the root is handled entry by entry: vanished and
    /// permission-denied entries are skipped quietly, other errors are logged, and
    /// directories and special files are never yielded. Paths come out depth-first
    /// in lexical order.
    pub fn walk(&self) -> Result<Paths, ScanError> {
        let root_unreadable = |source: io::Error| ScanError::RootUnreadable {
            path: self.root.clone(),
            source,
        };

        let metadata = fs::metadata(&self.root).map_err(root_unreadable)?;
        if !metadata.is_dir() {
            return Err(root_unreadable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a directory",
            )));
        }
        fs::read_dir(&self.root).map_err(root_unreadable)?;

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        debug!(root = %self.root.display(), "Starting filesystem walk");

        Ok(Paths {
            root: self.root.clone(),
            inner: walker.into_iter(),
            ignore_patterns: self.config.ignore_patterns.clone(),
            root_error: None,
        })
    }
}

/// Lazy sequence of regular-file paths produced by [`Walker::walk`].
///
/// Reflects the filesystem as it is read; not restartable. If the root itself
/// fails mid-walk the sequence ends early and [`Paths::finish`] reports it.
pub struct Paths {
    root: PathBuf,
    inner: walkdir::IntoIter,
    ignore_patterns: Vec<String>,
    root_error: Option<walkdir::Error>,
}

impl Paths {
    fn is_ignored(&self, entry: &DirEntry) -> bool {
        if self.ignore_patterns.is_empty() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.ignore_patterns.iter().any(|p| p.as_str() == name)
    }

    fn note_error(err: &walkdir::Error) {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        match err.io_error() {
            Some(io_err) if is_expected_skip(io_err) => {
                debug!(path = %path, error = %io_err, "Skipping inaccessible entry");
            }
            _ => {
                warn!(path = %path, error = %err, "Error accessing path");
            }
        }
    }

    /// Consume the walk, failing if the root became unreadable while walking.
    pub fn finish(self) -> Result<(), ScanError> {
        match self.root_error {
            Some(err) => Err(ScanError::RootUnreadable {
                path: self.root,
                source: io::Error::from(err),
            }),
            None => Ok(()),
        }
    }
}

impl Iterator for Paths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        if self.root_error.is_some() {
            return None;
        }
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    error!(root = %self.root.display(), error = %err, "Root became unreadable during walk");
                    self.root_error = Some(err);
                    return None;
                }
                Err(err) => {
                    Self::note_error(&err);
                    continue;
                }
            };

            if entry.depth() > 0 && self.is_ignored(&entry) {
                trace!(path = %entry.path().display(), "Ignored by pattern");
                if entry.file_type().is_dir() {
                    self.inner.skip_current_dir();
                }
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_file() {
                return Some(entry.into_path());
            }
            if !file_type.is_dir() {
                // sockets, fifos, devices, unfollowed symlinks
                trace!(path = %entry.path().display(), "Skipping non-regular file");
            }
        }
    }
}

/// Walk `root` with default settings and collect every regular file path.
pub fn traverse(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut paths = Walker::new(root.to_path_buf()).walk()?;
    let collected = paths.by_ref().collect();
    paths.finish()?;
    Ok(collected)
}
