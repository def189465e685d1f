//! Directory scanning
//!
//! Walks a root directory for regular files and hashes each one into a
//! [`BaselineSet`](crate::types::BaselineSet).

pub mod hasher;
pub mod policy;
pub mod walker;

use crate::error::ScanError;
use crate::types::BaselineSet;
use hasher::Hasher;
use std::path::Path;
use walker::{Walker, WalkerConfig};

/// Walk `root` and hash every regular file under it.
///
/// Fails with [`ScanError::RootUnreadable`] if the root is unreadable up front
/// or stops being readable during the walk.
pub fn scan(
    root: &Path,
    walker_config: &WalkerConfig,
    hasher: &Hasher,
) -> Result<BaselineSet, ScanError> {
    let mut paths = Walker::with_config(root.to_path_buf(), walker_config.clone()).walk()?;
    let set = hasher.hash_all(root, &mut paths)?;
    paths.finish()?;
    Ok(set)
}
