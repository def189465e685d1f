//! Fileguard: File Integrity Baselines
//!
//! Walks a directory tree, records a content digest for every regular file, and
//! stores the result as a dated baseline artifact. A later comparison rescans
//! the recorded root and reports which files changed, appeared, or vanished.

pub mod api;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod report;
pub mod store;
pub mod tree;
pub mod types;
