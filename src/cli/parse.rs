//! CLI parse: clap types for Fileguard. No behavior; definitions only.

use crate::tree::hasher::HashAlgorithm;
use crate::tree::policy::FailurePolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fileguard CLI - File integrity baselines
#[derive(Parser, Debug)]
#[command(name = "fileguard")]
#[command(about = "Record content digests for a directory tree and report what changed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory baseline and compare artifacts are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory and write a dated baseline artifact
    Baseline {
        /// Root directory to scan
        root: PathBuf,

        /// Name prefix for the baseline file
        #[arg(long, short = 'n')]
        name: String,

        /// Digest algorithm (sha256, blake3)
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,

        /// Per-file failure policy (tolerant, strict)
        #[arg(long)]
        policy: Option<FailurePolicy>,
    },
    /// Rescan a baseline's root and report changed, added, and removed files
    Compare {
        /// Baseline artifact to compare against
        baseline_file: PathBuf,

        /// Per-file failure policy for the rescan (tolerant, strict)
        #[arg(long)]
        policy: Option<FailurePolicy>,
    },
    /// Print the effective configuration as TOML
    Config,
}
