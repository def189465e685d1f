//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key: defaults, then the global
/// file, then the local file, then the environment.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.algorithm", "sha256")?
        .set_default("scan.baseline_policy", "tolerant")?
        .set_default("scan.compare_policy", "strict")?
        .set_default("scan.follow_symlinks", false)?
        .set_default("output.dir", ".")
}
