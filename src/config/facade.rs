//! ConfigLoader: the single way to produce a [`FileguardConfig`].

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, global_file, local_file};
use crate::config::FileguardConfig;
use crate::error::ApiError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration: defaults, global file, `fileguard.toml` in
    /// `dir`, then `FILEGUARD__*` environment variables.
    pub fn load(dir: &Path) -> Result<FileguardConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder);

        let config: FileguardConfig = builder.build()?.try_deserialize()?;
        debug!(dir = %dir.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from one explicit file (plus defaults and environment).
    pub fn load_from_file(path: &Path) -> Result<FileguardConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);

        let config: FileguardConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Global configuration file location, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
