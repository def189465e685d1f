//! CLI route: single route table and run context. Dispatches to the baseline API.

use crate::api::BaselineApi;
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, FileguardConfig};
use crate::error::ApiError;
use crate::report;
use crate::tree::hasher::HashAlgorithm;
use crate::tree::policy::FailurePolicy;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: effective config and the baseline API.
/// Built from an optional config path using ConfigLoader only.
pub struct RunContext {
    config: FileguardConfig,
    api: BaselineApi,
}

impl RunContext {
    /// Load configuration (explicit file, or layered from the working directory),
    /// apply an output directory override, and validate.
    pub fn new(config_path: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<Self, ApiError> {
        let mut config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir().map_err(|e| {
                    ApiError::ConfigError(format!("Cannot determine working directory: {}", e))
                })?;
                ConfigLoader::load(&cwd)?
            }
        };
        if let Some(dir) = output_dir {
            config.output.dir = dir;
        }
        Self::from_config(config)
    }

    /// Build from an already loaded configuration.
    pub fn from_config(config: FileguardConfig) -> Result<Self, ApiError> {
        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(ApiError::ConfigError(messages.join("; ")));
        }
        let api = BaselineApi::from_config(&config);
        Ok(Self { config, api })
    }

    pub fn config(&self) -> &FileguardConfig {
        &self.config
    }

    pub fn api(&self) -> &BaselineApi {
        &self.api
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = match command {
            Commands::Baseline {
                root,
                name,
                algorithm,
                policy,
            } => self.handle_baseline(root, name, *algorithm, *policy),
            Commands::Compare {
                baseline_file,
                policy,
            } => self.handle_compare(baseline_file, *policy),
            Commands::Config => self.handle_config(),
        };
        debug!(
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis(),
            "Command finished"
        );
        result
    }

    fn handle_baseline(
        &self,
        root: &Path,
        name: &str,
        algorithm: Option<HashAlgorithm>,
        policy: Option<FailurePolicy>,
    ) -> Result<String, ApiError> {
        let mut api = self.api.clone();
        if let Some(algorithm) = algorithm {
            api = api.with_algorithm(algorithm);
        }
        if let Some(policy) = policy {
            api = api.with_baseline_policy(policy);
        }

        let bytes = api.scan_and_serialize(root)?;
        let path = api.write_baseline(name, &bytes)?;
        info!(root = %root.display(), path = %path.display(), "Baseline generated");
        Ok(format!("[+] Generated baseline file: {}", path.display()))
    }

    fn handle_compare(
        &self,
        baseline_file: &Path,
        policy: Option<FailurePolicy>,
    ) -> Result<String, ApiError> {
        let mut api = self.api.clone();
        if let Some(policy) = policy {
            api = api.with_compare_policy(policy);
        }

        let (diff, artifact) = api.compare_against_baseline(baseline_file)?;
        let mut out = report::render(&diff);
        out.push_str(&format!("\n[+] Generated compare file: {}", artifact.display()));
        Ok(out)
    }

    fn handle_config(&self) -> Result<String, ApiError> {
        self.config
            .to_toml()
            .map_err(|e| ApiError::ConfigError(format!("Failed to render configuration: {}", e)))
    }
}
