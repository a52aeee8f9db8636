//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that runs the load pipeline once:
//!   select env file, load it, merge under ambient variables, validate, reshape.
//! - Emit a single structured log event for the outcome.
//!
//! Does NOT handle:
//! - Env file parsing (delegated to file.rs).
//! - Schema rules (delegated to validate.rs).
//!
//! Invariants / Assumptions:
//! - Ambient variables take precedence over env file values.
//! - The process environment is only read by `from_process_env()` and never written.
//! - The `DOTENV_DISABLED` variable is checked in the ambient environment before any file is read.
//! - Log events name keys and the mode, never values.

use std::path::PathBuf;

use super::env::{RawEnvironment, merge_environment};
use super::error::ConfigError;
use super::file::{dotenv_disabled, load_file, select_env_file};
use super::validate::{build_config, validate};
use crate::constants::NODE_ENV;
use crate::types::{Config, Mode};

/// Configuration loader that builds config from ambient variables and an env file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    ambient: RawEnvironment,
    env_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with an empty ambient environment.
    ///
    /// Useful for tests and for callers that assemble the environment themselves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader whose ambient environment is a snapshot of the process environment.
    pub fn from_process_env() -> Self {
        Self {
            ambient: RawEnvironment::from_process(),
            env_dir: None,
        }
    }

    /// Add ambient variables. Later entries replace earlier ones with the same key.
    pub fn with_ambient<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.ambient.extend(vars);
        self
    }

    /// Set a single ambient variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ambient.insert(key, value);
        self
    }

    /// Override the mode, as if `NODE_ENV` were set in the ambient environment.
    pub fn with_mode(self, mode: Mode) -> Self {
        self.with_var(NODE_ENV, mode.as_str())
    }

    /// Directory the env file is resolved against (defaults to the working directory).
    pub fn with_env_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.env_dir = Some(dir.into());
        self
    }

    /// The ambient `NODE_ENV` used to pick the env file.
    ///
    /// An empty value is returned as `Some("")`, which selects the production file.
    pub fn mode_hint(&self) -> Option<&str> {
        self.ambient.get_raw(NODE_ENV).map(str::trim)
    }

    /// Path of the env file that `load()` would read.
    pub fn env_file_path(&self) -> PathBuf {
        let file = select_env_file(self.mode_hint());
        match &self.env_dir {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        }
    }

    /// Select and load the env file, then merge it under the ambient variables.
    ///
    /// If `DOTENV_DISABLED` is `1` or `true` in the ambient environment, the
    /// file is skipped and the ambient variables are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the env file exists but cannot be read or parsed.
    pub fn load_env(&self) -> Result<RawEnvironment, ConfigError> {
        if dotenv_disabled(&self.ambient) {
            tracing::debug!("DOTENV_DISABLED set, skipping env file");
            return Ok(self.ambient.clone());
        }

        let file_values = load_file(&self.env_file_path())?;
        Ok(merge_environment(self.ambient.clone(), file_values))
    }

    /// Run the full pipeline and build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Validation` if the merged environment violates the schema.
    /// - `ConfigError::Dotenv*` if the env file is present but unusable.
    pub fn load(self) -> Result<Config, ConfigError> {
        let env_file = self.env_file_path();

        let result = self
            .load_env()
            .and_then(|raw| validate(&raw))
            .map(build_config);

        match &result {
            Ok(config) => tracing::info!(
                mode = %config.node_env,
                port = config.port,
                dialect = %config.db.dialect,
                env_file = %env_file.display(),
                "configuration loaded"
            ),
            Err(ConfigError::Validation { mode, issue }) => tracing::error!(
                mode = %mode,
                var = issue.var(),
                env_file = %env_file.display(),
                "configuration validation failed"
            ),
            Err(e) => tracing::error!(
                env_file = %env_file.display(),
                error = %e,
                "configuration env file could not be loaded"
            ),
        }

        result
    }
}
