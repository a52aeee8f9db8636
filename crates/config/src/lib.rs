//! Environment configuration for the backend service.
//!
//! This crate selects a `.env` file by runtime mode, merges it under the
//! process environment, validates the result and returns a [`Config`]
//! value that the loader never touches again.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, RawEnvironment, ValidatedDb, ValidatedEnv, ValidationIssue,
    build_config, dotenv_disabled, load_file, merge_environment, select_env_file, validate,
};
pub use types::{Config, DbConfig, DbDialect, DbTarget, Mode, REDACTED_PLACEHOLDER, UnknownMode};
