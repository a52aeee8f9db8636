//! Configuration loader for environment variables and env files.
//!
//! Responsibilities:
//! - Select the env file for the active mode and parse it.
//! - Merge env file entries under the ambient process environment.
//! - Validate the merged set and reshape it into a `Config`.
//!
//! Does NOT handle:
//! - Storing the configuration globally; callers own and pass the returned `Config`.
//!
//! Invariants / Assumptions:
//! - Ambient variables take precedence over env file values.
//! - A missing env file is not an error.
//! - The `DOTENV_DISABLED` variable is checked before any env file is read.

mod builder;
mod env;
mod error;
mod file;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{RawEnvironment, merge_environment};
pub use error::{ConfigError, ValidationIssue};
pub use file::{dotenv_disabled, load_file, select_env_file};
pub use validate::{ValidatedDb, ValidatedEnv, build_config, validate};
