//! Env file selection and parsing.
//!
//! Responsibilities:
//! - Map a mode string to the env file that belongs to it.
//! - Parse an env file into a `RawEnvironment` without touching the process environment.
//! - Enforce the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Merging with ambient variables (see `env.rs`).
//!
//! Invariants:
//! - A missing env file is not an error; it yields an empty mapping.
//! - The file handle lives only for the duration of `load_file`.
//! - Errors never include raw env file line contents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::env::RawEnvironment;
use super::error::ConfigError;
use crate::constants::{DEV_ENV_FILE, DEVELOPMENT, DOTENV_DISABLED, PROD_ENV_FILE};

/// Pick the env file name for a mode.
///
/// `None` counts as development. Any value other than `development`
/// selects the production file; the value itself is validated later.
pub fn select_env_file(mode: Option<&str>) -> &'static str {
    match mode.unwrap_or(DEVELOPMENT) {
        DEVELOPMENT => DEV_ENV_FILE,
        _ => PROD_ENV_FILE,
    }
}

/// Check if dotenv loading is disabled by the given environment.
pub fn dotenv_disabled(env: &RawEnvironment) -> bool {
    matches!(env.get(DOTENV_DISABLED), Some("true") | Some("1"))
}

/// Parse an env file into a mapping.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
///
/// Missing files are silently ignored (returns an empty mapping).
pub fn load_file(path: &Path) -> Result<RawEnvironment, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => {
            tracing::debug!(path = %path.display(), "env file not found, using ambient environment only");
            return Ok(RawEnvironment::new());
        }
        Err(e) => return Err(map_dotenv_error(path, e)),
    };

    let mut values = RawEnvironment::new();
    for item in iter {
        let (key, value) = item.map_err(|e| map_dotenv_error(path, e))?;
        values.insert(key, value);
    }

    tracing::debug!(path = %path.display(), entries = values.len(), "parsed env file");
    Ok(values)
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
    )
}

fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    let path = PathBuf::from(path);
    match err {
        dotenvy::Error::LineParse(_, error_index) => ConfigError::DotenvParse { path, error_index },
        dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
            path,
            kind: io_err.kind(),
        },
        _ => ConfigError::DotenvUnknown { path },
    }
}
