//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for env file loading and schema validation failures.
//! - Render validation failures with the active mode, the way operators expect to read them.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the `service-env` binary).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Validation issues NEVER echo the value of a secret variable.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// A single schema rule that the merged environment violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("\"{var}\" is required")]
    Missing { var: &'static str },

    #[error("\"{var}\" is not allowed to be empty")]
    Empty { var: &'static str },

    #[error("\"{var}\" must be a valid port number (got '{value}')")]
    NotAPort { var: &'static str, value: String },

    #[error("\"{var}\" must be one of [{}]", .allowed.join(", "))]
    NotOneOf {
        var: &'static str,
        allowed: &'static [&'static str],
    },
}

impl ValidationIssue {
    /// Name of the offending variable.
    pub fn var(&self) -> &'static str {
        match self {
            Self::Missing { var }
            | Self::Empty { var }
            | Self::NotAPort { var, .. }
            | Self::NotOneOf { var, .. } => var,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The merged environment failed schema validation.
    ///
    /// `mode` is the raw `NODE_ENV` value (or `development` when unset), so an
    /// unsupported mode is still reported as given.
    #[error("[ENV: {mode}] Config validation error: {issue}")]
    Validation { mode: String, issue: ValidationIssue },

    /// Failed to parse the env file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse env file {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read the env file due to an I/O error.
    #[error("Failed to read env file {}: {kind}", .path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error(
        "Failed to load env file {}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    /// Returns the validation issue if this is a schema failure.
    pub fn validation_issue(&self) -> Option<&ValidationIssue> {
        match self {
            Self::Validation { issue, .. } => Some(issue),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
