//! Runtime mode of the service.
//!
//! Responsibilities:
//! - Parse and display the `NODE_ENV` mode values.
//! - Decide which env file belongs to a mode.
//!
//! Invariants:
//! - Only `development` and `production` are valid; anything else is rejected at validation.
//! - The default mode is `development`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEVELOPMENT, PRODUCTION};

/// Runtime designation controlling which env file and which validation branch apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// All accepted mode strings, in schema order.
    pub const ALLOWED: &'static [&'static str] = &[DEVELOPMENT, PRODUCTION];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT,
            Self::Production => PRODUCTION,
        }
    }

    pub fn is_dev(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of [`Mode::ALLOWED`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected development or production)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DEVELOPMENT => Ok(Self::Development),
            PRODUCTION => Ok(Self::Production),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
