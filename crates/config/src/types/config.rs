//! The validated service configuration.
//!
//! Responsibilities:
//! - Define the nested `Config` / `DbConfig` shape handed to the rest of the service.
//! - Provide a redacting serializer for secret fields.
//! - Expose the connection target a database factory needs.
//!
//! Does NOT handle:
//! - Reading or validating environment values (see `loader` module).
//!
//! Invariants:
//! - The loader never mutates a `Config` after building it; consumers receive it by value or reference.
//! - `is_dev` always equals `node_env == Mode::Development`.
//! - Secrets are `SecretString`, so `Debug` and `Serialize` never reveal them.

use secrecy::SecretString;
use serde::Serialize;

use super::dialect::DbDialect;
use super::mode::Mode;

/// Serializes optional secrets as a fixed placeholder.
mod redacted {
    use secrecy::SecretString;
    use serde::Serializer;

    pub const PLACEHOLDER: &str = "[REDACTED]";

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match secret {
            Some(_) => serializer.serialize_some(PLACEHOLDER),
            None => serializer.serialize_none(),
        }
    }
}

pub use redacted::PLACEHOLDER as REDACTED_PLACEHOLDER;

/// Database settings.
///
/// In development the discrete connection fields are guaranteed; in
/// production `url` is. The other group is carried through when set.
#[derive(Debug, Clone, Serialize)]
pub struct DbConfig {
    pub dialect: DbDialect,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    #[serde(serialize_with = "redacted::serialize")]
    pub password: Option<SecretString>,
    pub database: Option<String>,
    #[serde(serialize_with = "redacted::serialize")]
    pub url: Option<SecretString>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    pub node_env: Mode,
    pub is_dev: bool,
    pub db: DbConfig,
}

/// How a database connection factory should reach the database.
#[derive(Debug, Clone, Copy)]
pub enum DbTarget<'a> {
    /// A single connection URL (production).
    Url(&'a SecretString),
    /// Discrete connection parameters (development).
    Params {
        host: &'a str,
        port: u16,
        username: &'a str,
        password: &'a SecretString,
        database: &'a str,
    },
}

impl Config {
    /// Resolve the connection target for the active mode.
    ///
    /// Returns `None` only for hand-built configs that skipped validation
    /// and lack the fields their mode requires.
    pub fn db_target(&self) -> Option<DbTarget<'_>> {
        let db = &self.db;
        match self.node_env {
            Mode::Production => db.url.as_ref().map(DbTarget::Url),
            Mode::Development => Some(DbTarget::Params {
                host: db.host.as_deref()?,
                port: db.port?,
                username: db.username.as_deref()?,
                password: db.password.as_ref()?,
                database: db.database.as_deref()?,
            }),
        }
    }
}
