//! Schema validation of the merged environment.
//!
//! Responsibilities:
//! - Check the merged environment against the service schema, branching on mode.
//! - Coerce values into typed fields (`Mode`, `DbDialect`, ports, secrets).
//! - Reshape validated fields into the nested `Config`.
//!
//! Does NOT handle:
//! - Reading env files or the process environment (see `file.rs`, `env.rs`).
//!
//! Invariants:
//! - Rules are checked in a fixed order and the first violation is reported:
//!   NODE_ENV, DB_DIALECT, PORT, DB_HOST, DB_PORT, DB_USERNAME, DB_PASSWORD, DB_DATABASE, DB_URL.
//! - Unknown keys are ignored.
//! - A key that is set to an empty or whitespace-only value is rejected, never read as unset.
//! - Fields that are optional in the active mode are still type-checked when present.
//! - `build_config` cannot fail.

use secrecy::SecretString;

use super::env::RawEnvironment;
use super::error::{ConfigError, ValidationIssue};
use crate::constants::{
    DB_DATABASE, DB_DIALECT, DB_HOST, DB_PASSWORD, DB_PORT, DB_URL, DB_USERNAME, DEVELOPMENT,
    NODE_ENV, PORT,
};
use crate::types::{Config, DbConfig, DbDialect, Mode};

/// Database fields as required by each mode.
#[derive(Debug, Clone)]
pub enum ValidatedDb {
    /// Discrete connection fields are mandatory.
    Development {
        host: String,
        port: u16,
        username: String,
        password: SecretString,
        database: String,
        url: Option<SecretString>,
    },
    /// A connection URL is mandatory.
    Production {
        url: SecretString,
        host: Option<String>,
        port: Option<u16>,
        username: Option<String>,
        password: Option<SecretString>,
        database: Option<String>,
    },
}

/// The flat, typed result of validation.
#[derive(Debug, Clone)]
pub struct ValidatedEnv {
    pub node_env: Mode,
    pub dialect: DbDialect,
    pub port: u16,
    pub db: ValidatedDb,
}

/// Validate a merged environment.
///
/// The branch is chosen from `NODE_ENV` in `raw` (development when unset).
/// An empty `NODE_ENV` is set, not unset, and fails the mode check.
///
/// # Errors
///
/// Returns `ConfigError::Validation` carrying the mode and the first violated rule.
pub fn validate(raw: &RawEnvironment) -> Result<ValidatedEnv, ConfigError> {
    check(raw).map_err(|issue| ConfigError::Validation {
        mode: raw
            .get_raw(NODE_ENV)
            .map_or(DEVELOPMENT, str::trim)
            .to_string(),
        issue,
    })
}

fn check(raw: &RawEnvironment) -> Result<ValidatedEnv, ValidationIssue> {
    let node_env = match raw.get_raw(NODE_ENV).map(str::trim) {
        None => Mode::default(),
        Some(value) => value.parse::<Mode>().map_err(|_| ValidationIssue::NotOneOf {
            var: NODE_ENV,
            allowed: Mode::ALLOWED,
        })?,
    };

    let dialect = required(raw, DB_DIALECT)?
        .parse::<DbDialect>()
        .map_err(|()| ValidationIssue::NotOneOf {
            var: DB_DIALECT,
            allowed: DbDialect::ALLOWED,
        })?;

    let port = parse_port(PORT, required(raw, PORT)?)?;

    let db = match node_env {
        Mode::Development => check_development_db(raw)?,
        Mode::Production => check_production_db(raw)?,
    };

    Ok(ValidatedEnv {
        node_env,
        dialect,
        port,
        db,
    })
}

fn check_development_db(raw: &RawEnvironment) -> Result<ValidatedDb, ValidationIssue> {
    Ok(ValidatedDb::Development {
        host: required(raw, DB_HOST)?.to_string(),
        port: parse_port(DB_PORT, required(raw, DB_PORT)?)?,
        username: required(raw, DB_USERNAME)?.to_string(),
        password: secret(required(raw, DB_PASSWORD)?),
        database: required(raw, DB_DATABASE)?.to_string(),
        url: lookup(raw, DB_URL)?.map(secret),
    })
}

fn check_production_db(raw: &RawEnvironment) -> Result<ValidatedDb, ValidationIssue> {
    let host = lookup(raw, DB_HOST)?.map(str::to_string);
    let port = lookup(raw, DB_PORT)?
        .map(|v| parse_port(DB_PORT, v))
        .transpose()?;
    let username = lookup(raw, DB_USERNAME)?.map(str::to_string);
    let password = lookup(raw, DB_PASSWORD)?.map(secret);
    let database = lookup(raw, DB_DATABASE)?.map(str::to_string);
    let url = secret(required(raw, DB_URL)?);

    Ok(ValidatedDb::Production {
        url,
        host,
        port,
        username,
        password,
        database,
    })
}

/// Read a key that may be absent. A present but blank value is an error.
fn lookup<'a>(
    raw: &'a RawEnvironment,
    var: &'static str,
) -> Result<Option<&'a str>, ValidationIssue> {
    match raw.get_raw(var).map(str::trim) {
        None => Ok(None),
        Some("") => Err(ValidationIssue::Empty { var }),
        Some(value) => Ok(Some(value)),
    }
}

fn required<'a>(raw: &'a RawEnvironment, var: &'static str) -> Result<&'a str, ValidationIssue> {
    lookup(raw, var)?.ok_or(ValidationIssue::Missing { var })
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ValidationIssue> {
    value.parse().map_err(|_| ValidationIssue::NotAPort {
        var,
        value: value.to_string(),
    })
}

fn secret(value: &str) -> SecretString {
    SecretString::new(value.into())
}

/// Reshape validated fields into the nested configuration.
pub fn build_config(validated: ValidatedEnv) -> Config {
    let ValidatedEnv {
        node_env,
        dialect,
        port,
        db,
    } = validated;

    let db = match db {
        ValidatedDb::Development {
            host,
            port,
            username,
            password,
            database,
            url,
        } => DbConfig {
            dialect,
            host: Some(host),
            port: Some(port),
            username: Some(username),
            password: Some(password),
            database: Some(database),
            url,
        },
        ValidatedDb::Production {
            url,
            host,
            port,
            username,
            password,
            database,
        } => DbConfig {
            dialect,
            host,
            port,
            username,
            password,
            database,
            url: Some(url),
        },
    };

    Config {
        port,
        node_env,
        is_dev: node_env.is_dev(),
        db,
    }
}
