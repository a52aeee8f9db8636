//! Human-readable rendering of a loaded configuration.
//!
//! Invariants:
//! - Secret values (password, connection URL) are never rendered.

use service_config::{Config, DbTarget, REDACTED_PLACEHOLDER};
use std::fmt::Write;

/// Render a short, aligned summary of `config`.
pub fn render(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "mode:     {}", config.node_env);
    let _ = writeln!(out, "port:     {}", config.port);
    let _ = writeln!(out, "dialect:  {}", config.db.dialect);

    let target = match config.db_target() {
        Some(DbTarget::Url(_)) => format!("url {}", REDACTED_PLACEHOLDER),
        Some(DbTarget::Params {
            host,
            port,
            username,
            database,
            ..
        }) => format!("{}@{}:{}/{}", username, host, port, database),
        None => "incomplete".to_string(),
    };
    let _ = write!(out, "database: {}", target);
    out
}
