//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the runtime mode, database dialect and the validated `Config` shape.
//!
//! Does NOT handle:
//! - Loading or validating configuration (see `loader` module).
//!
//! Invariants:
//! - All secret fields use `secrecy::SecretString` to prevent accidental logging.

mod config;
mod dialect;
mod mode;

pub use config::{Config, DbConfig, DbTarget, REDACTED_PLACEHOLDER};
pub use dialect::DbDialect;
pub use mode::{Mode, UnknownMode};
