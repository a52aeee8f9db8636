//! Shared test utilities for service-env integration tests.
//!
//! Invariants / Assumptions:
//! - Every schema variable inherited from the host is cleared so tests are hermetic.
//! - The command runs inside the caller's temp dir, so a stray `.env` in the repo is never read.

use assert_cmd::Command;
use std::path::Path;

const SCHEMA_KEYS: &[&str] = &[
    "NODE_ENV",
    "DB_DIALECT",
    "PORT",
    "DB_HOST",
    "DB_PORT",
    "DB_USERNAME",
    "DB_PASSWORD",
    "DB_DATABASE",
    "DB_URL",
    "DOTENV_DISABLED",
    "SERVICE_ENV_DIR",
];

/// Returns a hermetic `service-env` command running in `dir`.
pub fn service_env_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("service-env");
    cmd.current_dir(dir);
    for key in SCHEMA_KEYS {
        cmd.env_remove(key);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A complete development env file body.
#[allow(dead_code)]
pub const DEV_ENV_FILE: &str = "\
DB_DIALECT=postgres
PORT=3000
DB_HOST=localhost
DB_PORT=5432
DB_USERNAME=app
DB_PASSWORD=dev-password-secret
DB_DATABASE=app_dev
";
