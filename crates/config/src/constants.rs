//! Centralized constants for the service configuration loader.
//!
//! Variable names, file names and mode strings live here so the loader,
//! the validator and the CLI agree on a single spelling.

// =============================================================================
// Modes & Env Files
// =============================================================================

/// Mode string for local development.
pub const DEVELOPMENT: &str = "development";

/// Mode string for deployed environments.
pub const PRODUCTION: &str = "production";

/// Env file read in development mode.
pub const DEV_ENV_FILE: &str = ".env";

/// Env file read in every other mode.
pub const PROD_ENV_FILE: &str = ".env.prod";

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const NODE_ENV: &str = "NODE_ENV";
pub const PORT: &str = "PORT";
pub const DB_DIALECT: &str = "DB_DIALECT";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USERNAME: &str = "DB_USERNAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_DATABASE: &str = "DB_DATABASE";
pub const DB_URL: &str = "DB_URL";

/// Setting this to `1` or `true` skips env file loading entirely.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";
