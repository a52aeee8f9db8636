//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main.rs`).

use clap::Parser;
use service_config::Mode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "service-env")]
#[command(
    about = "Load and validate the service environment configuration",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  service-env\n  service-env --env-dir ./deploy --mode production\n  NODE_ENV=production service-env --json\n"
)]
pub struct Cli {
    /// Directory containing `.env` / `.env.prod` (defaults to the working directory)
    #[arg(short = 'd', long, env = "SERVICE_ENV_DIR")]
    pub env_dir: Option<PathBuf>,

    /// Override the mode instead of reading NODE_ENV (development or production)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Print the loaded configuration as JSON (secrets redacted)
    #[arg(long)]
    pub json: bool,
}
