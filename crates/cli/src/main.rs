//! service-env - load and validate the service environment.
//!
//! Responsibilities:
//! - Run the configuration pipeline once against the real process environment.
//! - Print a redacted summary (or JSON) of the result.
//! - Exit non-zero when the configuration is unusable, so startup scripts can gate on it.
//!
//! Does NOT handle:
//! - Env file parsing or validation rules (see `service-config`).
//!
//! Invariants:
//! - Logs go to stderr; stdout only carries the summary.
//! - Secret values are never printed.

mod args;
mod error;
mod summary;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use service_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::from_process_env();
    if let Some(ref dir) = cli.env_dir {
        loader = loader.with_env_dir(dir.clone());
    }
    if let Some(mode) = cli.mode {
        loader = loader.with_mode(mode);
    }
    tracing::debug!(env_file = %loader.env_file_path().display(), "resolved env file");

    let config = loader.load()?;

    let output = if cli.json {
        serde_json::to_string_pretty(&config)?
    } else {
        summary::render(&config)
    };
    println!("{}", output);

    Ok(())
}
