//! b62 - CLI for prefixed base62 identifiers
//!
//! Encodes UUIDs as `{prefix}_{base62}` identifiers, decodes them back, and
//! checks identifiers against an expected prefix.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env();

    // Initialize tracing (prefer RUST_LOG, fallback to B62_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
