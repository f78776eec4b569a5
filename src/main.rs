//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Result;
use balldontlie::{cli::Bdl, commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Bdl::parse();

    // RUST_LOG wins over --verbose when set
    let default_level = if app.verbose {
        "warn,balldontlie=trace"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    commands::run(app).await
}
