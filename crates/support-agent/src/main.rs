//! Support Agent Binary
//!
//! Runs the triage HTTP API or processes emails from the command line.

use anyhow::Result;
use clap::Parser;

use support_agent::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output on stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(Cli::parse()).await
}
