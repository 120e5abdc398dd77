//! Finance Buddy CLI
//!
//! Usage:
//!   buddy serve --port 8000           Start web server
//!   buddy transactions --limit 20     List loaded transactions
//!   buddy summary --income 6000       Spending summary and runway
//!   buddy tips                        Savings tips

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve { port, host } => commands::cmd_serve(&cli.data, &host, port).await,
        Commands::Transactions { limit, json } => {
            let snapshot = commands::open_snapshot(&cli.data);
            commands::cmd_transactions_list(&snapshot, limit, json)
        }
        Commands::Summary { income, json } => {
            let snapshot = commands::open_snapshot(&cli.data);
            commands::cmd_summary(&snapshot, income, json)
        }
        Commands::Tips { json } => {
            let snapshot = commands::open_snapshot(&cli.data);
            commands::cmd_tips(&snapshot, json)
        }
    }
}
