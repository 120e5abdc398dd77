//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Finance Buddy - spending reports and savings tips
#[derive(Parser)]
#[command(name = "buddy")]
#[command(about = "Personal finance buddy: summaries, burn rate and savings tips", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction fixture (JSON array of transactions)
    ///
    /// A missing or malformed file is not fatal: the snapshot starts empty
    /// and reports answer with "no data".
    #[arg(long, env = "BUDDY_DATA", default_value = buddy_core::DEFAULT_FIXTURE, global = true)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// List loaded transactions
    Transactions {
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show spending summary, burn rate and runway
    Summary {
        /// Monthly income (must be greater than 0)
        #[arg(short, long, allow_negative_numbers = true)]
        income: f64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show savings tips
    Tips {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
