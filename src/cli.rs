use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "ping-pong league statistics backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the stats API server
    Serve {
        /// Port number (optional, defaults to 8080)
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        /// Upstream league backend base URL (overrides UPSTREAM_URL)
        #[arg(short, long)]
        upstream: Option<String>,
    },
    /// Print a league report to the terminal
    Report {
        /// Read the snapshot from a JSON file instead of the upstream backend
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Upstream league backend base URL (overrides UPSTREAM_URL)
        #[arg(short, long)]
        upstream: Option<String>,
    },
}
