//! Zeitgeist CLI binary.
//!
//! Command-line explorer for the mood dashboard's data layer: fetches the
//! monthly collection from the managed data service and prints the same
//! derived metrics the dashboard charts consume.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;
use zeitgeist_client::MoodClient;

#[derive(Parser)]
#[command(name = "zeitgeist")]
#[command(about = "Six decades of cultural mood, from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest-period mood stats
    Latest,

    /// Yearly aggregates folded from the monthly collection
    Yearly {
        /// Restrict output to one decade, e.g. 1990
        #[arg(short, long)]
        decade: Option<i32>,

        /// Use the service's precomputed yearly rows instead of aggregating
        #[arg(long)]
        remote: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List historical events, or show one event's before/during/after windows
    Events {
        /// Event code; omit to list all events
        code: Option<String>,
    },

    /// Dump the mood timeline over a year range
    Timeline {
        /// First year, inclusive
        #[arg(long)]
        start: i32,

        /// Last year, inclusive
        #[arg(long)]
        end: i32,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Fetch a dashboard metadata blob
    Metadata {
        /// Blob kind: date_range, correlation_matrix or decade_summary
        kind: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = MoodClient::from_env()?;

    match cli.command {
        Commands::Latest => {
            cmd::latest::show_latest(client).await?;
        }
        Commands::Yearly {
            decade,
            remote,
            format,
        } => {
            cmd::yearly::show_yearly(client, decade, remote, &format).await?;
        }
        Commands::Events { code } => {
            cmd::events::show_events(client, code.as_deref()).await?;
        }
        Commands::Timeline { start, end, format } => {
            cmd::timeline::show_timeline(client, start, end, &format).await?;
        }
        Commands::Metadata { kind } => {
            cmd::metadata::show_metadata(&client, &kind).await?;
        }
    }

    Ok(())
}
