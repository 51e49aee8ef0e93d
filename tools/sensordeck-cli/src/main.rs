//! sensordeck CLI - Terminal panel for a sensor-reporting WebSocket backend
//!
//! `watch` keeps a reconnecting connection to the backend open and renders
//! the live feed; `replay` pushes recorded payloads through the same panel.

use clap::{Parser, Subcommand};
use commands::{replay::ReplayCommand, watch::WatchCommand};

mod commands;
mod error;
mod output;

/// sensordeck - Live terminal panel for sensor readings
#[derive(Debug, Parser)]
#[command(name = "sensordeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Watch the live sensor feed
    #[command(name = "watch")]
    Watch(WatchCommand),

    /// Replay recorded payloads through the panel
    #[command(name = "replay")]
    Replay(ReplayCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "sensordeck_cli=debug,sensordeck_ws_client=debug,sensordeck_core=debug"
    } else {
        "sensordeck_cli=info,sensordeck_ws_client=info,sensordeck_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let result = match cli.command {
        Command::Watch(cmd) => cmd.execute().await,
        Command::Replay(cmd) => cmd.execute().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
