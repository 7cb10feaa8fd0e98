// server/src/main.rs

// Entry point for the MediCloud portal CLI. Parses command-line arguments
// and dispatches to the handlers in the cli module.
use anyhow::Result;
use log::info;
use medicloud_server::cli::cli::start_cli;
use tokio::signal::unix::{signal, SignalKind};

async fn handle_signals() {
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to set up SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to set up SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    tokio::spawn(handle_signals());

    start_cli().await
}
