// server/src/cli/cli.rs
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lib::commands::{AuthCommand, PatientCommand};
use lib::config::load_portal_config_from_yaml;
use lib::storage_engine::open_record_store;
use logging_service::AuditLog;

use crate::cli::{handlers_auth, handlers_patient};

#[derive(Parser, Debug)]
#[clap(name = "medicloud", version, about = "MediCloud patient portal CLI")]
pub struct CliArgs {
    /// Path to a portal config file. Built-in defaults apply when omitted.
    #[clap(long)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Patient directory operations.
    #[clap(subcommand)]
    Patient(PatientCommand),
    /// Authentication operations.
    #[clap(subcommand)]
    Auth(AuthCommand),
}

pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    let config = load_portal_config_from_yaml(args.config.as_deref())?;
    let store = open_record_store(&config.storage)?;
    let audit = AuditLog::new();

    let output = match args.command {
        Commands::Patient(action) => {
            handlers_patient::handle_patient_command(action, store, &audit).await
        }
        Commands::Auth(action) => {
            handlers_auth::handle_auth_command(action, store, &config, &audit).await
        }
    };
    println!("{}", output);
    Ok(())
}
