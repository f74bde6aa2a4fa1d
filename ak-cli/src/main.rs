//! ak - AuthKit CLI
//!
//! A command-line client for the AuthKit auth service: create accounts,
//! sign in and out, and inspect or update the persisted session.
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! ak signup --email dev@example.com --password hunter22
//!
//! # Sign in and persist the session
//! ak login --email dev@example.com --password hunter22
//!
//! # Show the signed-in user
//! ak whoami --json
//!
//! # Change the account email
//! ak update-profile --email new@example.com
//!
//! # Sign out
//! ak logout
//! ```

mod cli;
mod commands;
mod error;
mod logger;


use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::Result as CliResult;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use ak_config::Config;
use ak_gateway::AuthClient;
use ak_session::SessionStore;
use ak_store::{FileTokenStore, TokenStore};
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; variables stay optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let config_dir = Config::config_dir()?;
        Some(config_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ak v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let token_dir = config.token_dir()?;
    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&token_dir));

    let session = Arc::new(SessionStore::new(Arc::clone(&tokens)));
    session.bootstrap();

    // Explicit flag wins over the configured URL
    let base_url = cli
        .server
        .unwrap_or_else(|| config.api.base_url.clone());

    let forced_logout = Arc::clone(&session);
    let client = AuthClient::with_timeout(
        &base_url,
        Arc::clone(&tokens),
        Duration::from_secs(config.api.timeout_secs),
    )
    .with_unauthorized_handler(move || forced_logout.logout());

    match cli.command {
        Commands::Signup { email, password } => {
            commands::signup(&client, &session, &email, &password).await
        }
        Commands::Login { email, password } => {
            commands::login(&client, &session, &email, &password).await
        }
        Commands::Logout => commands::logout(&client, &session).await,
        Commands::Whoami { json } => commands::whoami(&session, json),
        Commands::UpdateProfile { email, password } => {
            commands::update_profile(&client, &session, email, password).await
        }
    }
}
