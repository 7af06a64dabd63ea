//! Homework Bot
//!
//! A background worker that watches homework review statuses and reports
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tunables loaded from the environment (and `.env`)
//! - Repositories: status fetching and message delivery behind traits
//! - Scheduler: the fixed-period polling loop
//!
//! The bot runs until interrupted. Only missing credentials stop it; every
//! other failure is logged, reported to the chat and retried next period.

mod config;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramMessenger};
use crate::scheduler::HomeworkPoller;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "homework_bot=debug,homework_client=debug,homework_core=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_line_number(true))
        .init();

    info!("Starting homework bot");

    // Load configuration
    let config = load_config()?;
    info!("Loaded configuration: {:?}", config);

    // Initialize clients
    let http_client = build_http_client(&config)?;
    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http_client.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http_client,
    );

    let statuses = Arc::new(HttpStatusRepository::new(practicum));
    let messenger = Arc::new(TelegramMessenger::new(
        telegram,
        config.telegram_chat_id.clone(),
    ));

    let mut poller = HomeworkPoller::new(config.retry_period, statuses, messenger);

    tokio::select! {
        _ = poller.run() => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for interrupt")?;
            println!("Interruption");
        }
    }

    Ok(())
}

/// Loads and validates configuration, logging why startup is refused
fn load_config() -> Result<Config> {
    let config = Config::from_env().inspect_err(|e| error!("{}", e))?;
    config
        .validate()
        .inspect_err(|e| error!("Invalid configuration: {}", e))?;
    Ok(config)
}

/// Builds the HTTP client shared by both services
fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}
