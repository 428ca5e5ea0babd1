//! Check-in Bot - Main Entry Point
//!
//! A Telegram bot that tracks work and break check-ins per user and
//! resets all counters once a day.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use teloxide::prelude::*;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use checkin_bot::commands::{self, BotState};
use checkin_bot::config::{BotSettings, TelegramConfig};
use checkin_bot::scheduler::{ResetScheduler, SchedulerMessage};
use checkin_bot::sessions::SessionStore;

/// Telegram bot for work and break check-ins.
#[derive(Parser, Debug)]
#[command(name = "checkin_bot")]
#[command(about = "Track work and break check-ins in a Telegram chat")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Load configurations
    let tg_config = TelegramConfig::from_env()
        .context("Failed to load Telegram configuration from environment")?;

    let settings = BotSettings::from_env_with_defaults();

    info!(
        "Default language: {}, daily reset at {}",
        settings.default_language,
        settings.reset_time.format("%H:%M")
    );

    let sessions = Arc::new(RwLock::new(SessionStore::new(settings.default_language)));

    // Spawn the daily reset scheduler
    let (scheduler_tx, scheduler_rx) = mpsc::channel::<SchedulerMessage>(8);
    let scheduler = ResetScheduler::new(Arc::clone(&sessions), settings.reset_time);
    let scheduler_handle = tokio::spawn(async move {
        scheduler.run(scheduler_rx).await;
    });

    let bot = Bot::new(tg_config.bot_token);
    let state = BotState { sessions };

    info!("Starting check-in bot...");

    Dispatcher::builder(bot, commands::schema())
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            debug!("Ignoring unsupported update: {:?}", update.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Cleanup
    info!("Shutting down...");
    let _ = scheduler_tx.send(SchedulerMessage::Shutdown).await;
    let _ = scheduler_handle.await;

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
