//! Configuration module for the check-in bot.
//!
//! Handles the Telegram bot token and the handful of runtime settings
//! (default language, daily reset time, log level), all sourced from the
//! environment.

mod settings;

pub use settings::{BotSettings, ConfigError, TelegramConfig};
