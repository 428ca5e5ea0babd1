//! Application settings and Telegram configuration.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Telegram Bot API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token (obtain from `@BotFather`).
    pub bot_token: String,
}

impl TelegramConfig {
    /// Creates a new Telegram configuration.
    #[must_use]
    pub const fn new(bot_token: String) -> Self {
        Self { bot_token }
    }

    /// Creates configuration from environment variables.
    ///
    /// Expects `BOT_TOKEN` to be set.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token =
            std::env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN"))?;

        if bot_token.trim().is_empty() {
            return Err(ConfigError::EmptyBotToken);
        }

        Ok(Self { bot_token })
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Language used for sessions created on first contact.
    #[serde(default)]
    pub default_language: Language,

    /// Local wall-clock time of the daily counter reset.
    #[serde(default = "default_reset_time")]
    pub reset_time: NaiveTime,

    /// Log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_reset_time() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 0, 0).unwrap_or_default()
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            reset_time: default_reset_time(),
            log_level: default_log_level(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    ///
    /// Reads `DEFAULT_LANG` (zh/en/km), `RESET_TIME` (HH:MM) and
    /// `RUST_LOG`; malformed values fall back to the defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            default_language: std::env::var("DEFAULT_LANG")
                .ok()
                .and_then(|code| Language::from_code(&code))
                .unwrap_or_default(),
            reset_time: std::env::var("RESET_TIME")
                .ok()
                .and_then(|s| parse_reset_time(&s))
                .unwrap_or_else(default_reset_time),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level()),
        }
    }
}

/// Parses a `HH:MM` or `HH:MM:SS` wall-clock time.
fn parse_reset_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("BOT_TOKEN is empty")]
    EmptyBotToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.default_language, Language::Zh);
        assert_eq!(settings.reset_time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_parse_reset_time() {
        assert_eq!(
            parse_reset_time("15:00"),
            NaiveTime::from_hms_opt(15, 0, 0)
        );
        assert_eq!(
            parse_reset_time(" 09:30 "),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_reset_time("23:59:59"),
            NaiveTime::from_hms_opt(23, 59, 59)
        );
        assert_eq!(parse_reset_time("25:00"), None);
        assert_eq!(parse_reset_time("noon"), None);
    }

    #[test]
    fn test_telegram_config_new() {
        let config = TelegramConfig::new("123:abc".to_owned());
        assert_eq!(config.bot_token, "123:abc");
    }
}
