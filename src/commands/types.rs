//! Command types and definitions.

use teloxide::utils::command::BotCommands;

use crate::i18n::Language;

/// Slash commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Start the bot and show the check-in keyboard.
    #[command(description = "start the bot and show the check-in keyboard")]
    Start,

    /// Switch replies to Chinese.
    #[command(description = "switch replies to Chinese")]
    Zh,

    /// Switch replies to English.
    #[command(description = "switch replies to English")]
    En,

    /// Switch replies to Khmer.
    #[command(description = "switch replies to Khmer")]
    Km,
}

impl Command {
    /// The language a switch command selects, if it is one.
    #[must_use]
    pub const fn language(&self) -> Option<Language> {
        match self {
            Self::Start => None,
            Self::Zh => Some(Language::Zh),
            Self::En => Some(Language::En),
            Self::Km => Some(Language::Km),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_NAME: &str = "checkin_bot";

    #[test]
    fn test_parse_start() {
        assert_eq!(Command::parse("/start", BOT_NAME).unwrap(), Command::Start);
        assert_eq!(
            Command::parse("/start@checkin_bot", BOT_NAME).unwrap(),
            Command::Start
        );
    }

    #[test]
    fn test_parse_language_switches() {
        assert_eq!(Command::parse("/zh", BOT_NAME).unwrap(), Command::Zh);
        assert_eq!(Command::parse("/en", BOT_NAME).unwrap(), Command::En);
        assert_eq!(Command::parse("/km", BOT_NAME).unwrap(), Command::Km);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(Command::parse("/stats", BOT_NAME).is_err());
        assert!(Command::parse("上班", BOT_NAME).is_err());
    }

    #[test]
    fn test_language_mapping() {
        assert_eq!(Command::Start.language(), None);
        assert_eq!(Command::Zh.language(), Some(Language::Zh));
        assert_eq!(Command::En.language(), Some(Language::En));
        assert_eq!(Command::Km.language(), Some(Language::Km));
    }
}
