//! Supported display languages.

use serde::{Deserialize, Serialize};

/// Languages the bot can reply in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Chinese (the deployment default).
    #[default]
    Zh,
    /// English.
    En,
    /// Khmer.
    Km,
}

impl Language {
    /// All supported languages, in catalog order.
    pub const ALL: [Self; 3] = [Self::Zh, Self::En, Self::Km];

    /// The ISO 639-1 code used in configuration and commands.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
            Self::Km => "km",
        }
    }

    /// Parses a language code, case-insensitively.
    ///
    /// Returns `None` for codes outside the supported set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            "km" => Some(Self::Km),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
