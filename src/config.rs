use crate::i18n::LanguageRegistry;
use crate::preferences::PREFERENCE_KEY;
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the file holding the persisted language preference
    pub preference_file: String,

    /// Language applied when no preference has been persisted
    pub default_language: String,

    /// Treat catalog validation warnings as fatal in the check binary
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            preference_file: std::env::var("I18N_PREFERENCE_FILE")
                .unwrap_or_else(|_| PREFERENCE_KEY.to_string()),
            default_language: std::env::var("I18N_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            strict: std::env::var("I18N_STRICT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        };

        if !LanguageRegistry::get().is_enabled(&config.default_language) {
            bail!(
                "I18N_DEFAULT_LANGUAGE '{}' is not a supported language",
                config.default_language
            );
        }

        Ok(config)
    }
}
