//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a thin wrapper over a registry
//! code that can only be constructed for languages the registry actually
//! supports.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// This type represents a language that has been validated against the
/// registry. It ensures that only supported, enabled languages can be
/// constructed. Raw user-supplied codes (which may be anything) stay as
/// strings until they pass through `from_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    /// English (the default language).
    pub const ENGLISH: Language = Language { code: "en" };

    /// Malayalam.
    pub const MALAYALAM: Language = Language { code: "ml" };

    /// Hindi.
    pub const HINDI: Language = Language { code: "hi" };

    /// Tamil.
    pub const TAMIL: Language = Language { code: "ta" };

    /// Telugu.
    pub const TELUGU: Language = Language { code: "te" };

    /// Urdu.
    pub const URDU: Language = Language { code: "ur" };

    /// Bengali.
    pub const BENGALI: Language = Language { code: "bn" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "hi")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```ignore
    /// let hindi = Language::from_code("hi")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the default language.
    ///
    /// This is the language applied when no preference has been persisted,
    /// and the font fallback for unrecognized codes.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the CSS font class for this language.
    pub fn font_class(&self) -> &'static str {
        self.config().font_class
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
