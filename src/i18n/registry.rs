//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every language the
//! CodeMedics UI can render. It uses a singleton pattern with `OnceLock` to
//! ensure thread-safe initialization and access.
//!
//! Historically the supported-language set existed in two divergent copies
//! (one carried "en" but not "bn", the other the reverse). The registry
//! carries the union and is the only place the set is defined.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language: its code, names, the CSS
/// font class applied to the document body while the language is active,
/// default status, and whether it's enabled.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ml", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Malayalam")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "മലയാളം")
    pub native_name: &'static str,

    /// CSS class selecting the script-appropriate font family.
    /// Exactly one of these classes is present on the body at a time.
    pub font_class: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// This registry contains all supported languages and provides methods to
/// query and access them. It's initialized once on first access and remains
/// immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "hi")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is applied when no preference has been persisted
    /// and is the font fallback for unknown language codes. There should be
    /// exactly one default language.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code to check
    ///
    /// # Returns
    /// `true` if the language exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }

    /// Resolve the font class for a language code.
    ///
    /// Unknown codes resolve to the default language's font class, so the
    /// body always ends up with exactly one known class.
    pub fn font_class_for(&self, code: &str) -> &'static str {
        self.get_by_code(code)
            .filter(|lang| lang.enabled)
            .map(|lang| lang.font_class)
            .unwrap_or_else(|| self.default_language().font_class)
    }
}

/// Default language configurations.
///
/// This function returns the full set of languages the CodeMedics UI
/// supports. English is the default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            font_class: "font-en",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ml",
            name: "Malayalam",
            native_name: "മലയാളം",
            font_class: "font-ml",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            font_class: "font-hi",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
            font_class: "font-ta",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "te",
            name: "Telugu",
            native_name: "తెలుగు",
            font_class: "font-te",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ur",
            name: "Urdu",
            native_name: "اردو",
            font_class: "font-ur",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "bn",
            name: "Bengali",
            native_name: "বাংলা",
            font_class: "font-bn",
            is_default: false,
            enabled: true,
        },
    ]
}
