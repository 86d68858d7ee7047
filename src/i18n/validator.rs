//! Catalog consistency validation.
//!
//! The translation catalog is supposed to define the same key set for every
//! supported language. Historically the table drifted (whole languages and
//! individual keys went missing between copies), and the gaps only surfaced
//! as raw keys rendered on the page. This module is the enforced contract:
//! the `codemedics-i18n` check binary runs it at startup and fails loudly on
//! any error.

use crate::i18n::{LanguageRegistry, TranslationCatalog};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Contract violations: missing languages or divergent key sets
    pub errors: Vec<String>,

    /// Non-critical findings: empty strings, odd codes or key names
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation catalog.
pub struct CatalogValidator;

// Regex patterns for shape checks (cached for performance)
static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate the global catalog against the global registry.
    pub fn validate_global() -> ValidationReport {
        Self::validate(TranslationCatalog::global(), LanguageRegistry::get())
    }

    /// Validate a catalog against a registry.
    ///
    /// This function checks that:
    /// - every enabled registry language is present in the catalog
    /// - every language defines the union of all keys (no key present in one
    ///   language may be missing from another)
    /// - no catalog language is absent from the registry
    /// - codes and keys have the expected shape, and no translation is empty
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(catalog: &TranslationCatalog, registry: &LanguageRegistry) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Every enabled language must exist in the catalog
        for config in registry.list_enabled() {
            if !catalog.has_language(config.code) {
                report.errors.push(format!(
                    "Language '{}' ({}) is enabled but has no catalog entries",
                    config.code, config.name
                ));
            }
        }

        // Catalog languages unknown to the registry are unreachable data
        for code in catalog.language_codes() {
            if registry.get_by_code(code).is_none() {
                report.warnings.push(format!(
                    "Catalog language '{}' is not in the registry and can never be selected",
                    code
                ));
            }
        }

        // Key-set contract: each language must carry the union of all keys
        let all_keys: BTreeSet<&str> = catalog
            .language_codes()
            .into_iter()
            .filter_map(|code| catalog.keys_for(code))
            .flatten()
            .collect();

        for code in catalog.language_codes() {
            let keys: BTreeSet<&str> = catalog
                .keys_for(code)
                .unwrap_or_default()
                .into_iter()
                .collect();
            for missing in all_keys.difference(&keys) {
                report.errors.push(format!(
                    "Language '{}' is missing key '{}' present in another language",
                    code, missing
                ));
            }
        }

        // Shape checks
        for code in catalog.language_codes() {
            if !Self::is_valid_code(code) {
                report
                    .warnings
                    .push(format!("Language code '{}' is not a short ISO-style code", code));
            }

            for key in catalog.keys_for(code).unwrap_or_default() {
                if !Self::is_valid_key(key) {
                    report.warnings.push(format!(
                        "Key '{}' in language '{}' is not a camelCase identifier",
                        key, code
                    ));
                }
                if catalog.lookup(code, key).trim().is_empty() {
                    report.warnings.push(format!(
                        "Translation for '{}' in language '{}' is empty",
                        key, code
                    ));
                }
            }
        }

        report
    }

    /// Check that a language code looks like an ISO 639 code
    fn is_valid_code(code: &str) -> bool {
        let regex = CODE_REGEX.get_or_init(|| Regex::new(r"^[a-z]{2,3}$").unwrap());
        regex.is_match(code)
    }

    /// Check that a translation key is a camelCase identifier
    fn is_valid_key(key: &str) -> bool {
        let regex = KEY_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap());
        regex.is_match(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// A catalog where Hindi lost two keys the other languages carry.
    fn divergent_catalog() -> TranslationCatalog {
        TranslationCatalog::from_entries(HashMap::from([
            (
                "en",
                HashMap::from([
                    ("appTitle", "CodeMedics"),
                    ("heroTitle", "Digital Health for Migrant Workers"),
                ]),
            ),
            ("hi", HashMap::from([("appTitle", "कोडमेडिक्स")])),
        ]))
    }

    // ==================== Shape Check Tests ====================

    #[test]
    fn test_is_valid_code_accepts_iso_codes() {
        assert!(CatalogValidator::is_valid_code("en"));
        assert!(CatalogValidator::is_valid_code("bn"));
        assert!(CatalogValidator::is_valid_code("fil"));
    }

    #[test]
    fn test_is_valid_code_rejects_bad_codes() {
        assert!(!CatalogValidator::is_valid_code(""));
        assert!(!CatalogValidator::is_valid_code("EN"));
        assert!(!CatalogValidator::is_valid_code("english"));
        assert!(!CatalogValidator::is_valid_code("e n"));
    }

    #[test]
    fn test_is_valid_key_accepts_camel_case() {
        assert!(CatalogValidator::is_valid_key("appTitle"));
        assert!(CatalogValidator::is_valid_key("heroDesc"));
        assert!(CatalogValidator::is_valid_key("x"));
    }

    #[test]
    fn test_is_valid_key_rejects_bad_keys() {
        assert!(!CatalogValidator::is_valid_key(""));
        assert!(!CatalogValidator::is_valid_key("AppTitle"));
        assert!(!CatalogValidator::is_valid_key("hero-title"));
        assert!(!CatalogValidator::is_valid_key("hero title"));
    }

    // ==================== Error Path Tests ====================

    #[test]
    fn test_missing_key_is_flagged_as_error() {
        let report = CatalogValidator::validate(&divergent_catalog(), LanguageRegistry::get());

        assert!(report.has_errors());
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("'hi'") && e.contains("'heroTitle'")));
    }

    #[test]
    fn test_enabled_language_without_entries_is_flagged() {
        // The registry enables seven languages; this catalog only has two.
        let report = CatalogValidator::validate(&divergent_catalog(), LanguageRegistry::get());

        for code in ["ml", "ta", "te", "ur", "bn"] {
            assert!(
                report
                    .errors
                    .iter()
                    .any(|e| e.contains(&format!("'{}'", code)) && e.contains("no catalog entries")),
                "no missing-language error for '{}'",
                code
            );
        }
    }

    #[test]
    fn test_unregistered_catalog_language_is_warned() {
        let catalog = TranslationCatalog::from_entries(HashMap::from([
            ("en", HashMap::from([("appTitle", "CodeMedics")])),
            ("fr", HashMap::from([("appTitle", "CodeMedics")])),
        ]));

        let report = CatalogValidator::validate(&catalog, LanguageRegistry::get());

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'fr'") && w.contains("not in the registry")));
    }

    #[test]
    fn test_empty_translation_is_warned() {
        let catalog = TranslationCatalog::from_entries(HashMap::from([(
            "en",
            HashMap::from([("appTitle", "   ")]),
        )]));

        let report = CatalogValidator::validate(&catalog, LanguageRegistry::get());

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'appTitle'") && w.contains("empty")));
    }

    #[test]
    fn test_malformed_key_is_warned() {
        let catalog = TranslationCatalog::from_entries(HashMap::from([(
            "en",
            HashMap::from([("Hero-Title", "Digital Health")]),
        )]));

        let report = CatalogValidator::validate(&catalog, LanguageRegistry::get());

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'Hero-Title'") && w.contains("camelCase")));
    }

    // ==================== Catalog Contract Tests ====================

    #[test]
    fn test_shipped_catalog_has_no_errors() {
        let report = CatalogValidator::validate_global();
        assert!(
            !report.has_errors(),
            "shipped catalog violates the key-set contract: {:?}",
            report.errors
        );
    }

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = CatalogValidator::validate_global();
        assert!(report.is_clean(), "unexpected findings: {:?}", report);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
