//! Translation catalog: the static Language Code -> key -> string table.
//!
//! The catalog is the single source of truth for every localized string in
//! the CodeMedics UI. It is constructed once at first access (`OnceLock`) and
//! never mutated. Lookups are total: an unknown language or key falls back to
//! the key itself, which renders as a visible missing-translation marker
//! instead of failing.

use crate::i18n::CatalogMetrics;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

/// Per-language translation entries, keyed by translation key.
type Entries = HashMap<&'static str, &'static str>;

/// Global translation catalog singleton.
pub struct TranslationCatalog {
    languages: HashMap<&'static str, Entries>,
}

/// Global catalog instance (initialized lazily)
static CATALOG: OnceLock<TranslationCatalog> = OnceLock::new();

impl TranslationCatalog {
    /// Get the global translation catalog instance.
    pub fn global() -> &'static TranslationCatalog {
        CATALOG.get_or_init(|| TranslationCatalog {
            languages: default_entries(),
        })
    }

    /// Build a catalog from explicit entries, bypassing the shipped data.
    /// Production code always goes through `global()`; this exists so the
    /// validator's error paths can be exercised against divergent tables.
    #[cfg(test)]
    pub(crate) fn from_entries(languages: HashMap<&'static str, Entries>) -> TranslationCatalog {
        TranslationCatalog { languages }
    }

    /// Look up the localized string for `(lang, key)`.
    ///
    /// # Arguments
    /// * `lang` - Any language code string; not required to exist in the table
    /// * `key` - The translation key (e.g., "appTitle")
    ///
    /// # Returns
    /// The stored localized string, or `key` itself when either the language
    /// or the key is unknown. Never fails.
    pub fn lookup<'k>(&self, lang: &str, key: &'k str) -> &'k str {
        let metrics = CatalogMetrics::global();

        match self.languages.get(lang) {
            Some(entries) => match entries.get(key) {
                Some(&text) => {
                    metrics.record_hit();
                    text
                }
                None => {
                    metrics.record_key_fallback();
                    warn!(lang, key, "missing translation, rendering raw key");
                    key
                }
            },
            None => {
                metrics.record_unknown_language();
                warn!(lang, key, "unknown language, rendering raw key");
                key
            }
        }
    }

    /// All language codes present in the catalog.
    pub fn language_codes(&self) -> Vec<&'static str> {
        self.languages.keys().copied().collect()
    }

    /// The key set defined for a language, if the language is present.
    pub fn keys_for(&self, lang: &str) -> Option<Vec<&'static str>> {
        self.languages
            .get(lang)
            .map(|entries| entries.keys().copied().collect())
    }

    /// Whether a language is present in the catalog.
    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Total number of localized strings across all languages.
    pub fn entry_count(&self) -> usize {
        self.languages.values().map(HashMap::len).sum()
    }
}

/// The CodeMedics UI strings for every supported language.
///
/// Keys match the `data-i18n` attributes used in the page markup.
fn default_entries() -> HashMap<&'static str, Entries> {
    let mut languages = HashMap::new();

    languages.insert(
        "en",
        HashMap::from([
            ("appTitle", "CodeMedics"),
            ("heroTitle", "Digital Health for Migrant Workers"),
            (
                "heroDesc",
                "One record. Six languages. Real-time sync. Disease prevention.",
            ),
        ]),
    );

    languages.insert(
        "ml",
        HashMap::from([
            ("appTitle", "കോഡ്മെഡിക്സ്"),
            (
                "heroTitle",
                "കേരളത്തിലെ കുടിയേറ്റ തൊഴിലാളികൾക്കായുള്ള ഡിജിറ്റൽ ആരോഗ്യം",
            ),
            ("heroDesc", "ഒരു റെക്കോർഡ്. ആറ് ഭാഷകൾ. യഥാർത്ഥ സമയ സമന്വയം."),
        ]),
    );

    languages.insert(
        "hi",
        HashMap::from([
            ("appTitle", "कोडमेडिक्स"),
            ("heroTitle", "प्रवासी श्रमिकों के लिए डिजिटल स्वास्थ्य"),
            ("heroDesc", "एक रिकॉर्ड। छह भाषाएँ। वास्तविक समय समन्वय।"),
        ]),
    );

    languages.insert(
        "ta",
        HashMap::from([
            ("appTitle", "கோட்மெடிக்ஸ்"),
            (
                "heroTitle",
                "குடியேறிய தொழிலாளர்களுக்கான டிஜிட்டல் சுகாதாரம்",
            ),
            (
                "heroDesc",
                "ஒரு பதிவு. ஆறு மொழிகள். உண்மையான நேர ஒருங்கிணைப்பு.",
            ),
        ]),
    );

    languages.insert(
        "te",
        HashMap::from([
            ("appTitle", "కోడ్మెడిక్స్"),
            ("heroTitle", "వలస కార్మికులకు డిజిటల్ హెల్త్"),
            ("heroDesc", "ఒక రికార్డు. ఆరు భాషలు. రియల్-టైమ్ సింక్."),
        ]),
    );

    languages.insert(
        "ur",
        HashMap::from([
            ("appTitle", "کوڈمیڈکس"),
            ("heroTitle", "مہاجرین کے لیے ڈیجیٹل ہیلتھ"),
            ("heroDesc", "ایک ریکارڈ۔ چھ زبانیں۔ حقیقی وقت کی ہم آہنگی۔"),
        ]),
    );

    languages.insert(
        "bn",
        HashMap::from([
            ("appTitle", "কোডমেডিক্স"),
            ("heroTitle", "প্রবাসী শ্রমিকদের জন্য ডিজিটাল স্বাস্থ্য"),
            ("heroDesc", "একটি রেকর্ড। ছয়টি ভাষা। রিয়েল-টাইম সিঙ্ক।"),
        ]),
    );

    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_known_language_and_key() {
        let catalog = TranslationCatalog::global();
        assert_eq!(catalog.lookup("en", "appTitle"), "CodeMedics");
        assert_eq!(catalog.lookup("hi", "appTitle"), "कोडमेडिक्स");
    }

    #[test]
    fn test_lookup_every_language_has_hero_strings() {
        let catalog = TranslationCatalog::global();
        for lang in ["en", "ml", "hi", "ta", "te", "ur", "bn"] {
            assert_ne!(catalog.lookup(lang, "heroTitle"), "heroTitle");
            assert_ne!(catalog.lookup(lang, "heroDesc"), "heroDesc");
        }
    }

    #[test]
    fn test_lookup_unknown_key_falls_back_to_key() {
        let catalog = TranslationCatalog::global();
        assert_eq!(catalog.lookup("en", "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_lookup_unknown_language_falls_back_to_key() {
        let catalog = TranslationCatalog::global();
        assert_eq!(catalog.lookup("xx", "heroTitle"), "heroTitle");
    }

    #[test]
    fn test_lookup_unknown_language_and_key() {
        let catalog = TranslationCatalog::global();
        assert_eq!(catalog.lookup("zz", "whatever"), "whatever");
    }

    #[test]
    fn test_lookup_empty_inputs() {
        let catalog = TranslationCatalog::global();
        assert_eq!(catalog.lookup("", "appTitle"), "appTitle");
        assert_eq!(catalog.lookup("en", ""), "");
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_global_returns_singleton() {
        let catalog1 = TranslationCatalog::global();
        let catalog2 = TranslationCatalog::global();
        assert!(std::ptr::eq(catalog1, catalog2));
    }

    #[test]
    fn test_language_codes_cover_all_seven() {
        let catalog = TranslationCatalog::global();
        let codes = catalog.language_codes();
        assert_eq!(codes.len(), 7);
        for code in ["en", "ml", "hi", "ta", "te", "ur", "bn"] {
            assert!(codes.contains(&code));
        }
    }

    #[test]
    fn test_keys_for_known_language() {
        let catalog = TranslationCatalog::global();
        let mut keys = catalog.keys_for("en").expect("en should exist");
        keys.sort_unstable();
        assert_eq!(keys, vec!["appTitle", "heroDesc", "heroTitle"]);
    }

    #[test]
    fn test_keys_for_unknown_language() {
        let catalog = TranslationCatalog::global();
        assert!(catalog.keys_for("xx").is_none());
    }

    #[test]
    fn test_has_language() {
        let catalog = TranslationCatalog::global();
        assert!(catalog.has_language("bn"));
        assert!(!catalog.has_language("fr"));
    }

    #[test]
    fn test_entry_count() {
        let catalog = TranslationCatalog::global();
        // 7 languages x 3 keys
        assert_eq!(catalog.entry_count(), 21);
    }
}
