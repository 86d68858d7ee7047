//! Page translator: synchronizes document text and font styling with a
//! selected language.
//!
//! The DOM is behind the `Document` capability trait, so the same engine
//! drives a real page binding layer or the in-memory document used in tests.
//! All operations are synchronous, total, and idempotent: unknown languages
//! and keys degrade to visible raw keys, a missing selector control only
//! skips the interactive re-selection wiring, and nothing here returns an
//! error.

use crate::i18n::{Language, LanguageRegistry, TranslationCatalog};
use crate::preferences::PreferenceStore;
use std::collections::BTreeSet;
use std::collections::HashMap;
use tracing::{debug, info};

/// One translatable element: a handle to the element plus its translation key
/// (the page markup carries these as `data-i18n` attributes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBinding {
    /// Handle identifying the element within the document
    pub element: String,

    /// Translation key looked up in the catalog
    pub key: String,
}

/// Capability trait over the document the translator rewrites.
pub trait Document {
    /// Enumerate every element annotated with a translation key.
    ///
    /// The translator collects these once and reuses the list on every
    /// subsequent application instead of re-scanning the document.
    fn translation_bindings(&self) -> Vec<TextBinding>;

    /// Set the text content of an element.
    fn set_text(&mut self, element: &str, text: &str);

    /// Add a class to the document body.
    fn add_body_class(&mut self, class: &str);

    /// Remove a class from the document body (no-op if absent).
    fn remove_body_class(&mut self, class: &str);

    /// Current value of the language selector control, or `None` when the
    /// page has no selector.
    fn selector_value(&self) -> Option<String>;

    /// Set the displayed value of the selector control (no-op when absent).
    fn set_selector_value(&mut self, code: &str);
}

/// The page translation engine.
///
/// Owns the persisted preference (through the injected store) and the active
/// language state: `Uninitialized` until `initialize`, then `Applied(lang)`
/// with a self-loop on each re-selection.
pub struct PageTranslator<S: PreferenceStore> {
    store: S,
    default_language: Option<String>,
    bindings: Option<Vec<TextBinding>>,
    active: Option<String>,
    initialized: bool,
}

impl<S: PreferenceStore> PageTranslator<S> {
    /// Create a translator over a preference store. No document access
    /// happens until `initialize` or `apply_language` is called.
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_language: None,
            bindings: None,
            active: None,
            initialized: false,
        }
    }

    /// Override the language applied when no preference has been persisted
    /// (the registry's default language when not set). This is where
    /// `Config::default_language` plugs in.
    pub fn with_default_language(mut self, code: &str) -> Self {
        self.default_language = Some(code.to_string());
        self
    }

    /// The currently applied language code, if any.
    pub fn active_language(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Read-only access to the preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a language to the document.
    ///
    /// Rewrites every bound element's text to the catalog string for
    /// `(lang, key)` and swaps the body font class: all registry font classes
    /// are removed, then the single class for `lang` is added (the default
    /// class when `lang` is unknown). Safe to call repeatedly with any
    /// string; never fails.
    pub fn apply_language(&mut self, doc: &mut dyn Document, lang: &str) {
        let catalog = TranslationCatalog::global();
        let bindings = self
            .bindings
            .get_or_insert_with(|| doc.translation_bindings());

        for binding in bindings.iter() {
            let text = catalog.lookup(lang, &binding.key);
            doc.set_text(&binding.element, text);
        }

        let registry = LanguageRegistry::get();
        for config in registry.list_all() {
            doc.remove_body_class(config.font_class);
        }
        doc.add_body_class(registry.font_class_for(lang));

        debug!(lang, bindings = bindings.len(), "applied language to document");
        self.active = Some(lang.to_string());
    }

    /// Initialize the translator against a document.
    ///
    /// Reads the persisted preference (falling back to the default language
    /// when absent), applies it, and syncs the selector control's displayed
    /// value when the page has one. Subsequent calls are no-ops; the page
    /// lifecycle triggers this once at DOM-ready.
    pub fn initialize(&mut self, doc: &mut dyn Document) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let lang = self.store.get().unwrap_or_else(|| {
            self.default_language
                .clone()
                .unwrap_or_else(|| Language::default_language().code().to_string())
        });
        info!(lang, "initializing page translation");

        self.apply_language(doc, &lang);

        if doc.selector_value().is_some() {
            doc.set_selector_value(&lang);
        }
    }

    /// Handle a user selection change: persist the new language, then apply
    /// it, synchronously within the same call.
    pub fn select_language(&mut self, doc: &mut dyn Document, lang: &str) {
        self.store.set(lang);
        self.apply_language(doc, lang);
    }
}

/// In-memory document for tests and headless embedding.
///
/// Models exactly what the translator touches: element texts, the body class
/// list, and an optional selector control.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    bindings: Vec<TextBinding>,
    texts: HashMap<String, String>,
    body_classes: BTreeSet<String>,
    selector: Option<String>,
}

impl MemoryDocument {
    /// Create an empty document with no selector control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element annotated with a translation key.
    pub fn add_translatable(&mut self, element: &str, key: &str) {
        self.bindings.push(TextBinding {
            element: element.to_string(),
            key: key.to_string(),
        });
    }

    /// Add a plain element with fixed text and no translation key.
    pub fn add_static_text(&mut self, element: &str, text: &str) {
        self.texts.insert(element.to_string(), text.to_string());
    }

    /// Attach a language selector control showing the given value.
    pub fn with_selector(mut self, value: &str) -> Self {
        self.selector = Some(value.to_string());
        self
    }

    /// Current text of an element, if it has any.
    pub fn text_of(&self, element: &str) -> Option<&str> {
        self.texts.get(element).map(String::as_str)
    }

    /// The body's current class list.
    pub fn body_classes(&self) -> &BTreeSet<String> {
        &self.body_classes
    }
}

impl Document for MemoryDocument {
    fn translation_bindings(&self) -> Vec<TextBinding> {
        self.bindings.clone()
    }

    fn set_text(&mut self, element: &str, text: &str) {
        self.texts.insert(element.to_string(), text.to_string());
    }

    fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }

    fn remove_body_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }

    fn selector_value(&self) -> Option<String> {
        self.selector.clone()
    }

    fn set_selector_value(&mut self, code: &str) {
        if self.selector.is_some() {
            self.selector = Some(code.to_string());
        }
    }
}
