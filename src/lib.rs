//! Language catalog and page translation engine for the CodeMedics web UI.
//!
//! The crate has two halves:
//!
//! - [`i18n`]: the supported-language registry, the static translation
//!   catalog (Language Code -> key -> localized string), the key-set
//!   consistency validator, and lookup metrics.
//! - [`page`]: the translator that rewrites a document's annotated elements
//!   and swaps the body font class when the user picks a language, with the
//!   document and the persisted preference behind capability traits
//!   ([`page::Document`], [`preferences::PreferenceStore`]).
//!
//! Lookups are total by contract: an unknown language or key renders the raw
//! key as a visible missing-translation marker instead of failing.

pub mod config;
pub mod i18n;
pub mod page;
pub mod preferences;

pub use i18n::{Language, LanguageRegistry, TranslationCatalog};
pub use page::{Document, MemoryDocument, PageTranslator, TextBinding};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
