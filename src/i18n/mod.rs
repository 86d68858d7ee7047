//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized architecture for the languages the
//! CodeMedics UI renders. All language metadata, localized strings, and
//! catalog infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `catalog`: The static Language Code -> key -> string translation table
//! - `validator`: Catalog key-set consistency validation
//! - `metrics`: Lookup observability
//!
//! # Example
//!
//! ```rust,ignore
//! use codemedics_i18n::i18n::{Language, TranslationCatalog};
//!
//! // Get the default language (English)
//! let default = Language::default_language();
//!
//! // Look up a localized string; unknown keys fall back to the key itself
//! let title = TranslationCatalog::global().lookup("hi", "appTitle");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod validator;

pub use catalog::TranslationCatalog;
pub use language::Language;
pub use metrics::{CatalogMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
