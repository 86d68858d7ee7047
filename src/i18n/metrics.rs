//! Catalog lookup metrics and observability.
//!
//! Tracks how often lookups hit the catalog versus falling back to the raw
//! key, so missing translations surface somewhere besides the rendered page.
//! Recording is purely passive; nothing in this module can fail.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for translation catalog lookups.
pub struct CatalogMetrics {
    /// Lookups that found a stored translation
    hits: AtomicUsize,

    /// Lookups where the language existed but the key did not
    key_fallbacks: AtomicUsize,

    /// Lookups against a language absent from the catalog
    unknown_language_lookups: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<CatalogMetrics> = OnceLock::new();

impl CatalogMetrics {
    /// Create a fresh, zeroed set of counters.
    pub const fn new() -> CatalogMetrics {
        CatalogMetrics {
            hits: AtomicUsize::new(0),
            key_fallbacks: AtomicUsize::new(0),
            unknown_language_lookups: AtomicUsize::new(0),
        }
    }

    /// Get the global catalog metrics instance.
    pub fn global() -> &'static CatalogMetrics {
        METRICS.get_or_init(CatalogMetrics::new)
    }

    /// Record a lookup that returned a stored translation.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the raw key (missing key).
    pub fn record_key_fallback(&self) {
        self.key_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup against a language the catalog doesn't have.
    pub fn record_unknown_language(&self) {
        self.unknown_language_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Current hit count.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Current missing-key fallback count.
    pub fn key_fallbacks(&self) -> usize {
        self.key_fallbacks.load(Ordering::Relaxed)
    }

    /// Current unknown-language lookup count.
    pub fn unknown_language_lookups(&self) -> usize {
        self.unknown_language_lookups.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let key_fallbacks = self.key_fallbacks();
        let unknown_language_lookups = self.unknown_language_lookups();

        let total = hits + key_fallbacks + unknown_language_lookups;
        let fallback_rate = if total > 0 {
            ((key_fallbacks + unknown_language_lookups) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            key_fallbacks,
            unknown_language_lookups,
            fallback_rate,
        }
    }
}

impl Default for CatalogMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of catalog lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Lookups that returned a stored translation
    pub hits: usize,

    /// Lookups that fell back to the raw key (missing key)
    pub key_fallbacks: usize,

    /// Lookups against an unknown language
    pub unknown_language_lookups: usize,

    /// Share of lookups that fell back, as a percentage (0-100)
    pub fallback_rate: f64,
}
