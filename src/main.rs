use anyhow::{bail, Result};
use codemedics_i18n::config::Config;
use codemedics_i18n::i18n::{CatalogValidator, LanguageRegistry, TranslationCatalog};
use codemedics_i18n::{FilePreferenceStore, PreferenceStore};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("codemedics_i18n=info".parse()?),
        )
        .init();

    info!("Starting translation catalog check");

    // Load configuration from environment
    let config = Config::from_env()?;

    let catalog = TranslationCatalog::global();
    let registry = LanguageRegistry::get();
    info!(
        languages = registry.list_enabled().len(),
        entries = catalog.entry_count(),
        default = config.default_language,
        "Loaded catalog"
    );

    // The key/language-set contract: every language must define every key
    let report = CatalogValidator::validate_global();

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for err in &report.errors {
        error!("{}", err);
    }

    if report.has_errors() {
        bail!(
            "Catalog validation failed with {} error(s)",
            report.errors.len()
        );
    }
    if config.strict && report.has_warnings() {
        bail!(
            "Catalog validation produced {} warning(s) and I18N_STRICT is set",
            report.warnings.len()
        );
    }

    // Resolve the language a page load would start in: the persisted
    // preference if one exists, else the configured default.
    let store = FilePreferenceStore::new(&config.preference_file);
    let startup_language = store
        .get()
        .unwrap_or_else(|| config.default_language.clone());
    if !registry.is_enabled(&startup_language) {
        warn!(
            lang = %startup_language,
            "persisted preference is not a supported language, pages will render raw keys"
        );
    }
    info!(
        lang = %startup_language,
        preference_file = %config.preference_file,
        "Resolved startup language"
    );

    info!("Catalog check passed");
    Ok(())
}
