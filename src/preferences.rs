//! Persisted language preference.
//!
//! The UI keeps exactly one value across sessions: the last-selected language
//! code. The storage backend is a capability trait so the page translator can
//! be driven by browser storage, a file, or an in-memory store in tests.
//!
//! Nothing in this module is allowed to fail: an unreadable backend behaves
//! as "no preference saved" and write errors are logged and absorbed, per the
//! degrade-gracefully contract of the whole engine.

use std::path::PathBuf;
use tracing::warn;

/// Storage key under which the preference is kept: the localStorage name the
/// web page used, and the default backing file name for
/// [`FilePreferenceStore`] (see `Config::from_env`).
pub const PREFERENCE_KEY: &str = "userLang";

/// Capability for persisting the single language preference.
pub trait PreferenceStore {
    /// Read the saved language code, if any.
    fn get(&self) -> Option<String>;

    /// Overwrite the saved language code.
    fn set(&mut self, code: &str);
}

/// In-memory preference store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store (no preference saved).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a preference.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, code: &str) {
        self.value = Some(code.to_string());
    }
}

/// File-backed preference store: one plain string in one file.
///
/// The file holds the language code with no schema or versioning, mirroring
/// the single localStorage entry it stands in for.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path. The file is only
    /// created on the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let code = contents.trim();
                if code.is_empty() {
                    None
                } else {
                    Some(code.to_string())
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read language preference, treating as unset");
                None
            }
        }
    }

    fn set(&mut self, code: &str) {
        if let Err(err) = std::fs::write(&self.path, code) {
            warn!(path = %self.path.display(), %err, "failed to persist language preference");
        }
    }
}
