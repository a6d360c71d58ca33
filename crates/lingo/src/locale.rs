//! The active-locale state cell.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

/// Locale active when nothing else has been selected.
pub const DEFAULT_LOCALE: &str = "pt";

/// A shared, mutable slot holding the active locale identifier.
///
/// Clones share the same slot, so a handle held by UI code switches the
/// locale for every resolver built on it. Writes are last-writer-wins and
/// readers take a snapshot at call time.
///
/// # Example
///
/// ```
/// use lingo::ActiveLocale;
///
/// let locale = ActiveLocale::default();
/// let handle = locale.clone();
///
/// handle.set("en");
/// assert_eq!(locale.get(), "en");
/// ```
#[derive(Debug, Clone)]
pub struct ActiveLocale {
    slot: Arc<RwLock<String>>,
}

impl Default for ActiveLocale {
    fn default() -> Self {
        ActiveLocale::new(DEFAULT_LOCALE)
    }
}

impl ActiveLocale {
    /// Create a cell holding `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        ActiveLocale {
            slot: Arc::new(RwLock::new(locale.into())),
        }
    }

    /// The current locale identifier.
    pub fn get(&self) -> String {
        self.read(str::to_string)
    }

    /// Run `f` against the current locale without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&str) -> T) -> T {
        let guard = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Replace the current locale. Any identifier is accepted.
    pub fn set(&self, locale: impl Into<String>) {
        let locale = locale.into();
        debug!(locale = %locale, "switching active locale");
        let mut guard = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = locale;
    }
}
