//! Locale catalogs: the message data the resolver reads.
//!
//! A [`Catalog`] maps locale identifiers to [`Bundle`]s. Catalogs are built
//! once, either in code or by loading JSON, and are read-only afterwards.

mod audit;
mod bundle;
mod error;
mod loader;

use std::collections::BTreeMap;

pub use bundle::Bundle;
pub use error::{LoadError, LoadWarning, compute_suggestions};

/// Mapping from locale identifier to that locale's bundle.
///
/// # Example
///
/// ```
/// use lingo::{Bundle, Catalog};
///
/// let mut pt = Bundle::new();
/// pt.insert("ui.salvar", "Salvar");
///
/// let catalog = Catalog::new().with_bundle("pt", pt);
/// assert_eq!(catalog.bundle("pt").and_then(|b| b.message("ui.salvar")), Some("Salvar"));
/// assert!(catalog.bundle("en").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    bundles: BTreeMap<String, Bundle>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle, returning the catalog for chaining.
    pub fn with_bundle(mut self, locale: impl Into<String>, bundle: Bundle) -> Self {
        self.insert(locale, bundle);
        self
    }

    /// Add or replace the bundle for `locale`, returning any previous bundle.
    pub fn insert(&mut self, locale: impl Into<String>, bundle: Bundle) -> Option<Bundle> {
        self.bundles.insert(locale.into(), bundle)
    }

    /// The bundle for `locale`, if one was supplied.
    pub fn bundle(&self, locale: &str) -> Option<&Bundle> {
        self.bundles.get(locale)
    }

    /// Locale identifiers with a bundle, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, Bundle)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (L, Bundle)>>(iter: I) -> Self {
        Catalog {
            bundles: iter
                .into_iter()
                .map(|(locale, bundle)| (locale.into(), bundle))
                .collect(),
        }
    }
}
