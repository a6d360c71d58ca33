//! Key resolution against the active locale.

use std::sync::Arc;

use bon::Builder;
use tracing::debug;

use crate::catalog::Catalog;
use crate::locale::ActiveLocale;
use crate::template::interpolate;
use crate::types::Values;

/// Resolves message keys into display strings for the active locale.
///
/// Resolution never fails. A missing bundle, a path that does not end on a
/// string leaf, or a key naming a whole group all fall back to the key
/// itself, so missing translations stay visible without breaking the UI.
///
/// # Example
///
/// ```
/// use lingo::{Catalog, Resolver, values};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .load_str("pt", r#"{ "ui": { "apontamento": "Apontamento - {{window}}" } }"#)
///     .unwrap();
///
/// let resolver = Resolver::builder().catalog(catalog).build();
/// assert_eq!(resolver.locale(), "pt");
/// assert_eq!(
///     resolver.resolve("ui.apontamento", Some(&values! { "window" => "09:00" })),
///     "Apontamento - 09:00"
/// );
/// assert_eq!(resolver.resolve("ui.unknown", None), "ui.unknown");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Resolver {
    /// Locale bundles, shared and read-only.
    #[builder(default, into)]
    catalog: Arc<Catalog>,

    /// Active-locale cell. Defaults to a fresh cell holding the default
    /// locale; pass a shared cell to switch several resolvers together.
    #[builder(default)]
    locale: ActiveLocale,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::builder().build()
    }
}

impl Resolver {
    /// Create a resolver over `catalog` starting at the default locale.
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Resolver::builder().catalog(catalog).build()
    }

    /// Create a resolver over `catalog` starting at `locale`.
    pub fn with_locale(catalog: impl Into<Arc<Catalog>>, locale: impl Into<String>) -> Self {
        Resolver::builder()
            .catalog(catalog)
            .locale(ActiveLocale::new(locale))
            .build()
    }

    // =========================================================================
    // Locale State
    // =========================================================================

    /// The active locale identifier.
    pub fn locale(&self) -> String {
        self.locale.get()
    }

    /// Switch the active locale.
    ///
    /// The identifier is not checked against the catalog; a locale without a
    /// bundle makes every key resolve to itself.
    pub fn set_locale(&self, locale: impl Into<String>) {
        self.locale.set(locale);
    }

    /// The shared active-locale cell.
    pub fn active_locale(&self) -> &ActiveLocale {
        &self.locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// The raw template for `key` in the active locale, without fallback or
    /// interpolation.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.locale
            .read(|locale| self.catalog.bundle(locale))
            .and_then(|bundle| bundle.message(key))
    }

    /// Whether `key` names a message in the active locale.
    pub fn contains(&self, key: &str) -> bool {
        self.message(key).is_some()
    }

    /// Resolve `key` in the active locale and interpolate `values`.
    ///
    /// On a miss the key itself is used as the template, so placeholders in
    /// a key are still substituted.
    pub fn resolve(&self, key: &str, values: Option<&Values>) -> String {
        let locale = self.locale.get();
        let message = self
            .catalog
            .bundle(&locale)
            .and_then(|bundle| bundle.message(key));

        let template = match message {
            Some(template) => template,
            None => {
                debug!(key, locale = %locale, "message lookup missed, falling back to key");
                key
            }
        };
        interpolate(template, values)
    }
}
