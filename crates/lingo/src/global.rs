//! Process-wide resolver for the `global-locale` feature.
//!
//! Lets UI code call [`resolve`] and [`set_locale`] without threading a
//! `&Resolver` through every call site. The global starts with an empty
//! catalog at the default locale; install the real catalog at startup.

use std::sync::{LazyLock, PoisonError, RwLock};

use crate::{Catalog, Resolver, Values};

static GLOBAL_RESOLVER: LazyLock<RwLock<Resolver>> =
    LazyLock::new(|| RwLock::new(Resolver::default()));

/// Provides read access to the global resolver.
pub fn with_resolver<T>(f: impl FnOnce(&Resolver) -> T) -> T {
    let guard = GLOBAL_RESOLVER
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Replace the global catalog, keeping the active locale.
pub fn install_catalog(catalog: Catalog) {
    let mut guard = GLOBAL_RESOLVER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let locale = guard.active_locale().clone();
    *guard = Resolver::builder().catalog(catalog).locale(locale).build();
}

/// Sets the active locale of the global resolver.
pub fn set_locale(locale: impl Into<String>) {
    with_resolver(|resolver| resolver.set_locale(locale));
}

/// Returns the active locale of the global resolver.
pub fn locale() -> String {
    with_resolver(Resolver::locale)
}

/// Resolves `key` with the global resolver.
pub fn resolve(key: &str, values: Option<&Values>) -> String {
    with_resolver(|resolver| resolver.resolve(key, values))
}
