//! Read-only checks over loaded catalogs.

use std::collections::BTreeSet;

use crate::catalog::{Bundle, Catalog, LoadWarning, compute_suggestions};
use crate::template::placeholders;

impl Bundle {
    /// Warn about every leaf that is not a string message, then every leaf no
    /// dotted key can reach.
    pub fn lint(&self, locale: &str) -> Vec<LoadWarning> {
        let unsupported = self
            .unsupported_keys()
            .into_iter()
            .map(|key| LoadWarning::UnsupportedLeaf {
                locale: locale.to_string(),
                key,
            });
        let unreachable = self
            .unreachable_keys()
            .into_iter()
            .map(|key| LoadWarning::UnreachableKey {
                locale: locale.to_string(),
                key,
            });
        unsupported.chain(unreachable).collect()
    }
}

impl Catalog {
    /// Validate a target locale against a source locale.
    ///
    /// Reports, in key order:
    /// - Non-string and unreachable leaves in the target
    /// - Source messages the target lacks
    /// - Target messages the source does not define
    /// - Messages whose placeholder names differ from the source
    ///
    /// Returns an empty vector if either locale has no bundle.
    ///
    /// # Example
    ///
    /// ```
    /// use lingo::{Catalog, LoadWarning};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.load_str("pt", r#"{ "ui": { "salvar": "Salvar", "sair": "Sair" } }"#).unwrap();
    /// catalog.load_str("en", r#"{ "ui": { "salvar": "Save" } }"#).unwrap();
    ///
    /// let warnings = catalog.validate("pt", "en");
    /// assert_eq!(
    ///     warnings,
    ///     vec![LoadWarning::MissingKey { locale: "en".into(), key: "ui.sair".into() }]
    /// );
    /// ```
    pub fn validate(&self, source_locale: &str, target_locale: &str) -> Vec<LoadWarning> {
        let (Some(source), Some(target)) =
            (self.bundle(source_locale), self.bundle(target_locale))
        else {
            return Vec::new();
        };

        let mut warnings = target.lint(target_locale);

        let source_keys: BTreeSet<String> = source.keys().into_iter().collect();
        let target_keys: BTreeSet<String> = target.keys().into_iter().collect();

        for key in source_keys.difference(&target_keys) {
            warnings.push(LoadWarning::MissingKey {
                locale: target_locale.to_string(),
                key: key.clone(),
            });
        }

        for key in target_keys.difference(&source_keys) {
            warnings.push(LoadWarning::UnknownKey {
                locale: target_locale.to_string(),
                key: key.clone(),
            });
        }

        for key in source_keys.intersection(&target_keys) {
            let (Some(source_text), Some(target_text)) = (source.message(key), target.message(key))
            else {
                continue;
            };
            let expected = sorted_placeholders(source_text);
            let found = sorted_placeholders(target_text);
            if expected != found {
                warnings.push(LoadWarning::PlaceholderMismatch {
                    locale: target_locale.to_string(),
                    key: key.clone(),
                    expected,
                    found,
                });
            }
        }

        warnings
    }

    /// Keys in `locale` similar to `key`, for "did you mean" hints after a
    /// miss.
    pub fn suggest(&self, locale: &str, key: &str) -> Vec<String> {
        self.bundle(locale)
            .map(|bundle| compute_suggestions(key, &bundle.keys()))
            .unwrap_or_default()
    }
}

fn sorted_placeholders(template: &str) -> Vec<String> {
    let names: BTreeSet<&str> = placeholders(template).into_iter().collect();
    names.into_iter().map(str::to_string).collect()
}
