//! Loading bundles from JSON text, files, and directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::catalog::{Bundle, Catalog, LoadError};
use crate::types::MessageNode;

impl Bundle {
    /// Parse a bundle from JSON text.
    ///
    /// The root must be an object. Leaves that are not strings are kept and
    /// miss at lookup time instead of failing the load.
    ///
    /// # Example
    ///
    /// ```
    /// use lingo::Bundle;
    ///
    /// let bundle = Bundle::from_json_str(r#"{ "ui": { "ok": "OK", "max": 3 } }"#).unwrap();
    /// assert_eq!(bundle.message("ui.ok"), Some("OK"));
    /// assert_eq!(bundle.message("ui.max"), None);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Bundle, LoadError> {
        parse_bundle(json, Path::new("<string>"))
    }
}

impl Catalog {
    /// Load a bundle for `locale` from JSON text.
    ///
    /// Loading the same locale twice **replaces** the previous bundle.
    /// Returns the number of string messages loaded.
    pub fn load_str(&mut self, locale: &str, json: &str) -> Result<usize, LoadError> {
        let path = PathBuf::from(format!("<{locale}>"));
        let bundle = parse_bundle(json, &path)?;
        Ok(self.install(locale, bundle))
    }

    /// Load a bundle for `locale` from a JSON file.
    ///
    /// ```ignore
    /// catalog.load_file("pt", "assets/i18n/pt.json")?;
    /// ```
    pub fn load_file(
        &mut self,
        locale: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let bundle = parse_bundle(&content, path)?;
        for key in bundle.unsupported_keys() {
            warn!(locale, key = %key, path = %path.display(), "bundle leaf is not a string message");
        }
        for key in bundle.unreachable_keys() {
            warn!(locale, key = %key, path = %path.display(), "bundle member name contains '.'");
        }
        Ok(self.install(locale, bundle))
    }

    /// Load every `*.json` file in `dir`, using each file stem as the locale.
    ///
    /// Files are loaded in name order. Returns the loaded locales.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
        let dir = dir.as_ref();
        let io_error = |source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();

        let mut locales = Vec::with_capacity(files.len());
        for path in files {
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let locale = locale.to_string();
            self.load_file(&locale, &path)?;
            locales.push(locale);
        }
        Ok(locales)
    }

    fn install(&mut self, locale: &str, bundle: Bundle) -> usize {
        let count = bundle.len();
        debug!(locale, messages = count, "loaded locale bundle");
        self.insert(locale, bundle);
        count
    }
}

fn parse_bundle(json: &str, path: &Path) -> Result<Bundle, LoadError> {
    let root: MessageNode = serde_json::from_str(json).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: describe(&e),
    })?;
    if !root.is_group() {
        return Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    Ok(Bundle::from_root(root))
}

/// The serde_json message without its trailing " at line X column Y".
fn describe(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(pos) => message[..pos].to_string(),
        None => message,
    }
}
