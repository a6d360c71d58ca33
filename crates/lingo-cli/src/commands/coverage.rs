//! Coverage command implementation.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use lingo::{Bundle, Catalog, LoadError, LoadWarning};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_coverage_table, LocaleCoverage};
use crate::output::BundleDiagnostic;

/// Locale name under which the source bundle is loaded.
const SOURCE_LOCALE: &str = "<source>";

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale bundle (e.g., pt.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    mismatched: Vec<String>,
}

/// Load `path` into `catalog` as `locale`, rendering parse errors with source
/// context.
fn load_bundle(catalog: &mut Catalog, locale: &str, path: &Path) -> Result<()> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read bundle {:?}: {}", path, e))?;

    match catalog.load_str(locale, &content) {
        Ok(_) => Ok(()),
        Err(e @ (LoadError::Parse { .. } | LoadError::NotAnObject { .. })) => {
            Err(BundleDiagnostic::from_load_error(path, &content, &e).into())
        }
        Err(e) => Err(miette!("Failed to load bundle {:?}: {}", path, e)),
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let mut catalog = Catalog::new();
    load_bundle(&mut catalog, SOURCE_LOCALE, &args.source)?;
    let source_count = catalog.bundle(SOURCE_LOCALE).map_or(0, Bundle::len);

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    // Collect coverage data for each locale
    let mut coverage_data: Vec<LocaleCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.json", lang));

        if lang_file.exists() {
            load_bundle(&mut catalog, lang, &lang_file)?;
        } else {
            // File doesn't exist - every message is missing
            catalog.insert(lang.clone(), Bundle::new());
        }

        let mut missing = Vec::new();
        let mut mismatched = Vec::new();
        for warning in catalog.validate(SOURCE_LOCALE, lang) {
            match warning {
                LoadWarning::MissingKey { key, .. } => missing.push(key),
                LoadWarning::PlaceholderMismatch { key, .. } => mismatched.push(key),
                LoadWarning::UnsupportedLeaf { .. }
                | LoadWarning::UnreachableKey { .. }
                | LoadWarning::UnknownKey { .. } => {}
            }
        }

        coverage_data.push(LocaleCoverage {
            locale: lang.clone(),
            translated: source_count - missing.len(),
            missing,
            mismatched,
        });
    }

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                mismatched: c.mismatched.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        // Print missing keys per locale
        for locale_coverage in &coverage_data {
            if !locale_coverage.missing.is_empty() {
                println!("\nMissing in {}:", locale_coverage.locale);
                for key in &locale_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
