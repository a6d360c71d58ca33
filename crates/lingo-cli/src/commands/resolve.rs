//! Implementation of the `lingo resolve` command.

use std::path::PathBuf;

use lingo::{Catalog, Resolver, Value, Values, DEFAULT_LOCALE};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Message key to resolve (e.g., ui.salvar_apontamento)
    pub key: String,

    /// Catalog directory of <locale>.json files, or a single bundle file
    #[arg(long, required = true)]
    pub catalog: PathBuf,

    /// Active locale
    #[arg(long, env = "LINGO_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Placeholder values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Exit with a non-zero code if the key is not found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
pub struct ResolveResult {
    pub key: String,
    pub locale: String,
    pub result: String,
    pub found: bool,
    pub suggestions: Vec<String>,
}

/// Parse a name=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Turn a `-p` value into a substitution value.
///
/// Only text that prints back unchanged as an integer becomes a number, so
/// `007` or `+5` are substituted exactly as typed.
fn param_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) if n.to_string() == raw => Value::from(n),
        _ => Value::from(raw),
    }
}

/// Load the catalog from a directory or a single file for `locale`.
fn load_catalog(args: &ResolveArgs) -> miette::Result<Catalog> {
    let mut catalog = Catalog::new();
    if args.catalog.is_dir() {
        catalog
            .load_dir(&args.catalog)
            .map_err(|e| miette::miette!("Failed to load catalog: {}", e))?;
    } else {
        catalog
            .load_file(&args.locale, &args.catalog)
            .map_err(|e| miette::miette!("Failed to load bundle: {}", e))?;
    }
    debug!(
        catalog = %args.catalog.display(),
        locales = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let catalog = load_catalog(&args)?;
    let resolver = Resolver::with_locale(catalog, &args.locale);

    let values: Values = args
        .params
        .iter()
        .map(|(k, v)| (k.clone(), param_value(v)))
        .collect();
    let values = (!values.is_empty()).then_some(values);

    let result = resolver.resolve(&args.key, values.as_ref());
    let found = resolver.contains(&args.key);
    let suggestions = if found {
        Vec::new()
    } else {
        resolver.catalog().suggest(&args.locale, &args.key)
    };

    if args.json {
        let output = ResolveResult {
            key: args.key.clone(),
            locale: args.locale.clone(),
            result,
            found,
            suggestions,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("Failed to serialize result: {}", e))?;
        println!("{}", json);
    } else {
        println!("{}", result);
        if !found {
            eprintln!(
                "{} '{}' not found in locale '{}'",
                "warning:".yellow().bold(),
                args.key,
                args.locale
            );
            if !suggestions.is_empty() {
                eprintln!("  did you mean: {}", suggestions.join(", ").cyan());
            }
        }
    }

    if args.strict && !found {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
