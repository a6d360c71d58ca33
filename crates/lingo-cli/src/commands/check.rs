//! Implementation of the `lingo check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use lingo::Bundle;
use miette::Report;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::BundleDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Bundle files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    messages: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Locale name for a bundle file: its file stem.
fn locale_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check one file, printing diagnostics unless producing JSON.
fn check_file(path: &Path, json: bool) -> FileReport {
    let mut report = FileReport {
        file: path.display().to_string(),
        messages: 0,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let message = format!("cannot read {}: {}", path.display(), e);
            if !json {
                eprintln!("{} {}", "error:".red().bold(), message);
            }
            report.errors.push(message);
            return report;
        }
    };

    let bundle = match Bundle::from_json_str(&content) {
        Ok(bundle) => bundle,
        Err(e) => {
            let diagnostic = BundleDiagnostic::from_load_error(path, &content, &e);
            report.errors.push(diagnostic.to_string());
            if !json {
                eprintln!("{:?}", Report::new(diagnostic));
            }
            return report;
        }
    };

    report.messages = bundle.len();
    for warning in bundle.lint(&locale_of(path)) {
        if !json {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
        report.warnings.push(warning.to_string());
    }
    report
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| check_file(path, args.json))
        .collect();

    let error_count: usize = reports.iter().map(|r| r.errors.len()).sum();
    let warning_count: usize = reports.iter().map(|r| r.warnings.len()).sum();

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("Failed to serialize report: {}", e))?;
        println!("{}", json);
    } else {
        for report in &reports {
            if report.errors.is_empty() {
                println!(
                    "{} {} ({} messages)",
                    "ok".green(),
                    report.file,
                    report.messages
                );
            }
        }
        println!(
            "\n{} file(s) checked: {} error(s), {} warning(s)",
            reports.len(),
            error_count,
            warning_count
        );
    }

    if error_count > 0 || (args.strict && warning_count > 0) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
