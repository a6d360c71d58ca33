//! Miette diagnostic wrapper for bundle load errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use std::path::Path;

use lingo::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a bundle that failed to load.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid bundle: {message}")]
#[diagnostic(code(lingo::bundle))]
pub struct BundleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl BundleDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let (line, column, message, help) = match err {
            LoadError::Parse {
                line,
                column,
                message,
                ..
            } => (*line, *column, message.clone(), None),
            LoadError::NotAnObject { .. } => (
                1,
                1,
                "bundle root must be a JSON object".into(),
                Some("wrap messages in a top-level object, e.g. { \"ui\": { ... } }".into()),
            ),
            LoadError::Io { source, .. } => (1, 1, source.to_string(), None),
        };

        let offset = byte_offset(content, line, column);

        BundleDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}

/// Byte offset of a 1-based `line`:`column` position in `content`.
///
/// Line starts come from the raw `'\n'` positions, so CRLF files keep their
/// `'\r'` bytes in the count. The result is clamped to the content and moved
/// back onto a char boundary.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start = match line.checked_sub(2) {
        None => 0,
        Some(breaks) => content
            .match_indices('\n')
            .nth(breaks)
            .map_or(content.len(), |(i, _)| i + 1),
    };
    let mut offset = (line_start + column.saturating_sub(1)).min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
