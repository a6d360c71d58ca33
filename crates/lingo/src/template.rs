//! Placeholder parsing and interpolation using winnow.
//!
//! A template is plain text with `{{ name }}` placeholders. Parsing is a
//! single left-to-right pass: each `{{` opens a placeholder that runs to the
//! next `}}`. An opening `{{` with no closing `}}` is literal text, and there
//! is no escape for literal double braces.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{take_until, take_while};

use crate::types::{Value, Values};

/// A segment of a parsed template, borrowing from the template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A `{{ name }}` placeholder.
    Placeholder {
        /// The full matched text, braces included.
        raw: &'a str,
        /// The placeholder name with surrounding whitespace trimmed.
        name: &'a str,
    },
}

/// Parse a template into literal and placeholder segments.
///
/// Parsing never fails: anything that is not a complete placeholder is
/// literal text.
///
/// # Example
///
/// ```
/// use lingo::template::{Segment, parse_template};
///
/// let segments = parse_template("Apontamento - {{ window }}");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Literal("Apontamento - "),
///         Segment::Placeholder { raw: "{{ window }}", name: "window" },
///     ]
/// );
/// ```
pub fn parse_template(input: &str) -> Vec<Segment<'_>> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<Segment<'_>>> =
        repeat(0.., alt((placeholder, literal))).parse_next(&mut remaining);
    match parsed {
        Ok(segments) if remaining.is_empty() => segments,
        _ => vec![Segment::Literal(input)],
    }
}

/// Parse `{{ body }}`, keeping both the raw match and the trimmed name.
fn placeholder<'s>(input: &mut &'s str) -> ModalResult<Segment<'s>> {
    delimited("{{", take_until(0.., "}}"), "}}")
        .with_taken()
        .map(|(body, raw): (&'s str, &'s str)| Segment::Placeholder {
            raw,
            name: body.trim(),
        })
        .parse_next(input)
}

/// Parse a run of text up to the next `{{`, an unterminated `{{`, or the
/// rest of the input.
fn literal<'s>(input: &mut &'s str) -> ModalResult<Segment<'s>> {
    alt((
        take_until(1.., "{{"),
        "{{",
        take_while(1.., |_: char| true),
    ))
    .map(Segment::Literal)
    .parse_next(input)
}

/// Substitute `values` into the placeholders of `template`.
///
/// With no values at all the template is returned verbatim. A placeholder is
/// replaced only when its trimmed name is non-empty and maps to a non-null
/// value; every other placeholder keeps its original text. Substituted text
/// is never re-scanned.
///
/// # Example
///
/// ```
/// use lingo::{template::interpolate, values};
///
/// let values = values! { "a" => "X" };
/// assert_eq!(interpolate("{{a}} {{b}}", Some(&values)), "X {{b}}");
/// assert_eq!(interpolate("{{count}} ag.", Some(&values! { "count" => 3 })), "3 ag.");
/// assert_eq!(interpolate("{{name}}", None), "{{name}}");
/// ```
pub fn interpolate(template: &str, values: Option<&Values>) -> String {
    let Some(values) = values else {
        return template.to_string();
    };

    let mut output = String::with_capacity(template.len());
    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { raw, name } => match substitution(values, name) {
                Some(text) => output.push_str(&text),
                None => output.push_str(raw),
            },
        }
    }
    output
}

fn substitution(values: &Values, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    values.get(name).and_then(Value::substitution)
}

/// Names of the non-empty placeholders in `template`, in order of first
/// appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in parse_template(template) {
        let Segment::Placeholder { name, .. } = segment else {
            continue;
        };
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
