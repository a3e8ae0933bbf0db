//! Miette diagnostic wrapper for plural rule parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use cldr_plural::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a plural rule.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid plural rule: {message}")]
#[diagnostic(code(cldr_plural::syntax))]
pub struct RuleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl RuleDiagnostic {
    /// Create a diagnostic from a ParseError and the rule it came from.
    ///
    /// `name` identifies the rule in the report, e.g. `en/one` or `<rule>`.
    pub fn from_parse_error(name: &str, rule: &str, err: &ParseError) -> Self {
        let span = error_span(rule, err);
        let help = match err {
            ParseError::NegatedOperator { .. } => {
                Some("use '!=' or 'not in' to negate a relation".to_string())
            }
            ParseError::UnexpectedEnd { .. } => {
                Some("the rule ends before the condition is complete".to_string())
            }
            ParseError::UnexpectedCharacter { .. } => Some(
                "rules may only use n i v w f t, and, or, is, not, in, within, mod, % = != , and .."
                    .to_string(),
            ),
            ParseError::UnexpectedToken { .. }
            | ParseError::TrailingInput { .. }
            | ParseError::ValueOutOfRange { .. } => None,
        };

        RuleDiagnostic {
            src: NamedSource::new(name, rule.to_string()),
            span,
            message: err.to_string(),
            help,
        }
    }
}

/// Byte span of the offending input, or an empty span at the end of the
/// condition when the rule ended early.
fn error_span(rule: &str, err: &ParseError) -> SourceSpan {
    let condition_end = rule.find('@').unwrap_or(rule.len()).min(rule.len());
    let (offset, len) = match err {
        ParseError::UnexpectedCharacter { offset, found, .. } => (*offset, found.len_utf8()),
        ParseError::UnexpectedToken { found, offset, .. }
        | ParseError::NegatedOperator { found, offset }
        | ParseError::TrailingInput { found, offset } => (*offset, found.len()),
        ParseError::ValueOutOfRange { text, offset } => (*offset, text.len()),
        ParseError::UnexpectedEnd { .. } => (rule[..condition_end].trim_end().len(), 0),
    };

    // Clamp to the rule to avoid a miette panic on out-of-bounds spans
    let offset = offset.min(rule.len());
    (offset, len.min(rule.len() - offset)).into()
}
