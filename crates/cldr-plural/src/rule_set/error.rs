//! Error types for rule set construction.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::PluralCategory;

/// An error that occurred while building a [`PluralRuleSet`](super::PluralRuleSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// Tag outside the `zero`, `one`, `two`, `few`, `many`, `other` vocabulary.
    #[error("unknown tag '{tag}'{}", format_suggestions(suggestions))]
    UnknownTag {
        tag: String,
        suggestions: Vec<String>,
    },

    /// The same tag was given more than one rule.
    #[error("tag '{tag}' defined twice")]
    DuplicateTag { tag: PluralCategory },

    /// A tag's rule text is malformed.
    #[error("invalid rule for tag '{tag}': {source}")]
    InvalidRule {
        tag: PluralCategory,
        #[source]
        source: ParseError,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean '{}'?", suggestions.join("' or '"))
    }
}

/// Compute typo suggestions for an unknown key.
///
/// Candidates within Levenshtein distance 1 (for keys of three characters or
/// fewer) or 2 (for longer keys) are returned, closest first, at most three.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein(key, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(distance, _)| *distance);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
