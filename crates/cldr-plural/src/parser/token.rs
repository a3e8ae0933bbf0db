//! Plural rule tokenizer using winnow.
//!
//! Splits rule text into words, values, symbols and ellipses. Handles:
//! - Sample annotations: everything from the first `@` on is dropped
//! - Whole-word matching of reserved words, so `10n` or `nx` are rejected
//! - All three ellipsis spellings: `..`, `...` and `…`

use tracing::trace;
use winnow::combinator::alt;
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;

/// Words with a meaning in the rule grammar, operands included.
const RESERVED_WORDS: &[&str] = &[
    "and", "or", "is", "in", "within", "not", "mod", "n", "i", "v", "w", "f", "t",
];

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word or operand name.
    Word,
    /// A non-negative integer literal.
    Value,
    /// One of `%`, `,`, `!=`, `=`.
    Symbol,
    /// A range separator.
    Ellipsis,
}

/// A single token, borrowing its text from the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` in the rule.
    pub offset: usize,
}

impl Token<'_> {
    /// True if this token has the given kind and, when `text` is given, that
    /// exact text.
    pub fn is(&self, kind: TokenKind, text: Option<&str>) -> bool {
        self.kind == kind && text.is_none_or(|t| self.text == t)
    }
}

/// Tokenize a plural rule.
///
/// Whitespace is skipped, and the returned tokens are in source order.
///
/// # Examples
///
/// ```
/// use cldr_plural::parser::{TokenKind, tokenize};
///
/// let tokens = tokenize("n % 10 = 1 @integer 1, 21").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Word, TokenKind::Symbol, TokenKind::Value, TokenKind::Symbol, TokenKind::Value]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let rule = strip_samples(input);
    let mut remaining = rule;
    let mut tokens = Vec::new();

    while !remaining.is_empty() {
        let before = remaining;
        let offset = rule.len() - remaining.len();
        match next_token(&mut remaining) {
            Ok(Some((kind, text))) => tokens.push(Token { kind, text, offset }),
            Ok(None) => {}
            Err(_) => {
                return Err(ParseError::UnexpectedCharacter {
                    offset,
                    found: before.chars().next().unwrap_or('?'),
                    remainder: before.to_string(),
                });
            }
        }
    }

    trace!(rule, count = tokens.len(), "tokenized plural rule");
    Ok(tokens)
}

/// Drop `@integer` / `@decimal` sample annotations.
fn strip_samples(input: &str) -> &str {
    input.split_once('@').map_or(input, |(rule, _)| rule)
}

/// Parse the next token. Whitespace parses to `None`.
fn next_token<'i>(input: &mut &'i str) -> ModalResult<Option<(TokenKind, &'i str)>> {
    alt((
        whitespace.value(None),
        word_or_value.map(Some),
        symbol.map(|text| Some((TokenKind::Symbol, text))),
        ellipsis.map(|text| Some((TokenKind::Ellipsis, text))),
    ))
    .parse_next(input)
}

fn whitespace(input: &mut &str) -> ModalResult<()> {
    take_while(1.., char::is_whitespace).void().parse_next(input)
}

/// Parse a whole run of word characters as either a reserved word or a value.
fn word_or_value<'i>(input: &mut &'i str) -> ModalResult<(TokenKind, &'i str)> {
    take_while(1.., is_word_char)
        .verify_map(classify_word)
        .parse_next(input)
}

fn classify_word(text: &str) -> Option<(TokenKind, &str)> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        Some((TokenKind::Value, text))
    } else if RESERVED_WORDS.contains(&text) {
        Some((TokenKind::Word, text))
    } else {
        None
    }
}

fn symbol<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("%", ",", "!=", "=")).parse_next(input)
}

fn ellipsis<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("...", "..", "\u{2026}")).parse_next(input)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_samples_keeps_text_before_first_at() {
        assert_eq!(strip_samples("n is 1 @integer 1 @decimal 1.0"), "n is 1 ");
        assert_eq!(strip_samples("@integer 0~5"), "");
        assert_eq!(strip_samples("n is 1"), "n is 1");
    }

    #[test]
    fn classify_word_rejects_mixed_runs() {
        assert_eq!(classify_word("10"), Some((TokenKind::Value, "10")));
        assert_eq!(classify_word("within"), Some((TokenKind::Word, "within")));
        assert_eq!(classify_word("10n"), None);
        assert_eq!(classify_word("with"), None);
    }

    #[test]
    fn longest_ellipsis_wins() {
        let mut input = "...5";
        assert_eq!(ellipsis(&mut input).unwrap(), "...");
        assert_eq!(input, "5");
    }
}
