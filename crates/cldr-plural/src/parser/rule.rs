//! Recursive-descent parser for plural rule conditions.
//!
//! Implements the UTS #35 condition grammar:
//!
//! ```text
//! condition      = and_condition ('or' and_condition)*
//! and_condition  = relation ('and' relation)*
//! relation       = expr 'is' ['not'] value
//!                | expr ['not'] ('in' | '=' | '!=') range_list
//!                | expr ['not'] 'within' range_list
//! expr           = operand [('mod' | '%') value]
//! operand        = n | i | v | w | f | t
//! range_list     = (value ['..' value]) (',' range_list)*
//! ```
//!
//! Sample annotations (`@integer ...`, `@decimal ...`) are dropped by the
//! tokenizer before parsing.

use tracing::debug;

use super::ast::{Condition, Expr, Method, Operand, Range, RangeList, Relation};
use super::error::ParseError;
use super::token::{Token, TokenKind, tokenize};

/// Parse a plural rule into its condition.
///
/// Returns `Ok(None)` when the rule has no tokens at all, which happens for
/// blank rules and for rules consisting only of samples. Such a rule places no
/// constraint and is the implicit catch-all.
///
/// # Examples
///
/// ```
/// use cldr_plural::parser::{Condition, Expr, Operand, parse_rule};
///
/// let condition = parse_rule("n is 1 @integer 1").unwrap();
/// assert_eq!(condition, Some(Condition::Is(Expr::Operand(Operand::N), 1)));
///
/// assert_eq!(parse_rule(" @integer 0~15, 100").unwrap(), None);
/// ```
pub fn parse_rule(input: &str) -> Result<Option<Condition>, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        debug!(rule = input, "plural rule has no condition");
        return Ok(None);
    }

    let mut parser = RuleParser::new(tokens);
    let condition = parser.condition()?;
    if let Some(token) = parser.peek() {
        return Err(ParseError::TrailingInput {
            found: token.text.to_string(),
            offset: token.offset,
        });
    }

    debug!(rule = input, "parsed plural rule");
    Ok(Some(condition))
}

/// Cursor over a token stream, consumed left to right.
struct RuleParser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> RuleParser<'a> {
    fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.position)
    }

    /// Consume the next token if it matches `kind` (and `text`, when given).
    fn skip(&mut self, kind: TokenKind, text: Option<&str>) -> Option<Token<'a>> {
        let token = *self.peek()?;
        if token.is(kind, text) {
            self.position += 1;
            Some(token)
        } else {
            None
        }
    }

    fn skip_word(&mut self, word: &str) -> bool {
        self.skip(TokenKind::Word, Some(word)).is_some()
    }

    fn skip_symbol(&mut self, symbol: &str) -> bool {
        self.skip(TokenKind::Symbol, Some(symbol)).is_some()
    }

    /// Consume a token of `kind`, or fail naming `expected`.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token<'a>, ParseError> {
        if let Some(token) = self.skip(kind, None) {
            return Ok(token);
        }
        Err(self.unexpected(expected))
    }

    /// Build the error for a missing `expected` at the current position.
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.text.to_string(),
                offset: token.offset,
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    fn condition(&mut self) -> Result<Condition, ParseError> {
        let mut condition = self.and_condition()?;
        while self.skip_word("or") {
            condition = Condition::or(condition, self.and_condition()?);
        }
        Ok(condition)
    }

    fn and_condition(&mut self) -> Result<Condition, ParseError> {
        let mut condition = self.relation()?;
        while self.skip_word("and") {
            condition = Condition::and(condition, self.relation()?);
        }
        Ok(condition)
    }

    fn relation(&mut self) -> Result<Condition, ParseError> {
        let expr = self.expr()?;

        if self.skip_word("is") {
            let negated = self.skip_word("not");
            let value = self.value()?;
            return Ok(if negated {
                Condition::IsNot(expr, value)
            } else {
                Condition::Is(expr, value)
            });
        }

        let negated = self.skip_word("not");
        let method = if self.skip_word("within") {
            Method::Within
        } else if self.skip_word("in") {
            Method::In
        } else if negated {
            return Err(match self.peek() {
                Some(token) => ParseError::NegatedOperator {
                    found: token.text.to_string(),
                    offset: token.offset,
                },
                None => ParseError::UnexpectedEnd {
                    expected: "'in' or 'within'".to_string(),
                },
            });
        } else {
            return self.operator_relation(expr);
        };

        let relation = Relation {
            method,
            expr,
            ranges: self.range_list()?,
        };
        Ok(if negated {
            Condition::Not(relation)
        } else {
            Condition::Relation(relation)
        })
    }

    /// Parse the `=` / `!=` forms, which are always `in` relations.
    fn operator_relation(&mut self, expr: Expr) -> Result<Condition, ParseError> {
        let negated = if self.skip_symbol("=") {
            false
        } else if self.skip_symbol("!=") {
            true
        } else {
            return Err(self.unexpected("'=', '!=' or a relation keyword"));
        };

        let relation = Relation {
            method: Method::In,
            expr,
            ranges: self.range_list()?,
        };
        Ok(if negated {
            Condition::Not(relation)
        } else {
            Condition::Relation(relation)
        })
    }

    fn range_list(&mut self) -> Result<RangeList, ParseError> {
        let mut ranges = vec![self.range_or_value()?];
        while self.skip_symbol(",") {
            ranges.push(self.range_or_value()?);
        }
        Ok(RangeList(ranges))
    }

    fn range_or_value(&mut self) -> Result<Range, ParseError> {
        let low = self.value()?;
        if self.skip(TokenKind::Ellipsis, None).is_some() {
            Ok(Range::new(low, self.value()?))
        } else {
            Ok(Range::single(low))
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let operand = self
            .peek()
            .filter(|token| token.kind == TokenKind::Word)
            .and_then(|token| Operand::from_name(token.text))
            .ok_or_else(|| self.unexpected("an operand variable"))?;
        self.position += 1;

        if self.skip_word("mod") || self.skip_symbol("%") {
            return Ok(Expr::Mod(operand, self.value()?));
        }
        Ok(Expr::Operand(operand))
    }

    fn value(&mut self) -> Result<u64, ParseError> {
        let token = self.expect(TokenKind::Value, "a value")?;
        token
            .text
            .parse()
            .map_err(|_| ParseError::ValueOutOfRange {
                text: token.text.to_string(),
                offset: token.offset,
            })
    }
}
