//! Canonical CLDR text backend.

use super::RuleCompiler;
use crate::parser::ast::{Condition, Expr, Operand, Range, Relation};

/// Renders a condition back into CLDR rule syntax.
///
/// For any condition the parser produces, the output parses to the same AST
/// it was compiled from. Symbolic relations come back in word form: `n = 1`
/// renders as `n in 1` and `n != 1` as `n not in 1`.
///
/// Rule syntax has no parentheses, so hand-built conditions that fail
/// [`Condition::is_canonical_shape`] still render, but the text may parse to
/// a different condition (an `or` nested under an `and`) or not at all (an
/// empty range list).
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalCompiler;

impl CanonicalCompiler {
    fn relation_text(&self, relation: &Relation, negated: bool) -> String {
        let ranges: Vec<String> = relation
            .ranges
            .iter()
            .map(|range| self.range_text(range))
            .collect();
        format!(
            "{}{} {} {}",
            self.compile_expr(&relation.expr),
            if negated { " not" } else { "" },
            relation.method,
            ranges.join(",")
        )
    }

    fn range_text(&self, range: &Range) -> String {
        if range.is_single() {
            self.compile_value(range.low)
        } else {
            format!(
                "{}..{}",
                self.compile_value(range.low),
                self.compile_value(range.high)
            )
        }
    }
}

impl RuleCompiler for CanonicalCompiler {
    fn compile_and(&self, left: &Condition, right: &Condition) -> String {
        format!("{} and {}", self.compile(left), self.compile(right))
    }

    fn compile_or(&self, left: &Condition, right: &Condition) -> String {
        format!("{} or {}", self.compile(left), self.compile(right))
    }

    fn compile_not(&self, relation: &Relation) -> String {
        self.relation_text(relation, true)
    }

    fn compile_mod(&self, operand: Operand, value: u64) -> String {
        format!(
            "{} mod {}",
            self.compile_operand(operand),
            self.compile_value(value)
        )
    }

    fn compile_is(&self, expr: &Expr, value: u64) -> String {
        format!("{} is {}", self.compile_expr(expr), self.compile_value(value))
    }

    fn compile_isnot(&self, expr: &Expr, value: u64) -> String {
        format!(
            "{} is not {}",
            self.compile_expr(expr),
            self.compile_value(value)
        )
    }

    fn compile_relation(&self, relation: &Relation) -> String {
        self.relation_text(relation, false)
    }
}
