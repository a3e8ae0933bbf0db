//! Compilers that project a parsed rule into an output syntax.
//!
//! A [`RuleCompiler`] walks a [`Condition`] without re-parsing it. The trait
//! supplies the generic boolean-expression rendering for every node, e.g.
//! `(a && b)` and `(n % 10)`, and leaves relations to each backend, since
//! range membership is what differs most between target languages.
//!
//! Two backends ship with the crate:
//! - [`CanonicalCompiler`] renders CLDR rule text again.
//! - [`CStyleCompiler`] renders C-family boolean expressions.

mod c_style;
mod canonical;

pub use c_style::CStyleCompiler;
pub use canonical::CanonicalCompiler;

use crate::parser::ast::{Condition, Expr, Operand, Relation};

/// A backend that renders plural rule conditions.
///
/// Only [`compile_relation`](RuleCompiler::compile_relation) is required.
/// Every other handler defaults to the generic form and can be overridden.
pub trait RuleCompiler {
    /// Compile a full condition, dispatching on the node kind.
    fn compile(&self, condition: &Condition) -> String {
        match condition {
            Condition::And(left, right) => self.compile_and(left, right),
            Condition::Or(left, right) => self.compile_or(left, right),
            Condition::Not(relation) => self.compile_not(relation),
            Condition::Is(expr, value) => self.compile_is(expr, *value),
            Condition::IsNot(expr, value) => self.compile_isnot(expr, *value),
            Condition::Relation(relation) => self.compile_relation(relation),
        }
    }

    /// Compile the left-hand side of a relation.
    fn compile_expr(&self, expr: &Expr) -> String {
        match *expr {
            Expr::Operand(operand) => self.compile_operand(operand),
            Expr::Mod(operand, value) => self.compile_mod(operand, value),
        }
    }

    fn compile_operand(&self, operand: Operand) -> String {
        operand.as_str().to_string()
    }

    fn compile_value(&self, value: u64) -> String {
        value.to_string()
    }

    fn compile_and(&self, left: &Condition, right: &Condition) -> String {
        format!("({} && {})", self.compile(left), self.compile(right))
    }

    fn compile_or(&self, left: &Condition, right: &Condition) -> String {
        format!("({} || {})", self.compile(left), self.compile(right))
    }

    fn compile_not(&self, relation: &Relation) -> String {
        format!("(!{})", self.compile_relation(relation))
    }

    fn compile_mod(&self, operand: Operand, value: u64) -> String {
        format!(
            "({} % {})",
            self.compile_operand(operand),
            self.compile_value(value)
        )
    }

    fn compile_is(&self, expr: &Expr, value: u64) -> String {
        format!("({} == {})", self.compile_expr(expr), self.compile_value(value))
    }

    fn compile_isnot(&self, expr: &Expr, value: u64) -> String {
        format!("({} != {})", self.compile_expr(expr), self.compile_value(value))
    }

    /// Compile a range membership test. Range encoding is target specific,
    /// so there is no default.
    fn compile_relation(&self, relation: &Relation) -> String;
}

/// Render a condition as canonical CLDR rule text.
///
/// # Examples
///
/// ```
/// use cldr_plural::compiler::to_canonical;
/// use cldr_plural::parser::parse_rule;
///
/// let condition = parse_rule("n % 10 = 1 and n % 100 != 11").unwrap().unwrap();
/// assert_eq!(
///     to_canonical(&condition),
///     "n mod 10 in 1 and n mod 100 not in 11"
/// );
/// ```
pub fn to_canonical(condition: &Condition) -> String {
    CanonicalCompiler.compile(condition)
}
