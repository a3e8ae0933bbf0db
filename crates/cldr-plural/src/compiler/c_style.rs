//! C-family boolean expression backend.

use bon::Builder;

use super::RuleCompiler;
use crate::parser::ast::{Method, Operand, Range, Relation};

/// Integrality check used by [`CStyleCompiler::default`]. `{x}` stands for
/// the compiled expression.
pub const DEFAULT_INTEGER_TEST: &str = "fmod({x}, 1) == 0";

/// Renders a condition as a C-family boolean expression, suitable for C,
/// C++, Java, JavaScript or Rust code generation.
///
/// Relations expand into comparisons: a single value becomes `(x == v)` and a
/// range becomes `(x >= lo && x <= hi)`, joined with `||`. An `in` range only
/// matches integers, so when the expression is based on `n` (the one operand
/// that can carry a fraction) the range test also applies `integer_test`.
/// `within` ranges keep the plain bounds check.
///
/// # Example
///
/// ```
/// use cldr_plural::compiler::{CStyleCompiler, RuleCompiler};
/// use cldr_plural::parser::parse_rule;
///
/// let compiler = CStyleCompiler::builder()
///     .operand_prefix("ops.")
///     .integer_test("{x} % 1 == 0")
///     .build();
///
/// let condition = parse_rule("n in 2..4").unwrap().unwrap();
/// assert_eq!(
///     compiler.compile(&condition),
///     "((ops.n >= 2 && ops.n <= 4 && ops.n % 1 == 0))"
/// );
///
/// let condition = parse_rule("n within 2..4").unwrap().unwrap();
/// assert_eq!(compiler.compile(&condition), "((ops.n >= 2 && ops.n <= 4))");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct CStyleCompiler {
    /// Prepended to every operand name, e.g. `ops.` or `self.`.
    #[builder(default)]
    operand_prefix: String,

    /// Appended to every integer literal, e.g. `u64` or `.0`.
    #[builder(default)]
    value_suffix: String,

    /// Template for the check that `{x}` has no fraction.
    #[builder(default = DEFAULT_INTEGER_TEST.to_string())]
    integer_test: String,
}

impl Default for CStyleCompiler {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CStyleCompiler {
    fn range_test(&self, expr: &str, range: &Range, check_integer: bool) -> String {
        if range.is_single() {
            format!("({} == {})", expr, self.compile_value(range.low))
        } else if check_integer {
            format!(
                "({expr} >= {} && {expr} <= {} && {})",
                self.compile_value(range.low),
                self.compile_value(range.high),
                self.integer_test.replace("{x}", expr)
            )
        } else {
            format!(
                "({expr} >= {} && {expr} <= {})",
                self.compile_value(range.low),
                self.compile_value(range.high)
            )
        }
    }
}

impl RuleCompiler for CStyleCompiler {
    fn compile_operand(&self, operand: Operand) -> String {
        format!("{}{}", self.operand_prefix, operand)
    }

    fn compile_value(&self, value: u64) -> String {
        format!("{}{}", value, self.value_suffix)
    }

    fn compile_relation(&self, relation: &Relation) -> String {
        let expr = self.compile_expr(&relation.expr);
        // Only `in` needs the integrality check, and integer operands pass it
        // trivially.
        let check_integer = match relation.method {
            Method::In => !relation.expr.operand().is_integral(),
            Method::Within => false,
        };
        let tests: Vec<String> = relation
            .ranges
            .iter()
            .map(|range| self.range_test(&expr, range, check_integer))
            .collect();
        format!("({})", tests.join(" || "))
    }
}
