//! Public AST types for CLDR plural rule conditions.
//!
//! These types are public so that code generators outside this crate can walk
//! a parsed rule directly, or through a [`RuleCompiler`](crate::compiler::RuleCompiler).

use std::fmt::{self, Display, Formatter};
use std::slice::Iter;

use serde::{Deserialize, Serialize};

/// One of the six CLDR plural operands.
///
/// See UTS #35 "Plural Operand Meanings" for the numeric facet each one
/// stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    /// Absolute value of the source number.
    N,
    /// Integer digits of n.
    I,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
    /// Visible fraction digits, with trailing zeros.
    F,
    /// Visible fraction digits, without trailing zeros.
    T,
}

impl Operand {
    /// All operands, in the order they are usually documented.
    pub const ALL: [Operand; 6] = [
        Operand::N,
        Operand::I,
        Operand::V,
        Operand::W,
        Operand::F,
        Operand::T,
    ];

    /// The operand's name as written in rule text.
    pub fn as_str(self) -> &'static str {
        match self {
            Operand::N => "n",
            Operand::I => "i",
            Operand::V => "v",
            Operand::W => "w",
            Operand::F => "f",
            Operand::T => "t",
        }
    }

    /// Look up an operand by its rule-text name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// True for operands that only ever take integer values. Only `n` can
    /// carry a fraction.
    pub fn is_integral(self) -> bool {
        !matches!(self, Operand::N)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The left-hand side of a relation: an operand, optionally reduced modulo
/// a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A bare operand: `n`
    Operand(Operand),
    /// An operand modulo a value: `n mod 10` or `n % 10`
    Mod(Operand, u64),
}

impl Expr {
    /// The operand this expression reads.
    pub fn operand(&self) -> Operand {
        match *self {
            Expr::Operand(op) | Expr::Mod(op, _) => op,
        }
    }
}

/// How a relation matches its range list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// `in`: integer membership in one of the ranges.
    In,
    /// `within`: any value between the bounds of one of the ranges.
    Within,
}

impl Method {
    /// The keyword used in rule text.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::In => "in",
            Method::Within => "within",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive range of integers. A bare value is a range with equal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub low: u64,
    pub high: u64,
}

impl Range {
    /// Create a range from its inclusive bounds.
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// A range containing only `value`.
    pub fn single(value: u64) -> Self {
        Self::new(value, value)
    }

    /// True when both bounds are equal.
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }
}

/// Ranges in the order they were written. Not normalized: duplicates and
/// overlaps are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeList(pub Vec<Range>);

impl RangeList {
    /// Iterate over the ranges in source order.
    pub fn iter(&self) -> Iter<'_, Range> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Range>> for RangeList {
    fn from(ranges: Vec<Range>) -> Self {
        Self(ranges)
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a Range;
    type IntoIter = Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A membership test: `expr in ranges` or `expr within ranges`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub method: Method,
    pub expr: Expr,
    pub ranges: RangeList,
}

/// A parsed plural rule condition.
///
/// Only relations can be negated, so `Not` wraps a [`Relation`] rather than an
/// arbitrary condition. `!=` and `not in` both parse to `Not`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Relation),
    Is(Expr, u64),
    IsNot(Expr, u64),
    Relation(Relation),
}

impl Condition {
    /// Conjunction of two conditions.
    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }

    /// Disjunction of two conditions.
    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or(Box::new(left), Box::new(right))
    }

    /// True if the condition has the shape the parser produces: `and` binds
    /// tighter than `or`, both chain to the left, and no range list is empty.
    ///
    /// These are exactly the conditions whose canonical text parses back to
    /// the same value. A hand-built `Condition::and(Condition::or(a, b), c)`
    /// has no rule syntax of its own, since the grammar has no parentheses.
    pub fn is_canonical_shape(&self) -> bool {
        match self {
            Condition::Or(left, right) => left.is_canonical_shape() && right.is_conjunction(),
            Condition::And(..)
            | Condition::Not(_)
            | Condition::Is(..)
            | Condition::IsNot(..)
            | Condition::Relation(_) => self.is_conjunction(),
        }
    }

    fn is_conjunction(&self) -> bool {
        match self {
            Condition::And(left, right) => left.is_conjunction() && right.is_atom(),
            Condition::Or(..)
            | Condition::Not(_)
            | Condition::Is(..)
            | Condition::IsNot(..)
            | Condition::Relation(_) => self.is_atom(),
        }
    }

    fn is_atom(&self) -> bool {
        match self {
            Condition::Not(relation) | Condition::Relation(relation) => !relation.ranges.is_empty(),
            Condition::Is(..) | Condition::IsNot(..) => true,
            Condition::And(..) | Condition::Or(..) => false,
        }
    }
}
