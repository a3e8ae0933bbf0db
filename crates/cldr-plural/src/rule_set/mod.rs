//! Per-locale sets of plural rules.

mod error;
mod pairs;
mod set;

pub use error::{RuleSetError, compute_suggestions};
pub use pairs::RulePairs;
pub use set::PluralRuleSet;
