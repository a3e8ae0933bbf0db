//! The validated mapping from plural category to parsed condition.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compiler::{CanonicalCompiler, RuleCompiler};
use crate::parser::ast::Condition;
use crate::parser::parse_rule;
use crate::rule_set::{RulePairs, RuleSetError};
use crate::types::PluralCategory;

/// The plural rules of one locale.
///
/// A rule set maps each explicitly constrained category to its parsed
/// condition. Categories whose rule text is empty or only carries samples are
/// left out: they have no condition of their own and fall through to the
/// catch-all. In particular `other` is never materialized unless a locale
/// gives it a real condition.
///
/// Rule sets are immutable; build a new one to change rules.
///
/// # Example
///
/// ```
/// use cldr_plural::{PluralCategory, PluralRuleSet};
///
/// let rules = PluralRuleSet::new([
///     ("one", "i = 1 and v = 0 @integer 1"),
///     ("other", " @integer 0, 2~16, 100, 1000"),
/// ])
/// .unwrap();
///
/// assert_eq!(rules.tags().into_iter().collect::<Vec<_>>(), [PluralCategory::One]);
/// assert_eq!(
///     rules.canonical_text(PluralCategory::One).as_deref(),
///     Some("i in 1 and v in 0")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<PluralCategory, String>",
    try_from = "RulePairs"
)]
pub struct PluralRuleSet {
    rules: BTreeMap<PluralCategory, Condition>,
}

impl PluralRuleSet {
    /// Build a rule set from `(tag, rule)` pairs.
    ///
    /// Accepts anything iterable over pairs of string-likes: a `Vec` or array
    /// of tuples, a `HashMap`, a `BTreeMap`. Construction stops at the first
    /// unknown tag, repeated tag or malformed rule; nothing is returned in
    /// that case.
    pub fn new<I, K, V>(rules: I) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut parsed = BTreeMap::new();

        for (tag, rule) in rules {
            let category: PluralCategory = tag.as_ref().parse()?;
            if !seen.insert(category) {
                return Err(RuleSetError::DuplicateTag { tag: category });
            }

            let condition = parse_rule(rule.as_ref()).map_err(|source| {
                RuleSetError::InvalidRule {
                    tag: category,
                    source,
                }
            })?;
            match condition {
                Some(condition) => {
                    parsed.insert(category, condition);
                }
                None => debug!(%category, "omitting plural rule without condition"),
            }
        }

        Ok(Self { rules: parsed })
    }

    /// Categories with an explicit condition. The implicit `other` fallback
    /// is not included unless a locale spells out a condition for it.
    pub fn tags(&self) -> BTreeSet<PluralCategory> {
        self.rules.keys().copied().collect()
    }

    /// True if `category` has an explicit condition.
    pub fn contains(&self, category: PluralCategory) -> bool {
        self.rules.contains_key(&category)
    }

    /// The parsed condition for `category`.
    pub fn condition(&self, category: PluralCategory) -> Option<&Condition> {
        self.rules.get(&category)
    }

    /// All explicit conditions, in category order.
    pub fn conditions(&self) -> impl Iterator<Item = (PluralCategory, &Condition)> {
        self.rules
            .iter()
            .map(|(category, condition)| (*category, condition))
    }

    /// Canonical CLDR text of the condition for `category`.
    pub fn canonical_text(&self, category: PluralCategory) -> Option<String> {
        self.condition(category)
            .map(|condition| CanonicalCompiler.compile(condition))
    }

    /// Canonical CLDR text for every explicit category.
    pub fn rules(&self) -> BTreeMap<PluralCategory, String> {
        self.compile_with(&CanonicalCompiler)
    }

    /// Project every explicit condition through `compiler`.
    pub fn compile_with<C>(&self, compiler: &C) -> BTreeMap<PluralCategory, String>
    where
        C: RuleCompiler + ?Sized,
    {
        self.conditions()
            .map(|(category, condition)| (category, compiler.compile(condition)))
            .collect()
    }

    /// Number of explicit categories.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no category has a condition, i.e. everything is `other`.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Display for PluralRuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, (category, text)) in self.rules().into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{category}: {text}")?;
        }
        Ok(())
    }
}

impl From<PluralRuleSet> for BTreeMap<PluralCategory, String> {
    fn from(rule_set: PluralRuleSet) -> Self {
        rule_set.rules()
    }
}

impl TryFrom<RulePairs> for PluralRuleSet {
    type Error = RuleSetError;

    fn try_from(rules: RulePairs) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}
