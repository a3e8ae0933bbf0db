//! Raw `(tag, rule)` pairs as written in a source map.

use std::fmt::{self, Formatter};
use std::slice::Iter;
use std::vec::IntoIter;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// `(tag, rule)` pairs in document order.
///
/// Deserializes from a map, but unlike `BTreeMap` or `HashMap` it keeps
/// repeated keys, so a [`PluralRuleSet`](crate::PluralRuleSet) built from it
/// can reject the repetition instead of silently keeping the last rule.
///
/// ```
/// use cldr_plural::rule_set::RulePairs;
///
/// let pairs: RulePairs =
///     serde_json::from_str(r#"{"other": "", "one": "n is 1", "one": "n is 2"}"#).unwrap();
/// let tags: Vec<&str> = pairs.iter().map(|(tag, _)| tag.as_str()).collect();
/// assert_eq!(tags, ["other", "one", "one"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulePairs(Vec<(String, String)>);

impl RulePairs {
    pub fn iter(&self) -> Iter<'_, (String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The rule text of the first pair tagged `tag`.
    pub fn rule(&self, tag: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, rule)| rule.as_str())
    }
}

impl From<Vec<(String, String)>> for RulePairs {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FromIterator<(String, String)> for RulePairs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RulePairs {
    type Item = (String, String);
    type IntoIter = IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

struct RulePairsVisitor;

impl<'de> Visitor<'de> for RulePairsVisitor {
    type Value = RulePairs;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a map from plural tag to rule text")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::new();
        while let Some(pair) = map.next_entry()? {
            pairs.push(pair);
        }
        Ok(RulePairs(pairs))
    }
}

impl<'de> Deserialize<'de> for RulePairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RulePairsVisitor)
    }
}
