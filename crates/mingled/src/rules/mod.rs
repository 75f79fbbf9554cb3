//! Rule table, prefix index, and token resolution.
//!
//! A rule pairs a recognition pattern with a handler. Patterns are a
//! closed set: either an exact flag token (`bold`, `wrap`) or a literal
//! `attr:` prefix whose remainder is the handler's value. The table is
//! ordered; order matters only for the full-scan fallback, since within
//! a prefix bucket candidates keep their original order.
//!
//! ## Prefix index
//!
//! A fixed list of literal prefixes is indexed at construction. Each
//! rule declares its literal (the exact flag text or the prefix), and a
//! rule joins the bucket of the first index prefix its literal starts
//! with. Lookup commits: once a matcher hits a bucket, a miss against
//! every candidate is a final "no styles" with no fallback to the full
//! table. Matchers outside every bucket scan the whole table in order.

pub mod keywords;
pub mod units;
pub mod values;

mod handlers;

pub(crate) use handlers::Handler;

use crate::palette::Palette;
use crate::types::StyleMap;

/// Output vocabulary for the rule handlers.
///
/// `Native` produces the host layout engine's camelCase properties with
/// raw numeric values; `Css` produces kebab-case CSS properties with
/// converted units (px to rem for spacing and font sizes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Native,
    Css,
}

/// How a rule recognizes a matcher.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Pattern {
    /// The whole matcher equals this text.
    Exact(&'static str),
    /// The matcher starts with this text and carries a non-empty value.
    Prefix(&'static str),
}

impl Pattern {
    /// The literal text the pattern is anchored on; used for bucket
    /// assignment in the prefix index.
    fn literal(&self) -> &'static str {
        match self {
            Pattern::Exact(text) | Pattern::Prefix(text) => text,
        }
    }
}

pub(crate) struct Rule {
    pattern: Pattern,
    handler: Handler,
}

impl Rule {
    pub(crate) fn exact(name: &'static str, handler: Handler) -> Self {
        Self {
            pattern: Pattern::Exact(name),
            handler,
        }
    }

    pub(crate) fn prefix(prefix: &'static str, handler: Handler) -> Self {
        Self {
            pattern: Pattern::Prefix(prefix),
            handler,
        }
    }
}

/// Literal prefixes worth a bucket, tried in this order.
const INDEX_PREFIXES: [&str; 15] = [
    "h:", "w:", "m:", "p:", "c:", "bg:", "f:", "fw:", "ff:", "b:", "r:", "flex", "grid",
    "translate:", "transform:",
];

/// The ordered rule table with its derived prefix index.
///
/// Built once per compiler and immutable afterwards.
pub struct RuleTable {
    rules: Vec<Rule>,
    index: Vec<(&'static str, Vec<usize>)>,
    profile: Profile,
}

impl RuleTable {
    pub fn new(profile: Profile) -> Self {
        let rules = match profile {
            Profile::Native => handlers::native_rules(),
            Profile::Css => handlers::css_rules(),
        };
        let index = build_index(&rules);
        Self {
            rules,
            index,
            profile,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Resolves a matcher to a style fragment, or `None` when nothing
    /// recognizes it. `None` is a valid outcome, not an error.
    pub fn resolve(&self, matcher: &str, palette: &Palette) -> Option<StyleMap> {
        for (prefix, candidates) in &self.index {
            if matcher.starts_with(prefix) {
                // Committed to the bucket: no full-table fallback.
                return candidates
                    .iter()
                    .find_map(|&i| self.try_rule(i, matcher, palette));
            }
        }
        (0..self.rules.len()).find_map(|i| self.try_rule(i, matcher, palette))
    }

    fn try_rule(&self, index: usize, matcher: &str, palette: &Palette) -> Option<StyleMap> {
        let rule = &self.rules[index];
        let value = match rule.pattern {
            Pattern::Exact(name) => {
                if matcher != name {
                    return None;
                }
                ""
            }
            Pattern::Prefix(prefix) => match matcher.strip_prefix(prefix) {
                Some(rest) if !rest.is_empty() => rest,
                _ => return None,
            },
        };
        self.apply(&rule.handler, value, palette)
    }
}

fn build_index(rules: &[Rule]) -> Vec<(&'static str, Vec<usize>)> {
    let mut index = Vec::new();
    for prefix in INDEX_PREFIXES {
        let candidates: Vec<usize> = rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.pattern.literal().starts_with(prefix))
            .map(|(i, _)| i)
            .collect();
        if !candidates.is_empty() {
            index.push((prefix, candidates));
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleValue;

    #[test]
    fn indexed_prefix_resolves_without_full_scan() {
        let table = RuleTable::new(Profile::Css);
        let palette = Palette::default();
        let map = table.resolve("bg:gray-10", &palette).unwrap();
        assert_eq!(
            map.get("background-color").and_then(StyleValue::as_str),
            Some("#F5F5F5")
        );
    }

    #[test]
    fn bucket_miss_is_committed() {
        let table = RuleTable::new(Profile::Css);
        let palette = Palette::default();
        // "r:" owns the bucket; a non-numeric radius fails every
        // candidate and must not fall through to the full table.
        assert!(table.resolve("r:wide", &palette).is_none());
    }

    #[test]
    fn unindexed_tokens_use_the_full_scan() {
        let table = RuleTable::new(Profile::Native);
        let palette = Palette::default();
        let map = table.resolve("center", &palette).unwrap();
        assert_eq!(
            map.get("alignItems").and_then(StyleValue::as_str),
            Some("center")
        );
        assert_eq!(
            map.get("justifyContent").and_then(StyleValue::as_str),
            Some("center")
        );
    }

    #[test]
    fn unknown_matcher_resolves_to_nothing() {
        let table = RuleTable::new(Profile::Native);
        let palette = Palette::default();
        assert!(table.resolve("frobnicate:12", &palette).is_none());
    }

    #[test]
    fn prefix_requires_a_value() {
        let table = RuleTable::new(Profile::Css);
        let palette = Palette::default();
        assert!(table.resolve("p:", &palette).is_none());
    }
}
