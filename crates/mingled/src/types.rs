//! Core value types for style fragments.
//!
//! A rule handler produces a [`StyleMap`]: a small, insertion-ordered
//! mapping from property names to [`StyleValue`]s. Values are strings,
//! numbers, or (one level of nesting) another map keyed by a
//! leading-`&` selector suffix (e.g. `&::-webkit-scrollbar`).

use std::fmt;

/// A single style property value.
///
/// # Examples
///
/// ```
/// use mingled::types::{StyleMap, StyleValue};
///
/// let mut map = StyleMap::new();
/// map.set("padding", 16.0);
/// map.set("color", "#333333");
///
/// assert_eq!(map.get("padding"), Some(&StyleValue::Num(16.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A literal string value (`"flex-start"`, `"0.75rem"`, ...).
    Str(String),
    /// A raw numeric value, passed through unconverted.
    Num(f64),
    /// A nested property group keyed by a `&`-prefixed selector suffix.
    Nested(StyleMap),
}

impl StyleValue {
    /// Returns the string contents if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric contents if this is a `Num` value.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            StyleValue::Num(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Nested(value)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) => f.write_str(&crate::rules::units::format_number(*n)),
            StyleValue::Nested(_) => f.write_str("<nested>"),
        }
    }
}

/// An insertion-ordered property-to-value mapping.
///
/// Setting an existing key overwrites its value in place, keeping the
/// position of the first insertion. Merging applies the other map's
/// entries left to right, so later tokens win on identical property
/// names while distinct names accumulate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up a property by exact name.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Sets a property, overwriting any existing value for the name.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Merges `other` into `self`, later values overwriting same-named
    /// properties.
    pub fn merge(&mut self, other: &StyleMap) {
        for (name, value) in &other.entries {
            self.set(name.clone(), value.clone());
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Maps every leaf value through `f`, recursing into nested groups.
    pub fn map_leaves(mut self, f: &impl Fn(StyleValue) -> StyleValue) -> StyleMap {
        for (_, value) in &mut self.entries {
            let current = std::mem::replace(value, StyleValue::Num(0.0));
            *value = match current {
                StyleValue::Nested(inner) => StyleValue::Nested(inner.map_leaves(f)),
                leaf => f(leaf),
            };
        }
        self
    }
}

/// Builds a [`StyleMap`] from a static list of string properties.
pub(crate) fn static_map(props: &[(&str, &str)]) -> StyleMap {
    let mut map = StyleMap::new();
    for (name, value) in props {
        map.set(*name, *value);
    }
    map
}
