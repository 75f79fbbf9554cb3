//! Named color palette shared by all color-valued handlers.
//!
//! Color tokens like `bg:gray-10` resolve through the palette; names
//! without an entry fall back to their literal text, so plain CSS
//! colors (`bg:rebeccapurple`) and hex literals pass through unchanged.
//!
//! The palette is owned by a compiler instance. Mutating it bumps the
//! compiler's cache epoch so previously cached color-dependent tokens
//! are never served stale.

use phf::phf_map;
use std::collections::HashMap;

/// Built-in palette seed.
static DEFAULT_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "primary" => "#405de6",
    "black" => "#0F0F0F",
    "red" => "#DD5D49",
    "blue" => "#1289F8",
    "indigo-5" => "#F9FAFC",
    "indigo-50" => "#8D9EB3",
    "indigo-60" => "#63728B",
    "gray-5" => "#FAFAFA",
    "gray-7" => "#F7F7F7",
    "gray-10" => "#F5F5F5",
    "gray-15" => "#efeff0",
    "gray-20" => "#E3E5E5",
    "gray-30" => "#D8D8D8",
    "gray-40" => "#B0B0B0",
    "gray-50" => "#999999",
    "gray-60" => "#666666",
    "gray-90" => "#323232",
};

/// A mutable name-to-color mapping with literal fallback on lookup.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: HashMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_COLORS
            .entries()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { colors }
    }
}

impl Palette {
    /// An empty palette with no named colors.
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Resolves a name to its palette color, or the literal text when
    /// the name is not defined.
    pub fn resolve(&self, name: &str) -> String {
        match self.colors.get(name) {
            Some(color) => color.clone(),
            None => name.to_string(),
        }
    }

    /// Adds or overwrites entries, keeping existing ones.
    pub fn merge<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, color) in entries {
            self.colors.insert(name.into(), color.into());
        }
    }

    /// Discards all entries and installs the given ones.
    pub fn replace<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.colors.clear();
        self.merge(entries);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
