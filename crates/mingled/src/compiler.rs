//! The compiler: tokenization, per-token resolution, merging, caching.
//!
//! A [`Compiler`] owns its rule table, prefix index, palette,
//! breakpoints, and caches, so separate instances never interfere.
//! Construct one per backend and pass it by reference to call sites.
//!
//! ## Caching
//!
//! Two bounded caches keep repeat work near zero: a whole-result cache
//! keyed by the full input string and a token cache keyed per token.
//! Every key embeds the current cache epoch; mutating the palette (or
//! the breakpoint table) bumps the epoch, so entries written under an
//! older epoch can never be served again. Mutation also clears the
//! caches outright to release the orphaned entries immediately.

use std::collections::HashSet;

use crate::cache::BoundedCache;
use crate::palette::Palette;
use crate::rules::{Profile, RuleTable};
use crate::types::{StyleMap, StyleValue};
use crate::variants::{apply_variants, Breakpoints};

/// Capacity limits for the two compiler caches.
///
/// Applying a new configuration clears both caches.
#[derive(Clone, Copy, Debug)]
pub struct CacheConfig {
    pub result_capacity: usize,
    pub token_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            result_capacity: 1000,
            token_capacity: 2000,
        }
    }
}

/// One token after variants and rule resolution.
///
/// For the structured-mapping backend only `styles` matters; the CSS
/// backend also consumes the pseudo-class and media annotations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenStyles {
    pub styles: StyleMap,
    pub pseudo_class: Option<String>,
    pub media: Option<String>,
}

/// The compact-token style compiler.
pub struct Compiler {
    table: RuleTable,
    palette: Palette,
    breakpoints: Breakpoints,
    epoch: u64,
    result_cache: BoundedCache<StyleMap>,
    token_cache: BoundedCache<TokenStyles>,
    warned: HashSet<String>,
}

impl Compiler {
    pub fn new(profile: Profile) -> Self {
        Self::with_cache(profile, CacheConfig::default())
    }

    pub fn with_cache(profile: Profile, cache: CacheConfig) -> Self {
        Self {
            table: RuleTable::new(profile),
            palette: Palette::default(),
            breakpoints: Breakpoints::default(),
            epoch: 0,
            result_cache: BoundedCache::new(cache.result_capacity),
            token_cache: BoundedCache::new(cache.token_capacity),
            warned: HashSet::new(),
        }
    }

    pub fn profile(&self) -> Profile {
        self.table.profile()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Current cache epoch; embedded in every cache key.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[cfg(test)]
    pub(crate) fn token_cache_len(&self) -> usize {
        self.token_cache.len()
    }

    /// Merges (default) or replaces the palette, invalidating caches.
    pub fn set_colors<I, K, V>(&mut self, entries: I, replace: bool)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if replace {
            self.palette.replace(entries);
        } else {
            self.palette.merge(entries);
        }
        self.bump_epoch();
    }

    /// Adds or overrides a responsive breakpoint, invalidating caches
    /// since cached media annotations depend on the table.
    pub fn set_breakpoint(&mut self, name: impl Into<String>, min_width: impl Into<String>) {
        self.breakpoints.set(name, min_width);
        self.bump_epoch();
    }

    /// Applies new cache capacities; existing entries are dropped.
    pub fn configure_cache(&mut self, cache: CacheConfig) {
        self.result_cache = BoundedCache::new(cache.result_capacity);
        self.token_cache = BoundedCache::new(cache.token_capacity);
    }

    pub fn clear_caches(&mut self) {
        self.result_cache.clear();
        self.token_cache.clear();
    }

    fn bump_epoch(&mut self) {
        self.epoch += 1;
        self.clear_caches();
    }

    /// Compiles a whitespace-separated token string into one merged
    /// style mapping. Unrecognized tokens contribute nothing and never
    /// abort the rest of the input.
    pub fn compile(&mut self, input: &str) -> StyleMap {
        let key = format!("{}:{}", self.epoch, input);
        if let Some(hit) = self.result_cache.get(&key) {
            return hit.clone();
        }

        let mut result = StyleMap::new();
        for token in input.split_whitespace() {
            let resolved = self.resolve_token(token);
            result.merge(&resolved.styles);
        }

        self.result_cache.insert(key, result.clone());
        result
    }

    /// Resolves a single token through the variant pipeline and the
    /// rule table. An empty `styles` map means the token produced
    /// nothing, which is a valid outcome.
    pub fn resolve_token(&mut self, token: &str) -> TokenStyles {
        let key = format!("{}|{}", self.epoch, token);
        if let Some(hit) = self.token_cache.get(&key) {
            return hit.clone();
        }

        let outcome = apply_variants(token, &self.breakpoints);
        let resolved = self.table.resolve(&outcome.matcher, &self.palette);
        if resolved.is_none() {
            self.warn_unknown(&outcome.matcher);
        }

        let mut styles = resolved.unwrap_or_default();
        if outcome.important {
            styles = styles.map_leaves(&|value| match value {
                StyleValue::Str(s) => StyleValue::Str(format!("{s} !important")),
                other => other,
            });
        }

        let resolved = TokenStyles {
            styles,
            pseudo_class: outcome.pseudo_class,
            media: outcome.media,
        };
        self.token_cache.insert(key, resolved.clone());
        resolved
    }

    /// Advisory for unrecognized attribute names: once per name, only
    /// in development builds of the structured-mapping backend. The
    /// CSS backend drops unknown tokens silently.
    fn warn_unknown(&mut self, matcher: &str) {
        if self.profile() != Profile::Native || !cfg!(debug_assertions) {
            return;
        }
        let attribute = matcher.split(':').next().unwrap_or_default();
        if attribute.is_empty() {
            return;
        }
        if self.warned.insert(attribute.to_string()) {
            log::warn!("unknown style token '{attribute}' was ignored");
        }
    }
}
