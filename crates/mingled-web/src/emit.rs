//! CSS rule emission.
//!
//! Turns resolved tokens into CSS text: selector escaping (cached),
//! pseudo-class suffixing, media wrapping, and one level of `&`-nested
//! rule emission. Declarations keep insertion order; rules follow
//! input-token order.

use mingled::{BoundedCache, Compiler, StyleValue};

/// Escaped selectors are tiny but recomputed constantly; a modest
/// bound keeps the cache from growing with one-off class names.
const SELECTOR_CACHE_CAPACITY: usize = 1000;

/// A resolved token ready for emission.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedClass {
    /// The escaped class selector (`.bg\:blue\:hover`), without any
    /// pseudo-class suffix.
    pub selector: String,
    pub styles: mingled::StyleMap,
    pub media: Option<String>,
    pub pseudo_class: Option<String>,
}

/// Stateful emitter owning the selector-escape cache.
pub struct CssEmitter {
    escape_cache: BoundedCache<String>,
}

impl Default for CssEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CssEmitter {
    pub fn new() -> Self {
        Self {
            escape_cache: BoundedCache::new(SELECTOR_CACHE_CAPACITY),
        }
    }

    /// Escapes every character outside `[A-Za-z0-9_-]` with a
    /// backslash, caching per raw class name.
    pub fn escape_selector(&mut self, raw: &str) -> String {
        if let Some(hit) = self.escape_cache.get(raw) {
            return hit.clone();
        }
        let mut escaped = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                escaped.push(c);
            } else {
                escaped.push('\\');
                escaped.push(c);
            }
        }
        self.escape_cache.insert(raw.to_string(), escaped.clone());
        escaped
    }

    /// Resolves one token into an emission-ready class. The selector is
    /// built from the original token text so it matches the class
    /// attribute as written in the document.
    pub fn resolve_class(&mut self, compiler: &mut Compiler, token: &str) -> ResolvedClass {
        let resolved = compiler.resolve_token(token);
        ResolvedClass {
            selector: format!(".{}", self.escape_selector(token)),
            styles: resolved.styles,
            media: resolved.media,
            pseudo_class: resolved.pseudo_class,
        }
    }

    /// Generates CSS text for a sequence of class tokens. Tokens that
    /// resolve to zero properties emit nothing.
    pub fn generate_css<'a, I>(&mut self, compiler: &mut Compiler, tokens: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rules = Vec::new();

        for token in tokens {
            let class = self.resolve_class(compiler, token);
            if class.styles.is_empty() {
                continue;
            }

            let selector = match &class.pseudo_class {
                Some(pseudo) => format!("{}:{pseudo}", class.selector),
                None => class.selector.clone(),
            };

            let mut decls = Vec::new();
            let mut nested = Vec::new();
            for (prop, value) in class.styles.iter() {
                match value {
                    StyleValue::Nested(group) => {
                        if let Some(suffix) = prop.strip_prefix('&') {
                            nested.push((suffix, group));
                        }
                    }
                    flat => decls.push(format!("{prop}: {flat}")),
                }
            }

            let wrap = |rule: String| match &class.media {
                Some(media) => format!("{media} {{ {rule} }}"),
                None => rule,
            };

            if !decls.is_empty() {
                rules.push(wrap(format!("{selector} {{ {} }}", decls.join("; "))));
            }

            for (suffix, group) in nested {
                let nested_decls: Vec<String> = group
                    .iter()
                    .filter_map(|(prop, value)| match value {
                        StyleValue::Nested(_) => None,
                        flat => Some(format!("{prop}: {flat}")),
                    })
                    .collect();
                if !nested_decls.is_empty() {
                    rules.push(wrap(format!(
                        "{selector}{suffix} {{ {} }}",
                        nested_decls.join("; ")
                    )));
                }
            }
        }

        rules.join("\n")
    }

    pub fn clear_cache(&mut self) {
        self.escape_cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_everything_outside_the_safe_set() {
        let mut emitter = CssEmitter::new();
        assert_eq!(emitter.escape_selector("bg:blue"), "bg\\:blue");
        assert_eq!(emitter.escape_selector("w:100@md"), "w\\:100\\@md");
        assert_eq!(emitter.escape_selector("p-4_x"), "p-4_x");
        // cached second call returns the same text
        assert_eq!(emitter.escape_selector("bg:blue"), "bg\\:blue");
    }
}
