//! Variant transforms applied to a token before rule matching.
//!
//! Three transforms run in a fixed order, each rewriting the matcher
//! and attaching metadata:
//!
//! 1. pseudo-class suffix (`bg:blue:hover`)
//! 2. importance marker (`bg:blue!`)
//! 3. media breakpoint suffix (`w:100@md`)
//!
//! Metadata accumulates, so the grammar `attr:value@bp!:pseudo` carries
//! all three at once. Names outside the pseudo-class set or the
//! breakpoint table are left in the matcher as literal text.

use crate::rules::keywords::PSEUDO_CLASSES;

/// Breakpoint name to minimum viewport width.
///
/// Lookups are by exact name; the default table carries the four
/// standard sizes and can be extended or overridden per compiler.
#[derive(Clone, Debug)]
pub struct Breakpoints {
    entries: Vec<(String, String)>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        let entries = [
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
        ]
        .into_iter()
        .map(|(name, width)| (name.to_string(), width.to_string()))
        .collect();
        Self { entries }
    }
}

impl Breakpoints {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, width)| width.as_str())
    }

    /// Adds a breakpoint or overrides an existing one.
    pub fn set(&mut self, name: impl Into<String>, min_width: impl Into<String>) {
        let name = name.into();
        let min_width = min_width.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = min_width,
            None => self.entries.push((name, min_width)),
        }
    }
}

/// The result of running a token through the variant pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantOutcome {
    /// The matcher left for rule matching.
    pub matcher: String,
    /// Stripped pseudo-class name, if any.
    pub pseudo_class: Option<String>,
    /// A ready-to-use media query wrapper, if any.
    pub media: Option<String>,
    /// Whether the importance marker was present.
    pub important: bool,
}

/// Runs the three transforms in order on one token.
pub fn apply_variants(token: &str, breakpoints: &Breakpoints) -> VariantOutcome {
    let mut matcher = token;
    let mut pseudo_class = None;
    let mut media = None;
    let mut important = false;

    // 1. Pseudo-class suffix
    for name in PSEUDO_CLASSES.iter() {
        if let Some(rest) = matcher.strip_suffix(&format!(":{name}")) {
            matcher = rest;
            pseudo_class = Some(name.to_string());
            break;
        }
    }

    // 2. Importance marker
    if let Some(rest) = matcher.strip_suffix('!') {
        matcher = rest;
        important = true;
    }

    // 3. Media breakpoint suffix
    if let Some((rest, breakpoint)) = matcher.rsplit_once('@') {
        if let Some(min_width) = breakpoints.get(breakpoint) {
            media = Some(format!("@media (min-width: {min_width})"));
            matcher = rest;
        }
    }

    VariantOutcome {
        matcher: matcher.to_string(),
        pseudo_class,
        media,
        important,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(token: &str) -> VariantOutcome {
        apply_variants(token, &Breakpoints::default())
    }

    #[test]
    fn pseudo_class_suffix_is_stripped() {
        let outcome = run("bg:blue:hover");
        assert_eq!(outcome.matcher, "bg:blue");
        assert_eq!(outcome.pseudo_class.as_deref(), Some("hover"));
        assert!(!outcome.important);
        assert!(outcome.media.is_none());
    }

    #[test]
    fn focus_within_is_recognized_whole() {
        let outcome = run("bg:blue:focus-within");
        assert_eq!(outcome.matcher, "bg:blue");
        assert_eq!(outcome.pseudo_class.as_deref(), Some("focus-within"));
    }

    #[test]
    fn unknown_pseudo_name_stays_literal() {
        let outcome = run("bg:blue:glowing");
        assert_eq!(outcome.matcher, "bg:blue:glowing");
        assert!(outcome.pseudo_class.is_none());
    }

    #[test]
    fn importance_marker_is_stripped() {
        let outcome = run("bg:blue!");
        assert_eq!(outcome.matcher, "bg:blue");
        assert!(outcome.important);
    }

    #[test]
    fn breakpoint_suffix_becomes_media_query() {
        let outcome = run("w:100@md");
        assert_eq!(outcome.matcher, "w:100");
        assert_eq!(outcome.media.as_deref(), Some("@media (min-width: 768px)"));
    }

    #[test]
    fn unknown_breakpoint_stays_literal() {
        let outcome = run("w:100@huge");
        assert_eq!(outcome.matcher, "w:100@huge");
        assert!(outcome.media.is_none());
    }

    #[test]
    fn all_three_variants_compose() {
        let outcome = run("bg:blue@md!:hover");
        assert_eq!(outcome.matcher, "bg:blue");
        assert_eq!(outcome.pseudo_class.as_deref(), Some("hover"));
        assert!(outcome.important);
        assert_eq!(outcome.media.as_deref(), Some("@media (min-width: 768px)"));
    }

    #[test]
    fn custom_breakpoints_extend_the_table() {
        let mut breakpoints = Breakpoints::default();
        breakpoints.set("wide", "1600px");
        let outcome = apply_variants("w:100@wide", &breakpoints);
        assert_eq!(outcome.matcher, "w:100");
        assert_eq!(outcome.media.as_deref(), Some("@media (min-width: 1600px)"));
    }
}
