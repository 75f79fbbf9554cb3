//! # Mingled - compact style token compiler
//!
//! Mingled translates short, whitespace-separated style tokens
//! (`p:16`, `row:center|between`, `bg:blue:hover`) into style
//! properties. The same engine serves two backends:
//!
//! - **Structured mapping** ([`Profile::Native`]): each compile returns
//!   a merged property map for a host layout engine.
//! - **CSS** ([`Profile::Css`]): per-token resolution feeds the
//!   `mingled-web` crate, which emits and injects CSS rules.
//!
//! ## Quick start
//!
//! ```rust
//! use mingled::{Compiler, Profile, StyleValue};
//!
//! let mut compiler = Compiler::new(Profile::Native);
//! let styles = compiler.compile("row:center|between px:12 py:8 bg:gray-10 r:8");
//!
//! assert_eq!(
//!     styles.get("flexDirection").and_then(StyleValue::as_str),
//!     Some("row")
//! );
//! assert_eq!(styles.get("borderRadius"), Some(&StyleValue::Num(8.0)));
//! ```
//!
//! ## Token syntax
//!
//! `attribute[:value[|value...]][@breakpoint][!][:pseudo]`
//!
//! Variant suffixes are stripped in a fixed order (pseudo-class,
//! importance, breakpoint) before the attribute is matched against the
//! rule table. Unrecognized tokens resolve to nothing; they never fail
//! a compile.
//!
//! ## Modules
//!
//! - [`compiler`]: the compile entry points and caching
//! - [`rules`]: rule table, prefix index, handlers
//! - [`variants`]: pseudo-class / importance / breakpoint transforms
//! - [`palette`]: the named color palette
//! - [`cache`]: bounded insertion-ordered caches
//! - [`types`]: style fragments and values

pub mod cache;
pub mod compiler;
pub mod palette;
pub mod rules;
pub mod types;
pub mod variants;

pub use cache::BoundedCache;
pub use compiler::{CacheConfig, Compiler, TokenStyles};
pub use palette::Palette;
pub use rules::{Profile, RuleTable};
pub use types::{StyleMap, StyleValue};
pub use variants::{apply_variants, Breakpoints, VariantOutcome};
