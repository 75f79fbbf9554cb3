//! Facade crate re-exporting the Mingled style compiler.
//!
//! - [`mingled`]: the core engine and the structured-mapping backend
//! - [`mingled_web`]: CSS emission and injection for live documents
//!
//! ```rust
//! use mingled_rs::{Compiler, Profile, StyleValue};
//!
//! let mut compiler = Compiler::new(Profile::Native);
//! let styles = compiler.compile("p:16 bg:gray-10");
//! assert_eq!(styles.get("padding"), Some(&StyleValue::Num(16.0)));
//! ```

pub use mingled;
pub use mingled_web;

pub use mingled::{
    BoundedCache, Breakpoints, CacheConfig, Compiler, Palette, Profile, StyleMap, StyleValue,
    TokenStyles,
};
pub use mingled_web::{
    CssEmitter, DocumentClasses, HostElement, MemorySink, ResolvedClass, RuntimeConfig,
    RuntimeOptions, SharedSink, StyleSink, WebRuntime,
};
