//! # mingled-web - CSS backend for the Mingled style compiler
//!
//! Turns compact style tokens into CSS rules and injects them into a
//! live document through a host-provided sink. The engine (tokenizer,
//! rule table, variants, caches) lives in the `mingled` crate; this
//! crate adds:
//!
//! - [`emit::CssEmitter`]: selector escaping and rule text generation
//! - [`scheduler::InjectionScheduler`]: one deferred, coalesced flush
//!   per tick with per-rule raw-text fallback
//! - [`runtime::WebRuntime`]: the public entry points (`generate_css`,
//!   `inject`, `apply`, `scan_document`)
//! - [`host`]: the traits a DOM binding implements
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use mingled_web::{MemorySink, WebRuntime};
//!
//! let sink = Arc::new(Mutex::new(MemorySink::new()));
//! let mut runtime = WebRuntime::new(sink);
//!
//! let css = runtime.generate_css("p:12 bg:blue:hover");
//! assert!(css.contains(".p\\:12 { padding: 0.75rem }"));
//! assert!(css.contains(".bg\\:blue\\:hover:hover"));
//! ```

pub mod emit;
pub mod error;
pub mod host;
pub mod runtime;
pub mod scheduler;

pub use emit::{CssEmitter, ResolvedClass};
pub use error::SinkError;
pub use host::{DocumentClasses, HostElement, MemorySink, SharedSink, StyleSink};
pub use runtime::{RuntimeConfig, RuntimeOptions, WebRuntime};
pub use scheduler::InjectionScheduler;
