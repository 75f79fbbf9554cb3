//! Host environment boundaries.
//!
//! The runtime talks to its host exclusively through these traits: a
//! style sink for generated CSS, an element handle for class
//! application, and a document enumeration for the initial scan. A DOM
//! binding implements them over the live document; [`MemorySink`] keeps
//! everything in memory for tests and server-side collection.

use std::sync::{Arc, Mutex};

use crate::error::SinkError;

/// Where generated CSS ends up.
///
/// `insert_rule` receives one rule at a time and may reject it;
/// `append_text` is the always-succeeding raw fallback.
pub trait StyleSink: Send {
    fn insert_rule(&mut self, rule: &str) -> Result<(), SinkError>;
    fn append_text(&mut self, css: &str);
}

/// A sink shared between the runtime and its flush task.
pub type SharedSink = Arc<Mutex<dyn StyleSink>>;

/// An opaque element handle accepting class names.
pub trait HostElement {
    fn add_classes(&mut self, classes: &[&str]);
}

/// Enumerates every class attribute value present in the live document.
pub trait DocumentClasses {
    fn class_names(&self) -> Vec<String>;
}

/// An in-memory sink: inserted rules and raw fallback text are kept
/// separately so callers can inspect exactly what was applied.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub rules: Vec<String>,
    pub raw: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole sheet as text, inserted rules first.
    pub fn text(&self) -> String {
        let mut text = self.rules.join("\n");
        if !self.raw.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&self.raw);
        }
        text
    }
}

impl StyleSink for MemorySink {
    fn insert_rule(&mut self, rule: &str) -> Result<(), SinkError> {
        self.rules.push(rule.to_string());
        Ok(())
    }

    fn append_text(&mut self, css: &str) {
        self.raw.push_str(css);
    }
}
