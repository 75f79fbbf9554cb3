//! The web runtime: CSS compilation, injection, and document scanning.

use std::collections::HashSet;

use bitflags::bitflags;

use mingled::{CacheConfig, Compiler, Profile};

use crate::emit::CssEmitter;
use crate::host::{DocumentClasses, HostElement, SharedSink};
use crate::scheduler::InjectionScheduler;

bitflags! {
    /// Behavior switches for the web runtime.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RuntimeOptions: u8 {
        /// Keep compiler caches enabled.
        const ENABLE_CACHE = 1 << 0;
        /// Coalesce injections into one deferred flush per tick.
        /// Disabled, every injection writes to the sink immediately.
        const BATCH_UPDATES = 1 << 1;
    }
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        RuntimeOptions::ENABLE_CACHE | RuntimeOptions::BATCH_UPDATES
    }
}

/// Construction-time configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeConfig {
    pub options: RuntimeOptions,
    pub cache: CacheConfig,
}

/// Owns a CSS-profile compiler, the emitter, the injection scheduler,
/// and the monotonically growing set of already-injected tokens.
pub struct WebRuntime {
    compiler: Compiler,
    emitter: CssEmitter,
    scheduler: InjectionScheduler,
    injected: HashSet<String>,
    options: RuntimeOptions,
}

impl WebRuntime {
    pub fn new(sink: SharedSink) -> Self {
        Self::with_config(sink, RuntimeConfig::default())
    }

    pub fn with_config(sink: SharedSink, config: RuntimeConfig) -> Self {
        let cache = if config.options.contains(RuntimeOptions::ENABLE_CACHE) {
            config.cache
        } else {
            CacheConfig {
                result_capacity: 0,
                token_capacity: 0,
            }
        };
        Self {
            compiler: Compiler::with_cache(Profile::Css, cache),
            emitter: CssEmitter::new(),
            scheduler: InjectionScheduler::new(sink),
            injected: HashSet::new(),
            options: config.options,
        }
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn compiler_mut(&mut self) -> &mut Compiler {
        &mut self.compiler
    }

    /// Merges or replaces the palette; cached color tokens are
    /// invalidated.
    pub fn set_colors<I, K, V>(&mut self, entries: I, replace: bool)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.compiler.set_colors(entries, replace);
    }

    pub fn set_breakpoint(&mut self, name: impl Into<String>, min_width: impl Into<String>) {
        self.compiler.set_breakpoint(name, min_width);
    }

    /// Generates CSS text for a whitespace-separated class string
    /// without touching the injection state.
    pub fn generate_css(&mut self, classes: &str) -> String {
        self.emitter
            .generate_css(&mut self.compiler, classes.split_whitespace())
    }

    /// Injects CSS for tokens never seen before; repeat tokens are
    /// deduplicated against the runtime-lifetime emitted set.
    pub fn inject(&mut self, classes: &str) {
        let new_tokens: Vec<String> = classes
            .split_whitespace()
            .filter(|token| !self.injected.contains(*token))
            .map(str::to_string)
            .collect();
        if new_tokens.is_empty() {
            return;
        }

        let css = self
            .emitter
            .generate_css(&mut self.compiler, new_tokens.iter().map(String::as_str));
        if css.is_empty() {
            return;
        }

        if self.options.contains(RuntimeOptions::BATCH_UPDATES) {
            self.scheduler.queue(&css);
        } else {
            self.scheduler.queue_sync(&css);
        }
        self.injected.extend(new_tokens);
    }

    /// Injects CSS for the class tokens, then forwards them to the
    /// host's native class primitive.
    pub fn apply(&mut self, element: &mut dyn HostElement, classes: &str) {
        self.inject(classes);
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        if !tokens.is_empty() {
            element.add_classes(&tokens);
        }
    }

    /// Scans the document's class attributes and injects CSS for every
    /// class that resolves to a non-empty fragment. Resolution runs the
    /// full variant-aware path, so suffix variants like `bg:blue:hover`
    /// are detected.
    pub fn scan_document(&mut self, document: &dyn DocumentClasses) {
        let mut found: Vec<String> = Vec::new();
        for name in document.class_names() {
            if name.is_empty() || self.injected.contains(&name) || found.contains(&name) {
                continue;
            }
            if !self.compiler.resolve_token(&name).styles.is_empty() {
                found.push(name);
            }
        }
        if found.is_empty() {
            return;
        }
        let classes = found.join(" ");
        self.inject(&classes);
    }

    /// True while a deferred flush is scheduled but has not fired.
    pub fn has_pending_flush(&self) -> bool {
        self.scheduler.has_pending_flush()
    }

    /// Forces the pending buffer out to the sink immediately.
    pub fn flush_now(&mut self) {
        self.scheduler.flush_now();
    }

    /// Waits for the scheduled flush to complete.
    pub async fn flushed(&mut self) {
        self.scheduler.flushed().await;
    }

    /// Clears the emitted-token set, all caches, and any pending CSS.
    /// The sink's existing content is the host's to manage.
    pub fn reset(&mut self) {
        self.injected.clear();
        self.compiler.clear_caches();
        self.emitter.clear_cache();
        self.scheduler.clear();
    }
}
