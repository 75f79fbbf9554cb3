//! Deferred style injection.
//!
//! Generated CSS accumulates in a pending buffer; a flush is scheduled
//! for the next tick of the async runtime, and re-scheduling cancels
//! any flush that has not fired yet, so a burst of injections collapses
//! into one sink write. At most one flush is pending at a time.
//!
//! Flushing splits the buffer into individual rules and inserts each
//! into the sink. A rule the sink rejects is not retried: its text is
//! appended raw instead, trading rule granularity for guaranteed
//! application.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::host::{SharedSink, StyleSink};

pub struct InjectionScheduler {
    pending: Arc<Mutex<String>>,
    sink: SharedSink,
    flush_task: Option<JoinHandle<()>>,
}

impl InjectionScheduler {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            pending: Arc::new(Mutex::new(String::new())),
            sink,
            flush_task: None,
        }
    }

    /// Queues CSS and (re)schedules the deferred flush. Must be called
    /// within an async runtime.
    pub fn queue(&mut self, css: &str) {
        self.push_pending(css);
        self.schedule();
    }

    /// Queues CSS and flushes synchronously; used when batching is
    /// disabled.
    pub fn queue_sync(&mut self, css: &str) {
        self.push_pending(css);
        self.flush_now();
    }

    /// True while a scheduled flush has not fired.
    pub fn has_pending_flush(&self) -> bool {
        self.flush_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Cancels any scheduled flush and writes the buffer out now.
    pub fn flush_now(&mut self) {
        if let Some(task) = self.flush_task.take() {
            task.abort();
        }
        flush(&self.pending, &self.sink);
    }

    /// Waits for the scheduled flush to complete, if one is pending.
    pub async fn flushed(&mut self) {
        if let Some(task) = self.flush_task.take() {
            let _ = task.await;
        }
    }

    /// Drops any pending CSS and cancels the scheduled flush.
    pub fn clear(&mut self) {
        if let Some(task) = self.flush_task.take() {
            task.abort();
        }
        self.pending.lock().unwrap().clear();
    }

    fn push_pending(&self, css: &str) {
        let mut pending = self.pending.lock().unwrap();
        pending.push_str(css);
        pending.push('\n');
    }

    fn schedule(&mut self) {
        // Re-scheduling supersedes the previous flush.
        if let Some(task) = self.flush_task.take() {
            task.abort();
        }
        let pending = Arc::clone(&self.pending);
        let sink = Arc::clone(&self.sink);
        self.flush_task = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::ZERO).await;
            flush(&pending, &sink);
        }));
    }
}

impl Drop for InjectionScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.flush_task.take() {
            task.abort();
        }
    }
}

fn flush(pending: &Mutex<String>, sink: &Mutex<dyn StyleSink>) {
    let css = std::mem::take(&mut *pending.lock().unwrap());
    if css.is_empty() {
        return;
    }
    let mut sink = sink.lock().unwrap();
    for rule in css.split('\n').map(str::trim).filter(|rule| !rule.is_empty()) {
        if let Err(err) = sink.insert_rule(rule) {
            log::debug!("style sink rejected a rule, appending raw: {err}");
            sink.append_text(rule);
            sink.append_text("\n");
        }
    }
}
