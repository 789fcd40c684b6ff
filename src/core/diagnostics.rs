//! Diagnostic sink implementations.
//!
//! A sink receives human-readable tracing of facade operations. It is
//! write-only: nothing it does can change lot state or a return value.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Write-only diagnostic output.
pub trait DiagnosticSink {
    /// Append a fragment to the current line.
    fn fragment(&mut self, text: &str);
    /// Append `text` and terminate the current line.
    fn line(&mut self, text: &str);
}

/// Shared handle, so a caller can keep reading a sink it handed to a lot.
impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Rc<RefCell<S>> {
    fn fragment(&mut self, text: &str) {
        self.borrow_mut().fragment(text);
    }

    fn line(&mut self, text: &str) {
        self.borrow_mut().line(text);
    }
}

/// Sink that forwards each completed line as a `tracing` debug event.
#[derive(Debug, Default)]
pub struct TracingSink {
    pending: String,
}

impl TracingSink {
    /// Create a sink with an empty line buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for TracingSink {
    fn fragment(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn line(&mut self, text: &str) {
        self.pending.push_str(text);
        tracing::debug!(target: "parking_grid::diagnostics", "{}", self.pending);
        self.pending.clear();
    }
}

/// In-memory sink for testing and dev, keeping the most recent lines.
#[derive(Debug)]
pub struct InMemorySink {
    lines: VecDeque<String>,
    pending: String,
    max_lines: usize,
}

impl InMemorySink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_lines.min(1024)),
            pending: String::new(),
            max_lines,
        }
    }

    /// Retrieve a snapshot of completed lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

impl DiagnosticSink for InMemorySink {
    fn fragment(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn line(&mut self, text: &str) {
        self.pending.push_str(text);
        if self.max_lines == 0 {
            self.pending.clear();
            return;
        }
        if self.lines.len() >= self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(std::mem::take(&mut self.pending));
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn fragment(&mut self, _text: &str) {}

    fn line(&mut self, _text: &str) {}
}
