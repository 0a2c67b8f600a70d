//! Append-only diagnostic sink.
//!
//! One sink is shared by every goal compiled in a session. Appends go through
//! a mutex so goals may be lowered on several threads at once; each append
//! is atomic, so the diagnostics of one call never interleave with another's.
//!
//! # Example
//!
//! ```text
//! let sink = DiagnosticSink::new();
//! sink.emit(Diagnostic::error(ErrorCode::E2001).with_message("..."));
//! assert!(sink.has_errors());
//! let diagnostics = sink.take();
//! ```

use std::fmt;

use parking_lot::Mutex;

use crate::{Diagnostic, ErrorCode, Severity};

/// Thread-safe, append-only collection of diagnostics.
#[derive(Default)]
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }

    /// Number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    /// Number of warning-severity diagnostics.
    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.lock().iter().any(Diagnostic::is_error)
    }

    /// Number of diagnostics carrying `code`.
    pub fn count_code(&self, code: ErrorCode) -> usize {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.code == code)
            .count()
    }

    /// Copy of all diagnostics in emission order.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Remove and return all diagnostics in emission order.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("diagnostics", &*self.diagnostics.lock())
            .finish()
    }
}
