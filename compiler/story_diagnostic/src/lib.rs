//! Diagnostic system for goal compilation.
//!
//! User-facing problems found while compiling goals are reported as
//! [`Diagnostic`]s with:
//! - an error code for searchability
//! - a message (what went wrong)
//! - an optional primary span (where it went wrong)
//! - notes (why)
//!
//! Diagnostics are appended to a [`DiagnosticSink`], which is shared by every
//! goal compiled in a session and is safe to append to from several threads.
//!
//! ```text
//! sink.emit(
//!     Diagnostic::error(ErrorCode::E2001)
//!         .with_message("type `FOO` does not exist")
//!         .with_label(span, "unknown type"),
//! );
//! ```
//!
//! Rendering diagnostics for humans belongs to the tools embedding the
//! compiler; `Display` here is a single-line form for logs and tests.

mod diagnostic;
mod error_code;
pub mod sink;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use sink::DiagnosticSink;
