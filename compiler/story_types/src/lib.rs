//! Type table and compilation context.
//!
//! The [`TypeTable`] maps type names and builtin type ids to
//! [`TypeDescriptor`]s. Builtin types occupy fixed ids (see
//! [`story_ir::TypeId`]); aliases declared by the story header
//! (`CHARACTERGUID`, `ITEMGUID`, ...) are allocated above them.
//!
//! [`CompilationContext`] bundles the table with the session's
//! [`DiagnosticSink`](story_diagnostic::DiagnosticSink). It is passed
//! explicitly to every lowering call and is `Sync`, so one context can serve
//! goals lowered on several threads.

mod context;
mod error;
mod table;

pub use context::CompilationContext;
pub use error::TypeError;
pub use table::{TypeDescriptor, TypeKind, TypeTable};
