//! Compilation context shared by lowering passes.

use story_diagnostic::{Diagnostic, DiagnosticSink};
use story_ir::TypeId;

use crate::{TypeDescriptor, TypeTable};

/// Types plus the diagnostic sink for one compilation session.
///
/// Passed by reference into every lowering call. The type table is
/// read-only from the passes' point of view; the sink is append-only and
/// internally synchronised.
#[derive(Debug, Default)]
pub struct CompilationContext {
    types: TypeTable,
    diagnostics: DiagnosticSink,
}

impl CompilationContext {
    pub fn new(types: TypeTable) -> Self {
        CompilationContext {
            types,
            diagnostics: DiagnosticSink::new(),
        }
    }

    /// Context with only the builtin types declared.
    pub fn with_builtins() -> Self {
        Self::new(TypeTable::with_builtins())
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    /// Look up a type by name.
    pub fn lookup_type(&self, name: &str) -> Option<TypeId> {
        self.types.lookup(name)
    }

    /// Builtin type descriptor by its fixed id.
    pub fn builtin_type(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.builtin(id)
    }

    /// Append a diagnostic to the session sink.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.emit(diagnostic);
    }
}
