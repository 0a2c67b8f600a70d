//! Type resolution for constants and variable annotations.

use story_diagnostic::{Diagnostic, ErrorCode};
use story_ir::{ConstantKind, Span, TypeId};
use story_types::CompilationContext;

use crate::LowerError;

/// Builtin type of an untyped literal, by syntactic kind.
///
/// `Unknown` literals have no type.
pub const fn builtin_for_kind(kind: ConstantKind) -> Option<TypeId> {
    match kind {
        ConstantKind::Unknown => None,
        ConstantKind::Integer => Some(TypeId::INTEGER),
        ConstantKind::Float => Some(TypeId::REAL),
        ConstantKind::String => Some(TypeId::STRING),
        ConstantKind::Name => Some(TypeId::GUIDSTRING),
    }
}

/// Outcome of resolving a value's type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolvedType {
    /// Resolved type, `None` when unknown or unresolvable.
    pub ty: Option<TypeId>,
    /// `true` when derived from the literal kind rather than an annotation.
    pub inferred: bool,
}

impl ResolvedType {
    pub const fn explicit(ty: Option<TypeId>) -> Self {
        ResolvedType {
            ty,
            inferred: false,
        }
    }

    pub const fn inferred(ty: Option<TypeId>) -> Self {
        ResolvedType { ty, inferred: true }
    }
}

/// Resolves type annotations and literal kinds against a context.
#[derive(Copy, Clone)]
pub struct TypeResolver<'a> {
    ctx: &'a CompilationContext,
}

impl<'a> TypeResolver<'a> {
    pub fn new(ctx: &'a CompilationContext) -> Self {
        TypeResolver { ctx }
    }

    pub fn context(&self) -> &'a CompilationContext {
        self.ctx
    }

    /// Resolve a constant's type.
    ///
    /// An explicit annotation wins over the literal kind. An annotation that
    /// names no known type emits `E2001` and resolves to no type.
    ///
    /// # Errors
    ///
    /// [`LowerError::MissingBuiltin`] if the context lacks the builtin type
    /// an untyped literal maps to.
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        kind: ConstantKind,
        span: Span,
    ) -> Result<ResolvedType, LowerError> {
        match explicit {
            Some(name) => Ok(ResolvedType::explicit(self.resolve_annotation(name, span))),
            None => self.infer(kind).map(ResolvedType::inferred),
        }
    }

    /// Resolve an explicit type name. Emits `E2001` when it is unknown.
    pub fn resolve_annotation(&self, name: &str, span: Span) -> Option<TypeId> {
        let ty = self.ctx.lookup_type(name);
        if ty.is_none() {
            tracing::debug!(type_name = name, %span, "unresolved type annotation");
            self.ctx.emit(
                Diagnostic::error(ErrorCode::UNRESOLVED_TYPE)
                    .with_message(format!("type `{name}` does not exist"))
                    .with_optional_label(span, "unknown type"),
            );
        }
        ty
    }

    fn infer(self, kind: ConstantKind) -> Result<Option<TypeId>, LowerError> {
        let Some(id) = builtin_for_kind(kind) else {
            return Ok(None);
        };
        match self.ctx.builtin_type(id) {
            Some(descriptor) => Ok(Some(descriptor.id)),
            None => Err(LowerError::MissingBuiltin { id, kind }),
        }
    }
}
