//! Per-rule variable binding.

use rustc_hash::FxHashMap;
use story_diagnostic::{Diagnostic, ErrorCode};
use story_ir::{IrRuleVariable, IrVariable, Span, TypeId};

use crate::{RebindPolicy, TypeResolver};

/// Variable table for one rule.
///
/// Each distinct name gets the next dense index on first reference. The type
/// is fixed by the first reference; later annotations never change it, but
/// they are still checked against the type table.
pub struct VariableBinder<'a> {
    resolver: TypeResolver<'a>,
    policy: RebindPolicy,
    slots: Vec<IrRuleVariable>,
    /// Span of each slot's first reference.
    first_spans: Vec<Span>,
    by_name: FxHashMap<String, u32>,
}

impl<'a> VariableBinder<'a> {
    pub fn new(resolver: TypeResolver<'a>, policy: RebindPolicy) -> Self {
        VariableBinder {
            resolver,
            policy,
            slots: Vec::new(),
            first_spans: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Bind a reference to `name`, allocating a slot on first sight.
    ///
    /// The returned variable carries the slot's bound type.
    pub fn bind(&mut self, name: &str, explicit_type: Option<&str>, span: Span) -> IrVariable {
        if let Some(&index) = self.by_name.get(name) {
            let bound = self.slots[index as usize].ty;
            if let Some(annotation) = explicit_type {
                self.check_rebind(index, bound, annotation, span);
            }
            return IrVariable { index, ty: bound };
        }

        let ty = explicit_type
            .and_then(|annotation| self.resolver.resolve_annotation(annotation, span));
        let index = self.next_index();
        tracing::trace!(variable = name, index, ?ty, "bound variable");
        self.slots.push(IrRuleVariable {
            index,
            name: name.to_owned(),
            ty,
        });
        self.first_spans.push(span);
        self.by_name.insert(name.to_owned(), index);
        IrVariable { index, ty }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Variable slots in index order.
    pub fn finish(self) -> Vec<IrRuleVariable> {
        self.slots
    }

    fn next_index(&self) -> u32 {
        u32::try_from(self.slots.len()).unwrap_or(u32::MAX)
    }

    /// Later annotations are always resolved so unknown names get `E2001`.
    /// Only `Warn` compares them against the bound type.
    fn check_rebind(&self, index: u32, bound: Option<TypeId>, annotation: &str, span: Span) {
        let Some(ty) = self.resolver.resolve_annotation(annotation, span) else {
            return;
        };
        if self.policy == RebindPolicy::KeepFirst || bound == Some(ty) {
            return;
        }
        let slot = &self.slots[index as usize];
        let ctx = self.resolver.context();
        let previous = bound
            .and_then(|id| ctx.types().name(id))
            .map_or_else(|| "no type".to_owned(), |bound| format!("type `{bound}`"));
        let mut diagnostic = Diagnostic::warning(ErrorCode::W2001)
            .with_message(format!(
                "variable `{}` is annotated `{annotation}` but is already bound with {previous}",
                slot.name
            ))
            .with_optional_label(span, "annotation ignored");
        let first = self.first_spans[index as usize];
        if !first.is_dummy() {
            diagnostic = diagnostic.with_secondary_label(first, "first bound here");
        }
        ctx.emit(diagnostic.with_note("the first annotation of a variable decides its type"));
    }
}
