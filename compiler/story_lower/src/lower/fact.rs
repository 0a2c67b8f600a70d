//! Fact and constant lowering.

use story_ir::{AstConstant, AstFact, IrConstant, IrFact};

use super::Lowerer;
use crate::{resolve_symbol, LowerError};

impl Lowerer<'_> {
    pub(super) fn lower_facts(&self, facts: &[AstFact]) -> Result<Vec<IrFact>, LowerError> {
        facts.iter().map(|fact| self.lower_fact(fact)).collect()
    }

    fn lower_fact(&self, fact: &AstFact) -> Result<IrFact, LowerError> {
        let elements = fact
            .elements
            .iter()
            .map(|element| self.lower_constant(element))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IrFact {
            database: resolve_symbol(&fact.database, fact.elements.len()),
            not: fact.not,
            elements,
        })
    }

    pub(super) fn lower_constant(&self, constant: &AstConstant) -> Result<IrConstant, LowerError> {
        let resolved = self.types.resolve(
            constant.type_name.as_deref(),
            constant.value.kind(),
            constant.span,
        )?;
        Ok(IrConstant {
            value: constant.value.clone(),
            ty: resolved.ty,
            inferred_type: resolved.inferred,
        })
    }
}
