//! Goal lowering: `AstGoal` → `IrGoal`.
//!
//! The lowering walks each section of the goal in order and maps it one to
//! one. Facts and parent edges need no rule scope. Each rule gets its own
//! [`VariableBinder`], so variables never leak between rules.

mod fact;
mod rule;

use story_ir::{AstGoal, AstParentTargetEdge, GoalId, IrGoal, IrGoalRef};
use story_types::CompilationContext;

use crate::{LowerError, LowerOptions, RebindPolicy, TypeResolver, VariableBinder};

/// Lower a goal with default options.
///
/// Diagnostics for user errors go to the context's sink; lowering still
/// produces a complete IR goal in that case.
///
/// # Errors
///
/// Returns [`LowerError`] when the context is missing a builtin type, or
/// when the produced IR fails validation (debug builds).
pub fn lower_goal(
    ast: &AstGoal,
    id: GoalId,
    ctx: &CompilationContext,
) -> Result<IrGoal, LowerError> {
    lower_goal_with(ast, id, ctx, &LowerOptions::default())
}

/// Lower a goal with explicit options.
///
/// # Errors
///
/// See [`lower_goal`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        goal = %ast.name,
        %id,
        init = ast.init_section.len(),
        rules = ast.kb_section.len(),
        exit = ast.exit_section.len(),
    )
)]
pub fn lower_goal_with(
    ast: &AstGoal,
    id: GoalId,
    ctx: &CompilationContext,
    options: &LowerOptions,
) -> Result<IrGoal, LowerError> {
    let lowerer = Lowerer::new(id, ctx, *options);
    let goal = lowerer.lower(ast)?;

    #[cfg(debug_assertions)]
    crate::validate_goal(&goal)?;

    tracing::debug!(
        variables = goal.kb_section.iter().map(|r| r.variables.len()).sum::<usize>(),
        "lowered goal"
    );
    Ok(goal)
}

/// Lowering state for one goal.
///
/// Holds only what is shared across rules; rule-scoped state lives in the
/// binder created per rule.
pub(crate) struct Lowerer<'a> {
    goal: GoalId,
    types: TypeResolver<'a>,
    rebind_policy: RebindPolicy,
}

impl<'a> Lowerer<'a> {
    fn new(goal: GoalId, ctx: &'a CompilationContext, options: LowerOptions) -> Self {
        Lowerer {
            goal,
            types: TypeResolver::new(ctx),
            rebind_policy: options.rebind_policy,
        }
    }

    fn lower(&self, ast: &AstGoal) -> Result<IrGoal, LowerError> {
        let init_section = self.lower_facts(&ast.init_section)?;
        let kb_section = ast
            .kb_section
            .iter()
            .enumerate()
            .map(|(index, rule)| self.lower_rule(index, rule))
            .collect::<Result<Vec<_>, _>>()?;
        let exit_section = self.lower_facts(&ast.exit_section)?;
        let parent_target_edges = ast
            .parent_target_edges
            .iter()
            .map(lower_parent_edge)
            .collect();

        Ok(IrGoal {
            id: self.goal,
            name: ast.name.clone(),
            init_section,
            kb_section,
            exit_section,
            parent_target_edges,
        })
    }

    fn binder(&self) -> VariableBinder<'a> {
        VariableBinder::new(self.types, self.rebind_policy)
    }
}

/// Parent edges stay name links; the goal linker resolves them.
fn lower_parent_edge(edge: &AstParentTargetEdge) -> IrGoalRef {
    IrGoalRef {
        name: edge.goal.clone(),
        span: edge.span,
    }
}

#[cfg(test)]
mod tests;
