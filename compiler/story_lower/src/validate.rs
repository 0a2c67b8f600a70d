//! Structural validation of lowered goals.
//!
//! Runs after lowering in debug builds and is available to drivers and tests.
//! It checks what lowering guarantees by construction, so a failure is always
//! a bug in the pass (or hand-built IR), never a user error.

use story_ir::{IrCondition, IrGoal, IrRule, IrStatement, IrValue, SymbolRef};

use crate::{IrViolation, LowerError};

/// Check the structural invariants of a lowered goal.
///
/// - every rule belongs to the goal
/// - variable slots are dense (`variables[i].index == i`)
/// - every variable reference has a slot
/// - every symbol's arity equals its argument count
/// - goal completion targets the goal itself
///
/// # Errors
///
/// [`LowerError::InvalidIr`] with the first violation found.
pub fn validate_goal(goal: &IrGoal) -> Result<(), LowerError> {
    check_goal(goal).map_err(|violation| LowerError::InvalidIr {
        goal: goal.id,
        violation,
    })
}

fn check_goal(goal: &IrGoal) -> Result<(), IrViolation> {
    for fact in goal.init_section.iter().chain(&goal.exit_section) {
        check_arity(&fact.database, fact.elements.len())?;
    }
    for (index, rule) in goal.kb_section.iter().enumerate() {
        RuleChecker { goal, index, rule }.check()?;
    }
    Ok(())
}

struct RuleChecker<'a> {
    goal: &'a IrGoal,
    index: usize,
    rule: &'a IrRule,
}

impl RuleChecker<'_> {
    fn check(&self) -> Result<(), IrViolation> {
        if self.rule.goal != self.goal.id {
            return Err(IrViolation::ForeignRule {
                rule: self.index,
                found: self.rule.goal,
            });
        }
        for (position, slot) in self.rule.variables.iter().enumerate() {
            if slot.index as usize != position {
                return Err(IrViolation::SparseVariables {
                    rule: self.index,
                    position,
                    index: slot.index,
                });
            }
        }
        for condition in &self.rule.conditions {
            match condition {
                IrCondition::Func { func, params, .. } => {
                    check_arity(func, params.len())?;
                    self.check_values(params)?;
                }
                IrCondition::Binary { lvalue, rvalue, .. } => {
                    self.check_value(lvalue)?;
                    self.check_value(rvalue)?;
                }
            }
        }
        for action in &self.rule.actions {
            match action {
                IrStatement::GoalCompleted { goal } if *goal != self.goal.id => {
                    return Err(IrViolation::ForeignCompletion {
                        rule: self.index,
                        found: *goal,
                    });
                }
                IrStatement::GoalCompleted { .. } => {}
                IrStatement::Call { func, params, .. } => {
                    check_arity(func, params.len())?;
                    self.check_values(params)?;
                }
            }
        }
        Ok(())
    }

    fn check_values(&self, values: &[IrValue]) -> Result<(), IrViolation> {
        values.iter().try_for_each(|value| self.check_value(value))
    }

    fn check_value(&self, value: &IrValue) -> Result<(), IrViolation> {
        match value {
            IrValue::Variable(var) if self.rule.variable(var.index).is_none() => {
                Err(IrViolation::UnboundVariable {
                    rule: self.index,
                    index: var.index,
                    count: self.rule.variables.len(),
                })
            }
            IrValue::Variable(_) | IrValue::Constant(_) => Ok(()),
        }
    }
}

fn check_arity(symbol: &SymbolRef, args: usize) -> Result<(), IrViolation> {
    if symbol.arity as usize == args {
        Ok(())
    } else {
        Err(IrViolation::ArityMismatch {
            symbol: symbol.to_string(),
            args,
        })
    }
}
