//! Rule, condition and action lowering.

use story_ir::{
    AstAction, AstCondition, AstRule, AstStatement, AstValue, IrCondition, IrRule, IrStatement,
    IrValue,
};

use super::Lowerer;
use crate::{resolve_symbol, LowerError, VariableBinder};

impl Lowerer<'_> {
    /// Lower one rule. Conditions are bound before actions, so variable
    /// indices follow source order.
    pub(super) fn lower_rule(&self, index: usize, rule: &AstRule) -> Result<IrRule, LowerError> {
        let mut binder = self.binder();

        let conditions = rule
            .conditions
            .iter()
            .map(|condition| self.lower_condition(condition, &mut binder))
            .collect::<Result<Vec<_>, _>>()?;
        let actions = rule
            .actions
            .iter()
            .map(|action| self.lower_action(action, &mut binder))
            .collect::<Result<Vec<_>, _>>()?;
        let variables = binder.finish();

        tracing::trace!(
            rule = index,
            rule_type = ?rule.rule_type,
            conditions = conditions.len(),
            actions = actions.len(),
            variables = variables.len(),
            "lowered rule"
        );

        Ok(IrRule {
            goal: self.goal,
            rule_type: rule.rule_type,
            conditions,
            actions,
            variables,
        })
    }

    fn lower_condition(
        &self,
        condition: &AstCondition,
        binder: &mut VariableBinder<'_>,
    ) -> Result<IrCondition, LowerError> {
        match condition {
            AstCondition::Func(func) => Ok(IrCondition::Func {
                func: resolve_symbol(&func.name, func.params.len()),
                not: func.not,
                params: self.lower_values(&func.params, binder)?,
            }),
            AstCondition::Binary(binary) => {
                let lvalue = self.lower_value(&binary.lvalue, binder)?;
                let rvalue = self.lower_value(&binary.rvalue, binder)?;
                Ok(IrCondition::Binary {
                    lvalue,
                    op: binary.op,
                    rvalue,
                })
            }
        }
    }

    fn lower_action(
        &self,
        action: &AstAction,
        binder: &mut VariableBinder<'_>,
    ) -> Result<IrStatement, LowerError> {
        match action {
            AstAction::GoalCompleted { .. } => Ok(IrStatement::GoalCompleted { goal: self.goal }),
            AstAction::Call(statement) => self.lower_call(statement, binder),
        }
    }

    fn lower_call(
        &self,
        statement: &AstStatement,
        binder: &mut VariableBinder<'_>,
    ) -> Result<IrStatement, LowerError> {
        Ok(IrStatement::Call {
            func: resolve_symbol(&statement.name, statement.params.len()),
            not: statement.not,
            params: self.lower_values(&statement.params, binder)?,
        })
    }

    fn lower_values(
        &self,
        values: &[AstValue],
        binder: &mut VariableBinder<'_>,
    ) -> Result<Vec<IrValue>, LowerError> {
        values
            .iter()
            .map(|value| self.lower_value(value, binder))
            .collect()
    }

    fn lower_value(
        &self,
        value: &AstValue,
        binder: &mut VariableBinder<'_>,
    ) -> Result<IrValue, LowerError> {
        match value {
            AstValue::Constant(constant) => self.lower_constant(constant).map(IrValue::Constant),
            AstValue::LocalVar(var) => Ok(IrValue::Variable(binder.bind(
                &var.name,
                var.type_name.as_deref(),
                var.span,
            ))),
        }
    }
}
