//! Lowered goal IR
//!
//! The resolved form of one goal: every predicate reference is a
//! [`SymbolRef`], every value is either a typed constant or an index into the
//! owning rule's variable table, and types are [`TypeId`] handles (absent when
//! resolution failed or nothing was known).
//!
//! # Invariants
//!
//! - `IrGoal` sections have the same length and order as the AST sections
//!   they were lowered from.
//! - Within a rule, variable indices are dense from 0 and every
//!   `IrVariable::index` has a slot in `IrRule::variables`.
//! - Facts contain constants only.

use crate::ast::{RelOp, RuleType};
use crate::{ConstantKind, ConstantValue, GoalId, Span, SymbolRef, TypeId};

/// A lowered goal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrGoal {
    pub id: GoalId,
    pub name: String,
    pub init_section: Vec<IrFact>,
    pub kb_section: Vec<IrRule>,
    pub exit_section: Vec<IrFact>,
    pub parent_target_edges: Vec<IrGoalRef>,
}

/// Link to a parent goal by name, resolved by the goal linker.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrGoalRef {
    pub name: String,
    pub span: Span,
}

/// A lowered rule.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrRule {
    /// Owning goal.
    pub goal: GoalId,
    pub rule_type: RuleType,
    pub conditions: Vec<IrCondition>,
    pub actions: Vec<IrStatement>,
    /// Rule-local variables, `variables[i].index == i`.
    pub variables: Vec<IrRuleVariable>,
}

impl IrRule {
    /// Slot for a variable index.
    pub fn variable(&self, index: u32) -> Option<&IrRuleVariable> {
        self.variables.get(index as usize)
    }
}

/// A rule-local variable slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrRuleVariable {
    pub index: u32,
    pub name: String,
    pub ty: Option<TypeId>,
}

/// A lowered rule condition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IrCondition {
    Func {
        func: SymbolRef,
        not: bool,
        params: Vec<IrValue>,
    },
    Binary {
        lvalue: IrValue,
        op: RelOp,
        rvalue: IrValue,
    },
}

/// A lowered rule action.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IrStatement {
    /// Marks the owning goal as completed. Carries no symbol and no params.
    GoalCompleted { goal: GoalId },
    /// Predicate call or database assertion/retraction.
    Call {
        func: SymbolRef,
        not: bool,
        params: Vec<IrValue>,
    },
}

impl IrStatement {
    /// Called symbol; `None` for goal completion.
    pub fn func(&self) -> Option<&SymbolRef> {
        match self {
            IrStatement::GoalCompleted { .. } => None,
            IrStatement::Call { func, .. } => Some(func),
        }
    }

    /// Completed goal; `None` for calls.
    pub fn goal(&self) -> Option<GoalId> {
        match self {
            IrStatement::GoalCompleted { goal } => Some(*goal),
            IrStatement::Call { .. } => None,
        }
    }

    /// Call arguments (empty for goal completion).
    pub fn params(&self) -> &[IrValue] {
        match self {
            IrStatement::GoalCompleted { .. } => &[],
            IrStatement::Call { params, .. } => params,
        }
    }
}

/// A lowered argument value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IrValue {
    Constant(IrConstant),
    Variable(IrVariable),
}

impl IrValue {
    /// Resolved type of the value, if any.
    pub fn ty(&self) -> Option<TypeId> {
        match self {
            IrValue::Constant(c) => c.ty,
            IrValue::Variable(v) => v.ty,
        }
    }
}

/// A typed literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrConstant {
    pub value: ConstantValue,
    pub ty: Option<TypeId>,
    /// `true` when `ty` was derived from the literal kind, `false` when it
    /// came from an explicit annotation (resolved or not).
    pub inferred_type: bool,
}

impl IrConstant {
    /// Syntactic kind of the literal.
    pub fn value_type(&self) -> ConstantKind {
        self.value.kind()
    }
}

/// A reference to a rule-local variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrVariable {
    pub index: u32,
    pub ty: Option<TypeId>,
}

/// A lowered ground fact.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrFact {
    pub database: SymbolRef,
    pub not: bool,
    pub elements: Vec<IrConstant>,
}
