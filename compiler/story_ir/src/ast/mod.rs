//! Goal AST
//!
//! Syntax tree for one goal file as produced by the goal parser: init facts,
//! a knowledge base of rules, exit facts, and the parent goals this goal
//! participates under.
//!
//! Every polymorphic node (conditions, actions, values) is a closed enum.

mod operators;

pub use operators::RelOp;

use crate::{ConstantValue, Span};

/// A parsed goal.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstGoal {
    /// Goal name (usually taken from the goal's file name).
    pub name: String,
    /// Facts asserted when the goal becomes active.
    pub init_section: Vec<AstFact>,
    /// The goal's rules.
    pub kb_section: Vec<AstRule>,
    /// Facts applied when the goal completes.
    pub exit_section: Vec<AstFact>,
    /// Parent goals (`ParentTargetEdge "Name"`).
    pub parent_target_edges: Vec<AstParentTargetEdge>,
}

impl AstGoal {
    pub fn new(name: impl Into<String>) -> Self {
        AstGoal {
            name: name.into(),
            ..AstGoal::default()
        }
    }
}

/// Link to a parent goal by name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstParentTargetEdge {
    pub goal: String,
    pub span: Span,
}

impl AstParentTargetEdge {
    pub fn new(goal: impl Into<String>) -> Self {
        AstParentTargetEdge {
            goal: goal.into(),
            span: Span::DUMMY,
        }
    }
}

/// Kind of a rule.
///
/// Carried through lowering unchanged; only codegen interprets it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleType {
    /// `IF ... THEN ...` rule triggered by events and database changes.
    #[default]
    Rule,
    /// `PROC` procedure definition.
    Proc,
    /// `QRY` user query definition.
    Query,
}

/// A rule: conjunctive conditions and the actions run when they hold.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstRule {
    pub rule_type: RuleType,
    pub conditions: Vec<AstCondition>,
    pub actions: Vec<AstAction>,
    pub span: Span,
}

/// A rule condition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstCondition {
    /// Predicate / query / database condition: `[NOT] Name(params)`.
    Func(AstFuncCondition),
    /// Comparison: `lvalue op rvalue`.
    Binary(AstBinaryCondition),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstFuncCondition {
    pub name: String,
    pub not: bool,
    pub params: Vec<AstValue>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstBinaryCondition {
    pub lvalue: AstValue,
    pub op: RelOp,
    pub rvalue: AstValue,
    pub span: Span,
}

/// A rule action.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstAction {
    /// `GoalCompleted;`
    GoalCompleted { span: Span },
    /// Call / database assertion: `[NOT] Name(params);`
    Call(AstStatement),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstStatement {
    pub name: String,
    pub not: bool,
    pub params: Vec<AstValue>,
    pub span: Span,
}

/// A value appearing as a condition or statement argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstValue {
    Constant(AstConstant),
    LocalVar(AstLocalVar),
}

/// A rule-local variable reference, optionally annotated: `(INTEGER)_Count`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstLocalVar {
    pub name: String,
    pub type_name: Option<String>,
    pub span: Span,
}

/// A literal, optionally annotated with an explicit type name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstConstant {
    pub type_name: Option<String>,
    pub value: ConstantValue,
    pub span: Span,
}

impl AstConstant {
    pub fn new(value: ConstantValue) -> Self {
        AstConstant {
            type_name: None,
            value,
            span: Span::DUMMY,
        }
    }

    /// Attach an explicit type annotation.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl AstValue {
    /// Untyped local variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        AstValue::LocalVar(AstLocalVar {
            name: name.into(),
            type_name: None,
            span: Span::DUMMY,
        })
    }

    /// Local variable reference with an explicit type annotation.
    pub fn typed_var(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        AstValue::LocalVar(AstLocalVar {
            name: name.into(),
            type_name: Some(type_name.into()),
            span: Span::DUMMY,
        })
    }

    pub fn constant(value: ConstantValue) -> Self {
        AstValue::Constant(AstConstant::new(value))
    }
}

/// A ground fact: `[NOT] Database(elements);`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstFact {
    pub database: String,
    pub not: bool,
    pub elements: Vec<AstConstant>,
    pub span: Span,
}

impl AstFact {
    pub fn new(database: impl Into<String>, elements: Vec<AstConstant>) -> Self {
        AstFact {
            database: database.into(),
            not: false,
            elements,
            span: Span::DUMMY,
        }
    }
}

impl AstCondition {
    /// Positive predicate condition.
    pub fn func(name: impl Into<String>, params: Vec<AstValue>) -> Self {
        AstCondition::Func(AstFuncCondition {
            name: name.into(),
            not: false,
            params,
            span: Span::DUMMY,
        })
    }

    pub fn binary(lvalue: AstValue, op: RelOp, rvalue: AstValue) -> Self {
        AstCondition::Binary(AstBinaryCondition {
            lvalue,
            op,
            rvalue,
            span: Span::DUMMY,
        })
    }
}

impl AstAction {
    /// Positive call statement.
    pub fn call(name: impl Into<String>, params: Vec<AstValue>) -> Self {
        AstAction::Call(AstStatement {
            name: name.into(),
            not: false,
            params,
            span: Span::DUMMY,
        })
    }

    pub fn goal_completed() -> Self {
        AstAction::GoalCompleted { span: Span::DUMMY }
    }
}
