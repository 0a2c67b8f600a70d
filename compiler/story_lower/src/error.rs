//! Fatal lowering errors.
//!
//! User-facing problems (unknown type names, conflicting annotations) are
//! diagnostics and never stop lowering. The errors here abort lowering of the
//! current goal: they mean the caller broke a contract with the pass, or the
//! pass produced malformed IR.

use story_diagnostic::{Diagnostic, ErrorCode};
use story_ir::{ConstantKind, GoalId, TypeId};
use thiserror::Error;

/// Error that aborts lowering of one goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    /// The context has no builtin descriptor for a fixed builtin id.
    #[error("builtin type {id:?} for {kind} literals is not registered in the type table")]
    MissingBuiltin { id: TypeId, kind: ConstantKind },

    /// Lowered IR failed structural validation.
    #[error("invalid IR for {goal}: {violation}")]
    InvalidIr {
        goal: GoalId,
        #[source]
        violation: IrViolation,
    },
}

impl LowerError {
    /// Internal compiler error diagnostic for this failure.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(self.to_string())
            .with_note("this is a bug in the goal compiler or its type table setup")
    }
}

/// A structural invariant broken by a lowered goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrViolation {
    #[error("rule {rule} belongs to {found}")]
    ForeignRule { rule: usize, found: GoalId },

    #[error("rule {rule} has variable slot {index} at position {position}")]
    SparseVariables {
        rule: usize,
        position: usize,
        index: u32,
    },

    #[error("rule {rule} references variable {index} but has {count} slots")]
    UnboundVariable { rule: usize, index: u32, count: usize },

    #[error("symbol `{symbol}` is used with {args} argument(s)")]
    ArityMismatch { symbol: String, args: usize },

    #[error("goal completion in rule {rule} targets {found}")]
    ForeignCompletion { rule: usize, found: GoalId },
}
