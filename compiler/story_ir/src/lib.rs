//! Story IR - AST and Intermediate Representation Types
//!
//! This crate contains the data structures shared by every phase of the
//! story goal compiler:
//! - Spans for source locations
//! - `TypeId` handles into the type table
//! - `SymbolRef` (`name/arity`) and `GoalId` handles
//! - AST nodes as produced by the goal parser (`ast`)
//! - Lowered IR nodes as consumed by codegen (`ir`)
//!
//! # Design Philosophy
//!
//! - **Closed node families**: every polymorphic node is an enum, so adding a
//!   variant is a compile error at every site that lowers or consumes it.
//! - **Handles, not pointers**: rules refer to their goal through `GoalId`,
//!   types are `TypeId` handles owned by the type table.
//!
//! Types that contain floats store them as raw bits so every node is
//! `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod constant;
pub mod ir;
mod span;
mod symbol;
mod type_id;

pub use ast::{
    AstAction, AstBinaryCondition, AstCondition, AstConstant, AstFact, AstFuncCondition, AstGoal,
    AstLocalVar, AstParentTargetEdge, AstRule, AstStatement, AstValue, RelOp, RuleType,
};
pub use constant::{ConstantKind, ConstantValue};
pub use ir::{
    IrCondition, IrConstant, IrFact, IrGoal, IrGoalRef, IrRule, IrRuleVariable, IrStatement,
    IrValue, IrVariable,
};
pub use span::{Span, SpanError};
pub use symbol::{GoalId, SymbolRef};
pub use type_id::TypeId;
