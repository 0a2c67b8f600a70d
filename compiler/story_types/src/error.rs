//! Type table registration errors.

use story_ir::TypeId;
use thiserror::Error;

/// Error raised while populating a [`TypeTable`](crate::TypeTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("type `{name}` is already declared")]
    Duplicate { name: String },

    #[error("alias `{name}` refers to unknown base type {base:?}")]
    UnknownBase { name: String, base: TypeId },

    #[error("{id:?} is outside the builtin type range")]
    NotBuiltin { id: TypeId },

    #[error("type table is full")]
    Overflow,
}
