//! Goal AST → IR lowering for the story goal compiler.
//!
//! This crate transforms a parsed goal (`AstGoal`) into its resolved form
//! (`IrGoal`), ready for codegen.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Parse → **Lower** → Link goals → Codegen
//! ```
//!
//! # What Happens During Lowering
//!
//! 1. **Symbol resolution** (`symbol`): every predicate, query, call and
//!    database reference becomes a `name/arity` [`SymbolRef`]. No catalog
//!    check happens here, so forward references lower cleanly.
//! 2. **Type resolution** (`types`): explicit annotations are looked up in
//!    the context's type table; untyped literals get the builtin type of
//!    their syntactic kind. Unknown type names are reported as `E2001` and
//!    lowering continues with an absent type.
//! 3. **Variable binding** (`binder`): each distinct variable name in a rule
//!    gets a dense index in first-reference order.
//! 4. **Validation** (`validate`): structural invariants of the produced IR
//!    are checked after lowering in debug builds.
//!
//! Lowering is a pure function of the AST and the type table. The only side
//! effect is appending diagnostics to the context's sink, so re-running it
//! yields identical IR and identical diagnostics.
//!
//! [`SymbolRef`]: story_ir::SymbolRef

mod binder;
mod error;
mod lower;
mod options;
mod symbol;
mod types;
mod validate;

pub use binder::VariableBinder;
pub use error::{IrViolation, LowerError};
pub use lower::{lower_goal, lower_goal_with};
pub use options::{LowerOptions, RebindPolicy};
pub use symbol::resolve_symbol;
pub use types::{builtin_for_kind, ResolvedType, TypeResolver};
pub use validate::validate_goal;
