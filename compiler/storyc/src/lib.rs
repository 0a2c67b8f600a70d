//! Story goal compiler driver.
//!
//! Ties the phases together for a compilation session:
//!
//! ```text
//! path ──► GoalParser::parse_goal ──► AstGoal
//!                                       │
//!                                       ▼
//!                      story_lower::lower_goal ──► IrGoal
//! ```
//!
//! Parse failures and user errors are reported through the session's
//! diagnostic sink. Goals in a batch are lowered in parallel and results come
//! back in input order.

pub mod parser;
pub mod session;
pub mod testing;
mod tracing_setup;

pub use parser::GoalParser;
pub use session::{CompileError, Session, SessionOptions};
pub use tracing_setup::init_tracing;

// Re-exports for convenience
pub use story_diagnostic::{Diagnostic, ErrorCode, Severity};
pub use story_ir::{AstGoal, GoalId, IrGoal};
pub use story_lower::{LowerError, LowerOptions, RebindPolicy};
pub use story_types::{CompilationContext, TypeTable};
