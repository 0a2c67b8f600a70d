//! Testing utilities for the goal compiler driver.
//!
//! - **mocks**: an in-memory [`GoalParser`](crate::GoalParser) and AST
//!   builders for common goal shapes

pub mod mocks;

pub use mocks::{give_xp_goal, MockParser};
