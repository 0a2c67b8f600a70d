//! Compilation sessions: parse and lower goals against one context.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use story_diagnostic::{Diagnostic, ErrorCode};
use story_ir::{GoalId, IrGoal};
use story_lower::{lower_goal_with, LowerError, LowerOptions};
use story_types::CompilationContext;
use thiserror::Error;

use crate::GoalParser;

/// Session configuration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SessionOptions {
    pub lower: LowerOptions,
    /// Lower batches on the rayon pool.
    pub parallel: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            lower: LowerOptions::default(),
            parallel: true,
        }
    }
}

/// Why a goal produced no IR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("goal `{}` failed to parse", path.display())]
    ParseFailed { path: PathBuf },

    #[error(transparent)]
    Lower(#[from] LowerError),

    #[error("batch of {count} goals exceeds the goal id range")]
    TooManyGoals { count: usize },
}

/// A compilation session.
///
/// Owns the parser and the context; every goal compiled through the session
/// shares the context's type table and diagnostic sink.
pub struct Session<P> {
    parser: P,
    ctx: CompilationContext,
    options: SessionOptions,
}

impl<P: GoalParser> Session<P> {
    pub fn new(parser: P, ctx: CompilationContext) -> Self {
        Self::with_options(parser, ctx, SessionOptions::default())
    }

    pub fn with_options(parser: P, ctx: CompilationContext, options: SessionOptions) -> Self {
        Session {
            parser,
            ctx,
            options,
        }
    }

    pub fn context(&self) -> &CompilationContext {
        &self.ctx
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Parse and lower one goal.
    ///
    /// A parse failure emits `E1001` and skips lowering. A fatal lowering
    /// error emits `E9001`. User errors found while lowering are only
    /// diagnostics; the goal still compiles.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display(), %id))]
    pub fn compile_goal(&self, path: &Path, id: GoalId) -> Result<IrGoal, CompileError> {
        let Some(ast) = self.parser.parse_goal(path) else {
            tracing::debug!("parse failed, skipping lowering");
            let error = CompileError::ParseFailed {
                path: path.to_path_buf(),
            };
            self.ctx.emit(
                Diagnostic::error(ErrorCode::E1001)
                    .with_message(error.to_string())
                    .with_note("no IR is produced for a goal that does not parse"),
            );
            return Err(error);
        };

        lower_goal_with(&ast, id, &self.ctx, &self.options.lower).map_err(|error| {
            tracing::warn!(%error, "lowering aborted");
            self.ctx.emit(error.to_diagnostic());
            CompileError::from(error)
        })
    }
}

impl<P: GoalParser + Sync> Session<P> {
    /// Compile a batch of goals. Goal ids follow input position.
    ///
    /// Results are returned in input order whether or not the batch runs in
    /// parallel.
    pub fn compile_all(
        &self,
        paths: &[PathBuf],
    ) -> Result<Vec<Result<IrGoal, CompileError>>, CompileError> {
        if u32::try_from(paths.len()).is_err() {
            return Err(CompileError::TooManyGoals { count: paths.len() });
        }
        tracing::debug!(
            goals = paths.len(),
            parallel = self.options.parallel,
            "compiling batch"
        );

        let compile = |(index, path): (usize, &PathBuf)| {
            let id = u32::try_from(index).map_or(GoalId::new(u32::MAX), GoalId::new);
            self.compile_goal(path, id)
        };
        let results = if self.options.parallel {
            paths.par_iter().enumerate().map(compile).collect()
        } else {
            paths.iter().enumerate().map(compile).collect()
        };
        Ok(results)
    }
}
