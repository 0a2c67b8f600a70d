//! Parser collaborator interface.

use std::path::Path;

use story_ir::AstGoal;

/// Produces the AST of one goal source.
///
/// Returning `None` means the source failed to parse. The parser reports its
/// own syntax errors; the session records only that the goal was skipped.
pub trait GoalParser {
    fn parse_goal(&self, path: &Path) -> Option<AstGoal>;
}

impl<P: GoalParser + ?Sized> GoalParser for &P {
    fn parse_goal(&self, path: &Path) -> Option<AstGoal> {
        (**self).parse_goal(path)
    }
}
