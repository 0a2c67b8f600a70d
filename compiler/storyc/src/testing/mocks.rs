//! Mock parser and test goal constructors.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use story_ir::{AstAction, AstCondition, AstFact, AstGoal, AstRule, AstValue};

use crate::GoalParser;

/// Parser backed by a map of path → AST.
///
/// Paths without an entry fail to parse. Every request is recorded so tests
/// can check which goals were parsed.
#[derive(Default)]
pub struct MockParser {
    goals: FxHashMap<PathBuf, AstGoal>,
    requests: Mutex<Vec<PathBuf>>,
}

impl MockParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the AST returned for `path`.
    #[must_use]
    pub fn with_goal(mut self, path: impl Into<PathBuf>, goal: AstGoal) -> Self {
        self.goals.insert(path.into(), goal);
        self
    }

    /// Paths requested so far, in request order.
    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests.lock().clone()
    }
}

impl GoalParser for MockParser {
    fn parse_goal(&self, path: &Path) -> Option<AstGoal> {
        self.requests.lock().push(path.to_path_buf());
        self.goals.get(path).cloned()
    }
}

/// `INIT AtStart(); KB IF HasItem(x) THEN GiveXP(x);` under the given name.
pub fn give_xp_goal(name: &str) -> AstGoal {
    let mut goal = AstGoal::new(name);
    goal.init_section.push(AstFact::new("AtStart", Vec::new()));
    goal.kb_section.push(AstRule {
        conditions: vec![AstCondition::func("HasItem", vec![AstValue::var("x")])],
        actions: vec![AstAction::call("GiveXP", vec![AstValue::var("x")])],
        ..AstRule::default()
    });
    goal
}
