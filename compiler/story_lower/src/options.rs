//! Lowering options.

/// What the binder does when a variable is annotated again in the same rule.
///
/// The first annotation always decides the variable's type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RebindPolicy {
    /// Ignore later annotations.
    #[default]
    KeepFirst,
    /// Resolve later annotations and emit `W2001` when they name a different
    /// type than the bound one.
    Warn,
}

/// Options for [`lower_goal_with`](crate::lower_goal_with).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LowerOptions {
    pub rebind_policy: RebindPolicy,
}

impl LowerOptions {
    #[must_use]
    pub fn with_rebind_policy(mut self, rebind_policy: RebindPolicy) -> Self {
        self.rebind_policy = rebind_policy;
        self
    }
}
