//! Symbol and goal handles.

use std::fmt;

/// Reference to a function, predicate, or database symbol.
///
/// Identity is the `(name, arity)` pair: `Foo/2` and `Foo/3` are distinct
/// symbols, and two references built independently from the same pair are
/// the same symbol. References are plain values; nothing deduplicates them
/// into a shared table at this stage.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolRef {
    pub name: String,
    pub arity: u32,
}

impl SymbolRef {
    pub fn new(name: impl Into<String>, arity: u32) -> Self {
        SymbolRef {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Debug for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// Non-owning handle to a goal in the caller's goal table.
///
/// Rules point back at their goal through this id rather than a reference,
/// so goals and rules never form an ownership cycle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct GoalId(u32);

impl GoalId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        GoalId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into a goal table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "goal#{}", self.0)
    }
}
