//! Type identifier handle.
//!
//! A `TypeId` is an index into the type table owned by the compilation
//! context. The builtin ids are a stable contract with that table and with
//! codegen: they match the numeric type ids of the story runtime and must
//! not be renumbered.

use std::fmt;

/// Handle to a type descriptor in the type table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Builtin types (fixed ids) ===

    /// Placeholder for "no type". Never stored in lowered IR.
    pub const UNKNOWN: TypeId = TypeId(0);
    /// 32-bit signed integer.
    pub const INTEGER: TypeId = TypeId(1);
    /// 64-bit signed integer.
    pub const INTEGER64: TypeId = TypeId(2);
    /// 32-bit float.
    pub const REAL: TypeId = TypeId(3);
    /// String.
    pub const STRING: TypeId = TypeId(4);
    /// Name / GUID string (game object reference).
    pub const GUIDSTRING: TypeId = TypeId(5);

    /// Ids below this value are reserved for builtin types.
    pub const FIRST_ALIAS: u32 = 16;

    /// Create from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this id is in the reserved builtin range.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_ALIAS
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeId::UNKNOWN => write!(f, "TypeId(unknown)"),
            TypeId::INTEGER => write!(f, "TypeId(INTEGER)"),
            TypeId::INTEGER64 => write!(f, "TypeId(INTEGER64)"),
            TypeId::REAL => write!(f, "TypeId(REAL)"),
            TypeId::STRING => write!(f, "TypeId(STRING)"),
            TypeId::GUIDSTRING => write!(f, "TypeId(GUIDSTRING)"),
            TypeId(raw) => write!(f, "TypeId({raw})"),
        }
    }
}

#[cfg(test)]
mod tests;
