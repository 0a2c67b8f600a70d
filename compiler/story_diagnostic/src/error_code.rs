//! Error codes for all goal compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for all goal compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Parse errors
/// - E2xxx: Type resolution errors
/// - E9xxx: Internal compiler errors
///
/// Warnings use the same layout with a `W` prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// Goal source failed to parse
    E1001,

    // Type Errors (E2xxx)
    /// Unresolved type: an explicit type annotation names no known type
    E2001,

    // Internal Errors (E9xxx)
    /// Internal compiler error (lowering invariant violated)
    E9001,

    // Type Warnings (W2xxx)
    /// Variable re-annotated with a type different from its first annotation
    W2001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E9001,
        ErrorCode::W2001,
    ];

    /// Stable code for unresolved explicit type names.
    pub const UNRESOLVED_TYPE: ErrorCode = ErrorCode::E2001;

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E9001 => "E9001",
            ErrorCode::W2001 => "W2001",
        }
    }

    /// Short human description, used by `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "goal failed to parse",
            ErrorCode::E2001 => "unresolved type",
            ErrorCode::E9001 => "internal compiler error",
            ErrorCode::W2001 => "conflicting variable type annotation",
        }
    }

    /// Check if this is a parse error (E1xxx range).
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ErrorCode::E1001)
    }

    /// Check if this is a type error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }

    /// Check if this is an internal compiler error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }

    /// Check if this is a warning code (Wxxxx).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W2001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
