//! Literal constant payloads shared by the AST and the IR.

use std::fmt;

/// Syntactic kind of a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantKind {
    /// Literal whose kind the parser could not determine.
    Unknown,
    Integer,
    Float,
    String,
    /// Bare name / GUID literal.
    Name,
}

impl ConstantKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ConstantKind::Unknown => "unknown",
            ConstantKind::Integer => "integer",
            ConstantKind::Float => "float",
            ConstantKind::String => "string",
            ConstantKind::Name => "name",
        }
    }
}

impl fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal payload.
///
/// Exactly one payload exists and it always matches the literal's kind.
/// Floats are stored as `f32` bits so the value is `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantValue {
    Unknown,
    Integer(i64),
    Float(u32),
    String(String),
    Name(String),
}

impl ConstantValue {
    /// Build a float constant from its value.
    pub fn float(value: f32) -> Self {
        ConstantValue::Float(value.to_bits())
    }

    /// Syntactic kind of this payload.
    pub const fn kind(&self) -> ConstantKind {
        match self {
            ConstantValue::Unknown => ConstantKind::Unknown,
            ConstantValue::Integer(_) => ConstantKind::Integer,
            ConstantValue::Float(_) => ConstantKind::Float,
            ConstantValue::String(_) => ConstantKind::String,
            ConstantValue::Name(_) => ConstantKind::Name,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConstantValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            ConstantValue::Float(bits) => Some(f32::from_bits(*bits)),
            _ => None,
        }
    }

    /// String payload of a string or name literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(s) | ConstantValue::Name(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Unknown => write!(f, "Unknown"),
            ConstantValue::Integer(v) => write!(f, "Integer({v})"),
            ConstantValue::Float(bits) => write!(f, "Float({})", f32::from_bits(*bits)),
            ConstantValue::String(s) => write!(f, "String({s:?})"),
            ConstantValue::Name(s) => write!(f, "Name({s})"),
        }
    }
}
