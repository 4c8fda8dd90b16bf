//! The VCL type vocabulary and time units.

use std::fmt;

use serde::Serialize;

/// A VCL value type, as written in `declare`, `table`, and `sub` headers.
///
/// The set is closed by the grammar. `Unknown` is the escape hatch for type
/// tokens outside the built-in set (e.g. vendor extensions): it carries the
/// verbatim source text and renders as exactly that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Type {
    Acl,
    Backend,
    Bool,
    Float,
    Id,
    Integer,
    Ip,
    Rtime,
    String,
    Time,
    Void,
    /// A type token outside the built-in set, kept verbatim.
    Unknown(String),
}

impl Type {
    /// The literal token text for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Type::Acl => "ACL",
            Type::Backend => "BACKEND",
            Type::Bool => "BOOL",
            Type::Float => "FLOAT",
            Type::Id => "ID",
            Type::Integer => "INTEGER",
            Type::Ip => "IP",
            Type::Rtime => "RTIME",
            Type::String => "STRING",
            Type::Time => "TIME",
            Type::Void => "VOID",
            Type::Unknown(value) => value,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit suffix of an `RTIME` literal (`10s`, `2h`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    Ms,
    S,
    M,
    H,
    D,
    Y,
}

impl TimeUnit {
    /// The literal suffix text for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
            TimeUnit::M => "m",
            TimeUnit::H => "h",
            TimeUnit::D => "d",
            TimeUnit::Y => "y",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
