//! Fatal error taxonomy for the AST-to-document walk.
//!
//! Formatting is all-or-nothing: any error aborts the whole operation with no
//! partial output. Both variants are contract violations in the upstream
//! parser, not runtime conditions to tolerate, so there is no recovery path.

use std::fmt;

use serde::Serialize;

/// An error raised while walking the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormatError {
    /// A grammar construct the formatter does not support (e.g. `switch`).
    Unsupported { kind: &'static str },
    /// A node is missing a child the grammar mandates (e.g. a `string`
    /// literal with no tokens). Distinct from [`FormatError::Unsupported`]:
    /// the node kind is known, its structure is not well-formed.
    MissingChild {
        kind: &'static str,
        field: &'static str,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unsupported { kind } => {
                write!(f, "`{kind}` is not supported yet")
            }
            FormatError::MissingChild { kind, field } => {
                write!(f, "`{kind}` node is missing its `{field}`")
            }
        }
    }
}

impl std::error::Error for FormatError {}
