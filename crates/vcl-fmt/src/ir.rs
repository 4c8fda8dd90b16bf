//! Wadler-Lindig document IR for VCL formatting.
//!
//! This module defines the intermediate representation between the AST walker
//! and the printer. The IR captures formatting intent (groups, indentation,
//! line breaks) without committing to a specific layout until printing time.

/// A document IR node in the Wadler-Lindig style.
///
/// The printer decides at each `Group` boundary whether to render flat (all on
/// one line) or broken (with line breaks and indentation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Literal text to emit verbatim.
    Text(String),
    /// A space in flat mode; a newline + indent in broken mode.
    Line,
    /// Nothing in flat mode; a newline + indent in broken mode.
    Softline,
    /// Always emits a newline + current indentation, regardless of mode.
    /// Any group containing one can never fit flat.
    Hardline,
    /// Increase indentation for the child IR by the configured indent size.
    Indent(Box<Doc>),
    /// Try to render the child flat (on one line). If it exceeds the remaining
    /// line width, render in broken mode instead.
    Group(Box<Doc>),
    /// A sequence of IR nodes rendered in order.
    Concat(Vec<Doc>),
    /// Produces no output.
    Empty,
}

// ── Helper constructors ─────────────────────────────────────────────────

/// Create a `Text` node from a string-like value.
pub fn text(s: impl Into<String>) -> Doc {
    Doc::Text(s.into())
}

/// Create a `Line` node (space in flat mode, newline in broken mode).
pub fn line() -> Doc {
    Doc::Line
}

/// Create a `Softline` node (nothing in flat mode, newline in broken mode).
pub fn softline() -> Doc {
    Doc::Softline
}

/// Create a `Hardline` node (always a newline).
pub fn hardline() -> Doc {
    Doc::Hardline
}

/// Create an `Indent` wrapper that increases indentation for its child.
pub fn indent(doc: Doc) -> Doc {
    Doc::Indent(Box::new(doc))
}

/// Create a `Group` that tries flat layout first, breaking if it exceeds width.
pub fn group(doc: Doc) -> Doc {
    Doc::Group(Box::new(doc))
}

/// Create a `Concat` from a vector of IR nodes.
pub fn concat(parts: Vec<Doc>) -> Doc {
    Doc::Concat(parts)
}

/// Interleave `separator` between `items`.
///
/// `join(sep, [a, b, c])` is sugar for `Concat([a, sep, b, sep, c])`; an
/// empty item list produces an empty document.
pub fn join(separator: Doc, items: Vec<Doc>) -> Doc {
    let mut parts = Vec::with_capacity(items.len().saturating_mul(2));
    for item in items {
        if !parts.is_empty() {
            parts.push(separator.clone());
        }
        parts.push(item);
    }
    Doc::Concat(parts)
}
