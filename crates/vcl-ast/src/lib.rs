//! Typed AST for the Fastly VCL configuration language.
//!
//! Defines the closed vocabulary of VCL syntax nodes: declarations (ACLs,
//! tables, backends, directors, subroutines, ...), statements, expressions,
//! literals, and the token vocabularies for types and operators.
//!
//! The tree is plain owned data: immutable once built, acyclic, and cheap to
//! walk by reference. It is produced by an external parser and consumed
//! read-only by downstream passes such as the formatter; no pass mutates it.

pub mod ast;
pub mod op;
pub mod ty;

pub use ast::{
    AclEntry, Case, Declaration, ElseBranch, Expr, Literal, ObjectProperty, Stmt, TableEntry,
    Variable, Vcl,
};
pub use op::{AssignmentOperator, BinaryOperator, UnaryOperator};
pub use ty::{TimeUnit, Type};
