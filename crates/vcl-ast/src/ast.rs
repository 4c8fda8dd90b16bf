//! AST nodes for declarations, statements, expressions, and literals.
//!
//! Covers: Vcl, Declaration (acl, import, include, penaltybox, ratecounter,
//! table, backend, director, sub), Stmt, ElseBranch, Case, Expr, Literal,
//! Variable, ObjectProperty, AclEntry, TableEntry.

use serde::Serialize;

use crate::op::{AssignmentOperator, BinaryOperator, UnaryOperator};
use crate::ty::{TimeUnit, Type};

// ── Root ─────────────────────────────────────────────────────────────────

/// A complete VCL source unit: an ordered sequence of top-level declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vcl {
    pub declarations: Vec<Declaration>,
}

// ── Declarations ─────────────────────────────────────────────────────────

/// Any top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Declaration {
    /// `acl <name> { <entries> }`
    Acl { name: String, entries: Vec<AclEntry> },
    /// `import <ident>;`
    Import { ident: String },
    /// `include "<path>";`
    Include { path: String },
    /// `penaltybox <name> {}` — the body is empty by grammar.
    Penaltybox { name: String },
    /// `ratecounter <name> {}` — the body is empty by grammar.
    Ratecounter { name: String },
    /// `table <name> [<TYPE>] { <entries> }`
    Table {
        name: String,
        /// Value type tag; `None` means the default (STRING) and is omitted
        /// from output.
        value_type: Option<Type>,
        entries: Vec<TableEntry>,
    },
    /// `backend <name> { <properties> }`
    Backend {
        name: String,
        properties: Vec<ObjectProperty>,
    },
    /// `director <name> <kind> { <properties> <directions> }`
    Director {
        name: String,
        /// The director policy identifier (`random`, `hash`, `client`, ...).
        kind: String,
        properties: Vec<ObjectProperty>,
        /// Direction entries; each is an object literal such as
        /// `{ .backend = b0; .weight = 1; }`.
        directions: Vec<Expr>,
    },
    /// `sub <name> [<RETURN_TYPE>] { <body> }`
    Sub {
        name: String,
        return_type: Option<Type>,
        body: Vec<Stmt>,
    },
}

/// One entry of an `acl` declaration: `[!] "<address>"[/<cidr>];`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AclEntry {
    pub negated: bool,
    /// The address text, unquoted. The formatter re-quotes it.
    pub address: String,
    /// Network prefix length, attached as `/<cidr>` when present.
    pub cidr: Option<u32>,
}

/// One entry of a `table` declaration: `<key>: <value>,`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    pub key: Expr,
    pub value: Expr,
}

// ── Statements ───────────────────────────────────────────────────────────

/// A statement in a subroutine body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// `declare <target> <TYPE>;`
    Declare { target: Variable, ty: Type },
    /// `set <target> <op> <value>;`
    Set {
        target: Variable,
        operator: AssignmentOperator,
        value: Expr,
    },
    /// `unset <target>;`
    Unset { target: Variable },
    /// `add <target> = <value>;`
    Add { target: Variable, value: Expr },
    /// `call <target>;`
    Call { target: Variable },
    /// `if (<condition>) { <body> } [else ...]`
    ///
    /// The else branch, when present, is either the next `if` of an
    /// `else if` chain or a terminal block; chains form a singly-linked
    /// list through [`ElseBranch::If`].
    If {
        condition: Expr,
        body: Vec<Stmt>,
        else_branch: Option<ElseBranch>,
    },
    /// `error [<status>] [<message>];`
    Error {
        status: Option<u64>,
        message: Option<Expr>,
    },
    /// `esi;`
    Esi,
    /// `restart;`
    Restart,
    /// `return;`
    Return,
    /// `synthetic <value>;` or `synthetic.base64 <value>;`
    Synthetic { base64: bool, value: Expr },
    /// `log <message>;`
    Log { message: Expr },
    /// `switch (<subject>) { <cases> }` — parsed by the upstream grammar
    /// but not yet supported by the formatter.
    Switch { subject: Expr, cases: Vec<Case> },
}

/// The branch following `else` in an `if` statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ElseBranch {
    /// `else if (...) { ... }` — the inner statement is always [`Stmt::If`].
    If(Box<Stmt>),
    /// `else { ... }`
    Block(Vec<Stmt>),
}

/// One arm of a `switch` statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    /// The match expression; `None` for the `default` arm.
    pub matcher: Option<Expr>,
    pub body: Vec<Stmt>,
}

// ── Expressions ──────────────────────────────────────────────────────────

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// `<lhs> <op> <rhs>`
    Binary {
        lhs: Box<Expr>,
        operator: BinaryOperator,
        rhs: Box<Expr>,
    },
    /// `<op><rhs>`
    Unary { operator: UnaryOperator, rhs: Box<Expr> },
    /// Explicit concatenation: tokens joined by `+`.
    StringConcat { tokens: Vec<Expr> },
    Literal(Literal),
    Variable(Variable),
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    /// `{ .key = value; ... }`
    Object { properties: Vec<ObjectProperty> },
    /// A string literal. Multiple tokens represent the grammar's implicit
    /// concatenation of adjacent strings; each token is quoted separately.
    String { tokens: Vec<String> },
    /// A relative-time literal: value immediately followed by its unit
    /// (`10s`, `2h`).
    Rtime { value: f64, unit: TimeUnit },
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// A percentage literal: value followed by `%`.
    Parcent(f64),
}

/// A variable reference: `<name>[.<prop>...][:<sub_field>]`
///
/// `properties` is the dotted path after the base name (e.g. `http`,
/// `X-Forwarded-For` in `req.http.X-Forwarded-For`); `sub_field` is the
/// colon-separated accessor (e.g. `param` in `req.url:param`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    pub properties: Vec<String>,
    pub sub_field: Option<String>,
}

impl Variable {
    /// A bare variable with no property path or sub-field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            sub_field: None,
        }
    }
}

/// One property of a backend, director, or object literal:
/// `.<key> = <value>;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Expr,
}
