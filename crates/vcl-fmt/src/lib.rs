//! Canonical formatter core for Fastly VCL.
//!
//! This crate renders a parsed VCL AST into a single canonical textual form
//! using the Wadler-Lindig document IR approach. It works by:
//!
//! 1. Walking the AST (from `vcl-ast`) to produce a `Doc` document tree
//! 2. Printing the document to a string, respecting line width constraints
//!
//! The core is a pure function: no I/O, no shared state, and identical input
//! plus identical configuration always produces byte-identical output. The
//! host tool owns parsing, file discovery, CLI flags, and appending the final
//! newline.

pub mod error;
pub mod ir;
pub mod printer;
pub mod walker;

pub use error::FormatError;
pub use printer::FormatConfig;

use vcl_ast::Vcl;

/// Format a VCL source unit according to the given configuration.
///
/// Walks the AST to produce the document IR and prints it. All-or-nothing:
/// on error no partial output is produced.
///
/// # Example
///
/// ```
/// use vcl_ast::{Declaration, Vcl};
/// use vcl_fmt::{format_vcl, FormatConfig};
///
/// let vcl = Vcl {
///     declarations: vec![Declaration::Penaltybox {
///         name: "banned_users".into(),
///     }],
/// };
/// let formatted = format_vcl(&vcl, &FormatConfig::default()).unwrap();
/// assert_eq!(formatted, "penaltybox banned_users {}");
/// ```
pub fn format_vcl(vcl: &Vcl, config: &FormatConfig) -> Result<String, FormatError> {
    let doc = walker::walk_vcl(vcl)?;
    Ok(printer::print(&doc, config))
}

#[cfg(test)]
mod test_support {
    use vcl_ast::{
        AclEntry, Declaration, Expr, Literal, ObjectProperty, Stmt, TableEntry, Variable, Vcl,
    };

    pub fn vcl(declarations: Vec<Declaration>) -> Vcl {
        Vcl { declarations }
    }

    pub fn str_lit(s: &str) -> Expr {
        Expr::Literal(Literal::String {
            tokens: vec![s.to_string()],
        })
    }

    pub fn var(name: &str) -> Expr {
        Expr::Variable(Variable::new(name))
    }

    pub fn prop(key: &str, value: Expr) -> ObjectProperty {
        ObjectProperty {
            key: key.into(),
            value,
        }
    }

    pub fn entry(key: &str, value: Expr) -> TableEntry {
        TableEntry {
            key: str_lit(key),
            value,
        }
    }

    pub fn acl_entry(negated: bool, address: &str, cidr: Option<u32>) -> AclEntry {
        AclEntry {
            negated,
            address: address.into(),
            cidr,
        }
    }

    pub fn sub(name: &str, body: Vec<Stmt>) -> Declaration {
        Declaration::Sub {
            name: name.into(),
            return_type: None,
            body,
        }
    }
}

#[cfg(test)]
mod determinism_tests {
    use vcl_ast::{AssignmentOperator, Declaration, Stmt, Type, Variable};

    use super::test_support::*;
    use super::{format_vcl, FormatConfig};

    fn sample() -> vcl_ast::Vcl {
        vcl(vec![
            Declaration::Acl {
                name: "office".into(),
                entries: vec![
                    acl_entry(false, "192.0.2.0", Some(24)),
                    acl_entry(true, "192.0.2.12", None),
                ],
            },
            Declaration::Table {
                name: "redirects".into(),
                value_type: None,
                entries: vec![
                    entry("/old/path", str_lit("https://other.hostname/new/path")),
                    entry("/another/path", str_lit("/new/path")),
                ],
            },
            sub(
                "vcl_recv",
                vec![Stmt::Set {
                    target: Variable {
                        name: "req".into(),
                        properties: vec!["http".into(), "X-Forwarded-For".into()],
                        sub_field: None,
                    },
                    operator: AssignmentOperator::Assign,
                    value: var("client.ip"),
                }],
            ),
        ])
    }

    #[test]
    fn identical_input_gives_byte_identical_output() {
        let config = FormatConfig::default();
        let first = format_vcl(&sample(), &config).unwrap();
        let second = format_vcl(&sample(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn formatting_the_described_tree_is_stable() {
        // The canonical text, fed back through the same AST, stays fixed:
        // the document build is pure and the layout depends only on the
        // tree and the config.
        let config = FormatConfig {
            indent_size: 2,
            max_width: 40,
        };
        let first = format_vcl(&sample(), &config).unwrap();
        let second = format_vcl(&sample(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn declare_return_type_tokens_are_stable() {
        let declarations = vcl(vec![Declaration::Sub {
            name: "compute_ttl".into(),
            return_type: Some(Type::Rtime),
            body: vec![Stmt::Return],
        }]);
        let out = format_vcl(&declarations, &FormatConfig::default()).unwrap();
        assert_eq!(out, "sub compute_ttl RTIME {\n  return;\n}");
    }
}
