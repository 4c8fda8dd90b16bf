//! AST-to-document walker for VCL.
//!
//! Walks the typed AST from `vcl-ast` and converts every node into its `Doc`
//! shape. Dispatch is exhaustive over the closed vocabulary; adding a grammar
//! construct forces a compile error at every match here. The walk is pure and
//! borrows the tree read-only.

use vcl_ast::{
    AclEntry, Declaration, ElseBranch, Expr, Literal, ObjectProperty, Stmt, TableEntry, Variable,
    Vcl,
};

use crate::error::FormatError;
use crate::ir::{concat, group, hardline, indent, join, line, softline, text, Doc};

/// Walk a VCL source unit and produce its document.
///
/// Top-level declarations are separated by a blank line (a double `Line`
/// separator; the document root always renders in broken mode).
pub fn walk_vcl(vcl: &Vcl) -> Result<Doc, FormatError> {
    let declarations = vcl
        .declarations
        .iter()
        .map(walk_declaration)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join(concat(vec![line(), line()]), declarations))
}

// ── Declarations ─────────────────────────────────────────────────────────

fn walk_declaration(decl: &Declaration) -> Result<Doc, FormatError> {
    match decl {
        Declaration::Acl { name, entries } => {
            if entries.is_empty() {
                return Ok(text(format!("acl {name} {{}}")));
            }
            let entries = entries.iter().map(walk_acl_entry).collect();
            Ok(group(concat(vec![
                text(format!("acl {name} {{")),
                indent(concat(vec![line(), join(line(), entries)])),
                line(),
                text("}"),
            ])))
        }
        Declaration::Import { ident } => Ok(text(format!("import {ident};"))),
        Declaration::Include { path } => Ok(text(format!("include \"{path}\";"))),
        // Bodies are empty by grammar; these never break.
        Declaration::Penaltybox { name } => Ok(text(format!("penaltybox {name} {{}}"))),
        Declaration::Ratecounter { name } => Ok(text(format!("ratecounter {name} {{}}"))),
        Declaration::Table {
            name,
            value_type,
            entries,
        } => {
            let header = match value_type {
                Some(ty) => format!("table {name} {ty} {{"),
                None => format!("table {name} {{"),
            };
            if entries.is_empty() {
                return Ok(text(header + "}"));
            }
            let entries = entries
                .iter()
                .map(walk_table_entry)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(group(concat(vec![
                text(header),
                indent(concat(vec![line(), join(line(), entries)])),
                line(),
                text("}"),
            ])))
        }
        Declaration::Backend { name, properties } => {
            let properties = properties
                .iter()
                .map(walk_object_property)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(property_block(format!("backend {name}"), properties))
        }
        Declaration::Director {
            name,
            kind,
            properties,
            directions,
        } => {
            let mut body = properties
                .iter()
                .map(walk_object_property)
                .collect::<Result<Vec<_>, _>>()?;
            for direction in directions {
                body.push(walk_expr(direction)?);
            }
            Ok(property_block(format!("director {name} {kind}"), body))
        }
        Declaration::Sub {
            name,
            return_type,
            body,
        } => {
            let header = match return_type {
                Some(ty) => format!("sub {name} {ty} "),
                None => format!("sub {name} "),
            };
            Ok(group(concat(vec![text(header), stmt_block(body)?])))
        }
    }
}

fn walk_acl_entry(entry: &AclEntry) -> Doc {
    let mut s = String::new();
    if entry.negated {
        s.push_str("! ");
    }
    s.push('"');
    s.push_str(&entry.address);
    s.push('"');
    if let Some(cidr) = entry.cidr {
        s.push('/');
        s.push_str(&cidr.to_string());
    }
    s.push(';');
    text(s)
}

fn walk_table_entry(entry: &TableEntry) -> Result<Doc, FormatError> {
    Ok(group(concat(vec![
        walk_expr(&entry.key)?,
        text(": "),
        walk_expr(&entry.value)?,
        text(","),
    ])))
}

/// A backend/director body: one property per line, hard breaks regardless of
/// width, so short bodies are never collapsed onto one line.
fn property_block(header: String, properties: Vec<Doc>) -> Doc {
    if properties.is_empty() {
        return text(header + " {}");
    }
    concat(vec![
        text(header + " {"),
        indent(concat(vec![hardline(), join(hardline(), properties)])),
        hardline(),
        text("}"),
    ])
}

/// A braced statement body: forced break before the first statement,
/// statements joined by `Line`, closing brace at the outer indentation.
fn stmt_block(body: &[Stmt]) -> Result<Doc, FormatError> {
    if body.is_empty() {
        return Ok(text("{}"));
    }
    let statements = body.iter().map(walk_stmt).collect::<Result<Vec<_>, _>>()?;
    Ok(concat(vec![
        text("{"),
        indent(concat(vec![hardline(), join(line(), statements)])),
        line(),
        text("}"),
    ]))
}

// ── Statements ───────────────────────────────────────────────────────────

fn walk_stmt(stmt: &Stmt) -> Result<Doc, FormatError> {
    match stmt {
        Stmt::Declare { target, ty } => Ok(concat(vec![
            text("declare "),
            walk_variable(target)?,
            text(format!(" {ty};")),
        ])),
        Stmt::Set {
            target,
            operator,
            value,
        } => Ok(group(concat(vec![
            text("set "),
            walk_variable(target)?,
            text(format!(" {operator} ")),
            walk_expr(value)?,
            text(";"),
        ]))),
        Stmt::Unset { target } => Ok(concat(vec![
            text("unset "),
            walk_variable(target)?,
            text(";"),
        ])),
        Stmt::Add { target, value } => Ok(group(concat(vec![
            text("add "),
            walk_variable(target)?,
            text(" = "),
            walk_expr(value)?,
            text(";"),
        ]))),
        Stmt::Call { target } => Ok(concat(vec![
            text("call "),
            walk_variable(target)?,
            text(";"),
        ])),
        Stmt::If {
            condition,
            body,
            else_branch,
        } => {
            let mut parts = vec![
                text("if ("),
                walk_expr(condition)?,
                text(") "),
                stmt_block(body)?,
            ];
            if let Some(branch) = else_branch {
                parts.push(text(" else "));
                match branch {
                    // An `else if` chain prints by recursing into the next
                    // `if`; nested blocks are not flattened into a ladder.
                    ElseBranch::If(chained) => parts.push(walk_stmt(chained)?),
                    ElseBranch::Block(body) => parts.push(stmt_block(body)?),
                }
            }
            Ok(group(concat(parts)))
        }
        Stmt::Error { status, message } => {
            let mut parts = vec![text("error")];
            if let Some(status) = status {
                parts.push(text(format!(" {status}")));
            }
            if let Some(message) = message {
                parts.push(text(" "));
                parts.push(walk_expr(message)?);
            }
            parts.push(text(";"));
            Ok(group(concat(parts)))
        }
        Stmt::Esi => Ok(text("esi;")),
        Stmt::Restart => Ok(text("restart;")),
        Stmt::Return => Ok(text("return;")),
        Stmt::Synthetic { base64, value } => {
            let keyword = if *base64 {
                "synthetic.base64 "
            } else {
                "synthetic "
            };
            Ok(group(concat(vec![
                text(keyword),
                walk_expr(value)?,
                text(";"),
            ])))
        }
        Stmt::Log { message } => Ok(group(concat(vec![
            text("log "),
            walk_expr(message)?,
            text(";"),
        ]))),
        Stmt::Switch { .. } => Err(FormatError::Unsupported { kind: "switch" }),
    }
}

// ── Expressions & literals ───────────────────────────────────────────────

fn walk_expr(expr: &Expr) -> Result<Doc, FormatError> {
    match expr {
        Expr::Binary { lhs, operator, rhs } => Ok(group(concat(vec![
            walk_expr(lhs)?,
            text(format!(" {operator} ")),
            walk_expr(rhs)?,
        ]))),
        Expr::Unary { operator, rhs } => {
            Ok(concat(vec![text(operator.as_str()), walk_expr(rhs)?]))
        }
        Expr::StringConcat { tokens } => {
            if tokens.is_empty() {
                return Err(FormatError::MissingChild {
                    kind: "string_concat",
                    field: "tokens",
                });
            }
            let tokens = tokens
                .iter()
                .map(walk_expr)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(group(join(text(" + "), tokens)))
        }
        Expr::Literal(literal) => walk_literal(literal),
        Expr::Variable(variable) => walk_variable(variable),
    }
}

fn walk_literal(literal: &Literal) -> Result<Doc, FormatError> {
    match literal {
        Literal::Object { properties } => {
            if properties.is_empty() {
                return Ok(text("{}"));
            }
            let properties = properties
                .iter()
                .map(walk_object_property)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(group(concat(vec![
                text("{"),
                indent(concat(vec![softline(), join(softline(), properties)])),
                softline(),
                text("}"),
            ])))
        }
        Literal::String { tokens } => {
            if tokens.is_empty() {
                return Err(FormatError::MissingChild {
                    kind: "string",
                    field: "tokens",
                });
            }
            // Adjacent tokens are the grammar's implicit concatenation: each
            // is quoted separately and they are joined by a space, not `+`.
            let quoted: Vec<String> = tokens.iter().map(|t| format!("\"{t}\"")).collect();
            Ok(text(quoted.join(" ")))
        }
        Literal::Rtime { value, unit } => Ok(text(format!("{}{unit}", number_token(*value)))),
        Literal::Integer(value) => Ok(text(value.to_string())),
        Literal::Float(value) => Ok(text(float_token(*value))),
        Literal::Bool(value) => Ok(text(if *value { "true" } else { "false" })),
        Literal::Parcent(value) => Ok(text(format!("{}%", number_token(*value)))),
    }
}

fn walk_variable(variable: &Variable) -> Result<Doc, FormatError> {
    if variable.name.is_empty() {
        return Err(FormatError::MissingChild {
            kind: "variable",
            field: "name",
        });
    }
    let mut s = variable.name.clone();
    for property in &variable.properties {
        s.push('.');
        s.push_str(property);
    }
    if let Some(sub_field) = &variable.sub_field {
        s.push(':');
        s.push_str(sub_field);
    }
    Ok(text(s))
}

fn walk_object_property(property: &ObjectProperty) -> Result<Doc, FormatError> {
    Ok(group(concat(vec![
        text(format!(".{} = ", property.key)),
        walk_expr(&property.value)?,
        text(";"),
    ])))
}

/// Render an rtime/percentage value: no decimal point when integral (`10s`,
/// `50%`), minimal decimal form otherwise (`0.5s`).
fn number_token(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Render a float literal. Always keeps a fractional part (`2.0`, not `2`)
/// so the canonical text re-parses as a FLOAT, not an INTEGER.
fn float_token(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use vcl_ast::{AssignmentOperator, BinaryOperator, TimeUnit, Type, UnaryOperator};

    use super::*;
    use crate::printer::{print, FormatConfig};

    fn render_stmt(stmt: &Stmt) -> String {
        let doc = walk_stmt(stmt).unwrap();
        print(&doc, &FormatConfig::default())
    }

    fn render_expr(expr: &Expr) -> String {
        let doc = walk_expr(expr).unwrap();
        print(&doc, &FormatConfig::default())
    }

    fn str_lit(s: &str) -> Expr {
        Expr::Literal(Literal::String {
            tokens: vec![s.to_string()],
        })
    }

    fn var(name: &str) -> Variable {
        Variable::new(name)
    }

    #[test]
    fn acl_entry_shapes() {
        let plain = AclEntry {
            negated: false,
            address: "192.0.2.0".into(),
            cidr: Some(24),
        };
        let negated = AclEntry {
            negated: true,
            address: "192.0.2.12".into(),
            cidr: None,
        };
        assert_eq!(walk_acl_entry(&plain), text("\"192.0.2.0\"/24;"));
        assert_eq!(walk_acl_entry(&negated), text("! \"192.0.2.12\";"));
    }

    #[test]
    fn variable_path_and_sub_field() {
        let v = Variable {
            name: "req".into(),
            properties: vec!["http".into(), "X-Forwarded-For".into()],
            sub_field: None,
        };
        assert_eq!(
            render_expr(&Expr::Variable(v)),
            "req.http.X-Forwarded-For"
        );
        let v = Variable {
            name: "req".into(),
            properties: vec!["url".into()],
            sub_field: Some("path".into()),
        };
        assert_eq!(render_expr(&Expr::Variable(v)), "req.url:path");
    }

    #[test]
    fn implicit_string_concat_joins_with_space() {
        let expr = Expr::Literal(Literal::String {
            tokens: vec!["a".into(), "b".into()],
        });
        assert_eq!(render_expr(&expr), "\"a\" \"b\"");
    }

    #[test]
    fn explicit_string_concat_joins_with_plus() {
        let expr = Expr::StringConcat {
            tokens: vec![str_lit("a"), Expr::Variable(var("server.region"))],
        };
        assert_eq!(render_expr(&expr), "\"a\" + server.region");
    }

    #[test]
    fn rtime_has_no_space_before_unit() {
        let expr = Expr::Literal(Literal::Rtime {
            value: 10.0,
            unit: TimeUnit::S,
        });
        assert_eq!(render_expr(&expr), "10s");
        let expr = Expr::Literal(Literal::Rtime {
            value: 0.5,
            unit: TimeUnit::S,
        });
        assert_eq!(render_expr(&expr), "0.5s");
    }

    #[test]
    fn float_keeps_fractional_part() {
        assert_eq!(render_expr(&Expr::Literal(Literal::Float(2.0))), "2.0");
        assert_eq!(render_expr(&Expr::Literal(Literal::Float(2.5))), "2.5");
    }

    #[test]
    fn parcent_renders_percent_sign() {
        assert_eq!(render_expr(&Expr::Literal(Literal::Parcent(50.0))), "50%");
    }

    #[test]
    fn unary_has_no_space_after_operator() {
        let expr = Expr::Unary {
            operator: UnaryOperator::Not,
            rhs: Box::new(Expr::Variable(var("req.esi"))),
        };
        assert_eq!(render_expr(&expr), "!req.esi");
    }

    #[test]
    fn binary_spaces_around_operator() {
        let expr = Expr::Binary {
            lhs: Box::new(Expr::Variable(var("req.url"))),
            operator: BinaryOperator::Match,
            rhs: Box::new(str_lit("^/api/")),
        };
        assert_eq!(render_expr(&expr), "req.url ~ \"^/api/\"");
    }

    #[test]
    fn declare_and_set_shapes() {
        let declare = Stmt::Declare {
            target: Variable {
                name: "var".into(),
                properties: vec!["count".into()],
                sub_field: None,
            },
            ty: Type::Integer,
        };
        assert_eq!(render_stmt(&declare), "declare var.count INTEGER;");

        let set = Stmt::Set {
            target: Variable {
                name: "var".into(),
                properties: vec!["count".into()],
                sub_field: None,
            },
            operator: AssignmentOperator::Add,
            value: Expr::Literal(Literal::Integer(1)),
        };
        assert_eq!(render_stmt(&set), "set var.count += 1;");
    }

    #[test]
    fn error_optional_children() {
        assert_eq!(
            render_stmt(&Stmt::Error {
                status: None,
                message: None
            }),
            "error;"
        );
        assert_eq!(
            render_stmt(&Stmt::Error {
                status: Some(503),
                message: Some(str_lit("backend down"))
            }),
            "error 503 \"backend down\";"
        );
    }

    #[test]
    fn synthetic_base64_keyword() {
        let stmt = Stmt::Synthetic {
            base64: true,
            value: str_lit("PGgxPg=="),
        };
        assert_eq!(render_stmt(&stmt), "synthetic.base64 \"PGgxPg==\";");
    }

    #[test]
    fn if_else_chain_renders_nested() {
        let stmt = Stmt::If {
            condition: Expr::Variable(var("a")),
            body: vec![Stmt::Restart],
            else_branch: Some(ElseBranch::If(Box::new(Stmt::If {
                condition: Expr::Variable(var("b")),
                body: vec![Stmt::Esi],
                else_branch: Some(ElseBranch::Block(vec![Stmt::Return])),
            }))),
        };
        assert_eq!(
            render_stmt(&stmt),
            "if (a) {\n  restart;\n} else if (b) {\n  esi;\n} else {\n  return;\n}"
        );
    }

    #[test]
    fn switch_is_unsupported() {
        let stmt = Stmt::Switch {
            subject: Expr::Variable(var("req.url")),
            cases: vec![],
        };
        assert_eq!(
            walk_stmt(&stmt),
            Err(FormatError::Unsupported { kind: "switch" })
        );
    }

    #[test]
    fn empty_string_tokens_is_structural_error() {
        let expr = Expr::Literal(Literal::String { tokens: vec![] });
        assert_eq!(
            walk_expr(&expr),
            Err(FormatError::MissingChild {
                kind: "string",
                field: "tokens",
            })
        );
        let expr = Expr::StringConcat { tokens: vec![] };
        assert_eq!(
            walk_expr(&expr),
            Err(FormatError::MissingChild {
                kind: "string_concat",
                field: "tokens",
            })
        );
    }

    #[test]
    fn empty_variable_name_is_structural_error() {
        let mut v = Variable::new("");
        v.properties.push("http".into());
        assert_eq!(
            walk_variable(&v),
            Err(FormatError::MissingChild {
                kind: "variable",
                field: "name",
            })
        );
    }

    #[test]
    fn walk_errors_propagate_to_the_root() {
        let vcl = Vcl {
            declarations: vec![Declaration::Sub {
                name: "vcl_recv".into(),
                return_type: None,
                body: vec![Stmt::Switch {
                    subject: Expr::Variable(var("req.url")),
                    cases: vec![],
                }],
            }],
        };
        assert_eq!(
            walk_vcl(&vcl),
            Err(FormatError::Unsupported { kind: "switch" })
        );
    }
}
