//! Wadler-Lindig printer for the VCL document IR.
//!
//! The printer converts a `Doc` tree into a formatted string by deciding at
//! each `Group` boundary whether to render flat (all on one line) or broken
//! (with line breaks and indentation). The fits test measures the group's
//! flat content plus everything already pending on the same output line, so a
//! group never fits when trailing content would push the line over budget.

use crate::ir::Doc;

/// Configuration for the formatter output.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces per indentation level. Default: 2.
    pub indent_size: usize,
    /// Maximum line width before groups break. Default: 80.
    pub max_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_width: 80,
        }
    }
}

/// Whether the current context is rendering flat or broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Everything on one line; `Line` renders as " ", `Softline` as "".
    Flat,
    /// Line breaks at `Line`/`Softline` positions.
    Break,
}

/// A command on the printer's work stack.
#[derive(Debug)]
struct PrintCmd<'a> {
    indent: usize,
    mode: Mode,
    doc: &'a Doc,
}

/// Render a `Doc` tree as a formatted string respecting the given config.
///
/// The algorithm is a stack machine: at each `Group`, it measures whether the
/// flat rendering, together with the rest of the current line, fits within
/// `max_width`. If so, the group is rendered flat; otherwise it is broken and
/// nested groups are re-evaluated against the new column.
///
/// Layout has no error states: a document whose text alone exceeds the width
/// budget still renders, merely wider. No trailing newline is appended; that
/// is the host driver's concern.
pub fn print(doc: &Doc, config: &FormatConfig) -> String {
    let mut out = String::new();
    let mut col: usize = 0;
    let mut stack: Vec<PrintCmd> = vec![PrintCmd {
        indent: 0,
        mode: Mode::Break,
        doc,
    }];

    while let Some(cmd) = stack.pop() {
        match cmd.doc {
            Doc::Empty => {}

            Doc::Text(s) => {
                out.push_str(s);
                col += s.len();
            }

            Doc::Line => match cmd.mode {
                Mode::Flat => {
                    out.push(' ');
                    col += 1;
                }
                Mode::Break => {
                    emit_newline(&mut out, cmd.indent);
                    col = cmd.indent;
                }
            },

            Doc::Softline => match cmd.mode {
                Mode::Flat => {}
                Mode::Break => {
                    emit_newline(&mut out, cmd.indent);
                    col = cmd.indent;
                }
            },

            Doc::Hardline => {
                emit_newline(&mut out, cmd.indent);
                col = cmd.indent;
            }

            Doc::Indent(child) => {
                stack.push(PrintCmd {
                    indent: cmd.indent + config.indent_size,
                    mode: cmd.mode,
                    doc: child,
                });
            }

            Doc::Group(child) => {
                let mode = if fits(config.max_width.saturating_sub(col), child, &stack) {
                    Mode::Flat
                } else {
                    Mode::Break
                };
                stack.push(PrintCmd {
                    indent: cmd.indent,
                    mode,
                    doc: child,
                });
            }

            Doc::Concat(parts) => {
                // Push in reverse order so the first element is processed first.
                for part in parts.iter().rev() {
                    stack.push(PrintCmd {
                        indent: cmd.indent,
                        mode: cmd.mode,
                        doc: part,
                    });
                }
            }
        }
    }

    out
}

fn emit_newline(out: &mut String, indent: usize) {
    out.push('\n');
    for _ in 0..indent {
        out.push(' ');
    }
}

/// Decide whether `group` can render flat in the remaining line budget.
///
/// Measures the group's content in flat mode, then continues into the pending
/// commands on the print stack until the next unconditional break (a
/// `Hardline`, or a `Line`/`Softline` whose recorded mode is `Break`). A
/// `Hardline` reached while still measuring flat content fails the test, so
/// groups containing one are always broken.
fn fits(remaining: usize, group: &Doc, rest: &[PrintCmd]) -> bool {
    let mut budget = remaining as isize;
    // Scan work list for the group's own content; when it runs dry, continue
    // with the pending commands, top of stack first.
    let mut scan: Vec<(Mode, &Doc)> = vec![(Mode::Flat, group)];
    let mut pending = rest.iter().rev();

    loop {
        let (mode, doc) = match scan.pop() {
            Some(item) => item,
            None => match pending.next() {
                Some(cmd) => (cmd.mode, cmd.doc),
                None => return true,
            },
        };
        match doc {
            Doc::Empty => {}
            Doc::Text(s) => {
                budget -= s.len() as isize;
                if budget < 0 {
                    return false;
                }
            }
            Doc::Line => match mode {
                Mode::Flat => {
                    budget -= 1;
                    if budget < 0 {
                        return false;
                    }
                }
                Mode::Break => return true,
            },
            Doc::Softline => match mode {
                Mode::Flat => {}
                Mode::Break => return true,
            },
            Doc::Hardline => return mode == Mode::Break,
            Doc::Indent(child) | Doc::Group(child) => scan.push((mode, child.as_ref())),
            Doc::Concat(parts) => {
                for part in parts.iter().rev() {
                    scan.push((mode, part));
                }
            }
        }
    }
}
