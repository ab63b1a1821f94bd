//! Rendering of statements
//!
//! Simple statements occupy one line. Assignment, `++`, `--`, `receive`,
//! `report` and `return` end in `"; \n"`; call statements end in `";\n"`.
//! Block statements open with `{` on the header line and close with
//! [`BLOCK_CLOSE`]:
//!
//! ```text
//! while (i < 10) {
//!     i++;
//!
//! }
//! ```
//!
//! The closing brace is never indented. `if` bodies stay at the depth of
//! the `if`; `if/else` and `while` bodies go one level deeper.
//!
//! [`BLOCK_CLOSE`]: super::constants::BLOCK_CLOSE

use super::constants::{ELSE_OPEN, READ_KEYWORD, SIMPLE_STMT_END, STMT_END, WRITE_KEYWORD};
use super::{do_indent, unparse_body, Unparse};
use crate::ast::*;
use std::fmt;

impl Unparse for Stmt {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        match self {
            Stmt::Decl(decl) => decl.unparse(out, indent),
            Stmt::Assign { assignment, .. } => {
                do_indent(out, indent)?;
                assignment.unparse(out, 0)?;
                out.write_str(SIMPLE_STMT_END)
            }
            Stmt::PostInc { target, .. } => {
                do_indent(out, indent)?;
                target.unparse(out, 0)?;
                out.write_str("++")?;
                out.write_str(SIMPLE_STMT_END)
            }
            Stmt::PostDec { target, .. } => {
                do_indent(out, indent)?;
                target.unparse(out, 0)?;
                out.write_str("--")?;
                out.write_str(SIMPLE_STMT_END)
            }
            Stmt::Read { target, .. } => {
                do_indent(out, indent)?;
                write!(out, "{} ", READ_KEYWORD)?;
                target.unparse(out, 0)?;
                out.write_str(SIMPLE_STMT_END)
            }
            Stmt::Write { expr, .. } => {
                do_indent(out, indent)?;
                write!(out, "{} ", WRITE_KEYWORD)?;
                expr.unparse(out, 0)?;
                out.write_str(SIMPLE_STMT_END)
            }
            Stmt::Return { expr, .. } => {
                do_indent(out, indent)?;
                out.write_str("return")?;
                if let Some(expr) = expr {
                    out.write_str(" ")?;
                    expr.unparse(out, 0)?;
                }
                out.write_str(SIMPLE_STMT_END)
            }
            Stmt::If {
                condition, body, ..
            } => {
                do_indent(out, indent)?;
                out.write_str("if (")?;
                condition.unparse(out, 0)?;
                out.write_str(") {\n")?;
                // The body stays at the depth of the `if` itself.
                unparse_body(out, body, indent)
            }
            Stmt::IfElse {
                condition,
                then_body,
                else_body,
                ..
            } => {
                do_indent(out, indent)?;
                out.write_str("if (")?;
                condition.unparse(out, 0)?;
                out.write_str(") {\n")?;
                for stmt in then_body {
                    stmt.unparse(out, indent + 1)?;
                }
                out.write_str(ELSE_OPEN)?;
                unparse_body(out, else_body, indent + 1)
            }
            Stmt::While {
                condition, body, ..
            } => {
                do_indent(out, indent)?;
                out.write_str("while ")?;
                condition.unparse(out, 0)?;
                out.write_str(" {\n")?;
                unparse_body(out, body, indent + 1)
            }
            Stmt::Call { call, .. } => {
                do_indent(out, indent)?;
                call.unparse(out, 0)?;
                out.write_str(STMT_END)
            }
        }
    }
}
