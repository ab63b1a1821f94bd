//! Rendering of expressions and lvalues
//!
//! Binary expressions are parenthesized no matter the operator, so the
//! output never depends on precedence or associativity. Sub-expressions
//! are always written at depth 0; only the node a caller renders directly
//! receives the requested indentation. Identifiers never indent.

use super::constants::{DEREF_PREFIX, LIST_SEPARATOR};
use super::{do_indent, Unparse};
use crate::ast::*;
use std::fmt;

impl Unparse for Expr {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        match self {
            Expr::True(_) => {
                do_indent(out, indent)?;
                out.write_str("true")
            }
            Expr::False(_) => {
                do_indent(out, indent)?;
                out.write_str("false")
            }
            Expr::StrLit(lexeme, _) => {
                do_indent(out, indent)?;
                out.write_str(lexeme)
            }
            Expr::IntLit(value, _) => {
                do_indent(out, indent)?;
                write!(out, "{}", value)
            }
            Expr::ShortLit(value, _) => {
                do_indent(out, indent)?;
                write!(out, "{}", value)
            }
            // Only the operator keyword is written; the operand is dropped.
            Expr::Unary { op, .. } => {
                do_indent(out, indent)?;
                out.write_str(op.keyword())
            }
            Expr::Binary {
                op, left, right, ..
            } => {
                do_indent(out, indent)?;
                out.write_str("(")?;
                left.unparse(out, 0)?;
                write!(out, " {} ", op.symbol())?;
                right.unparse(out, 0)?;
                out.write_str(")")
            }
            Expr::Call(call) => call.unparse(out, indent),
            Expr::Assign(assign) => assign.unparse(out, indent),
            Expr::LVal(lval) => lval.unparse(out, indent),
        }
    }
}

impl Unparse for LVal {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        match self {
            LVal::Id(id) => id.unparse(out, indent),
            LVal::Deref { target, .. } => {
                do_indent(out, indent)?;
                out.write_str(DEREF_PREFIX)?;
                target.unparse(out, 0)
            }
            LVal::Index { base, field, .. } => {
                do_indent(out, indent)?;
                base.unparse(out, 0)?;
                out.write_str("[")?;
                field.unparse(out, 0)?;
                out.write_str("]")
            }
        }
    }
}

impl Unparse for Identifier {
    /// Identifiers are written without indentation at any depth.
    fn unparse(&self, out: &mut dyn fmt::Write, _indent: usize) -> fmt::Result {
        out.write_str(&self.name)
    }
}

impl Unparse for CallExpr {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        do_indent(out, indent)?;
        self.callee.unparse(out, 0)?;
        out.write_str("(")?;
        for (i, arg) in self.args().iter().enumerate() {
            if i > 0 {
                out.write_str(LIST_SEPARATOR)?;
            }
            arg.unparse(out, 0)?;
        }
        out.write_str(")")
    }
}

impl Unparse for AssignExpr {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        do_indent(out, indent)?;
        self.target.unparse(out, 0)?;
        out.write_str(" = ")?;
        self.value.unparse(out, 0)
    }
}
