//! Canonical source renderer
//!
//! Turns a finished AST back into C-- source text. Every node implements
//! [`Unparse`], which writes the node into any [`fmt::Write`] sink at a
//! requested indentation depth:
//! - `declarations`: the program root, declarations and types
//! - `statements`: statements and block layout
//! - `expressions`: expressions and lvalues
//!
//! # Output format
//!
//! - One tab per depth level, written before a construct's first token.
//!   Children rendered inline are written at depth 0.
//! - Binary expressions are always parenthesized: `(a + b)`.
//! - Output and input statements use the `report` and `receive` keywords.
//! - Block bodies end with a blank line and an unindented `}`.
//! - `if` keeps its body at its own depth; `if/else` and `while` bodies
//!   are indented one level deeper.
//! - Unary operators render as their keyword alone (`neg`, `not`, `ref`).
//!
//! Rendering is a plain recursive descent over the tree, so its stack use
//! grows with the nesting depth of the program. Trees deep enough to
//! exhaust the thread stack are not supported.

mod declarations;
mod expressions;
mod statements;

pub mod constants;

use crate::ast::*;
use crate::errors::UnparseError;
use self::constants::{BLOCK_CLOSE, INDENT_UNIT};
use std::fmt;
use std::io;

/// Rendering of a node back into source text
pub trait Unparse {
    /// Write this node into `out`, indented by `indent` levels
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result;

    /// Render this node into a fresh string
    fn to_source(&self, indent: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.unparse(&mut out, indent);
        out
    }
}

pub(crate) fn do_indent(out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        out.write_str(INDENT_UNIT)?;
    }
    Ok(())
}

/// Write each statement of a block body, then close the block
pub(crate) fn unparse_body(out: &mut dyn fmt::Write, body: &[Stmt], indent: usize) -> fmt::Result {
    for stmt in body {
        stmt.unparse(out, indent)?;
    }
    out.write_str(BLOCK_CLOSE)
}

/// `fmt::Write` front for an `io::Write`, keeping the I/O error that
/// `fmt::Error` cannot carry
struct IoSink<'a, W: io::Write> {
    inner: &'a mut W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => {
                self.written += s.len();
                Ok(())
            }
            Err(err) => {
                self.error = Some(err);
                Err(fmt::Error)
            }
        }
    }
}

/// Render a whole program straight into an I/O sink
///
/// A failing writer yields [`UnparseError::Io`]; a formatting failure with
/// no I/O error behind it yields [`UnparseError::Format`].
pub fn write_program<W: io::Write>(program: &Program, out: &mut W) -> Result<(), UnparseError> {
    log::debug!(
        "unparsing program at {} ({} top-level declarations)",
        program.location,
        program.decls.len()
    );

    let mut sink = IoSink {
        inner: out,
        written: 0,
        error: None,
    };
    if let Err(err) = program.unparse(&mut sink, 0) {
        return Err(match sink.error.take() {
            Some(io_err) => UnparseError::Io(io_err),
            None => UnparseError::Format(err),
        });
    }

    log::debug!("wrote {} bytes of source", sink.written);
    Ok(())
}

macro_rules! display_via_unparse {
    ($($node:ty),* $(,)?) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.unparse(f, 0)
                }
            }
        )*
    };
}

display_via_unparse!(
    Program, Decl, VarDecl, FnDecl, TypeNode, Stmt, Expr, LVal, Identifier, CallExpr, AssignExpr,
);
