//! # Introduction
//!
//! `cmm-unparse` holds the abstract syntax tree of C--, a small procedural
//! teaching language, and renders any tree back into canonical source text.
//!
//! ## Pipeline
//!
//! ```text
//! (external parser) → AST → Unparse → source text
//! ```
//!
//! 1. [`ast`] — closed enums for programs, declarations, statements,
//!    expressions, lvalues and types, each node tagged with a
//!    [`ast::Position`].
//! 2. [`unparse`] — the [`unparse::Unparse`] trait and the formatting rules:
//!    fully parenthesized binary expressions, `report` / `receive` keywords
//!    for output and input, tab indentation threaded by depth.
//! 3. [`errors`] — [`errors::UnparseError`] for sinks that can fail.
//!
//! ## Example
//!
//! ```
//! use cmm_unparse::ast::*;
//!
//! let at = Position::default();
//! let main = FnDecl::new(
//!     TypeNode::int(at),
//!     Identifier::new("main", at),
//!     None,
//!     vec![Stmt::ret(Some(Expr::IntLit(0, at)), at)],
//!     at,
//! );
//! let program = Program::new(vec![main.into()], at);
//!
//! assert_eq!(program.to_string(), "int main() {\n\treturn 0; \n\n}\n");
//! ```
//!
//! The renderer does not check the program for semantic errors; it prints
//! whatever tree it is given.

pub mod ast;
pub mod errors;
pub mod unparse;

pub use unparse::{write_program, Unparse};
