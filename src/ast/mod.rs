//! C-- abstract syntax tree
//!
//! One closed enum per grammar category:
//! - [`types`]: type keywords (`int`, `short`, `bool`, `void`, `string`, `ptr`)
//! - [`expressions`]: literals, operators, calls, assignments and lvalues
//! - [`statements`]: statements, declarations and the [`Program`] root
//! - [`position`]: the source span every node carries
//!
//! Declarations appear as statements through [`Stmt::Decl`], lvalues appear
//! as expressions through [`Expr::LVal`]. A formal parameter is a plain
//! [`VarDecl`] stored in [`FnDecl::params`].
//!
//! The tree is built bottom-up by a parser and never mutated afterwards.
//! Every node owns its children; there is no sharing between parents.

pub mod expressions;
pub mod position;
pub mod statements;
pub mod types;

pub use expressions::{AssignExpr, BinOp, CallExpr, Expr, Identifier, LVal, UnOp};
pub use position::{Position, Positioned, SourceLocation};
pub use statements::{Decl, FnDecl, Program, Stmt, VarDecl};
pub use types::{TypeKind, TypeNode};
