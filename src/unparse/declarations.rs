//! Rendering of the program root, declarations and types
//!
//! ```text
//! program  ::= decl*
//! var_decl ::= type id ";"
//! formal   ::= type id
//! fn_decl  ::= type id "(" formals ")" "{" stmt* "}"
//! ```

use super::constants::{LIST_SEPARATOR, STMT_END};
use super::{do_indent, unparse_body, Unparse};
use crate::ast::*;
use std::fmt;

impl Unparse for Program {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        for decl in &self.decls {
            log::trace!("unparsing declaration at {}", decl.pos());
            decl.unparse(out, indent)?;
        }
        Ok(())
    }
}

impl Unparse for Decl {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        match self {
            Decl::Var(decl) => decl.unparse(out, indent),
            Decl::Fn(decl) => decl.unparse(out, indent),
        }
    }
}

impl VarDecl {
    /// Write this declaration as an entry of a parameter list
    pub fn unparse_formal(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        do_indent(out, indent)?;
        self.var_type.unparse(out, 0)?;
        out.write_str(" ")?;
        self.id.unparse(out, 0)
    }
}

impl Unparse for VarDecl {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        self.unparse_formal(out, indent)?;
        out.write_str(STMT_END)
    }
}

impl Unparse for FnDecl {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        do_indent(out, indent)?;
        self.return_type.unparse(out, 0)?;
        out.write_str(" ")?;
        self.id.unparse(out, 0)?;
        out.write_str("(")?;
        for (i, param) in self.params().iter().enumerate() {
            if i > 0 {
                out.write_str(LIST_SEPARATOR)?;
            }
            param.unparse_formal(out, 0)?;
        }
        out.write_str(") {\n")?;
        unparse_body(out, &self.body, indent + 1)
    }
}

impl Unparse for TypeNode {
    fn unparse(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        // `int` is written without indentation, unlike the other type keywords.
        if self.kind != TypeKind::Int {
            do_indent(out, indent)?;
        }
        out.write_str(self.kind.keyword())
    }
}
