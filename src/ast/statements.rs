// Statement, declaration and program nodes

use super::expressions::{AssignExpr, CallExpr, Expr, Identifier, LVal};
use super::position::{Position, Positioned};
use super::types::TypeNode;

/// Variable declaration, `int x;`.
///
/// Formal parameters are `VarDecl`s too; they only differ in how a
/// parameter list renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub var_type: TypeNode,
    pub id: Identifier,
    pub location: Position,
}

impl VarDecl {
    pub fn new(var_type: TypeNode, id: Identifier, location: Position) -> Self {
        Self {
            var_type,
            id,
            location,
        }
    }
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDecl {
    pub return_type: TypeNode,
    pub id: Identifier,
    /// `None` when the declaration has no parameter list at all,
    /// as opposed to an empty one
    pub params: Option<Vec<VarDecl>>,
    pub body: Vec<Stmt>,
    pub location: Position,
}

impl FnDecl {
    pub fn new(
        return_type: TypeNode,
        id: Identifier,
        params: Option<Vec<VarDecl>>,
        body: Vec<Stmt>,
        location: Position,
    ) -> Self {
        Self {
            return_type,
            id,
            params,
            body,
            location,
        }
    }

    /// Formal parameters in declaration order
    pub fn params(&self) -> &[VarDecl] {
        self.params.as_deref().unwrap_or(&[])
    }
}

/// Declarations, usable at top level and as statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
}

impl From<VarDecl> for Decl {
    fn from(decl: VarDecl) -> Self {
        Decl::Var(decl)
    }
}

impl From<FnDecl> for Decl {
    fn from(decl: FnDecl) -> Self {
        Decl::Fn(decl)
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Decl(Decl),
    Assign {
        assignment: AssignExpr,
        location: Position,
    },
    PostInc {
        target: LVal,
        location: Position,
    },
    PostDec {
        target: LVal,
        location: Position,
    },
    /// Input statement, rendered with the `receive` keyword
    Read {
        target: LVal,
        location: Position,
    },
    /// Output statement, rendered with the `report` keyword
    Write {
        expr: Expr,
        location: Position,
    },
    Return {
        expr: Option<Expr>,
        location: Position,
    },
    If {
        condition: Expr,
        body: Vec<Stmt>,
        location: Position,
    },
    IfElse {
        condition: Expr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
        location: Position,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        location: Position,
    },
    Call {
        call: CallExpr,
        location: Position,
    },
}

impl Stmt {
    pub fn assign(assignment: AssignExpr, location: Position) -> Self {
        Stmt::Assign {
            assignment,
            location,
        }
    }

    pub fn write(expr: Expr, location: Position) -> Self {
        Stmt::Write { expr, location }
    }

    pub fn read(target: LVal, location: Position) -> Self {
        Stmt::Read { target, location }
    }

    pub fn ret(expr: Option<Expr>, location: Position) -> Self {
        Stmt::Return { expr, location }
    }

    pub fn call(call: CallExpr, location: Position) -> Self {
        Stmt::Call { call, location }
    }
}

impl From<Decl> for Stmt {
    fn from(decl: Decl) -> Self {
        Stmt::Decl(decl)
    }
}

impl From<VarDecl> for Stmt {
    fn from(decl: VarDecl) -> Self {
        Stmt::Decl(Decl::Var(decl))
    }
}

/// Root of the tree: all global declarations in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
    pub location: Position,
}

impl Program {
    pub fn new(decls: Vec<Decl>, location: Position) -> Self {
        Self { decls, location }
    }
}

impl Positioned for VarDecl {
    fn pos(&self) -> &Position {
        &self.location
    }
}

impl Positioned for FnDecl {
    fn pos(&self) -> &Position {
        &self.location
    }
}

impl Positioned for Decl {
    fn pos(&self) -> &Position {
        match self {
            Decl::Var(decl) => decl.pos(),
            Decl::Fn(decl) => decl.pos(),
        }
    }
}

impl Positioned for Stmt {
    fn pos(&self) -> &Position {
        match self {
            Stmt::Decl(decl) => decl.pos(),
            Stmt::Assign { location, .. } => location,
            Stmt::PostInc { location, .. } => location,
            Stmt::PostDec { location, .. } => location,
            Stmt::Read { location, .. } => location,
            Stmt::Write { location, .. } => location,
            Stmt::Return { location, .. } => location,
            Stmt::If { location, .. } => location,
            Stmt::IfElse { location, .. } => location,
            Stmt::While { location, .. } => location,
            Stmt::Call { location, .. } => location,
        }
    }
}

impl Positioned for Program {
    fn pos(&self) -> &Position {
        &self.location
    }
}
