// Expression and lvalue nodes

use super::position::{Position, Positioned};

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Logical
    And,
    Or,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOp {
    Neg, // -x
    Not, // !x
    Ref, // address-of
}

impl UnOp {
    /// Token printed in place of the whole unary expression
    pub fn keyword(&self) -> &'static str {
        match self {
            UnOp::Neg => "neg",
            UnOp::Not => "not",
            UnOp::Ref => "ref",
        }
    }
}

/// A name, usable both as an lvalue and inside other nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub location: Position,
}

impl Identifier {
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>, location: Position) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "identifier at {} has an empty name", location);
        Self { name, location }
    }
}

/// Expressions that denote a storage location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LVal {
    Id(Identifier),
    /// Pointer dereference of a named variable
    Deref {
        target: Identifier,
        location: Position,
    },
    /// Field access, `base[field]`
    Index {
        base: Identifier,
        field: Identifier,
        location: Position,
    },
}

impl LVal {
    pub fn id(name: impl Into<String>, location: Position) -> Self {
        LVal::Id(Identifier::new(name, location))
    }

    pub fn deref(target: Identifier, location: Position) -> Self {
        LVal::Deref { target, location }
    }

    pub fn index(base: Identifier, field: Identifier, location: Position) -> Self {
        LVal::Index {
            base,
            field,
            location,
        }
    }
}

/// Function call, shared by call expressions and call statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Identifier,
    /// `None` when the call was written without an argument list
    pub args: Option<Vec<Expr>>,
    pub location: Position,
}

impl CallExpr {
    pub fn new(callee: Identifier, args: Option<Vec<Expr>>, location: Position) -> Self {
        Self {
            callee,
            args,
            location,
        }
    }

    /// Arguments in call order; empty when the list is absent
    pub fn args(&self) -> &[Expr] {
        self.args.as_deref().unwrap_or(&[])
    }
}

/// Assignment, shared by assignment expressions and assignment statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignExpr {
    pub target: LVal,
    pub value: Box<Expr>,
    pub location: Position,
}

impl AssignExpr {
    pub fn new(target: LVal, value: Expr, location: Position) -> Self {
        Self {
            target,
            value: Box::new(value),
            location,
        }
    }
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    True(Position),
    False(Position),
    /// String literal lexeme as scanned, quotes and escapes included
    StrLit(String, Position),
    IntLit(i32, Position),
    ShortLit(i16, Position),
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        location: Position,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: Position,
    },
    Call(CallExpr),
    Assign(AssignExpr),
    LVal(LVal),
}

impl Expr {
    pub fn unary(op: UnOp, operand: Expr, location: Position) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
            location,
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr, location: Position) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location,
        }
    }

    pub fn id(name: impl Into<String>, location: Position) -> Self {
        Expr::LVal(LVal::id(name, location))
    }
}

impl From<LVal> for Expr {
    fn from(lval: LVal) -> Self {
        Expr::LVal(lval)
    }
}

impl From<Identifier> for Expr {
    fn from(id: Identifier) -> Self {
        Expr::LVal(LVal::Id(id))
    }
}

impl From<CallExpr> for Expr {
    fn from(call: CallExpr) -> Self {
        Expr::Call(call)
    }
}

impl From<AssignExpr> for Expr {
    fn from(assign: AssignExpr) -> Self {
        Expr::Assign(assign)
    }
}

impl Positioned for Identifier {
    fn pos(&self) -> &Position {
        &self.location
    }
}

impl Positioned for LVal {
    fn pos(&self) -> &Position {
        match self {
            LVal::Id(id) => &id.location,
            LVal::Deref { location, .. } => location,
            LVal::Index { location, .. } => location,
        }
    }
}

impl Positioned for CallExpr {
    fn pos(&self) -> &Position {
        &self.location
    }
}

impl Positioned for AssignExpr {
    fn pos(&self) -> &Position {
        &self.location
    }
}

impl Positioned for Expr {
    fn pos(&self) -> &Position {
        match self {
            Expr::True(loc) => loc,
            Expr::False(loc) => loc,
            Expr::StrLit(_, loc) => loc,
            Expr::IntLit(_, loc) => loc,
            Expr::ShortLit(_, loc) => loc,
            Expr::Unary { location, .. } => location,
            Expr::Binary { location, .. } => location,
            Expr::Call(call) => call.pos(),
            Expr::Assign(assign) => assign.pos(),
            Expr::LVal(lval) => lval.pos(),
        }
    }
}
