// Type nodes

use super::position::{Position, Positioned};

/// Type keywords of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Int,
    Short,
    Bool,
    Void,
    String,
    Pointer,
}

impl TypeKind {
    /// Source keyword for this type
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Int => "int",
            TypeKind::Short => "short",
            TypeKind::Bool => "bool",
            TypeKind::Void => "void",
            TypeKind::String => "string",
            TypeKind::Pointer => "ptr",
        }
    }
}

/// A type as written in a declaration, e.g. the `int` in `int a;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    pub kind: TypeKind,
    pub location: Position,
}

impl TypeNode {
    pub fn new(kind: TypeKind, location: Position) -> Self {
        Self { kind, location }
    }

    pub fn int(location: Position) -> Self {
        Self::new(TypeKind::Int, location)
    }

    pub fn short(location: Position) -> Self {
        Self::new(TypeKind::Short, location)
    }

    pub fn bool(location: Position) -> Self {
        Self::new(TypeKind::Bool, location)
    }

    pub fn void(location: Position) -> Self {
        Self::new(TypeKind::Void, location)
    }

    pub fn string(location: Position) -> Self {
        Self::new(TypeKind::String, location)
    }

    pub fn pointer(location: Position) -> Self {
        Self::new(TypeKind::Pointer, location)
    }
}

impl Positioned for TypeNode {
    fn pos(&self) -> &Position {
        &self.location
    }
}
