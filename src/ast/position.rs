// Source positions attached to every AST node

use std::fmt;

/// A single point in the source text (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The span of source text a node was built from.
///
/// Rendering never looks at positions; they are kept for diagnostics
/// produced by later passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Position {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Zero-width position at `line:column`
    pub fn at(line: usize, column: usize) -> Self {
        let loc = SourceLocation::new(line, column);
        Self {
            start: loc,
            end: loc,
        }
    }

    /// Human-readable span, formatted as `line:col-line:col`
    pub fn span(&self) -> String {
        self.to_string()
    }

    /// Smallest position covering both `self` and `other`
    pub fn join(&self, other: &Position) -> Position {
        Position {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::at(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Read-only access to a node's position
pub trait Positioned {
    fn pos(&self) -> &Position;

    fn pos_str(&self) -> String {
        self.pos().span()
    }
}
