// Fixed lexical choices of the canonical output format

/// One level of indentation
pub const INDENT_UNIT: &str = "\t";

/// Emitted after the last statement of every block body
pub const BLOCK_CLOSE: &str = "\n}\n";

/// Separates the two bodies of an `if/else`
pub const ELSE_OPEN: &str = "\n}\n else {\n";

/// Terminates variable declarations and call statements
pub const STMT_END: &str = ";\n";

/// Terminates assignment, increment, decrement, input, output and return
/// statements; the space before the newline is part of the format
pub const SIMPLE_STMT_END: &str = "; \n";

/// Separator for formal parameters and call arguments
pub const LIST_SEPARATOR: &str = ", ";

/// Keyword of the output statement
pub const WRITE_KEYWORD: &str = "report";

/// Keyword of the input statement
pub const READ_KEYWORD: &str = "receive";

/// Prefix marking a dereferenced pointer lvalue
pub const DEREF_PREFIX: &str = "@";
