/// Core parsing logic.
///
/// Parses one complete statement, including the trailing `;`, handles
/// `function` declarations with their registry protocol, and provides the
/// expression-parsing entry point used by every precedence level.
pub mod core;

/// Binary expression parsing.
///
/// Implements the precedence ladder from the logical operators down to
/// exponentiation, and maps operator tokens to their AST operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, `if` and `let` expressions, variables, function
/// calls and literals.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers for consuming expected tokens, identifiers and
/// comma-separated lists.
pub mod utils;
