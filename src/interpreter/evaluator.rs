/// Core evaluation logic for expressions and values.
///
/// Contains the evaluator itself, the depth guard, and the evaluation rules
/// for variables, conditionals and `let` expressions.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, logical operators and string concatenation.
pub mod binary;

/// Function call evaluation.
///
/// Implements the builtin functions and calls to user-defined functions.
pub mod function;
