#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The parser aborts at the first syntax error.
pub enum SyntaxError {
    /// A specific lexeme was expected but not found.
    Expected {
        /// The lexeme that was expected (e.g. `;` or `else`).
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A variable name was expected but not found.
    ExpectVariableName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function name was expected but not found.
    ExpectFunctionName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input could not be parsed as a statement, or trailing tokens were
    /// found after the terminator.
    InvalidSyntax {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a function whose name is already taken.
    FunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected { lexeme, line } => {
                write!(f, "Syntax error on line {line}: Expect '{lexeme}'.")
            },
            Self::ExpectVariableName { line } => {
                write!(f, "Syntax error on line {line}: Expect variable name.")
            },
            Self::ExpectFunctionName { line } => {
                write!(f, "Syntax error on line {line}: Expect function name.")
            },
            Self::InvalidSyntax { line } => {
                write!(f, "Syntax error on line {line}: Invalid syntax.")
            },
            Self::FunctionRedefinition { name, line } => write!(f,
                                                                "Syntax error on line {line}: Function '{name}' cannot be redefined."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Syntax error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
