#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source code.
///
/// The lexer reports an error and keeps scanning, so a single statement can
/// surface several lexical errors at once.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { line } => {
                write!(f, "Lexical error on line {line}: Unexpected character.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Lexical error on line {line}: Unterminated string.")
            },
        }
    }
}

impl std::error::Error for LexError {}
