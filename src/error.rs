/// Lexical errors.
///
/// Defines the error types reported while tokenizing source code, such as
/// unexpected characters or unterminated string literals.
pub mod lex_error;
/// Syntax errors.
///
/// Defines the error types reported while parsing the token stream, such as
/// missing lexemes, malformed statements, or function redefinitions.
pub mod syntax_error;
/// Semantic errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, division by zero, undefined names, or exceeding the
/// evaluation depth limit.
pub mod semantic_error;

pub use lex_error::LexError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// A unified error covering all three stages of the pipeline.
///
/// Each statement runs through lexing, parsing and evaluation; whichever
/// stage fails produces the matching variant. The `Display` output already
/// names the error class and the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HulkError {
    /// The lexer found malformed input.
    Lexical(LexError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// Evaluation of a well-formed statement failed.
    Semantic(SemanticError),
}

impl std::fmt::Display for HulkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HulkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
        }
    }
}

impl From<LexError> for HulkError {
    fn from(error: LexError) -> Self {
        Self::Lexical(error)
    }
}

impl From<SyntaxError> for HulkError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<SemanticError> for HulkError {
    fn from(error: SemanticError) -> Self {
        Self::Semantic(error)
    }
}
