use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"Hello, World!"`.
    ///
    /// The token carries the contents without the surrounding quotes.
    #[token("\"", lex_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// The constant `PI`, resolved to its numeric value during lexing.
    #[token("PI", |_| std::f64::consts::PI)]
    Pi(f64),
    /// The constant `E`, resolved to its numeric value during lexing.
    #[token("E", |_| std::f64::consts::E, priority = 3)]
    Euler(f64),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `function`
    #[token("function")]
    Function,
    /// `null`; reserved, no expression form accepts it.
    #[token("null")]
    Null,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=>`
    #[token("=>")]
    Arrow,
    /// `@`
    #[token("@")]
    At,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equal,
    /// `!`
    #[token("!")]
    Bang,

    /// Line breaks; counted but never produced as tokens.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The raw error produced by the lexer before a line number is attached.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that does not start any token.
    #[default]
    UnexpectedCharacter,
    /// A string literal without a closing quote.
    UnterminatedString,
}

impl LexErrorKind {
    /// Attaches a line number, producing a reportable [`LexError`].
    #[must_use]
    pub const fn at(self, line: usize) -> LexError {
        match self {
            Self::UnexpectedCharacter => LexError::UnexpectedCharacter { line },
            Self::UnterminatedString => LexError::UnterminatedString { line },
        }
    }
}

/// The result of tokenizing one statement.
pub struct ScanOutcome {
    /// The recognized tokens, each paired with its source line.
    pub tokens: Vec<(Token, usize)>,
    /// Every lexical error found; scanning continues past them.
    pub errors: Vec<LexError>,
    /// The line the lexer ended on.
    pub line:   usize,
}

/// Tokenizes one statement of source code.
///
/// Scanning does not stop at the first bad character; all lexical errors are
/// collected so they can be reported together.
///
/// # Parameters
/// - `source`: The raw statement text.
/// - `start_line`: The line number the statement begins on.
///
/// # Returns
/// - A [`ScanOutcome`] with the tokens, any errors, and the final line number.
///
/// # Example
/// ```
/// use hulk::interpreter::lexer::{scan, Token};
///
/// let outcome = scan("1 + 2;", 1);
///
/// assert!(outcome.errors.is_empty());
/// assert_eq!(outcome.tokens[1], (Token::Plus, 1));
/// ```
#[must_use]
pub fn scan(source: &str, start_line: usize) -> ScanOutcome {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: start_line });

    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(kind) => errors.push(kind.at(lexer.extras.line)),
        }
    }

    ScanOutcome { tokens,
                  errors,
                  line: lexer.extras.line }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Consumes a string literal after its opening quote.
///
/// Newlines inside the literal still advance the line counter. If no closing
/// quote exists, the rest of the input is consumed and an error is produced.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();

    if let Some(end) = remainder.find('"') {
        let content = &remainder[..end];
        lex.extras.line += content.chars().filter(|&c| c == '\n').count();
        lex.bump(end + 1);

        Ok(content.to_string())
    } else {
        lex.bump(remainder.len());

        Err(LexErrorKind::UnterminatedString)
    }
}
