use std::iter::Peekable;

use crate::{ast::{Expr, FunctionDecl},
            error::SyntaxError,
            interpreter::{lexer::Token,
                          parser::{binary::parse_logical,
                                   utils::{expect, parse_comma_separated, parse_identifier}},
                          registry::FunctionRegistry}};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses one complete statement, terminator included.
///
/// A statement is either a `function` declaration or a single expression,
/// always ending in `;`. Anything left over after the terminator is an error.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `registry`: The function registry; consulted to distinguish calls from
///   variables, and updated when a declaration parses successfully.
/// - `line`: The line the statement starts on, used when the input ends
///   before any token is seen.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// - Any [`SyntaxError`] raised while parsing the statement.
pub fn parse<'a, I>(tokens: &mut Peekable<I>,
                    registry: &mut FunctionRegistry,
                    line: usize)
                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Function, line)) => {
            let line = *line;
            tokens.next();

            parse_function_declaration(tokens, registry, line)
        },
        Some((_, line)) => {
            let line = *line;
            let expr = parse_expression(tokens, registry, line)?;
            finish_statement(tokens, line)?;

            Ok(expr)
        },
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical operators, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               registry: &FunctionRegistry,
                               line: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical(tokens, registry, line)
}

/// Parses a function declaration, positioned after the `function` keyword.
///
/// Syntax:
/// ```text
///     function <name>(<params>) => <body>;
/// ```
///
/// The name is registered *before* the body is parsed so the body may call
/// the function recursively. If any later step fails, the rollback guard
/// removes the provisional entry again; previously registered functions are
/// never affected by a failed declaration.
///
/// # Errors
/// - [`SyntaxError::ExpectFunctionName`]: The name is missing.
/// - [`SyntaxError::FunctionRedefinition`]: The name is already taken.
/// - Any error raised while parsing the parameter list or body.
pub fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                         registry: &mut FunctionRegistry,
                                         line: usize)
                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, SyntaxError::ExpectFunctionName { line })?;

    let mut guard = registry.declare_guarded(&name, line)?;

    expect(tokens, &Token::LParen, "(", line)?;
    let params =
        parse_comma_separated(tokens,
                              |t| parse_identifier(t, SyntaxError::ExpectVariableName { line }),
                              &Token::RParen,
                              ")",
                              line)?;
    expect(tokens, &Token::Arrow, "=>", line)?;

    let body = parse_expression(tokens, registry, line)?;
    finish_statement(tokens, line)?;

    guard.disarm();

    let decl = FunctionDecl { name,
                              params,
                              body: Box::new(body),
                              line };
    registry.define(decl.clone());

    Ok(Expr::FunctionDecl(decl))
}

/// Consumes the statement terminator and rejects trailing tokens.
///
/// # Errors
/// - [`SyntaxError::Expected`]: The `;` is missing.
/// - [`SyntaxError::InvalidSyntax`]: Tokens remain after the `;`.
pub fn finish_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Semicolon, ";", line)?;

    if let Some((_, line)) = tokens.peek() {
        return Err(SyntaxError::InvalidSyntax { line: *line });
    }

    Ok(())
}
