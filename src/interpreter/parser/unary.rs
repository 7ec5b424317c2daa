use std::iter::Peekable;

use crate::{ast::{Binding, Expr, LiteralValue, UnaryOperator},
            error::SyntaxError,
            interpreter::{lexer::Token,
                          parser::{core::{parse_expression, ParseResult},
                                   utils::{expect, parse_comma_separated}},
                          registry::FunctionRegistry}};

/// Parses unary expressions.
///
/// Handles the prefix operators `-` and `!`. Unary operators are
/// right-recursive, so `--x` parses as `-(-x)`.
///
/// The rule is: `unary := ("-" | "!") unary | statement`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The parsed expression node.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                          registry: &FunctionRegistry,
                          line: usize)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        let line = *line;
        tokens.next();

        let operand = parse_unary(tokens, registry, line)?;

        return Ok(Expr::Unary { op,
                                operand: Box::new(operand),
                                line });
    }

    parse_statement(tokens, registry, line)
}

/// Maps a token to its corresponding unary operator.
///
/// # Example
/// ```
/// use hulk::{ast::UnaryOperator,
///            interpreter::{lexer::Token, parser::unary::token_to_unary_operator}};
///
/// assert_eq!(token_to_unary_operator(&Token::Bang),
///            Some(UnaryOperator::Not));
/// ```
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}

/// Parses the statement-level expression forms.
///
/// Dispatches on the next token: `if` and `let` expressions, identifiers
/// (variables or calls), and finally primaries.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The parsed expression node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              registry: &FunctionRegistry,
                              line: usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();

            parse_if(tokens, registry, line)
        },
        Some((Token::Let, line)) => {
            let line = *line;
            tokens.next();

            parse_let(tokens, registry, line)
        },
        Some((Token::Identifier(_), _)) => parse_identifier_or_call(tokens, registry, line),
        _ => parse_primary(tokens, registry, line),
    }
}

/// Parses an `if` expression, positioned after the `if` keyword.
///
/// Syntax:
/// ```text
///     if (<condition>) <then_expr> else <else_expr>
/// ```
///
/// The condition is parsed as a *primary*, so anything beyond a literal must
/// be parenthesized. The `else` branch is mandatory.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// An `Expr::If` node representing the full conditional expression.
///
/// # Errors
/// - [`SyntaxError::Expected`]: The `else` keyword is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                       registry: &FunctionRegistry,
                       line: usize)
                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_primary(tokens, registry, line)?;
    let then_branch = parse_expression(tokens, registry, line)?;

    expect(tokens, &Token::Else, "else", line)?;

    let else_branch = parse_expression(tokens, registry, line)?;

    Ok(Expr::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch: Box::new(else_branch),
                  line })
}

/// Parses a `let` expression, positioned after the `let` keyword.
///
/// Syntax:
/// ```text
///     let <name> = <value> (, <name> = <value>)* in <body>
/// ```
///
/// At least one binding is required. Bindings are evaluated in order, so later
/// bindings may refer to earlier ones.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `let` keyword.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Line number of the `let` token.
///
/// # Returns
/// An `Expr::Let` node.
///
/// # Errors
/// - [`SyntaxError::ExpectVariableName`]: A binding name is missing.
/// - [`SyntaxError::Expected`]: A `=` or the `in` keyword is missing.
pub fn parse_let<'a, I>(tokens: &mut Peekable<I>,
                        registry: &FunctionRegistry,
                        line: usize)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut bindings = Vec::new();

    loop {
        let name = match tokens.next() {
            Some((Token::Identifier(name), _)) => name.clone(),
            Some((_, line)) => return Err(SyntaxError::ExpectVariableName { line: *line }),
            None => return Err(SyntaxError::ExpectVariableName { line }),
        };

        expect(tokens, &Token::Equal, "=", line)?;

        let value = parse_expression(tokens, registry, line)?;
        bindings.push(Binding { name, value });

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::In, _)) => break,
            Some((_, line)) => {
                return Err(SyntaxError::Expected { lexeme: "in".to_string(),
                                                   line:   *line, })
            },
            None => {
                return Err(SyntaxError::Expected { lexeme: "in".to_string(),
                                                   line })
            },
        }
    }

    let body = parse_expression(tokens, registry, line)?;

    Ok(Expr::Let { bindings,
                   body: Box::new(body),
                   line })
}

/// Parses an identifier, producing either a variable reference or a call.
///
/// An identifier is treated as a function call only when the name is present
/// in the registry; a registered name must then be followed by an argument
/// list. Every other identifier is a variable reference, even when a `(`
/// follows it.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the identifier.
/// - `registry`: The function registry deciding variable versus call.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::Call` or `Expr::Variable` node.
///
/// # Errors
/// - [`SyntaxError::Expected`]: A registered name is not followed by `(`.
pub fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                       registry: &FunctionRegistry,
                                       line: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((_, line)) => return Err(SyntaxError::InvalidSyntax { line: *line }),
        None => return Err(SyntaxError::UnexpectedEndOfInput { line }),
    };

    if !registry.contains(&name) {
        return Ok(Expr::Variable { name, line });
    }

    expect(tokens, &Token::LParen, "(", line)?;

    let arguments = parse_comma_separated(tokens,
                                          |t| parse_expression(t, registry, line),
                                          &Token::RParen,
                                          ")",
                                          line)?;

    Ok(Expr::Call { name,
                    arguments,
                    line })
}

/// Parses a primary expression.
///
/// Primaries are the leaves of the grammar: numeric, string and boolean
/// literals, the constants `PI` and `E`, and parenthesized expressions.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls inside
///   parentheses.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - [`SyntaxError::InvalidSyntax`]: The next token cannot start a primary.
/// - [`SyntaxError::UnexpectedEndOfInput`]: The input ended early.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                            registry: &FunctionRegistry,
                            line: usize)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(v) | Token::Pi(v) | Token::Euler(v), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Number(*v),
                               line:  *line, })
        },
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                          line:  *line, }),
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: LiteralValue::Bool(*b),
                                                           line:  *line, }),
        Some((Token::LParen, line)) => {
            let line = *line;
            let expr = parse_expression(tokens, registry, line)?;
            expect(tokens, &Token::RParen, ")", line)?;

            Ok(expr)
        },
        Some((_, line)) => Err(SyntaxError::InvalidSyntax { line: *line }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}
