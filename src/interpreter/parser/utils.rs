use std::iter::Peekable;

use crate::{error::SyntaxError,
            interpreter::{lexer::Token, parser::core::ParseResult}};

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `expected`: The token that must come next.
/// - `lexeme`: How the token is written in source, used in the error message.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The line the consumed token was found on.
///
/// # Errors
/// - [`SyntaxError::Expected`]: The next token is missing or different.
pub fn expect<'a, I>(tokens: &mut Peekable<I>,
                     expected: &Token,
                     lexeme: &str,
                     line: usize)
                     -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((_, line)) => Err(SyntaxError::Expected { lexeme: lexeme.to_string(),
                                                       line:   *line, }),
        None => Err(SyntaxError::Expected { lexeme: lexeme.to_string(),
                                            line }),
    }
}

/// Consumes the next token, requiring it to be an identifier.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `error`: The error to report when no identifier is found.
///
/// # Returns
/// The identifier's name.
///
/// # Errors
/// - The given `error`, if the next token is missing or not an identifier.
pub fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, error: SyntaxError) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        _ => Err(error),
    }
}

/// Parses a comma-separated list up to (and including) a closing token.
///
/// The list may be empty. Used for parameter lists and call arguments.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `parse_item`: Parses one list element.
/// - `closing`: The token that ends the list.
/// - `closing_lexeme`: How the closing token is written, for error messages.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The parsed elements, in source order.
///
/// # Errors
/// - [`SyntaxError::Expected`]: An element is not followed by `,` or the
///   closing token.
/// - [`SyntaxError::UnexpectedEndOfInput`]: The input ended inside the list.
pub fn parse_comma_separated<'a, I, T, F>(tokens: &mut Peekable<I>,
                                          mut parse_item: F,
                                          closing: &Token,
                                          closing_lexeme: &str,
                                          line: usize)
                                          -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone,
          F: FnMut(&mut Peekable<I>) -> ParseResult<T>
{
    let mut items = Vec::new();

    if let Some((token, _)) = tokens.peek()
       && token == closing
    {
        tokens.next();
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        match tokens.next() {
            Some((token, _)) if token == closing => break,
            Some((Token::Comma, _)) => {},
            Some((_, line)) => {
                return Err(SyntaxError::Expected { lexeme: closing_lexeme.to_string(),
                                                   line:   *line, })
            },
            None => return Err(SyntaxError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(items)
}
