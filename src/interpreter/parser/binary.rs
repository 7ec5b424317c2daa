use std::iter::Peekable;

use crate::{ast::{BinaryOperator, Expr},
            interpreter::{lexer::Token,
                          parser::{core::ParseResult, unary::parse_unary},
                          registry::FunctionRegistry}};

/// Parses logical expressions.
///
/// Handles left-associative chains of `&` and `|`, which share the lowest
/// precedence level.
///
/// The rule is: `logical := equality (("&" | "|") equality)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>,
                            registry: &FunctionRegistry,
                            line: usize)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_equality(tokens, registry, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            let line = *line;
            tokens.next();

            let right = parse_equality(tokens, registry, line)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>,
                             registry: &FunctionRegistry,
                             line: usize)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_comparison(tokens, registry, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            let line = *line;
            tokens.next();

            let right = parse_comparison(tokens, registry, line)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative chains of `<`, `<=`, `>` and `>=`.
///
/// The rule is: `comparison := concat (("<" | "<=" | ">" | ">=") concat)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>,
                               registry: &FunctionRegistry,
                               line: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_concat(tokens, registry, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Less
                       | BinaryOperator::LessEqual
                       | BinaryOperator::Greater
                       | BinaryOperator::GreaterEqual)
        {
            let line = *line;
            tokens.next();

            let right = parse_concat(tokens, registry, line)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses string concatenation expressions.
///
/// Handles left-associative chains of `@`.
///
/// The rule is: `concat := term ("@" term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_concat<'a, I>(tokens: &mut Peekable<I>,
                           registry: &FunctionRegistry,
                           line: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens, registry, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Concat)
        {
            let line = *line;
            tokens.next();

            let right = parse_term(tokens, registry, line)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>,
                         registry: &FunctionRegistry,
                         line: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, registry, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();

            let right = parse_factor(tokens, registry, line)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `factor := power (("*" | "/" | "%") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                           registry: &FunctionRegistry,
                           line: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_power(tokens, registry, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();

            let right = parse_power(tokens, registry, line)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `power := unary ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `registry`: The function registry, needed to recognize calls.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>,
                          registry: &FunctionRegistry,
                          line: usize)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_unary(tokens, registry, line)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_power(tokens, registry, line)?;

        return Ok(Expr::Binary { left: Box::new(left),
                                 op: BinaryOperator::Pow,
                                 right: Box::new(right),
                                 line });
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `^`, `@`, comparison operators and logical
/// operators). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use hulk::{ast::BinaryOperator,
///            interpreter::{lexer::Token, parser::binary::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::At => Some(BinaryOperator::Concat),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
