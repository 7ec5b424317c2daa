use crate::{ast::LiteralValue,
            error::SemanticError,
            interpreter::evaluator::core::EvalResult};

/// Represents a value produced by evaluating an expression.
///
/// Every statement evaluates to exactly one `Value`. `Void` is the value of a
/// statement that produces nothing printable, such as a function declaration
/// body that is never shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit floating-point number.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(String),
    /// The absence of a printable value.
    Void,
}

impl Value {
    /// Extracts the numeric content of `self`.
    ///
    /// # Parameters
    /// - `error`: The error to report when `self` is not a number.
    ///
    /// # Errors
    /// - The given `error`, if `self` is not [`Value::Number`].
    pub fn as_number(&self, error: SemanticError) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(error),
        }
    }

    /// Extracts the boolean content of `self`.
    ///
    /// # Parameters
    /// - `error`: The error to report when `self` is not a boolean.
    ///
    /// # Errors
    /// - The given `error`, if `self` is not [`Value::Bool`].
    pub fn as_bool(&self, error: SemanticError) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(error),
        }
    }

    /// Checks whether `self` is [`Value::Void`].
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Void => Ok(()),
        }
    }
}
