use crate::{ast::BinaryOperator,
            error::SemanticError,
            interpreter::{evaluator::core::{EvalResult, Evaluator},
                          value::Value},
            util::num::f64_to_i64_truncated};

impl Evaluator<'_> {
    /// Evaluates a binary operation on two values.
    ///
    /// Both operands are already evaluated; there is no short-circuiting at
    /// this level. Equality is structural and defined for every pair of
    /// values, concatenation uses each value's display form, and every other
    /// operator checks its operand types first.
    ///
    /// # Parameters
    /// - `op`: Binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - [`SemanticError::OperandsMustBeNumbers`]: An arithmetic or comparison
    ///   operator received a non-number.
    /// - [`SemanticError::OperandsMustBeBooleans`]: `&` or `|` received a
    ///   non-boolean.
    /// - [`SemanticError::DivisionByZero`], [`SemanticError::ModuloByZero`]:
    ///   Zero divisor.
    pub(crate) fn eval_binary(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        match op {
            BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
            BinaryOperator::Concat => Ok(Value::Str(format!("{left}{right}"))),
            BinaryOperator::And => {
                let (left, right) = both_bools(left, right, line)?;
                Ok(Value::Bool(left && right))
            },
            BinaryOperator::Or => {
                let (left, right) = both_bools(left, right, line)?;
                Ok(Value::Bool(left || right))
            },
            BinaryOperator::Less => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Bool(left < right))
            },
            BinaryOperator::LessEqual => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Bool(left <= right))
            },
            BinaryOperator::Greater => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Bool(left > right))
            },
            BinaryOperator::GreaterEqual => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Bool(left >= right))
            },
            BinaryOperator::Add => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Number(left + right))
            },
            BinaryOperator::Sub => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Number(left - right))
            },
            BinaryOperator::Mul => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Number(left * right))
            },
            BinaryOperator::Div => {
                let (left, right) = both_numbers(left, right, line)?;
                if right == 0.0 {
                    return Err(SemanticError::DivisionByZero { line });
                }
                Ok(Value::Number(left / right))
            },
            BinaryOperator::Mod => {
                let (left, right) = both_numbers(left, right, line)?;
                eval_modulo(left, right, line)
            },
            BinaryOperator::Pow => {
                let (left, right) = both_numbers(left, right, line)?;
                Ok(Value::Number(left.powf(right)))
            },
        }
    }
}

/// Extracts two numeric operands, or fails with a single uniform error.
fn both_numbers(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    let left = left.as_number(SemanticError::OperandsMustBeNumbers { line })?;
    let right = right.as_number(SemanticError::OperandsMustBeNumbers { line })?;

    Ok((left, right))
}

/// Extracts two boolean operands, or fails with a single uniform error.
fn both_bools(left: &Value, right: &Value, line: usize) -> EvalResult<(bool, bool)> {
    let left = left.as_bool(SemanticError::OperandsMustBeBooleans { line })?;
    let right = right.as_bool(SemanticError::OperandsMustBeBooleans { line })?;

    Ok((left, right))
}

/// Computes `left % right` over truncated integer operands.
///
/// Both operands are truncated toward zero before the remainder is taken,
/// so `7.9 % 3` is `1`, not `1.9`.
///
/// # Errors
/// - [`SemanticError::ModuloByZero`]: `right` is zero.
/// - [`SemanticError::LiteralTooLarge`]: An operand does not fit in an `i64`.
fn eval_modulo(left: f64, right: f64, line: usize) -> EvalResult<Value> {
    if right == 0.0 {
        return Err(SemanticError::ModuloByZero { line });
    }

    let left = f64_to_i64_truncated(left, SemanticError::LiteralTooLarge { line })?;
    let right = f64_to_i64_truncated(right, SemanticError::LiteralTooLarge { line })?;

    #[allow(clippy::cast_precision_loss)]
    Ok(Value::Number(left.wrapping_rem(right) as f64))
}
