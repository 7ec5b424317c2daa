use crate::{ast::UnaryOperator,
            error::SemanticError,
            interpreter::{evaluator::core::{EvalResult, Evaluator},
                          value::Value}};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Not`: boolean negation.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - [`SemanticError::OperandMustBeNumber`]: `-` applied to a non-number.
    /// - [`SemanticError::OperandMustBeBool`]: `!` applied to a non-boolean.
    pub(crate) fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let number = value.as_number(SemanticError::OperandMustBeNumber { line })?;
                Ok(Value::Number(-number))
            },
            UnaryOperator::Not => {
                let boolean = value.as_bool(SemanticError::OperandMustBeBool { line })?;
                Ok(Value::Bool(!boolean))
            },
        }
    }
}
