use crate::{ast::Expr,
            error::SemanticError,
            interpreter::{environment::Environment,
                          evaluator::core::{EvalResult, Evaluator},
                          value::Value}};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number. It returns the resulting value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: 1, func: print },
    "sqrt"  => { arity: 1, func: |args, line| numeric("sqrt", f64::sqrt, args, line) },
    "sin"   => { arity: 1, func: |args, line| numeric("sin", f64::sin, args, line) },
    "cos"   => { arity: 1, func: |args, line| numeric("cos", f64::cos, args, line) },
    "exp"   => { arity: 1, func: |args, line| numeric("exp", f64::exp, args, line) },
    "log"   => { arity: 2, func: log },
    "rand"  => { arity: 0, func: |_, _| Ok(Value::Number(rand::random::<f64>())) },
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right first. The evaluator then checks
    /// whether the name matches a builtin; builtins shadow user declarations
    /// of the same name. Otherwise it delegates to user-defined function
    /// handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `env`: The environment the arguments are evaluated in.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            env: &Environment,
                            line: usize)
                            -> EvalResult<Value> {
        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval(argument, env)?);
        }

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if arg_vals.len() != builtin.arity {
                return Err(SemanticError::ArgumentCountMismatch { name:     name.to_string(),
                                                                  expected: builtin.arity,
                                                                  found:    arg_vals.len(),
                                                                  line, });
            }
            return (builtin.func)(&arg_vals, line);
        }

        self.call_user_function(name, arg_vals, line)
    }

    /// Executes a user-defined function.
    ///
    /// The declaration is retrieved from the registry by name, and its
    /// parameter count must match the number of supplied arguments. The body
    /// runs in a fresh environment holding *only* the parameters: functions
    /// never see the variables of the scope they were declared or called in.
    ///
    /// # Errors
    /// - [`SemanticError::UndefinedFunction`]: Unknown function name.
    /// - [`SemanticError::ArgumentCountMismatch`]: Wrong number of arguments.
    ///
    /// # Returns
    /// The value produced by the function body.
    fn call_user_function(&mut self,
                          name: &str,
                          arg_vals: Vec<Value>,
                          line: usize)
                          -> EvalResult<Value> {
        let registry = self.registry();
        let Some(decl) = registry.get(name) else {
            return Err(SemanticError::UndefinedFunction { name: name.to_string(),
                                                          line });
        };

        if arg_vals.len() != decl.params.len() {
            return Err(SemanticError::ArgumentCountMismatch { name:     name.to_string(),
                                                              expected: decl.params.len(),
                                                              found:    arg_vals.len(),
                                                              line, });
        }

        let mut scope = Environment::new();
        for (param, value) in decl.params.iter().zip(arg_vals) {
            scope.define(param, value);
        }

        self.eval(&decl.body, &scope)
    }
}

/// The `print` builtin.
///
/// Returns its argument unchanged; the driver is responsible for displaying
/// every statement's value, so `print(x)` and plain `x` behave identically.
fn print(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(args[0].clone())
}

/// The `log` builtin: logarithm of the first argument in the base given by
/// the second.
fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = args[0].as_number(SemanticError::NumberExpected { name: "log".to_string(),
                                                                  line })?;
    let base = args[1].as_number(SemanticError::NumberExpected { name: "log".to_string(),
                                                                 line })?;

    Ok(Value::Number(value.log(base)))
}

/// Applies a one-argument numeric function, checking the operand type.
///
/// # Errors
/// - [`SemanticError::NumberExpected`]: The argument is not a number.
fn numeric(name: &str, func: fn(f64) -> f64, args: &[Value], line: usize) -> EvalResult<Value> {
    let value = args[0].as_number(SemanticError::NumberExpected { name: name.to_string(),
                                                                  line })?;

    Ok(Value::Number(func(value)))
}
