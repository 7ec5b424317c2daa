use crate::{ast::{Binding, Expr},
            error::SemanticError,
            interpreter::{environment::Environment, registry::FunctionRegistry, value::Value}};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `SemanticError` describing the failure.
pub type EvalResult<T> = Result<T, SemanticError>;

/// Maximum number of evaluation steps for a single statement.
///
/// The counter increments on *every* node visited, not only on function
/// calls, so deeply recursive user functions fail with a reported error
/// instead of exhausting the host call stack.
pub const STACK_LIMIT: usize = 10_000;

/// The confirmation value produced by evaluating a function declaration.
pub const FUNCTION_DECLARED: &str = "Function declared.";

/// Walks an AST and produces values.
///
/// The evaluator borrows the function registry for resolving calls and keeps
/// the depth counter guarding against runaway recursion. Variable state lives
/// in [`Environment`] values passed down the walk, never in the evaluator.
///
/// ## Usage
///
/// Create one per statement and call [`run`]; the counter resets there, so an
/// evaluator may also be reused across statements.
///
/// [`run`]: Evaluator::run
pub struct Evaluator<'a> {
    registry: &'a FunctionRegistry,
    depth:    usize,
    line:     usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over the given function registry.
    #[must_use]
    pub const fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry,
               depth: 0,
               line: 0 }
    }

    /// The registry this evaluator resolves function calls against.
    ///
    /// The returned reference lives as long as the registry itself, not as
    /// long as this borrow of the evaluator.
    #[must_use]
    pub const fn registry(&self) -> &'a FunctionRegistry {
        self.registry
    }

    /// Evaluates one statement in a fresh, empty environment.
    ///
    /// The depth counter is reset first, so one pathological statement never
    /// poisons the next. The statement's line is recorded as well; the depth
    /// guard reports it no matter how deep into other declarations the walk
    /// has descended.
    ///
    /// # Parameters
    /// - `expr`: The statement to evaluate.
    ///
    /// # Returns
    /// The statement's value.
    ///
    /// # Errors
    /// - Any [`SemanticError`] raised during evaluation.
    pub fn run(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.depth = 0;
        self.line = expr.line_number();
        self.eval(expr, &Environment::new())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations, function calls, conditionals,
    /// `let` expressions and function declarations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The environment resolving variable references.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        self.depth += 1;
        if self.depth > STACK_LIMIT {
            return Err(SemanticError::StackOverflow { line: self.line });
        }

        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => Self::eval_variable(name, env, *line),
            Expr::Unary { op, operand, line } => {
                let value = self.eval(operand, env)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, env, *line),
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       line, } => self.eval_if(condition, then_branch, else_branch, env, *line),
            Expr::Let { bindings, body, .. } => self.eval_let(bindings, body, env),
            Expr::FunctionDecl(_) => Ok(Value::Str(FUNCTION_DECLARED.to_string())),
        }
    }

    /// Looks up a variable in the current environment.
    ///
    /// # Errors
    /// - [`SemanticError::UndefinedVariable`]: The name has no binding.
    fn eval_variable(name: &str, env: &Environment, line: usize) -> EvalResult<Value> {
        env.get(name)
           .cloned()
           .ok_or_else(|| SemanticError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Evaluates a conditional expression.
    ///
    /// Exactly one branch is evaluated; the other is never touched, so an
    /// error hiding in the untaken branch stays unreported.
    ///
    /// # Errors
    /// - [`SemanticError::ConditionNotBoolean`]: The condition did not
    ///   produce a boolean.
    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &Expr,
               else_branch: &Expr,
               env: &Environment,
               line: usize)
               -> EvalResult<Value> {
        let condition = self.eval(condition, env)?
                            .as_bool(SemanticError::ConditionNotBoolean { line })?;

        if condition {
            self.eval(then_branch, env)
        } else {
            self.eval(else_branch, env)
        }
    }

    /// Evaluates a `let` expression.
    ///
    /// The surrounding environment is copied; bindings are installed into the
    /// copy in declaration order, so later bindings see earlier ones. The
    /// original environment is never modified.
    fn eval_let(&mut self,
                bindings: &[Binding],
                body: &Expr,
                env: &Environment)
                -> EvalResult<Value> {
        let mut scope = env.clone();

        for binding in bindings {
            let value = self.eval(&binding.value, &scope)?;
            scope.define(&binding.name, value);
        }

        self.eval(body, &scope)
    }
}
