#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum SemanticError {
    /// Tried to use a variable that has no binding in the current environment.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not registered.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary arithmetic or comparison operator received a non-numeric
    /// operand.
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Unary negation received a non-numeric operand.
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A logical operator received a non-boolean operand.
    OperandsMustBeBooleans {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Logical NOT received a non-boolean operand.
    OperandMustBeBool {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `if` condition did not evaluate to a boolean.
    ConditionNotBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// How many arguments the function takes.
        expected: usize,
        /// How many arguments were supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin function received a non-numeric argument.
    NumberExpected {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The evaluation depth limit was exceeded.
    StackOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Semantic error on line {line}: {name} is not defined.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Semantic error on line {line}: Function '{name}' is not defined.")
            },
            Self::OperandsMustBeNumbers { line } => {
                write!(f, "Semantic error on line {line}: Operands must be numbers.")
            },
            Self::OperandMustBeNumber { line } => {
                write!(f, "Semantic error on line {line}: Operands must be number.")
            },
            Self::OperandsMustBeBooleans { line } => {
                write!(f, "Semantic error on line {line}: Operands must be boolean.")
            },
            Self::OperandMustBeBool { line } => {
                write!(f, "Semantic error on line {line}: Operand must be bool.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "Semantic error on line {line}: Division by zero.")
            },
            Self::ModuloByZero { line } => {
                write!(f, "Semantic error on line {line}: Modulo by zero.")
            },
            Self::ConditionNotBoolean { line } => write!(f,
                                                         "Semantic error on line {line}: Condition must return a boolean."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Semantic error on line {line}: Function '{name}' receives {expected} argument(s), but {found} were given."),
            Self::NumberExpected { name, line } => {
                write!(f, "Semantic error on line {line}: Function '{name}' expects a number.")
            },
            Self::StackOverflow { line } => {
                write!(f, "Semantic error on line {line}: Stack Overflow.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Semantic error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
