/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numeric literals, booleans, string literals and the
/// pre-resolved constants `PI` and `E`.
/// It is used in the AST to represent literal expressions and as a convenient
/// container for constants during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, without the surrounding quotes.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all constructs of the language: literals, variables, unary
/// and binary operations, function calls, conditionals, `let` expressions and
/// function declarations. Each variant carries the source line it originated
/// from for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation (arithmetic, comparison, logic or concatenation).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `sqrt(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Conditional expression; both branches are mandatory.
    If {
        /// The condition expression; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated when the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `let <bindings> in <body>` expression.
    Let {
        /// Ordered variable bindings; later bindings see earlier ones.
        bindings: Vec<Binding>,
        /// The body evaluated with the bindings in scope.
        body:     Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A top-level function declaration statement.
    FunctionDecl(FunctionDecl),
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use hulk::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Call { line, .. }
            | Self::If { line, .. }
            | Self::Let { line, .. } => *line,
            Self::FunctionDecl(decl) => decl.line,
        }
    }
}

/// A single `name = value` binding inside a `let` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The name being bound.
    pub name:  String,
    /// The expression producing the bound value.
    pub value: Expr,
}

/// Represents a user-defined function declaration.
///
/// A function binds a list of parameter names to a body expression. Calls do
/// not capture the declaration environment; the body sees only its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names (e.g. `x`).
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Box<Expr>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, logic and string
/// concatenation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// String concatenation (`@`)
    Concat,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

/// Represents a unary operator.
///
/// Unary operators include negation and logical NOT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Concat => "@",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
