/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of one statement. Whether an
/// identifier is a function call is decided here, against the function
/// registry.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Registers function declarations, rolling back on failure.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, and produces results. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and conditionals.
/// - Reports semantic errors such as division by zero or type mismatches.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum used during evaluation, with methods for type
/// extraction, comparison and display.
pub mod value;
/// The environment module holds variable bindings.
///
/// An environment maps names to values for one `let` body or one function
/// call; scoping works by copying, never by mutation of an outer scope.
pub mod environment;
/// The registry module tracks declared functions.
///
/// The function registry is the only state shared between statements. It is
/// consulted by the parser to recognize calls and by the evaluator to resolve
/// them.
pub mod registry;
