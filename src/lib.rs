//! # hulk
//!
//! hulk is an interpreter for HULK, a small expression-oriented programming
//! language. It scans, parses, and evaluates one statement at a time, with
//! support for variables, user-defined functions, conditionals, and more.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::HulkError,
            interpreter::{evaluator::core::Evaluator,
                          lexer::scan,
                          parser::core::parse,
                          registry::FunctionRegistry,
                          value::Value}};

/// Stack size of the evaluation worker thread.
///
/// Every guarded evaluation step costs several host stack frames, so the
/// depth limit needs more headroom than a default thread stack provides.
const EVAL_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and declaration types for all language constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing statements.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the interpreter, parser, and evaluator.
///
/// # Responsibilities
/// - Safely convert between `f64` and `i64` without silent data loss.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Runs statements one at a time, keeping the state they share.
///
/// The only state surviving a statement is the function registry and the
/// running line counter; variables never do. Each submission is one complete
/// statement ending in `;`.
///
/// # Example
/// ```
/// use hulk::Interpreter;
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.run_statement("function double(x) => x * 2;").unwrap();
/// let value = interpreter.run_statement("double(21);").unwrap();
///
/// assert_eq!(value.to_string(), "42");
/// ```
pub struct Interpreter {
    registry: FunctionRegistry,
    line:     usize,
}

impl Interpreter {
    /// Creates an interpreter with no user functions and the line counter at
    /// zero.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: FunctionRegistry::new(),
               line:     0, }
    }

    /// The line number of the most recently submitted line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Advances the line counter without running anything.
    ///
    /// Used for blank submissions, so error reports in later statements still
    /// match the source file.
    pub fn advance_line(&mut self) {
        self.line += 1;
    }

    /// Runs one statement and returns its value.
    ///
    /// The statement goes through scanning, parsing and evaluation in order,
    /// stopping at the first stage that fails. Scanning reports every lexical
    /// error it finds; the later stages report only the first.
    ///
    /// Evaluation runs on a worker thread with a stack sized for the
    /// evaluator's depth limit, so runaway recursion is reported as a
    /// semantic error regardless of the calling thread's stack.
    ///
    /// # Parameters
    /// - `source`: The statement's source text, terminator included.
    ///
    /// # Returns
    /// The statement's value. Successful function declarations also update
    /// the registry as a side effect.
    ///
    /// # Errors
    /// - One or more [`HulkError`] values describing why the statement
    ///   failed. State needed by later statements is never corrupted.
    pub fn run_statement(&mut self, source: &str) -> Result<Value, Vec<HulkError>> {
        self.line += 1;
        let start_line = self.line;

        let outcome = scan(source, start_line);
        self.line = outcome.line;

        if !outcome.errors.is_empty() {
            return Err(outcome.errors.into_iter().map(HulkError::from).collect());
        }

        let mut tokens = outcome.tokens.iter().peekable();
        let ast = parse(&mut tokens, &mut self.registry, start_line)
            .map_err(|error| vec![HulkError::from(error)])?;

        let registry = &self.registry;
        let result = std::thread::scope(|scope| {
            let worker = std::thread::Builder::new().name("eval".to_string())
                                                    .stack_size(EVAL_STACK_SIZE)
                                                    .spawn_scoped(scope, || {
                                                        Evaluator::new(registry).run(&ast)
                                                    });

            match worker {
                Ok(handle) => match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                },
                // Spawning only fails when the process is out of resources;
                // evaluate on the caller's stack then.
                Err(_) => Evaluator::new(registry).run(&ast),
            }
        });

        result.map_err(|error| vec![HulkError::from(error)])
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the final evaluation result after execution.
///
/// This function runs every non-blank line of the provided source as one
/// statement, sharing one interpreter across all of them. If execution
/// succeeds, it returns `Ok(())`; otherwise, it returns the first error of
/// the first failing statement.
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation of any statement
/// fails.
///
/// # Examples
/// ```
/// use hulk::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let res = get_result("2 + 2;", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("x + 1;", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::new();

    let mut result = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            interpreter.advance_line();
            continue;
        }

        match interpreter.run_statement(line) {
            Ok(value) => {
                if !value.is_void() {
                    result = Some(value);
                }
            },
            Err(mut errors) => return Err(Box::new(errors.remove(0))),
        }
    }

    if auto_print && let Some(value) = result {
        println!("{value}");
    }

    Ok(())
}
