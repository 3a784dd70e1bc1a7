//! # lemur
//!
//! lemur is a small, dynamically-typed, expression-oriented scripting
//! language interpreter written in Rust. Source text is tokenized, parsed
//! into an abstract syntax tree by a Pratt-style operator-precedence
//! parser, and executed by a tree-walking evaluator with lexically scoped
//! environments, first-class functions, and closures.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::interpreter::{
    environment::Environment,
    evaluator::eval,
    lexer::Lexer,
    parser::Parser,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches the originating token to every node for diagnostics and
///   string rendering.
/// - Renders nodes back to fully parenthesised source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. It standardizes error reporting: parse errors are
/// accumulated on the parser, runtime errors travel through the value
/// domain, and both render to the exact user-facing message strings.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Produces stable, user-visible message text via `Display`.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code. It exposes the public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values,
///   and environments.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read–tokenize–print loop.
///
/// A deliberately minimal front end: it prompts, reads a line, and prints
/// the line's tokens. The `exit` command ends the session.
pub mod repl;

/// Parses and evaluates a source string in a fresh root environment.
///
/// The first parse error, if any, is returned as `Err` and nothing is
/// evaluated. Otherwise the final value of the program is returned; note
/// that runtime failures are *values* (`Value::Error`), not `Err`, so a
/// successfully parsed program always yields `Ok`.
///
/// # Errors
/// Returns the first recorded [`error::ParseError`] when the source does
/// not parse cleanly.
///
/// # Examples
/// ```
/// use lemur::{interpret, interpreter::value::Value};
///
/// let result = interpret("let x = 2 + 2; x;").unwrap();
/// assert_eq!(result, Value::Integer(4));
///
/// // Runtime failures are ordinary values carrying the error.
/// let result = interpret("5 + true;").unwrap();
/// assert_eq!(result.to_string(), "Error: type mismatch: INTEGER + BOOLEAN");
///
/// // Syntax errors surface as Err before anything runs.
/// assert!(interpret("let 1 = x;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(Box::new(error.clone()));
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    Ok(eval(&program, &env))
}
