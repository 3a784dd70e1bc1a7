/// The environment module stores runtime bindings.
///
/// An environment maps names to values and optionally links to an enclosing
/// environment. A fresh root environment is created per program run; each
/// function call encloses the closure's captured environment. Blocks do not
/// introduce environments.
///
/// # Responsibilities
/// - Name lookup walking outward through the enclosing chain.
/// - `let` binding into the innermost environment (enables shadowing).
/// - Shared ownership so closures can outlive their defining scope.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators, manages environments, and produces a final value. It
/// is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements closures and the return-propagation protocol.
/// - Surfaces runtime failures as error values that short-circuit
///   evaluation instead of unwinding the host stack.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Distinguishes keywords from identifiers and `==` from `=`.
/// - Emits `Illegal` tokens for unrecognized bytes and `Eof` forever after
///   the end of input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using Pratt-style operator-precedence parsing. It
/// records syntax errors and keeps going, so a single pass reports as many
/// problems as possible.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces operator precedence and left-associativity.
/// - Accumulates parse errors without aborting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value enum used during execution: integers,
/// booleans, null, first-class functions, and the internal return and
/// error sentinels. It also provides type tags, truthiness, and the
/// user-visible textual rendering of every value.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements truthiness and the inspect (`Display`) contract.
/// - Carries typed runtime errors through the value domain.
pub mod value;
