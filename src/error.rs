/// Parsing errors.
///
/// Defines all error types that can occur during parsing of source code.
/// Parse errors include unexpected tokens, expressions with no applicable
/// parse rule, and invalid integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unbound identifiers, type mismatches, unknown operators,
/// bad calls, division by zero, and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
