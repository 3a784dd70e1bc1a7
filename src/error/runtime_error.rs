use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are not thrown: they travel through the evaluator inside
/// `Value::Error`, short-circuiting every enclosing evaluation until they
/// reach the caller.
pub enum RuntimeError {
    /// Tried to use a name with no binding in scope.
    IdentifierNotFound {
        /// The unbound name.
        name: String,
    },
    /// A binary operator was applied to operands of different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// A unary operator was applied to an operand it is not defined for.
    UnknownUnaryOperator {
        /// The operator.
        op:    UnaryOperator,
        /// Type tag of the operand.
        right: &'static str,
    },
    /// A binary operator was applied to same-typed operands it is not
    /// defined for.
    UnknownBinaryOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// The callee of a call expression was not a function value.
    NotAFunction {
        /// Type tag of the value that was called.
        type_name: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        got:      usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed the 64-bit range.
    IntegerOverflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            },

            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },

            Self::UnknownUnaryOperator { op, right } => {
                write!(f, "unknown operator: {op}{right}")
            },

            Self::UnknownBinaryOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },

            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),

            Self::WrongArgumentCount { expected, got } => {
                write!(f, "wrong number of arguments: expected {expected}, got {got}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::IntegerOverflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
