use crate::{
    ast::{BlockStatement, Identifier},
    error::RuntimeError,
    interpreter::environment::EnvRef,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible results of evaluating an expression or
/// statement, including the two internal control-flow sentinels (`Return`
/// and `Error`) that propagate outward through enclosing evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by the boolean literals, comparisons, and logical NOT.
    Boolean(bool),
    /// The absence of a value; yielded by an `if` whose condition is falsy
    /// and which has no `else` branch.
    Null,
    /// Wraps the value of a `return` statement while it unwinds enclosing
    /// blocks. Never observable by user code: unwrapped at the program root
    /// and at function-call application.
    Return(Box<Self>),
    /// A function value: a parameter list and body bundled with the
    /// environment captured at the definition site.
    Function {
        /// The declared parameter names.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       BlockStatement,
        /// The definition-time environment the closure captured.
        env:        EnvRef,
    },
    /// A runtime failure. Propagates outward like `Return`, aborting the
    /// rest of the evaluation; surfaces to users as `Error: <message>`.
    Error(RuntimeError),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Value {
    /// Returns the fixed type tag used in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use lemur::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(5).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function { .. } => "FUNCTION",
            Self::Error(_) => "ERROR",
        }
    }

    /// Returns `true` unless the value is `Null` or `false`.
    ///
    /// Every other value counts as truthy, including `0`.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns `true` when the value is a runtime error sentinel.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function { parameters, body, .. } => {
                let params: Vec<String> = parameters.iter().map(ToString::to_string).collect();
                write!(f, "fn({}) {{ {body} }}", params.join(", "))
            },
            Self::Error(error) => write!(f, "Error: {error}"),
        }
    }
}
