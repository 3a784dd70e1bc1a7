use crate::interpreter::lexer::Token;

/// A complete parsed program: an ordered sequence of statements.
///
/// Produced by the parser and consumed whole by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An abstract syntax tree node representing a statement.
///
/// Each variant carries the token that originated it, for diagnostics and
/// string rendering. The `value` slots of `Let` and `Return` are optional:
/// when error recovery truncates the expression they stay empty, and the
/// evaluator treats the missing slot as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The `let` keyword token.
        token: Token,
        /// The name being bound.
        name:  Identifier,
        /// The bound expression, absent only after error recovery.
        value: Option<Expression>,
    },
    /// A `return` statement: `return <value>;`.
    Return {
        /// The `return` keyword token.
        token: Token,
        /// The returned expression, absent only after error recovery.
        value: Option<Expression>,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The first token of the expression.
        token:      Token,
        /// The expression itself.
        expression: Expression,
    },
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { token, name, value } => {
                write!(f, "{} {name}", token.literal())?;
                if let Some(value) = value {
                    write!(f, " = {value}")?;
                }
                write!(f, ";")
            },
            Self::Return { token, value } => {
                write!(f, "{}", token.literal())?;
                if let Some(value) = value {
                    write!(f, " {value}")?;
                }
                write!(f, ";")
            },
            Self::Expression { expression, .. } => write!(f, "{expression}"),
        }
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as `if` arms and function bodies. They preserve source
/// order and do not introduce a new environment.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token that opened the block.
    pub token:      Token,
    /// The statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.statements.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// A name referring to a binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name itself.
    pub value: String,
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An abstract syntax tree node representing an expression.
///
/// `Expression` covers all value-producing constructs, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// and calls. Each variant carries the token that originated it. Once
/// parsing succeeds every child slot is fully populated; only
/// `IfExpr::alternative` may legitimately be absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The integer token.
        token: Token,
        /// The converted numeric value.
        value: i64,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The keyword token.
        token: Token,
        /// The literal value.
        value: bool,
    },
    /// A unary operation (negation or logical NOT).
    UnaryOp {
        /// The operator token.
        token: Token,
        /// The unary operator to apply.
        op:    UnaryOperator,
        /// The operand expression.
        right: Box<Self>,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// The operator token.
        token: Token,
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional expression: `if (cond) { ... } else { ... }`.
    /// Yields the value of the taken branch, or `null` when the condition is
    /// falsy and no alternative exists.
    IfExpr {
        /// The `if` keyword token.
        token:       Token,
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal: `fn (params) { body }`. First-class; evaluating
    /// it produces a closure over the current environment.
    FunctionLiteral {
        /// The `fn` keyword token.
        token:      Token,
        /// The parameter names, possibly empty.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       BlockStatement,
    },
    /// A call expression: any expression applied to an argument list.
    Call {
        /// The `(` token that triggered the call.
        token:     Token,
        /// The expression being called.
        function:  Box<Self>,
        /// The argument expressions, in source order.
        arguments: Vec<Self>,
    },
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, right, .. } => write!(f, "({op}{right})"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::IfExpr { condition,
                           consequence,
                           alternative,
                           .. } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                let params: Vec<String> = parameters.iter().map(ToString::to_string).collect();
                write!(f, "fn({}) {{ {body} }}", params.join(", "))
            },
            Self::Call { function, arguments, .. } => {
                let args: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", args.join(", "))
            },
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
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
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT by truthiness (e.g. `!x`).
    Not,
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
