use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser records these instead of aborting: a failed statement is
/// dropped, its errors are kept, and parsing resumes with the next token.
pub enum ParseError {
    /// The parser expected one kind of token next but found another.
    UnexpectedToken {
        /// The kind the grammar required at this point.
        expected: TokenKind,
        /// The kind actually found.
        got:      TokenKind,
    },
    /// A token appeared where an expression must start, but no prefix parse
    /// rule exists for it.
    NoPrefixParseFunction {
        /// The offending token kind.
        token: TokenKind,
    },
    /// An integer literal did not fit a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The raw lexeme that failed to convert.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },

            Self::NoPrefixParseFunction { token } => {
                write!(f, "no prefix parse function for {token} found")
            },

            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
