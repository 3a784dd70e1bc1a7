use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Variants that carry a payload (`Ident`, `Int`, `Illegal`) keep the matched
/// lexeme verbatim. Integer lexemes are not converted here; the parser turns
/// them into numbers and reports conversion failures.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or parameter names such as `x` or `add`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_owned())]
    Ident(String),
    /// Integer literal tokens, such as `42`, carrying the raw lexeme.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Int(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,

    /// A byte the lexer does not recognize, carried as its literal.
    /// Never matched by a pattern; produced by [`Lexer::next_token`].
    Illegal(String),
    /// End of input, with an empty literal. Returned indefinitely once the
    /// source is exhausted.
    Eof,
}

impl Token {
    /// Returns the classification of this token with any payload stripped.
    ///
    /// # Example
    /// ```
    /// use lemur::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Ident("five".to_owned()).kind(), TokenKind::Ident);
    /// assert_eq!(Token::Assign.kind(), TokenKind::Assign);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Function => TokenKind::Function,
            Self::Let => TokenKind::Let,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Return => TokenKind::Return,
            Self::Ident(_) => TokenKind::Ident,
            Self::Int(_) => TokenKind::Int,
            Self::Assign => TokenKind::Assign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Bang => TokenKind::Bang,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::Eq => TokenKind::Eq,
            Self::NotEq => TokenKind::NotEq,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Lparen => TokenKind::Lparen,
            Self::Rparen => TokenKind::Rparen,
            Self::Lbrace => TokenKind::Lbrace,
            Self::Rbrace => TokenKind::Rbrace,
            Self::Illegal(_) => TokenKind::Illegal,
            Self::Eof => TokenKind::Eof,
        }
    }

    /// Returns the source lexeme this token was produced from.
    ///
    /// Fixed tokens return their spelling; `Eof` returns the empty string.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Ident(lexeme) | Self::Int(lexeme) | Self::Illegal(lexeme) => lexeme,
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Eof => "",
        }
    }
}

/// The payload-free classification of a [`Token`].
///
/// Used wherever a token *type* is compared or reported without regard to
/// its lexeme: parser lookahead checks and parse error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An unrecognized byte.
    Illegal,
    /// End of input.
    Eof,
    /// An identifier.
    Ident,
    /// An integer literal.
    Int,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    Lparen,
    /// `)`
    Rparen,
    /// `{`
    Lbrace,
    /// `}`
    Rbrace,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        write!(f, "{name}")
    }
}

/// Streams tokens on demand from a source string.
///
/// The lexer is stateful and not resettable: it is constructed once per
/// source buffer and consumed by repeated [`Lexer::next_token`] calls. Once
/// the input is exhausted every further call returns [`Token::Eof`].
pub struct Lexer<'a> {
    tokens: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { tokens: Token::lexer(source) }
    }

    /// Returns the next token in the stream.
    ///
    /// Whitespace is skipped. Unrecognized bytes are returned as
    /// [`Token::Illegal`] carrying the offending lexeme, and the stream
    /// continues past them.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.tokens.slice().to_owned()),
            None => Token::Eof,
        }
    }
}
