use crate::{
    ast::{BinaryOperator, Expression, Identifier, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{Parser, Precedence},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that cannot appear in infix position.
///
/// # Example
/// ```
/// use lemur::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::expression::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Lbrace), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Maps a token kind to its corresponding unary operator.
#[must_use]
pub const fn token_to_unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Bang => Some(UnaryOperator::Not),
        TokenKind::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}

impl Parser<'_> {
    /// The Pratt expression loop.
    ///
    /// A prefix rule for the current token produces the initial expression;
    /// while the upcoming token is not `;` and binds more strongly than
    /// `precedence`, an infix rule extends it. Binary operators re-enter
    /// this loop at their *own* precedence, so equal-strength operators
    /// group to the left: `a + b + c` parses as `((a + b) + c)`.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            if self.peek_token_is(TokenKind::Lparen) {
                self.next_token();
                left = self.parse_call_expression(left)?;
            } else if let Some(op) = token_to_binary_operator(self.peek_token.kind()) {
                self.next_token();
                left = self.parse_binary_expression(op, left)?;
            } else {
                return Some(left);
            }
        }

        Some(left)
    }

    /// Dispatches on the current token to a prefix parse rule.
    ///
    /// Records an error when no rule exists for the token at the start of
    /// an expression.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token.kind() {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_unary_expression(),
            TokenKind::Lparen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.record_error(ParseError::NoPrefixParseFunction { token: kind });
                None
            },
        }
    }

    fn parse_identifier(&self) -> Expression {
        Expression::Identifier(self.cur_identifier())
    }

    fn cur_identifier(&self) -> Identifier {
        Identifier { token: self.cur_token.clone(),
                     value: self.cur_token.literal().to_owned() }
    }

    /// Converts the current integer lexeme. The lexer guarantees a digit
    /// run, so the only failure mode is overflow of the 64-bit range.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        match token.literal().parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { token, value }),
            Err(_) => {
                let literal = token.literal().to_owned();
                self.record_error(ParseError::InvalidIntegerLiteral { literal });
                None
            },
        }
    }

    fn parse_boolean_literal(&self) -> Expression {
        Expression::BooleanLiteral { token: self.cur_token.clone(),
                                     value: self.cur_token_is(TokenKind::True) }
    }

    fn parse_unary_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let op = token_to_unary_operator(token.kind())?;

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::UnaryOp { token,
                                   op,
                                   right: Box::new(right) })
    }

    fn parse_binary_expression(&mut self, op: BinaryOperator, left: Expression)
                               -> Option<Expression> {
        let token = self.cur_token.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::BinaryOp { token,
                                    op,
                                    left: Box::new(left),
                                    right: Box::new(right) })
    }

    /// Parses `( <expression> )`. The parentheses only steer grouping; no
    /// node is produced for them.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `if ( <condition> ) { ... }` with an optional
    /// `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::Lbrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::IfExpr { token,
                                  condition: Box::new(condition),
                                  consequence,
                                  alternative })
    }

    /// Parses `fn ( <params> ) { <body> }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { token,
                                           parameters,
                                           body })
    }

    /// Parses a possibly empty, comma-separated identifier list terminated
    /// by `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::Rparen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(self.cur_identifier());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(self.cur_identifier());
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses the argument list of a call. Triggered by `(` in infix
    /// position, so any expression can be the callee.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call { token,
                                function: Box::new(function),
                                arguments })
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::Rparen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Statement,
        interpreter::lexer::{Lexer, Token},
    };

    fn parse_single_expression(source: &str) -> Expression {
        let mut parser = Parser::new(Lexer::new(source));
        let mut program = parser.parse_program();
        assert!(parser.errors().is_empty(),
                "unexpected errors for {source:?}: {:?}",
                parser.errors());
        assert_eq!(program.statements.len(), 1);
        match program.statements.remove(0) {
            Statement::Expression { expression, .. } => expression,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    #[test]
    fn identifier_expression() {
        assert_eq!(parse_single_expression("hoge;"),
                   Expression::Identifier(Identifier { token: Token::Ident("hoge".to_owned()),
                                                       value: "hoge".to_owned() }));
    }

    #[test]
    fn integer_literal_expression() {
        assert_eq!(parse_single_expression("5;"),
                   Expression::IntegerLiteral { token: Token::Int("5".to_owned()),
                                                value: 5 });
    }

    #[test]
    fn unary_expressions() {
        assert_eq!(parse_single_expression("!hoge;"),
                   Expression::UnaryOp {
                       token: Token::Bang,
                       op:    UnaryOperator::Not,
                       right:
                           Box::new(Expression::Identifier(Identifier { token:
                                                                            Token::Ident("hoge".to_owned()),
                                                                        value: "hoge".to_owned() })),
                   });
        assert_eq!(parse_single_expression("-15;").to_string(), "(-15)");
    }

    #[test]
    fn boolean_expressions() {
        assert_eq!(parse_single_expression("true;"),
                   Expression::BooleanLiteral { token: Token::True,
                                                value: true });
        assert_eq!(parse_single_expression("isAdmin == false;").to_string(),
                   "(isAdmin == false)");
        assert_eq!(parse_single_expression("!true;").to_string(), "(!true)");
    }

    #[test]
    fn infix_expression_shape() {
        let expression = parse_single_expression("5 + 5;");
        assert_eq!(expression,
                   Expression::BinaryOp {
                       token: Token::Plus,
                       op:    BinaryOperator::Add,
                       left:  Box::new(Expression::IntegerLiteral { token:
                                                                        Token::Int("5".to_owned()),
                                                                    value: 5 }),
                       right: Box::new(Expression::IntegerLiteral { token:
                                                                        Token::Int("5".to_owned()),
                                                                    value: 5 }),
                   });
    }

    #[test]
    fn if_expression() {
        let expression = parse_single_expression("if (x < y) { x }");
        assert_eq!(expression.to_string(), "if (x < y) { x }");
        match expression {
            Expression::IfExpr { alternative, .. } => assert!(alternative.is_none()),
            other => panic!("expected an if expression, got {other:?}"),
        }
    }

    #[test]
    fn if_else_expression() {
        let expression = parse_single_expression("if (x < y) { x } else { y }");
        assert_eq!(expression.to_string(), "if (x < y) { x } else { y }");
    }

    #[test]
    fn function_literal_with_parameters() {
        let expression = parse_single_expression("fn (x, y) { x + y; }");
        match &expression {
            Expression::FunctionLiteral { parameters, .. } => {
                let names: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
                assert_eq!(names, vec!["x", "y"]);
            },
            other => panic!("expected a function literal, got {other:?}"),
        }
        assert_eq!(expression.to_string(), "fn(x, y) { (x + y) }");
    }

    #[test]
    fn function_literal_with_no_parameters() {
        assert_eq!(parse_single_expression("fn () { 1 }").to_string(), "fn() { 1 }");
    }

    #[test]
    fn call_expression() {
        assert_eq!(parse_single_expression("add(2, 3 * 4);").to_string(),
                   "add(2, (3 * 4))");
        assert_eq!(parse_single_expression("f();").to_string(), "f()");
    }

    #[test]
    fn function_literal_can_be_called_directly() {
        assert_eq!(parse_single_expression("fn(x) { x }(5);").to_string(),
                   "fn(x) { x }(5)");
    }

    #[test]
    fn missing_closing_paren_is_reported() {
        let mut parser = Parser::new(Lexer::new("(1 + 2;"));
        parser.parse_program();
        let errors: Vec<String> = parser.errors().iter().map(ToString::to_string).collect();
        assert_eq!(errors,
                   vec!["expected next token to be ), got ; instead".to_owned(),
                        "no prefix parse function for ; found".to_owned()]);
    }
}
