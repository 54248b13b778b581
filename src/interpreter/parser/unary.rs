use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a unary expression, a parenthesized group or an
    /// integer literal.
    ///
    /// Unary operators are right-associative and recurse into another factor,
    /// so chains like `- - 9` and inputs like `2 ++ 3` are accepted, and a
    /// unary operator binds tighter than any binary one.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | "(" expr ")"
    ///             | INTEGER
    /// ```
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` if the current token cannot start a
    ///   factor.
    /// - `SyntaxError::NestingTooDeep` if groups or unary chains nest past the
    ///   configured limit.
    /// - Any error raised by `consume` or by the nested expression.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let position = self.position;

        match self.current {
            Token::Plus | Token::Minus => {
                let op = if self.current == Token::Minus {
                    UnaryOperator::Negate
                } else {
                    UnaryOperator::Plus
                };
                self.enter_nested()?;
                self.consume(self.current.kind())?;
                let expr = self.parse_factor()?;
                self.leave_nested();
                Ok(Expr::UnaryOp { op,
                                   expr: Box::new(expr),
                                   position })
            },
            Token::Integer(value) => {
                self.consume(TokenKind::Integer)?;
                Ok(Expr::Literal { value, position })
            },
            Token::LParen => self.parse_grouping(),
            token => Err(SyntaxError::UnexpectedToken { found: token.kind(),
                                                        position }.into()),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expr ")"`
    ///
    /// The group itself leaves no node in the tree; the inner expression is
    /// returned as is.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.enter_nested()?;
        self.consume(TokenKind::LParen)?;
        let inner = self.parse_additive()?;
        self.consume(TokenKind::RParen)?;
        self.leave_nested();
        Ok(inner)
    }
}
