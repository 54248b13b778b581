use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree leaning left, so `8 - 3 - 2` is `(8 - 3) - 2`.
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = token_to_binary_operator(self.current)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = self.position;
            self.consume(self.current.kind())?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(self.current)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = self.position;
            self.consume(self.current.kind())?;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for integers, parentheses and end of input.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token.kind() {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}
