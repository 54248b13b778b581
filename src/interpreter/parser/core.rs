use log::debug;

use crate::{
    ast::Expr,
    error::{ParseError, SyntaxError},
    interpreter::{
        lexer::{Token, TokenKind, Tokenizer},
        parser::nesting::ParenTracker,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on nested parentheses and unary operators.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Recursive-descent parser for one input line.
///
/// The parser pulls tokens from its [`Tokenizer`] one at a time and keeps a
/// single token of lookahead in `current`. All advancing goes through
/// [`Parser::consume`], which also maintains the [`ParenTracker`].
///
/// Grammar, lowest precedence first:
/// ```text
///     expr   := term ( ("+" | "-") term )*
///     term   := factor ( ("*" | "/") factor )*
///     factor := ("+" | "-") factor | "(" expr ")" | INTEGER
/// ```
///
/// # Example
/// ```
/// use intcalc::interpreter::parser::Parser;
///
/// let tree = Parser::new("(2 + 3) * 4").unwrap().parse().unwrap();
/// assert_eq!(tree.to_string(), "((2 + 3) * 4)");
/// ```
pub struct Parser<'src> {
    tokenizer:           Tokenizer<'src>,
    /// The lookahead token.
    pub(super) current:  Token,
    /// Byte offset of `current`.
    pub(super) position: usize,
    parens:              ParenTracker,
    /// Current nesting of parenthesized groups and unary operators.
    depth:               usize,
    max_depth:           usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns `ParseError::Lex` if the first token cannot be read.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        Self::from_tokenizer(Tokenizer::new(source))
    }

    /// Creates a parser that continues from an existing tokenizer.
    ///
    /// # Errors
    /// Returns `ParseError::Lex` if the first token cannot be read.
    pub fn from_tokenizer(mut tokenizer: Tokenizer<'src>) -> ParseResult<Self> {
        let current = tokenizer.next_token()?;
        Ok(Self { position: tokenizer.position(),
                  tokenizer,
                  current,
                  parens: ParenTracker::new(),
                  depth: 0,
                  max_depth: DEFAULT_MAX_DEPTH })
    }

    /// Sets the limit on nested parentheses and unary operators.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Parses a complete expression and returns the root of its tree.
    ///
    /// After the expression, every `(` must have been closed and the whole
    /// input must have been read.
    ///
    /// # Errors
    /// - Any lex or syntax error raised while parsing the expression.
    /// - `SyntaxError::UnbalancedParentheses` if a `(` is still open.
    /// - `SyntaxError::TrailingInput` if tokens remain after the expression.
    pub fn parse(mut self) -> ParseResult<Expr> {
        debug!("parsing {:?}", self.tokenizer.source());

        let root = self.parse_additive()?;

        if let Some(open) = self.parens.peek() {
            return Err(SyntaxError::UnbalancedParentheses { position: open.position }.into());
        }
        if self.current != Token::Eof {
            return Err(SyntaxError::TrailingInput { found:    self.current.kind(),
                                                    position: self.position, }.into());
        }

        debug!("parsed {root}");
        Ok(root)
    }

    /// Consumes the current token, which must be of kind `expected`, and
    /// reads the next one.
    ///
    /// Besides advancing, this is where structural checks happen:
    /// - a consumed `(` is pushed on the paren tracker,
    /// - a consumed `)` must close a pending `(`,
    /// - two integers in a row are rejected,
    /// - a `)` arriving when nothing is open is rejected.
    ///
    /// # Errors
    /// - `SyntaxError::Expected` if the current token has another kind.
    /// - `SyntaxError::UnmatchedClose` for a `)` with no pending `(`.
    /// - `SyntaxError::MissingOperator` for adjacent integer literals.
    /// - `ParseError::Lex` if the next token cannot be read.
    pub(crate) fn consume(&mut self, expected: TokenKind) -> ParseResult<()> {
        let found = self.current.kind();
        if found != expected {
            return Err(SyntaxError::Expected { expected,
                                               found,
                                               position: self.position }.into());
        }

        match found {
            TokenKind::LParen => self.parens.push(self.position),
            TokenKind::RParen => {
                if self.parens.pop().is_none() {
                    return Err(SyntaxError::UnmatchedClose { position: self.position }.into());
                }
            },
            _ => {},
        }

        let previous = found;
        self.current = self.tokenizer.next_token()?;
        self.position = self.tokenizer.position();

        if previous == TokenKind::Integer && self.current.kind() == TokenKind::Integer {
            return Err(SyntaxError::MissingOperator { position: self.position }.into());
        }
        if self.current == Token::RParen && self.parens.is_empty() {
            return Err(SyntaxError::UnmatchedClose { position: self.position }.into());
        }

        Ok(())
    }

    /// Enters one level of factor nesting.
    ///
    /// # Errors
    /// `SyntaxError::NestingTooDeep` once the configured limit is exceeded.
    pub(super) fn enter_nested(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit:    self.max_depth,
                                                     position: self.position, }.into());
        }
        Ok(())
    }

    pub(super) fn leave_nested(&mut self) {
        self.depth -= 1;
    }
}
