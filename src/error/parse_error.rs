use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Errors raised by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that is not whitespace, a digit, an operator or a
    /// parenthesis.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A run of digits that does not fit in an `i64`.
    #[error("integer literal {literal} at position {position} is too large")]
    IntegerOverflow {
        /// The digits as written.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the input where the error occurred.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::IntegerOverflow { position, .. } => {
                *position
            },
        }
    }
}

/// Grammar violations detected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The current token is not the kind the grammar requires here.
    #[error("expected {expected} but found {found} at position {position}")]
    Expected {
        /// The kind the parser asked for.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// A `)` with no pending `(` to close.
    #[error("unmatched ')' at position {position}")]
    UnmatchedClose {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// Two integer literals follow each other with no operator between them.
    #[error("missing operator between integers at position {position}")]
    MissingOperator {
        /// Byte offset of the second literal.
        position: usize,
    },
    /// A token that cannot start an operand.
    #[error("unexpected {found} at position {position}")]
    UnexpectedToken {
        /// The kind found.
        found:    TokenKind,
        /// Byte offset of the token.
        position: usize,
    },
    /// A `(` is still open once the expression is complete.
    #[error("unbalanced parentheses: '(' at position {position} is never closed")]
    UnbalancedParentheses {
        /// Byte offset of the innermost unclosed `(`.
        position: usize,
    },
    /// A complete expression is followed by more input.
    #[error("unexpected {found} after the end of the expression at position {position}")]
    TrailingInput {
        /// The kind found after the expression.
        found:    TokenKind,
        /// Byte offset of the token.
        position: usize,
    },
    /// Parentheses or unary operators nest deeper than the parser allows.
    #[error("expression nests deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// The configured limit.
        limit:    usize,
        /// Byte offset of the token that crossed the limit.
        position: usize,
    },
}

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer rejected the input.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}
