use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token of an arithmetic expression.
///
/// Operator and parenthesis tokens carry only their kind. Integer tokens carry
/// a non-negative magnitude; a leading sign is always a separate [`Token::Minus`]
/// or [`Token::Plus`] handled by the parser as a unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Returned repeatedly once the input is exhausted.
    Eof,
}

/// The kind of a [`Token`], without its payload.
///
/// This is the one enumeration of token kinds shared by the tokenizer, the
/// parser and the error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    Eof,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::Star.kind(), TokenKind::Mul);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Eof => TokenKind::Eof,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "INTEGER {n}"),
            Self::Plus => write!(f, "PLUS +"),
            Self::Minus => write!(f, "MINUS -"),
            Self::Star => write!(f, "MUL *"),
            Self::Slash => write!(f, "DIV /"),
            Self::LParen => write!(f, "LPAREN ("),
            Self::RParen => write!(f, "RPAREN )"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Mul => "'*'",
            Self::Div => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// Failure reported by the generated lexer before a position is attached.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexErrorKind {
    #[default]
    UnexpectedCharacter,
    IntegerOverflow,
}

/// Raw lexemes recognized by the generated DFA.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
enum Lexeme {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Integer(n) => Self::Integer(n),
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
        }
    }
}

/// Parses a maximal run of digits as a base-10 `i64`.
///
/// Fails with `IntegerOverflow` when the run does not fit.
fn parse_integer(lex: &mut logos::Lexer<Lexeme>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerOverflow)
}

/// Produces tokens from an input line, one per call.
///
/// Tokens are pulled lazily: nothing past the current token is scanned until
/// the next call to [`Tokenizer::next_token`]. Once the input is exhausted the
/// tokenizer keeps returning [`Token::Eof`] without error.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("12 * (3)");
/// assert_eq!(tokenizer.next_token(), Ok(Token::Integer(12)));
/// assert_eq!(tokenizer.next_token(), Ok(Token::Star));
/// assert_eq!(tokenizer.position(), 3);
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Lexeme>,
    /// Byte offset where the most recently returned token starts.
    position: usize,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Lexeme::lexer(source),
               position: 0,
               finished: false, }
    }

    /// The full input this tokenizer reads from.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Byte offset where the most recently returned token starts, or the
    /// input length once [`Token::Eof`] has been returned.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the next token and advances past it.
    ///
    /// # Errors
    /// - `LexError::UnexpectedCharacter` for anything that is not whitespace, a
    ///   digit, an operator or a parenthesis.
    /// - `LexError::IntegerOverflow` for a digit run that does not fit in an
    ///   `i64`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.finished {
            return Ok(Token::Eof);
        }

        let Some(lexeme) = self.lexer.next() else {
            self.finished = true;
            self.position = self.source().len();
            trace!("end of input at position {}", self.position);
            return Ok(Token::Eof);
        };

        let position = self.lexer.span().start;
        self.position = position;

        match lexeme {
            Ok(lexeme) => {
                let token = Token::from(lexeme);
                trace!("token {token} at position {position}");
                Ok(token)
            },
            Err(LexErrorKind::IntegerOverflow) => {
                Err(LexError::IntegerOverflow { literal: self.lexer.slice().to_string(),
                                                position })
            },
            Err(LexErrorKind::UnexpectedCharacter) => {
                let character = self.source()
                                    .get(position..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexError::UnexpectedCharacter { character, position })
            },
        }
    }
}

/// Yields every token up to, but not including, [`Token::Eof`].
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::Eof) => None,
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        Tokenizer::new(source).collect()
    }

    #[test]
    fn tokenize_operators_and_parens() {
        assert_eq!(tokenize("+ - * / ( )").unwrap(),
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::LParen,
                        Token::RParen]);
    }

    #[test]
    fn tokenize_multi_digit_integers() {
        assert_eq!(tokenize("4152 - 109").unwrap(),
                   vec![Token::Integer(4152), Token::Minus, Token::Integer(109)]);
    }

    #[test]
    fn sign_is_never_part_of_the_literal() {
        assert_eq!(tokenize("-42").unwrap(), vec![Token::Minus, Token::Integer(42)]);
    }

    #[test]
    fn whitespace_is_skipped_everywhere() {
        assert_eq!(tokenize("  2\t+\n 8  ").unwrap(),
                   vec![Token::Integer(2), Token::Plus, Token::Integer(8)]);
        assert_eq!(tokenize("2+8").unwrap(), tokenize("2 + 8").unwrap());
    }

    #[test]
    fn eof_is_repeatable() {
        let mut tokenizer = Tokenizer::new("7");
        assert_eq!(tokenizer.next_token(), Ok(Token::Integer(7)));
        for _ in 0..5 {
            assert_eq!(tokenizer.next_token(), Ok(Token::Eof));
            assert_eq!(tokenizer.position(), 1);
        }
    }

    #[test]
    fn empty_input_is_eof() {
        let mut tokenizer = Tokenizer::new("   ");
        assert_eq!(tokenizer.next_token(), Ok(Token::Eof));
        assert_eq!(tokenizer.next_token(), Ok(Token::Eof));
    }

    #[test]
    fn positions_point_at_token_starts() {
        let mut tokenizer = Tokenizer::new("  10 +  3");
        let mut positions = Vec::new();
        while tokenizer.next_token().unwrap() != Token::Eof {
            positions.push(tokenizer.position());
        }
        assert_eq!(positions, vec![2, 5, 8]);
    }

    #[test]
    fn unexpected_character_reports_position() {
        let mut tokenizer = Tokenizer::new("2 + $ + 3");
        assert_eq!(tokenizer.next_token(), Ok(Token::Integer(2)));
        assert_eq!(tokenizer.next_token(), Ok(Token::Plus));
        assert_eq!(tokenizer.next_token(),
                   Err(LexError::UnexpectedCharacter { character: '$',
                                                       position:  4, }));
    }

    #[test]
    fn letters_are_rejected() {
        assert!(matches!(tokenize("3 + b * 3"),
                         Err(LexError::UnexpectedCharacter { character: 'b', .. })));
        assert!(matches!(tokenize("(. + 3)"),
                         Err(LexError::UnexpectedCharacter { character: '.', .. })));
    }

    #[test]
    fn largest_integer_fits() {
        assert_eq!(tokenize("9223372036854775807").unwrap(),
                   vec![Token::Integer(i64::MAX)]);
    }

    #[test]
    fn oversized_integer_is_a_lex_error() {
        let err = tokenize("1 + 9223372036854775808").unwrap_err();
        assert_eq!(err,
                   LexError::IntegerOverflow { literal:  "9223372036854775808".to_string(),
                                               position: 4, });
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn token_kinds_display_readably() {
        assert_eq!(TokenKind::RParen.to_string(), "')'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
        assert_eq!(Token::Integer(5).to_string(), "INTEGER 5");
    }
}
