/// Core parser state and the token-advance primitive.
///
/// Defines the `Parser` struct, its single-token lookahead, the
/// `consume` primitive that validates parenthesis balance and adjacent
/// literals, and the `parse` entry point.
pub mod core;

/// Additive and multiplicative tiers.
///
/// Implements the two left-associative binary levels of the grammar, folding
/// each operator and operand pair into a left-deepening tree.
pub mod binary;

/// Factor parsing.
///
/// Handles unary prefix operators, parenthesized groups and integer literals,
/// the highest-precedence level of the grammar.
pub mod unary;

/// Parenthesis balance tracking.
///
/// A small stack of pending `(` markers consulted by `consume`.
pub mod nesting;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseResult, Parser};
