//! # intcalc
//!
//! intcalc is an integer arithmetic expression interpreter written in Rust.
//! It tokenizes, parses, and evaluates expressions built from integer
//! literals, the binary operators `+ - * /`, unary `+`/`-`, and parentheses,
//! with the usual precedence and left associativity.
//!
//! ```
//! assert_eq!(intcalc::get_result("2 * (16 - 8) / 2 - 1"), Ok(7));
//! assert!(intcalc::get_result("10 / 0").is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::parser::{ParseResult, Parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The tree is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary, binary and placeholder nodes.
/// - Attaches byte offsets to nodes for error reporting.
/// - Renders trees back to a fully parenthesized infix form.
pub mod ast;
/// Line-oriented front-end over the interpreter.
///
/// Evaluates single lines or whole batches independently, runs the
/// interactive loop over any reader and writer, and dumps token streams.
pub mod driver;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression. Every error carries the byte offset
/// it refers to where one exists.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (lexer, parser, evaluator).
/// - Groups lexical and syntax errors under `ParseError`.
/// - Integrates with the standard error traits through `thiserror`.
pub mod error;
/// Orchestrates the three interpretation stages.
///
/// This module ties together the tokenizer, the recursive-descent parser and
/// the tree-walking evaluator.
pub mod interpreter;

pub use interpreter::evaluator::evaluate;

/// Parses a single expression into a syntax tree.
///
/// The whole input must form one expression; anything left over is rejected.
///
/// # Errors
/// Returns a `ParseError` for the first lexical or syntax error encountered.
///
/// # Examples
/// ```
/// use intcalc::parse;
///
/// let tree = parse("(2 + 3) * 4").unwrap();
/// assert_eq!(tree.to_string(), "((2 + 3) * 4)");
///
/// assert!(parse("(2 + 3").is_err());
/// assert!(parse("1 1").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::new(source)?.parse()
}

/// Parses an expression, substituting an `Expr::Invalid` placeholder for the
/// tree when parsing fails.
///
/// The placeholder carries the error message as its reason, so evaluating it
/// reports the parse failure as a `RuntimeError::MalformedTree`.
///
/// # Examples
/// ```
/// use intcalc::{ast::Expr, evaluate, parse_or_invalid};
///
/// let (tree, error) = parse_or_invalid("3 + 5");
/// assert!(error.is_none());
/// assert_eq!(evaluate(&tree), Ok(8));
///
/// let (tree, error) = parse_or_invalid("3 +");
/// assert!(error.is_some());
/// assert!(matches!(tree, Expr::Invalid { .. }));
/// assert!(evaluate(&tree).is_err());
/// ```
#[must_use]
pub fn parse_or_invalid(source: &str) -> (Expr, Option<ParseError>) {
    match parse(source) {
        Ok(expr) => (expr, None),
        Err(e) => (Expr::Invalid { reason: e.to_string() }, Some(e)),
    }
}

/// Parses and evaluates a single expression.
///
/// # Errors
/// Returns `Error::Parse` if the input is not a well-formed expression, or
/// `Error::Runtime` if evaluation fails, for example on division by zero.
///
/// # Examples
/// ```
/// use intcalc::{
///     error::{Error, RuntimeError},
///     get_result,
/// };
///
/// assert_eq!(get_result("2 + 3 * 4"), Ok(14));
/// assert_eq!(get_result("- - 9"), Ok(9));
///
/// assert_eq!(get_result("10 / 0"),
///            Err(Error::Runtime(RuntimeError::DivisionByZero { position: 3 })));
/// ```
pub fn get_result(source: &str) -> Result<i64, Error> {
    let tree = parse(source)?;
    Ok(evaluate(&tree)?)
}
