use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a tree and returns its integer value.
///
/// The walk dispatches on the node variant:
/// - literals yield their value,
/// - unary nodes evaluate their operand and then apply the operator,
/// - binary nodes evaluate the left operand completely before the right one,
/// - an `Invalid` placeholder always fails with the reason it carries.
///
/// The tree is never modified.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if a divisor evaluates to zero.
/// - `RuntimeError::Overflow` if an intermediate result leaves the `i64`
///   range.
/// - `RuntimeError::MalformedTree` if the tree contains a placeholder.
///
/// # Example
/// ```
/// use intcalc::{interpreter::evaluator::evaluate, parse};
///
/// let tree = parse("2 * (16 - 8) / 2 - 1").unwrap();
/// assert_eq!(evaluate(&tree), Ok(7));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let value = eval_node(expr)?;
    debug!("evaluated {expr} = {value}");
    Ok(value)
}

fn eval_node(expr: &Expr) -> EvalResult<i64> {
    // Left operands are descended in a loop, then folded back outward.
    let mut pending = Vec::new();
    let mut node = expr;
    let mut value = loop {
        match node {
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                pending.push((*op, right.as_ref(), *position));
                node = left.as_ref();
            },
            Expr::Literal { value, .. } => break *value,
            Expr::UnaryOp { op, expr, position } => break eval_unary(*op, eval_node(expr)?, *position)?,
            Expr::Invalid { reason } => {
                return Err(RuntimeError::MalformedTree { reason: reason.clone() });
            },
        }
    };

    while let Some((op, right, position)) = pending.pop() {
        let right = eval_node(right)?;
        value = eval_binary(op, value, right, position)?;
    }
    Ok(value)
}
