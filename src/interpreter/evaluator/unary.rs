use crate::{ast::UnaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a unary operation on an already evaluated operand.
///
/// - `Plus` returns the operand unchanged.
/// - `Negate` negates it; negating `i64::MIN` overflows.
///
/// # Example
/// ```
/// use intcalc::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5, 0), Ok(-5));
/// assert_eq!(eval_unary(UnaryOperator::Plus, -5, 0), Ok(-5));
/// assert!(eval_unary(UnaryOperator::Negate, i64::MIN, 0).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: i64, position: usize) -> EvalResult<i64> {
    match op {
        UnaryOperator::Plus => Ok(value),
        UnaryOperator::Negate => value.checked_neg()
                                      .ok_or(RuntimeError::Overflow { position }),
    }
}
