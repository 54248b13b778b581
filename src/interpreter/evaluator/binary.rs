use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a binary arithmetic operation on two already evaluated operands.
///
/// Division truncates toward zero. Division by zero is checked before
/// anything else; every other out-of-range result, including
/// `i64::MIN / -1`, is reported as an overflow.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Example
/// ```
/// use intcalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2, 0), Ok(-3));
/// assert!(eval_binary(BinaryOperator::Div, 10, 0, 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, position: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(RuntimeError::Overflow { position })
}
