/// Binary operator evaluation logic.
///
/// Applies `+ - * /` to two already evaluated operands with checked
/// arithmetic, reporting division by zero and overflow.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix plus and negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the recursive tree walk that dispatches on each node variant and
/// the result type shared by the evaluator.
pub mod core;

pub use self::core::{EvalResult, evaluate};
