use thiserror::Error;

/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    #[error("division by zero at position {position}")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// The result of an operation does not fit in an `i64`.
    #[error("integer overflow at position {position}")]
    Overflow {
        /// Byte offset of the operator that overflowed.
        position: usize,
    },
    /// The tree contains a placeholder left behind by a failed parse.
    #[error("malformed expression tree: {reason}")]
    MalformedTree {
        /// The failure the placeholder was built from.
        reason: String,
    },
}

impl RuntimeError {
    /// Returns `true` for arithmetic domain failures (division by zero and
    /// overflow), `false` for structural ones.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::Overflow { .. })
    }
}
