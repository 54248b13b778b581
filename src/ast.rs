use std::{fmt, mem};

/// A prefix operator applied to a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, returns the operand unchanged.
    Plus,
    /// `-x`
    Negate,
}

/// An infix operator combining two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

/// An abstract syntax tree node representing an arithmetic expression.
///
/// The tree is built by the parser and only read by the evaluator. Every
/// non-terminal exclusively owns its children, so the tree is acyclic and has
/// no shared references. Each node records the byte offset of its literal or
/// operator for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal's value, always non-negative as written.
        value:    i64,
        /// Byte offset in the input.
        position: usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// An infix arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Placeholder standing in for a tree that failed to parse.
    ///
    /// Only produced by [`crate::parse_or_invalid`]. Evaluating it always
    /// fails with the stored reason.
    Invalid {
        /// Description of the parse failure.
        reason: String,
    },
}

impl Expr {
    /// Byte offset of the node's literal or operator, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => Some(*position),
            Self::Invalid { .. } => None,
        }
    }

    /// Detaches the left operand of a binary node, leaving a literal behind.
    fn take_left(&mut self) -> Option<Self> {
        match self {
            Self::BinaryOp { left, .. } => {
                Some(mem::replace(left.as_mut(), Self::Literal { value: 0, position: 0 }))
            },
            _ => None,
        }
    }
}

/// Releases left-leaning operator chains one link at a time.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut next = self.take_left();
        while let Some(mut node) = next {
            next = node.take_left();
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// Writes the tree in fully parenthesized infix form, which parses back to an
/// equivalent tree.
///
/// # Example
/// ```
/// let tree = intcalc::parse("2 + 3 * -4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * (-4)))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Left operands are walked in a loop; only right operands and unary
        // operands recurse, and those are bounded by the parser's depth limit.
        let mut pending = Vec::new();
        let mut leaf = self;
        while let Self::BinaryOp { left, op, right, .. } = leaf {
            pending.push((*op, right));
            leaf = left.as_ref();
        }

        for _ in 0..pending.len() {
            f.write_str("(")?;
        }
        match leaf {
            Self::Literal { value, .. } => write!(f, "{value}")?,
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})")?,
            Self::Invalid { reason } => write!(f, "<invalid: {reason}>")?,
            Self::BinaryOp { .. } => fmt::Display::fmt(leaf, f)?,
        }
        while let Some((op, right)) = pending.pop() {
            write!(f, " {op} {right})")?;
        }
        Ok(())
    }
}
