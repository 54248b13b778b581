/// A pending `(` waiting for its `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenParen {
    /// Byte offset of the `(` in the input.
    pub position: usize,
}

/// Stack of unmatched opening parentheses.
///
/// Its depth always equals the number of `(` consumed minus the number of
/// matched `)` consumed, and it is empty once a complete expression has been
/// parsed successfully.
///
/// # Example
/// ```
/// use intcalc::interpreter::parser::nesting::ParenTracker;
///
/// let mut parens = ParenTracker::new();
/// parens.push(0);
/// parens.push(3);
/// assert_eq!(parens.depth(), 2);
/// assert_eq!(parens.pop().map(|open| open.position), Some(3));
/// assert_eq!(parens.peek().map(|open| open.position), Some(0));
/// ```
#[derive(Debug, Default)]
pub struct ParenTracker {
    stack: Vec<OpenParen>,
}

impl ParenTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Records a `(` at `position`.
    pub fn push(&mut self, position: usize) {
        self.stack.push(OpenParen { position });
    }

    /// Removes and returns the innermost pending `(`, or `None` if there is
    /// nothing to close.
    pub fn pop(&mut self) -> Option<OpenParen> {
        self.stack.pop()
    }

    /// The innermost pending `(` without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&OpenParen> {
        self.stack.last()
    }

    /// Number of pending `(`.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether every `(` has been closed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
