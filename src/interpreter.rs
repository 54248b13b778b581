/// The evaluator module reduces a syntax tree to an integer.
///
/// The evaluator walks the tree produced by the parser, evaluating the left
/// operand of every binary node before the right one, and applies the
/// arithmetic operators with overflow checks.
///
/// # Responsibilities
/// - Evaluates every node variant with an exhaustive match.
/// - Reports division by zero, overflow and placeholder nodes as runtime
///   errors.
pub mod evaluator;
/// The lexer module tokenizes an input line for the parser.
///
/// The tokenizer reads the raw text and produces tokens on demand: integer
/// literals, the four arithmetic operators, parentheses and a repeatable end
/// marker. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Skips whitespace between tokens.
/// - Reports unexpected characters and literals that do not fit in an `i64`.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser pulls tokens from the tokenizer with a single token of lookahead
/// and constructs a tree respecting operator precedence and left
/// associativity, while tracking parenthesis balance.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Bounds the nesting depth of groups and unary chains.
pub mod parser;
