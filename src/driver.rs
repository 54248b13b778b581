use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    ast::Expr,
    error::Error,
    evaluate,
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::{DEFAULT_MAX_DEPTH, ParseResult, Parser},
    },
};

/// Banner printed once when the interactive loop starts.
pub const BANNER: &str = "-------------------------------------\n... Starting calculator... (Q = exit)";

/// Prompt printed before every line read by the interactive loop.
pub const PROMPT: &str = ">> ";

/// Settings shared by every line the driver evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Print the parsed tree before each result.
    pub show_ast:  bool,
    /// Nesting limit for parenthesized groups and unary chains.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { show_ast:  false,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

/// The outcome of one line of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the batch source.
    pub line:   usize,
    /// The text of the line, without its line terminator.
    pub source: String,
    /// The parsed tree, if the line parsed.
    pub tree:   Option<Expr>,
    /// The value of the line, or the first error it raised.
    pub result: Result<i64, Error>,
}

/// Parses one line with the nesting limit from `options`.
///
/// # Errors
/// Returns the first lexical or syntax error of the line.
pub fn parse_line(line: &str, options: &Options) -> ParseResult<Expr> {
    Parser::new(line)?.with_max_depth(options.max_depth)
                      .parse()
}

/// Runs one line through a fresh tokenizer, parser and evaluator.
///
/// # Errors
/// Returns the first parse or runtime error raised by the line.
///
/// # Example
/// ```
/// use intcalc::driver::{Options, evaluate_line};
///
/// let options = Options::default();
/// assert_eq!(evaluate_line("(28 - 18) * 2 + 3", &options), Ok(23));
/// assert!(evaluate_line("(1+2)) + 13", &options).is_err());
/// ```
pub fn evaluate_line(line: &str, options: &Options) -> Result<i64, Error> {
    let tree = parse_line(line, options)?;
    Ok(evaluate(&tree)?)
}

/// Evaluates every non-blank line of `source` independently.
///
/// A failing line does not affect the lines after it. Blank lines, including
/// lines of only whitespace, are skipped but still counted, so the reported
/// line numbers match the source. Each outcome keeps the tree it evaluated.
#[must_use]
pub fn evaluate_lines(source: &str, options: &Options) -> Vec<LineOutcome> {
    source.lines()
          .enumerate()
          .filter(|(_, line)| !line.trim().is_empty())
          .map(|(index, line)| {
              let (tree, result) = match parse_line(line, options) {
                  Ok(tree) => {
                      let result = evaluate(&tree).map_err(Error::from);
                      (Some(tree), result)
                  },
                  Err(e) => (None, Err(e.into())),
              };
              debug!("line {}: {line:?} -> {result:?}", index + 1);
              LineOutcome { line: index + 1,
                            source: line.to_string(),
                            tree,
                            result }
          })
          .collect()
}

/// Runs the interactive read-evaluate-print loop.
///
/// Prints [`BANNER`], then prompts with [`PROMPT`] before every line. Empty
/// lines are ignored, `q` or `Q` ends the loop, and so does the end of the
/// input. Each remaining line prints `result: <n>` or the error message; with
/// `show_ast` set, a successfully parsed line first prints `ast: <tree>`.
///
/// # Errors
/// Only I/O failures on `input` or `output` are returned. Errors in the
/// evaluated lines are printed and the loop continues.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use intcalc::driver::{Options, run_repl};
///
/// let mut output = Vec::new();
/// run_repl(Cursor::new("3 + 5\nq\n"), &mut output, &Options::default()).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("result: 8"));
/// ```
pub fn run_repl<R: BufRead, W: Write>(mut input: R,
                                      mut output: W,
                                      options: &Options)
                                      -> io::Result<()> {
    writeln!(output, "{BANNER}")?;

    let mut buffer = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "Q" {
            break;
        }

        respond(line, &mut output, options)?;
    }

    writeln!(output)?;
    output.flush()
}

fn respond<W: Write>(line: &str, output: &mut W, options: &Options) -> io::Result<()> {
    let tree = match parse_line(line, options) {
        Ok(tree) => tree,
        Err(e) => return writeln!(output, "{e}"),
    };

    if options.show_ast {
        writeln!(output, "ast: {tree}")?;
    }

    match evaluate(&tree) {
        Ok(value) => writeln!(output, "result: {value}"),
        Err(e) => writeln!(output, "{e}"),
    }
}

/// Writes the token stream of `line`, one token per line, ending with `EOF`.
///
/// A lexical error stops the dump and is written in place of the remaining
/// tokens.
///
/// # Errors
/// Returns any I/O failure on `output`.
///
/// # Example
/// ```
/// use intcalc::driver::dump_tokens;
///
/// let mut output = Vec::new();
/// dump_tokens("2 * (1)", &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "INTEGER 2\nMUL *\nLPAREN (\nINTEGER 1\nRPAREN )\nEOF\n");
/// ```
pub fn dump_tokens<W: Write>(line: &str, mut output: W) -> io::Result<()> {
    for token in Tokenizer::new(line) {
        match token {
            Ok(token) => writeln!(output, "{token}")?,
            Err(e) => return writeln!(output, "{e}"),
        }
    }
    writeln!(output, "{}", Token::Eof)
}
