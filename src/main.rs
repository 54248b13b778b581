use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use intcalc::{
    driver::{Options, dump_tokens, evaluate_lines, run_repl},
    interpreter::parser::DEFAULT_MAX_DEPTH,
};

/// intcalc evaluates integer arithmetic expressions with `+ - * /`, unary
/// signs, and parentheses.
///
/// Without CONTENTS it starts an interactive prompt; enter `q` to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intcalc to read CONTENTS as a file path and evaluate each line.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream of each line instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed tree before each result.
    #[arg(short, long)]
    ast: bool,

    /// Nesting limit for parentheses and unary chains.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let options = Options { show_ast:  args.ast,
                            max_depth: args.max_depth, };

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        return match run_repl(stdin.lock(), io::stdout().lock(), &options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let result = if args.tokens {
        print_tokens(&script)
    } else {
        print_results(&script, &options)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            ExitCode::FAILURE
        },
    }
}

fn print_tokens(script: &str) -> io::Result<bool> {
    let mut stdout = io::stdout().lock();
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        dump_tokens(line, &mut stdout)?;
    }
    Ok(true)
}

/// Prints one result or error per line; returns whether every line succeeded.
fn print_results(script: &str, options: &Options) -> io::Result<bool> {
    let outcomes = evaluate_lines(script, options);
    let multiline = outcomes.len() > 1;
    let mut all_ok = true;

    let mut stdout = io::stdout().lock();
    for outcome in outcomes {
        if options.show_ast
           && let Some(tree) = &outcome.tree
        {
            writeln!(stdout, "ast: {tree}")?;
        }
        match outcome.result {
            Ok(value) if multiline => writeln!(stdout, "{}: {value}", outcome.line)?,
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => {
                all_ok = false;
                eprintln!("line {}: {e}", outcome.line);
            },
        }
    }

    Ok(all_ok)
}
