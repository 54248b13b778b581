use std::fs;

use intcalc::{
    error::{Error, LexError, ParseError, RuntimeError, SyntaxError},
    get_result,
    interpreter::lexer::TokenKind,
    parse,
};
use walkdir::WalkDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn script_examples_work() {
    init_logger();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let Some(case) = parse_case(line) else {
                continue;
            };
            count += 1;

            let actual = get_result(case.source);
            let ok = match (&case.expected, &actual) {
                (Expected::Value(expected), Ok(value)) => expected == value,
                (Expected::Lex, Err(Error::Parse(ParseError::Lex(_))))
                | (Expected::Syntax, Err(Error::Parse(ParseError::Syntax(_))))
                | (Expected::Runtime, Err(Error::Runtime(_))) => true,
                _ => false,
            };
            assert!(ok,
                    "{}:{}: {:?} expected {:?} but got {:?}",
                    path.display(),
                    number + 1,
                    case.source,
                    case.expected,
                    actual);
        }
    }

    assert!(count > 0, "No script cases found in tests/scripts");
}

#[derive(Debug)]
enum Expected {
    Value(i64),
    Lex,
    Syntax,
    Runtime,
}

struct Case<'a> {
    source:   &'a str,
    expected: Expected,
}

/// Reads a fixture line of the form `expression => outcome`, where the outcome
/// is an integer or one of `!lex`, `!syntax`, `!runtime`. Blank lines and
/// lines starting with `#` are ignored.
fn parse_case(line: &str) -> Option<Case<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (source, outcome) =
        line.rsplit_once("=>").unwrap_or_else(|| panic!("Malformed fixture line: {line:?}"));
    let expected = match outcome.trim() {
        "!lex" => Expected::Lex,
        "!syntax" => Expected::Syntax,
        "!runtime" => Expected::Runtime,
        value => Expected::Value(value.parse()
                                      .unwrap_or_else(|e| panic!("Bad value in {line:?}: {e}"))),
    };

    Some(Case { source: source.trim_end(),
                expected })
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Expression {src:?} failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

fn syntax_error(src: &str) -> SyntaxError {
    match get_result(src) {
        Err(Error::Parse(ParseError::Syntax(e))) => e,
        other => panic!("Expected a syntax error from {src:?}, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("3 + 5", 8);
    assert_value("2 - 9", -7);
    assert_value("4152 - 109", 4043);
    assert_value("2", 2);
    assert_value("4 * 4", 16);
    assert_value("15/3", 5);
    assert_value("0 * 5", 0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("28 - 16 * 2 + 3", -1);
    assert_value("(28 - 18) * 2 + 3", 23);
    assert_value("2 * 16 - 8 / 2 - 1", 27);
    assert_value("2 * (16 - 8) / 2 - 1", 7);
    assert_value("(2 +  18) * (3 + 5 )", 160);
    assert_value("(2 + (3 * (4 - 1)))", 11);
}

#[test]
fn left_associativity() {
    assert_value("222 + 9 + 15 - 12", 234);
    assert_value("15 / 3 * 9", 45);
    assert_value("10 - 4 - 3", 3);
    assert_value("100 / 10 / 5", 2);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("2+2", 4);
    assert_value("2     +     2", 4);
    assert_value("   2  +  8", 10);
    assert_value("\t7\t*\t3\t", 21);
}

#[test]
fn unary_operators() {
    assert_value("- - 9", 9);
    assert_value("- 9", -9);
    assert_value("+9", 9);
    assert_value("+ 9 ", 9);
    assert_value("-3 + 4", 1);
    assert_value("1 *+ 2", 2);
    assert_value("1 ++ 2", 3);
    assert_value("2 ++ 3", 5);
    assert_value("+ 2 + 3", 5);
    assert_value("-(2 + 3) * 2", -10);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
}

#[test]
fn accepted_inputs() {
    for src in ["2 + 2",
                "5 * 3",
                "10 / 2",
                "1 - 3",
                "2 + (3 * 4)",
                "3 + 4 * (2 - 1) / (3 * (4 + 5)) - 6",
                "2 * 3"]
    {
        assert_success(src);
    }
}

#[test]
fn rejected_inputs() {
    for src in ["(2 + 3 * 4",
                "2 + 3) * 4",
                "2 * ()",
                "2 ---(3))",
                "1 1 ",
                "2 + 3 -",
                "4 ** 5",
                "2 + $ + 3",
                "a",
                "3 + b * 3",
                "(. + 3)",
                "1 + ",
                "+ ",
                "* 9 + 2",
                "(",
                "(1+2) +",
                "()",
                "1 1",
                "1 * 2) ",
                "(2 * 4",
                "((",
                "(1+2)) + 13",
                "",
                "   "]
    {
        assert_failure(src);
    }
}

#[test]
fn unknown_characters_are_lex_errors() {
    assert_eq!(get_result("2 + $ + 3"),
               Err(Error::Parse(ParseError::Lex(LexError::UnexpectedCharacter { character: '$',
                                                                                 position:  4, }))));
    assert_eq!(get_result("(. + 3)"),
               Err(Error::Parse(ParseError::Lex(LexError::UnexpectedCharacter { character: '.',
                                                                                 position:  1, }))));
}

#[test]
fn adjacent_integers_need_an_operator() {
    assert!(matches!(syntax_error("1 1"), SyntaxError::MissingOperator { .. }));
    assert!(matches!(syntax_error("1      1"), SyntaxError::MissingOperator { .. }));
    assert!(matches!(syntax_error("(1 2)"), SyntaxError::MissingOperator { .. }));
}

#[test]
fn unbalanced_parentheses() {
    assert!(matches!(syntax_error("(2 + 3"),
                     SyntaxError::Expected { expected: TokenKind::RParen,
                                             .. }));
    assert!(matches!(syntax_error("(1+2)) + 13"), SyntaxError::UnmatchedClose { .. }));
    assert!(matches!(syntax_error("1 * 2) "), SyntaxError::UnmatchedClose { .. }));
}

#[test]
fn runtime_errors() {
    assert_eq!(get_result("10 / 0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { position: 3 })));
    assert_eq!(get_result("1 / (2 - 2)"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { position: 2 })));
    assert_eq!(get_result("9223372036854775807 + 1"),
               Err(Error::Runtime(RuntimeError::Overflow { position: 20 })));
    assert_eq!(get_result("-9223372036854775807 - 1"), Ok(i64::MIN));
    assert!(matches!(get_result("(-9223372036854775807 - 1) / -1"),
                     Err(Error::Runtime(RuntimeError::Overflow { .. }))));
}

#[test]
fn literal_too_large() {
    assert!(matches!(get_result("9223372036854775808"),
                     Err(Error::Parse(ParseError::Lex(LexError::IntegerOverflow { position: 0, .. })))));
}

#[test]
fn placeholder_trees_fail_structurally() {
    let (tree, error) = intcalc::parse_or_invalid("2 * ()");
    assert!(error.is_some());

    let err = intcalc::evaluate(&tree).unwrap_err();
    assert!(!err.is_domain_error());
    assert!(matches!(err, RuntimeError::MalformedTree { .. }));

    assert!(RuntimeError::DivisionByZero { position: 0 }.is_domain_error());
    assert!(RuntimeError::Overflow { position: 0 }.is_domain_error());
}

#[test]
fn long_operator_chains_evaluate() {
    let terms = 100_000;

    let sum = format!("1{}", " + 1".repeat(terms - 1));
    assert_value(&sum, 100_000);

    let product = format!("7{}", " * 1".repeat(terms - 1));
    assert_value(&product, 7);

    let mixed = format!("0{}", " + 2 * 3 - 5".repeat(terms));
    assert_value(&mixed, 100_000);

    let failing = format!("{sum} / 0");
    assert!(matches!(get_result(&failing),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn long_operator_chains_print() {
    let source = format!("1{}", " - 1".repeat(99_999));
    let tree = parse(&source).unwrap();

    let printed = tree.to_string();
    assert!(printed.starts_with(&format!("{}1 - 1) - 1)", "(".repeat(99_999))));
    assert!(printed.ends_with(" - 1)"));
    assert_eq!(printed.matches('(').count(), 99_999);
}
