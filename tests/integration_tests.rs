//! Integration tests for the front end.
//!
//! These tests run whole programs through the scanner, the parser and the
//! tree listing, using only the public API.

use tiny::{
    ast::{ast::StmtType, printer::print_tree, statements::StmtKind},
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::{parse, parse_source},
    render_error,
};

const FACTORIAL: &str = include_str!("programs/factorial.tny");
const LOOPS: &str = include_str!("programs/loops.tny");
const MISSING_VALUE: &str = include_str!("programs/missing_value.tny");

#[test]
fn test_factorial_listing() {
    let output = parse_source(FACTORIAL.to_string(), Some("factorial.tny".to_string())).unwrap();
    assert!(!output.had_error(), "{:?}", output.diagnostics);

    let expected = "\
Read: x
If
  Op: <
    Const: 0
    Id: x
  Assign to: fact
    Const: 1
  Repeat
    Assign to: fact
      Op: *
        Id: fact
        Id: x
    Assign to: x
      Op: -
        Id: x
        Const: 1
    Op: =
      Id: x
      Const: 0
  Write
    Id: fact
";
    assert_eq!(print_tree(output.root.as_deref()), expected);
}

#[test]
fn test_loops_listing() {
    let output = parse_source(LOOPS.to_string(), Some("loops.tny".to_string())).unwrap();
    assert!(!output.had_error(), "{:?}", output.diagnostics);

    let expected = "\
Read: n
Assign to: i
  Const: 0
While
  Op: <
    Id: i
    Id: n
  Write
    Id: i
  Assign to: i
    Op: +
      Id: i
      Const: 1
Do-While
  Assign to: n
    Op: -
      Id: n
      Const: 1
  Op: >
    Id: n
    Const: 0
For: k (downto)
  Const: 10
  Const: 1
  Write
    Op: mod
      Id: k
      Const: 3
";
    assert_eq!(print_tree(output.root.as_deref()), expected);
}

#[test]
fn test_node_lines_follow_source() {
    let output = parse_source(LOOPS.to_string(), None).unwrap();

    let lines: Vec<u32> = output.statements().map(|stmt| stmt.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 8, 11]);
}

#[test]
fn test_parse_from_token_stream() {
    let tokens = tokenize(FACTORIAL.to_string(), Some("factorial.tny".to_string())).unwrap();
    let from_stream = parse(TokenStream::new(tokens));
    let from_source = parse_source(FACTORIAL.to_string(), Some("factorial.tny".to_string())).unwrap();

    assert_eq!(from_stream.root, from_source.root);
}

#[test]
fn test_error_recovery_keeps_remaining_statements() {
    let output = parse_source(MISSING_VALUE.to_string(), Some("missing_value.tny".to_string())).unwrap();
    assert!(output.had_error());

    let types: Vec<StmtType> = output.statements().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(types, vec![StmtType::Read, StmtType::Assign, StmtType::Write]);

    let assign = output.statements().nth(1).unwrap();
    assert_eq!(
        assign.kind,
        StmtKind::Assign {
            name: Some(String::from("y")),
            value: None
        }
    );

    // The missing value, then the missing `;` that `factor` consumed
    let messages: Vec<String> = output.diagnostics.iter().map(|error| error.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Syntax error at line 2: unexpected token -> ;",
            "Syntax error at line 3: unexpected token -> reserved word: write",
        ]
    );
}

#[test]
fn test_rendered_error_shows_source_line() {
    let output = parse_source(MISSING_VALUE.to_string(), Some("missing_value.tny".to_string())).unwrap();
    let first = output.diagnostics.iter().next().unwrap();

    let rendered = render_error(first, MISSING_VALUE);
    assert!(rendered.starts_with("Error: UnexpectedToken"));
    assert!(rendered.contains("-> missing_value.tny"));
    assert!(rendered.contains("2 | y := ;"));
}

#[test]
fn test_scanner_error_stops_pipeline() {
    let result = parse_source("read x;\nwrite x # 2".to_string(), Some("bad.tny".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_parses_are_independent() {
    let bad = parse_source("x y".to_string(), None).unwrap();
    let good = parse_source("read x".to_string(), None).unwrap();

    assert!(bad.had_error());
    assert!(!good.had_error());
}
