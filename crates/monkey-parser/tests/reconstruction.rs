//! Reconstructed text is the observable shape of a parsed tree.

use monkey_ast::{Node, Statement};
use monkey_parser::parse;

fn render(source: &str) -> String {
    let result = parse(source);
    assert!(result.is_ok(), "parse errors: {:?}", result.errors);
    result.program.to_string()
}

#[test]
fn let_and_return() {
    insta::assert_snapshot!(render("let x = 5;"), @"let x = 5;");
    insta::assert_snapshot!(render("return 10;"), @"return 10;");
    let total = render("let total = price * qty + tax");
    insta::assert_snapshot!(total, @"let total = ((price * qty) + tax);");
}

#[test]
fn nesting_is_fully_parenthesized() {
    insta::assert_snapshot!(render("5 + 5 * 5"), @"(5 + (5 * 5))");
    insta::assert_snapshot!(render("-5"), @"(-5)");
    insta::assert_snapshot!(render("!!x == -y"), @"((!(!x)) == (-y))");
}

#[test]
fn integer_literals_keep_source_spelling() {
    insta::assert_snapshot!(render("let n = 007;"), @"let n = 007;");
}

#[test]
fn reconstruction_reparses_to_same_text() {
    let sources = [
        "let a = 1 + 2 * 3 - 4 / 5;",
        "return -(a + b) < c;",
        "x != y == z;",
    ];

    for source in sources {
        let first = render(source);
        let second = render(&first);
        assert_eq!(first, second, "source: {source}");
    }
}

#[test]
fn multi_statement_reconstruction_reparses_to_same_program() {
    let sources = [
        "a; b;",
        "1; 2;",
        "a; return b;",
        "x + 1; -y; let z = x;",
        "let a = 1; a b c",
    ];

    for source in sources {
        let original = parse(source);
        assert!(original.is_ok(), "parse errors: {:?}", original.errors);

        let rendered = original.program.to_string();
        let reparsed = parse(&rendered);
        assert!(reparsed.is_ok(), "parse errors: {:?}", reparsed.errors);

        assert_eq!(
            reparsed.program.len(),
            original.program.len(),
            "source: {source}, rendered: {rendered}"
        );
        assert_eq!(reparsed.program.to_string(), rendered, "source: {source}");
    }
}

#[test]
fn expression_statements_are_separated() {
    insta::assert_snapshot!(render("a; b;"), @"a;b");
    insta::assert_snapshot!(render("1; 2;"), @"1;2");
    insta::assert_snapshot!(render("x + 1; -y; let z = x;"), @"(x + 1);(-y);let z = x;");
}

#[test]
fn token_literals_follow_introducing_tokens() {
    let result = parse("let x = 1; return x; y * 2;");
    let literals: Vec<_> = result
        .program
        .statements()
        .iter()
        .map(|stmt| stmt.token_literal().to_string())
        .collect();

    assert_eq!(literals, vec!["let", "return", "y"]);
    assert_eq!(result.program.token_literal(), "let");

    match &result.program.statements()[2] {
        Statement::Expression(stmt) => assert_eq!(stmt.expression().token_literal(), "*"),
        other => panic!("expected expression statement, got {other:?}"),
    }
}
