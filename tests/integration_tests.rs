//! Integration tests for the TINY front end

use std::fs;
use std::path::Path;

use tinyc::ast::{Expr, Statement};
use tinyc::diagnostics::CompileError;
use tinyc::frontend::{lexer, parser};
use tinyc::lexer::TokenKind;

/// Helper to run scan + parse on a source text
fn compile(source: &str) -> Result<tinyc::ast::Program, Vec<CompileError>> {
    let tokens = lexer::scan(source).into_result()?;
    parser::parse(&tokens).into_result()
}

fn fixtures(dir: &str) -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(Path::new(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "tny").unwrap_or(false))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures compile successfully
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("tests/fixtures/valid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let result = compile(&source);
        assert!(
            result.is_ok(),
            "Expected {} to compile successfully, got errors: {:?}",
            path.display(),
            result.unwrap_err()
        );
        assert!(!result.unwrap().body.is_empty());
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("tests/fixtures/invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let result = compile(&source);
        assert!(result.is_err(), "Expected {} to fail compilation", path.display());
    }
}

#[test]
fn test_invalid_fixture_messages() {
    let cases = [
        ("bad_assign", vec!["[1:3] compilation error: ':' not followed by '='"]),
        ("undefined_char", vec!["[2:9] compilation error: undefined character '@'"]),
        ("unmatched_brace", vec!["[2:9] compilation error: unmatched brace '{'"]),
        ("trailing_garbage", vec!["Extra tokens after program end at line 1"]),
        ("missing_then", vec!["Expected THEN but got WRITE at line 3"]),
        (
            "missing_until",
            vec![
                "Expected UNTIL but got EOF at line 3",
                "Unexpected token in factor: EOF at line 3",
            ],
        ),
    ];

    for (name, expected) in cases {
        let source = fs::read_to_string(format!("tests/fixtures/invalid/{name}.tny")).unwrap();
        let errors = compile(&source).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages, expected, "fixture {name}");
    }
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_read_if_else_scenario() {
    let source = "read x; if x > 0 then write x else write 0 end";
    let scanned = lexer::scan(source);
    assert!(scanned.is_success());

    let listing: Vec<(String, String)> = scanned
        .tokens
        .iter()
        .map(|t| (t.kind.to_string(), t.lexeme.clone()))
        .collect();
    let expected = [
        ("READ", "read"),
        ("IDENTIFIER", "x"),
        ("SEMICOLON", ";"),
        ("IF", "if"),
        ("IDENTIFIER", "x"),
        ("GREATERTHAN", ">"),
        ("NUMBER", "0"),
        ("THEN", "then"),
        ("WRITE", "write"),
        ("IDENTIFIER", "x"),
        ("ELSE", "else"),
        ("WRITE", "write"),
        ("NUMBER", "0"),
        ("END", "end"),
        ("EOF", ""),
    ];
    let expected: Vec<(String, String)> = expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    assert_eq!(listing, expected);

    let program = parser::parse(&scanned.tokens).into_result().unwrap();
    assert_eq!(program.body.len(), 2);
    match &program.body.statements[0].node {
        Statement::Read(r) => assert_eq!(r.name, "x"),
        other => panic!("Expected read, got {}", other.kind_name()),
    }
    match &program.body.statements[1].node {
        Statement::If(s) => {
            assert!(matches!(&s.condition.node, Expr::Binary(_, op, _) if op.to_string() == ">"));
            assert!(matches!(&s.then_branch.statements[0].node, Statement::Write(_)));
            let else_branch = s.else_branch.as_ref().unwrap();
            match &else_branch.statements[0].node {
                Statement::Write(w) => assert_eq!(w.value.node, Expr::Int(0)),
                other => panic!("Expected write, got {}", other.kind_name()),
            }
        }
        other => panic!("Expected if, got {}", other.kind_name()),
    }
}

#[test]
fn test_reserved_word_prefix_scans_as_identifier() {
    let tokens = lexer::scan("ifx").into_result().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "ifx");
}

#[test]
fn test_comment_is_transparent() {
    let with = lexer::scan("x := 1 {this is ignored} ; write x").into_result().unwrap();
    let without = lexer::scan("x := 1 ; write x").into_result().unwrap();
    let kinds = |tokens: &[tinyc::lexer::Token]| -> Vec<(TokenKind, String)> {
        tokens.iter().map(|t| (t.kind, t.lexeme.clone())).collect()
    };
    assert_eq!(kinds(&with), kinds(&without));
}

#[test]
fn test_malformed_assignment_stops_scanning() {
    let scanned = lexer::scan("x : 1");
    assert!(!scanned.is_success());
    assert_eq!(scanned.errors.len(), 1);
    assert_eq!((scanned.errors[0].line(), scanned.errors[0].column()), (1, 3));
    assert!(scanned.tokens.iter().all(|t| t.span.start < 2));
}

#[test]
fn test_undefined_character_stops_scanning() {
    let scanned = lexer::scan("read x; write @ x");
    assert_eq!(scanned.errors.len(), 1);
    assert!(scanned.errors[0].to_string().contains('@'));
    let last = scanned.tokens.last().unwrap();
    assert_eq!(last.lexeme, "write");
}

#[test]
fn test_trailing_garbage_keeps_statement() {
    let scanned = lexer::scan("write 1 extra");
    let parsed = parser::parse(&scanned.tokens);
    let program = parsed.program.as_ref().unwrap();
    assert!(matches!(program.body.statements[0].node, Statement::Write(_)));
    assert_eq!(parsed.errors.len(), 1);
    assert!(parsed.errors[0].to_string().contains("Extra tokens after program end"));
}

#[test]
fn test_errors_never_panic_on_garbage() {
    let inputs = [
        "", ";", "end", "if", "if then else end", "repeat until", "((((", "))))", ":= :=", "x := ;", "read read",
        "write 1 < 2 < 3 > 4", "if x then else end", "repeat x := 1",
    ];
    for input in inputs {
        let scanned = lexer::scan(input);
        let parsed = parser::parse(&scanned.tokens);
        if scanned.is_success() && parsed.errors.is_empty() {
            assert!(parsed.program.is_some(), "{input:?}");
        }
    }
}

#[test]
fn test_deeply_nested_input_is_rejected_without_crashing() {
    let depth = 200_000;
    let sources = [
        format!("write {}1{}", "(".repeat(depth), ")".repeat(depth)),
        format!("{}write 1{}", "repeat ".repeat(depth), " until 1".repeat(depth)),
        format!("read x; write x{}", " - 1".repeat(depth)),
    ];
    for source in &sources {
        let errors = compile(source).unwrap_err();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert_eq!(errors[0].to_string(), "Nesting too deep (limit 256) at line 1");
    }
}

#[test]
fn test_unclosed_deep_nesting_is_rejected_without_crashing() {
    let source = format!("write {}", "(".repeat(50_000));
    let errors = compile(&source).unwrap_err();
    assert!(errors.iter().any(|e| e.to_string().starts_with("Nesting too deep")));
}
