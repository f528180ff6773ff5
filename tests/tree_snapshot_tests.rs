//! Golden snapshot tests for tree dumps and token listings
//!
//! These tests render `.tny` fixture programs and compare the output against
//! stored snapshots, so any change to parsing or rendering shows up in review.
//!
//! Run with: `cargo test --test tree_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use tinyc::format::{FormatConfig, format_source_tokens, format_source_tree};

/// Load a program from the valid fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/valid/{}.tny", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

fn tree(name: &str) -> String {
    let source = load_fixture(name);
    format_source_tree(&source, &FormatConfig::default())
        .unwrap_or_else(|errs| panic!("{name} failed to compile: {errs:?}"))
}

#[test]
fn test_factorial_tree() {
    insta::assert_snapshot!("factorial", tree("factorial"));
}

#[test]
fn test_countdown_tree() {
    insta::assert_snapshot!("countdown", tree("countdown"));
}

#[test]
fn test_arithmetic_tree() {
    insta::assert_snapshot!("arithmetic", tree("arithmetic"));
}

#[test]
fn test_nested_tree() {
    insta::assert_snapshot!("nested", tree("nested"));
}

#[test]
fn test_read_if_else_tokens_with_positions() {
    let config = FormatConfig::new().with_positions(true);
    let listing = format_source_tokens("read x; if x > 0 then write x else write 0 end", &config).unwrap();
    insta::assert_snapshot!("read_if_else_tokens", listing);
}
