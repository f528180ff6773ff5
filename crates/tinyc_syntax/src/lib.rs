//! Syntax front end for the TINY teaching language: scanner, parser, AST, diagnostics.
//!
//! The crate exposes exactly two entry points, consumed in sequence:
//! - [`lexer::scan`]: source text → token sequence (+ scan errors)
//! - [`parser::parse`]: token sequence → syntax tree (+ syntax errors)
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no semantic analysis, no evaluation, no IO.
//! - Both entry points always return normally. Errors are collected as [`diagnostics::CompileError`] values next to
//!   a best-effort result; the caller decides whether to stop.
//! - Vocabulary identity (reserved words/operators/punctuation) comes from `tinyc_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use tinyc_syntax::{lexer, parser};
//!
//! let scanned = lexer::scan("read x; write x * 2");
//! assert!(scanned.is_success());
//! let parsed = parser::parse(&scanned.tokens);
//! assert!(parsed.errors.is_empty());
//! assert_eq!(parsed.program.unwrap().body.statements.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
