//! TINY front end
//!
//! - `lexer`: scanning source text into tokens
//! - `parser`: recursive-descent parsing of tokens into an AST
//! - `ast`: syntax tree definitions
//! - `diagnostics`: scan and syntax errors

// Syntax components are provided by the shared tinyc_syntax crate.
pub use tinyc_syntax::{ast, diagnostics, lexer, parser};
