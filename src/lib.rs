#![forbid(unsafe_code)]
//! tinyc: scanner and parser for the TINY teaching language
//!
//! TINY has integer variables, `read`/`write`, assignment, `if`/`then`/`else`/`end` and `repeat`/`until`. This
//! crate wires the syntax front end (`tinyc_syntax`) to its outer surfaces: tree dumps, token listings and the
//! `tinyc` command line.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use format::{FormatConfig, format_source_tokens, format_source_tree, format_tokens, format_tree};
