//! Textual renderings of the front end's output
//!
//! - Tree dump: one node per line (`If`, `Assign to: x`, `Op: <`, `Const: 5`, `Id: x`, ...), children indented
//!   one level below their parent.
//! - Token listing: one `value, KIND` line per token.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::{TreeFormatter, format_tokens, format_tree};

use crate::frontend::diagnostics::CompileError;
use crate::frontend::{lexer, parser};

/// Scan and parse `source`, then render its tree.
///
/// ## Errors
/// Returns every scan error, or every syntax error, if the source is not a well-formed program.
pub fn format_source_tree(source: &str, config: &FormatConfig) -> Result<String, Vec<CompileError>> {
    let tokens = lexer::scan(source).into_result()?;
    let program = parser::parse(&tokens).into_result()?;
    Ok(format_tree(&program, config))
}

/// Scan `source` and render its token listing.
///
/// ## Errors
/// Returns the scan error if the source cannot be tokenized.
pub fn format_source_tokens(source: &str, config: &FormatConfig) -> Result<String, Vec<CompileError>> {
    let tokens = lexer::scan(source).into_result()?;
    Ok(format_tokens(&tokens, config))
}
