//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};

use crate::format::{self, FormatConfig};
use crate::frontend::diagnostics::CompileError;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file into memory.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render compile errors against their source, one miette report per error.
pub fn render_errors(file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for err in errors {
        let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        if handler.render_report(&mut out, &*report).is_err() {
            out.push_str(&err.to_string());
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}

/// Scan a file and print its token listing.
pub fn scan_file(file_path: &str, config: &FormatConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    tracing::debug!(file = file_path, bytes = source.len(), "scanning");

    let listing = format::format_source_tokens(&source, config)
        .map_err(|errs| CliError::failure(render_errors(file_path, &source, &errs)))?;

    print!("{listing}");
    Ok(ExitCode::SUCCESS)
}

/// Scan and parse a file and print its syntax tree.
pub fn parse_file(file_path: &str, config: &FormatConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    tracing::debug!(file = file_path, bytes = source.len(), "parsing");

    let tree = format::format_source_tree(&source, config).map_err(|errs| {
        tracing::info!(file = file_path, errors = errs.len(), "compilation failed");
        CliError::failure(render_errors(file_path, &source, &errs))
    })?;

    print!("{tree}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::frontend::lexer;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("tests/fixtures/does_not_exist.tny").unwrap_err();
        assert!(err.message.contains("Cannot access file"), "{}", err.message);
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_render_errors_includes_message_and_file_name() {
        let source = "write 1 {\n";
        let errors = lexer::scan(source).errors;
        let rendered = render_errors("broken.tny", source, &errors);
        assert!(rendered.contains("[1:9] compilation error: unmatched brace '{'"), "{rendered}");
        assert!(rendered.contains("broken.tny"), "{rendered}");
    }

    #[test]
    fn test_parse_file_valid_fixture() {
        let code = parse_file("tests/fixtures/valid/factorial.tny", &FormatConfig::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_scan_file_invalid_fixture() {
        let err = scan_file("tests/fixtures/invalid/undefined_char.tny", &FormatConfig::default()).unwrap_err();
        assert!(err.message.contains("undefined character '@'"), "{}", err.message);
    }

    #[test]
    fn test_parse_file_reports_syntax_errors() {
        let err = parse_file("tests/fixtures/invalid/trailing_garbage.tny", &FormatConfig::default()).unwrap_err();
        assert!(err.message.contains("Extra tokens after program end"), "{}", err.message);
    }
}
