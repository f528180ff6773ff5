//! CLI module for tinyc
//!
//! This module provides the command-line interface over the TINY front end.
//!
//! ## Commands
//!
//! - `scan <file>` - Print the token listing
//! - `parse <file>` - Print the syntax tree dump
//! - `<file>` - Same as `parse <file>`
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::format::FormatConfig;
use crate::version::TINYC_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and parser for the TINY teaching language
#[derive(Parser, Debug)]
#[command(name = "tinyc")]
#[command(version = TINYC_VERSION)]
#[command(about = "Scanner and parser for the TINY teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to parse (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token listing of a file
    Scan {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Append `[line:column]` to every token
        #[arg(long)]
        positions: bool,
    },

    /// Print the syntax tree of a file
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Spaces per tree level
        #[arg(long, value_name = "N", default_value_t = 2)]
        indent: usize,
        /// Append `[line N]` to every node
        #[arg(long)]
        positions: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Scan { file, positions }) => {
            let config = FormatConfig::new().with_positions(positions);
            commands::scan_file(&file.to_string_lossy(), &config)
        }
        Some(Command::Parse {
            file,
            indent,
            positions,
        }) => {
            let config = FormatConfig::new().with_indent_width(indent).with_positions(positions);
            commands::parse_file(&file.to_string_lossy(), &config)
        }
        None => {
            // Default: parse the file if provided
            if let Some(file) = cli.file {
                commands::parse_file(&file.to_string_lossy(), &FormatConfig::default())
            } else {
                Err(CliError::failure("Error: no input file (try `tinyc --help`)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::try_parse_from(["tinyc", "scan", "prog.tny"]).unwrap();
        if let Some(Command::Scan { file, positions }) = cli.command {
            assert_eq!(file, PathBuf::from("prog.tny"));
            assert!(!positions);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_parse_with_options() {
        let cli = Cli::try_parse_from(["tinyc", "parse", "prog.tny", "--indent", "4", "--positions"]).unwrap();
        if let Some(Command::Parse {
            indent, positions, ..
        }) = cli.command
        {
            assert_eq!(indent, 4);
            assert!(positions);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_default_indent() {
        let cli = Cli::try_parse_from(["tinyc", "parse", "prog.tny"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Parse { indent: 2, .. })));
    }

    #[test]
    fn test_cli_bare_file_is_default_action() {
        let cli = Cli::try_parse_from(["tinyc", "prog.tny"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("prog.tny")));
    }

    #[test]
    fn test_execute_without_file_fails() {
        let cli = Cli::try_parse_from(["tinyc"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_cli_rejects_non_numeric_indent() {
        assert!(Cli::try_parse_from(["tinyc", "parse", "prog.tny", "--indent", "wide"]).is_err());
    }
}
