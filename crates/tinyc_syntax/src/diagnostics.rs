//! Diagnostics for the TINY front end.
//!
//! Errors are values, never panics: the scanner and parser collect [`CompileError`]s next to their best-effort
//! output and return normally.
//!
//! ## Notes
//! - `Display` renders the stable, human-readable forms:
//!   - scan errors: `[line:column] compilation error: <message>`
//!   - syntax errors: `<message> at line <n>`
//! - [`CompileError`] is also a [`miette::Diagnostic`], so front ends can render it against the source text.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

/// What went wrong while scanning. Every scan error stops the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("unmatched brace '{{'")]
    UnmatchedBrace,
    #[error("':' not followed by '='")]
    MalformedAssign,
    #[error("undefined character '{0}'")]
    UndefinedChar(char),
}

/// What went wrong while parsing. Parsing continues after each of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A statement cannot start with this token.
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    /// A factor cannot start with this token.
    #[error("Unexpected token in factor: {0}")]
    UnexpectedFactor(String),
    #[error("Expected {expected} but got {found}")]
    Mismatch { expected: TokenKind, found: TokenKind },
    /// Numeric literal does not fit the target integer type.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Extra tokens after program end")]
    ExtraTokens,
    /// Statements, parentheses or operator chains nest past the parser's limit.
    #[error("Nesting too deep (limit {})", crate::parser::MAX_NESTING_DEPTH)]
    NestingTooDeep,
}

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error("[{line}:{column}] compilation error: {kind}")]
    #[diagnostic(code(tinyc::scan))]
    Scan {
        kind: ScanErrorKind,
        line: usize,
        column: usize,
        #[label("here")]
        span: Span,
    },

    #[error("{kind} at line {line}")]
    #[diagnostic(code(tinyc::syntax))]
    Syntax {
        kind: SyntaxErrorKind,
        line: usize,
        column: usize,
        #[label("here")]
        span: Span,
    },
}

impl CompileError {
    pub fn scan(kind: ScanErrorKind, span: Span) -> Self {
        CompileError::Scan {
            kind,
            line: span.line,
            column: span.column,
            span,
        }
    }

    pub fn syntax(kind: SyntaxErrorKind, span: Span) -> Self {
        CompileError::Syntax {
            kind,
            line: span.line,
            column: span.column,
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            CompileError::Scan { span, .. } | CompileError::Syntax { span, .. } => *span,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            CompileError::Scan { line, .. } | CompileError::Syntax { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            CompileError::Scan { column, .. } | CompileError::Syntax { column, .. } => *column,
        }
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, CompileError::Scan { .. })
    }

    /// The message without its position decoration.
    pub fn message(&self) -> String {
        match self {
            CompileError::Scan { kind, .. } => kind.to_string(),
            CompileError::Syntax { kind, .. } => kind.to_string(),
        }
    }
}
