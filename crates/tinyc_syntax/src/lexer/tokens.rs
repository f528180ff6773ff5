//! Token types for the TINY scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including `:=`)
//! - `Punctuation(PunctuationId)` for `;`, `(` and `)`
//!
//! ## Notes
//! - Every token keeps its raw lexeme; numeric literals are converted by the parser, not here.
//! - `Display` for [`TokenKind`] prints the stable kind names (`IF`, `LESSTHAN`, `NUMBER`, ...).

use std::fmt;

use crate::ast::Span;
use tinyc_core::lang::keywords::{self, KeywordId};
use tinyc_core::lang::operators::{self, OperatorId};
use tinyc_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Number,
    Identifier,

    // ========== Special ==========
    Eof, // end of input
}

impl TokenKind {
    /// Stable kind name, e.g. `"ASSIGN"`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::token_name(*id),
            TokenKind::Operator(id) => operators::token_name(*id),
            TokenKind::Punctuation(id) => punctuation::token_name(*id),
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind, raw lexeme and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

/// Classify an alphabetic run: a reserved word if it is one, otherwise an identifier.
pub fn classify_word(word: &str) -> TokenKind {
    match keywords::from_str(word) {
        Some(id) => TokenKind::Keyword(id),
        None => TokenKind::Identifier,
    }
}
