//! Scanner for the TINY language
//!
//! Handles tokenization including:
//! - Reserved words (if, then, else, end, repeat, until, read, write)
//! - Identifiers (letters only) and numeric literals (digits only)
//! - Single-character operators/punctuation and the `:=` assignment operator
//! - `{ ... }` comments (non-nesting) and whitespace
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//!
//! ## Notes
//! - The first scan error stops the scanner; there is no resynchronization. Tokens produced before the error are
//!   kept in [`ScanOutput::tokens`] but the list is incomplete and carries no `Eof` token.

pub mod tokens;

pub use tokens::{Token, TokenKind, classify_word};

use crate::ast::Span;
use crate::diagnostics::{CompileError, ScanErrorKind};
use tinyc_core::lang::operators::{self, OperatorId};
use tinyc_core::lang::punctuation;

/// Result of scanning one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    /// Empty on success, exactly one error otherwise.
    pub errors: Vec<CompileError>,
}

impl ScanOutput {
    /// The scanner's success flag.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a `Result`, dropping the partial token list on failure.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<CompileError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

// ============================================================================
// LEXER STATE
// ============================================================================

/// Scanner for TINY source code.
///
/// Converts source text into a stream of tokens, tracking byte offsets as well as the 1-based line and column of
/// every character it reads.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Line of the next unread character.
    line: usize,
    /// Column of the next unread character.
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// On success the token stream ends with a single `Eof` token.
    pub fn tokenize(mut self) -> ScanOutput {
        while !self.is_at_end() {
            if let Err(err) = self.scan_token() {
                tracing::debug!(error = %err, tokens = self.tokens.len(), "scan stopped");
                return ScanOutput {
                    tokens: self.tokens,
                    errors: vec![err],
                };
            }
        }

        let eof = Span::new(self.current_pos, self.current_pos, self.line, self.column);
        self.tokens.push(Token::new(TokenKind::Eof, "", eof));
        tracing::trace!(tokens = self.tokens.len(), "scan finished");

        ScanOutput {
            tokens: self.tokens,
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Span from a remembered start to the current position.
    fn span_from(&self, start: Start) -> Span {
        Span::new(start.pos, self.current_pos, start.line, start.column)
    }

    fn mark(&self) -> Start {
        Start {
            pos: self.current_pos,
            line: self.line,
            column: self.column,
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), CompileError> {
        let start = self.mark();

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            // Whitespace
            ' ' | '\n' | '\t' | '\r' => Ok(()),

            // Comments
            '{' => self.skip_comment(start),

            // Assignment
            ':' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::Operator(OperatorId::Assign), start);
                    Ok(())
                } else {
                    Err(CompileError::scan(ScanErrorKind::MalformedAssign, self.char_span(start)))
                }
            }

            // Numbers
            '0'..='9' => {
                self.consume_while(|c| c.is_ascii_digit());
                self.add_token(TokenKind::Number, start);
                Ok(())
            }

            // Identifiers and reserved words
            _ if c.is_ascii_alphabetic() => {
                self.consume_while(|c| c.is_ascii_alphabetic());
                let kind = classify_word(&self.source[start.pos..self.current_pos]);
                self.add_token(kind, start);
                Ok(())
            }

            // Operators and punctuation
            _ => {
                if let Some(id) = punctuation::from_char(c) {
                    self.add_token(TokenKind::Punctuation(id), start);
                    Ok(())
                } else if let Some(id) = operators::from_char(c) {
                    self.add_token(TokenKind::Operator(id), start);
                    Ok(())
                } else {
                    Err(CompileError::scan(ScanErrorKind::UndefinedChar(c), self.span_from(start)))
                }
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: Start) {
        let span = self.span_from(start);
        let source = self.source;
        let lexeme = &source[start.pos..self.current_pos];
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    /// Span covering only the character at `start`.
    fn char_span(&self, start: Start) -> Span {
        let width = self.source[start.pos..].chars().next().map_or(0, char::len_utf8);
        Span::new(start.pos, start.pos + width, start.line, start.column)
    }

    /// Discard everything up to and including the first `}`.
    fn skip_comment(&mut self, start: Start) -> Result<(), CompileError> {
        while let Some(c) = self.advance() {
            if c == '}' {
                return Ok(());
            }
        }
        Err(CompileError::scan(ScanErrorKind::UnmatchedBrace, self.char_span(start)))
    }
}

/// Where a token (or error) began.
#[derive(Debug, Clone, Copy)]
struct Start {
    pos: usize,
    line: usize,
    column: usize,
}

/// Convenience function to scan a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan(source: &str) -> ScanOutput {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
