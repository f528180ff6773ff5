/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// How deep statements, parenthesized groups and operator chains may nest.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and never stops early: each malformed construct records one error and parsing
///   carries on with whatever the grammar still allows.
/// - `expect` does not advance on a mismatch, so one bad token can be reported by several enclosing rules.
/// - A statement that cannot start contributes no node; its sequence only keeps extending while the current token
///   is `;`, which in practice truncates the sequence at the bad token.
/// - Nesting is capped at [`MAX_NESTING_DEPTH`]. A construct past the cap is skipped as a whole and reported
///   once per parse.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
    /// Open `if`/`repeat` statements and parenthesized groups around the cursor.
    depth: usize,
    too_deep: bool,
    /// Stands in for the end of input once `tokens` is exhausted.
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `tinyc_syntax::lexer`. A trailing `Eof` token is optional.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof_span = match tokens.last() {
            Some(last) => Span::new(
                last.span.end,
                last.span.end,
                last.line(),
                last.column() + last.lexeme.chars().count(),
            ),
            None => Span::new(0, 0, 1, 1),
        };
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            depth: 0,
            too_deep: false,
            eof: Token::new(TokenKind::Eof, "", eof_span),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Always returns normally. `program` is `None` only when the very first statement could not be parsed.
    pub fn parse(mut self) -> ParseOutput {
        let body = self.stmt_sequence();

        if !self.is_at_end() {
            let span = self.peek().span;
            self.error(SyntaxErrorKind::ExtraTokens, span);
        }

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "parse finished with errors");
        }

        ParseOutput {
            program: body.map(|body| Program { body }),
            errors: self.errors,
        }
    }
}
