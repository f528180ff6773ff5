/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`, `previous`)
/// - Checking / expecting keywords, operators, and punctuation
/// - Error recording (`error`, `nesting_error`)
/// - Skipping constructs nested past the limit (`skip_group`, `skip_compound`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Return the most recently consumed token.
    fn previous(&self) -> &Token {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Consume the current token if it is `kind`.
    ///
    /// On a mismatch an `Expected X but got Y` error is recorded and the cursor stays where it is.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            let found = self.peek();
            let (found_kind, span) = (found.kind, found.span);
            self.error(
                SyntaxErrorKind::Mismatch {
                    expected: kind,
                    found: found_kind,
                },
                span,
            );
            false
        }
    }

    /// Record [`SyntaxErrorKind::NestingTooDeep`] unless this parse already has.
    fn nesting_error(&mut self, span: Span) {
        if !self.too_deep {
            self.too_deep = true;
            self.error(SyntaxErrorKind::NestingTooDeep, span);
        }
    }

    /// Skip a parenthesized group starting at the current `(`, up to and including its matching `)`.
    fn skip_group(&mut self) {
        let mut open = 0usize;
        while !self.is_at_end() {
            let kind = self.advance().kind;
            match kind {
                TokenKind::Punctuation(PunctuationId::LParen) => open += 1,
                TokenKind::Punctuation(PunctuationId::RParen) => open = open.saturating_sub(1),
                _ => {}
            }
            if open == 0 {
                return;
            }
        }
    }

    /// Skip an `if` or `repeat` statement starting at the cursor without building it.
    ///
    /// Openers and closers are counted pairwise (`if`/`end`, `repeat`/`until`); the condition after the
    /// outermost `until` is consumed as an expression.
    fn skip_compound(&mut self) {
        let mut open = 0usize;
        while !self.is_at_end() {
            let kind = self.advance().kind;
            match kind {
                TokenKind::Keyword(KeywordId::If | KeywordId::Repeat) => open += 1,
                TokenKind::Keyword(KeywordId::End) => open = open.saturating_sub(1),
                TokenKind::Keyword(KeywordId::Until) => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        self.exp();
                    }
                }
                _ => {}
            }
            if open == 0 {
                return;
            }
        }
    }

    fn error(&mut self, kind: SyntaxErrorKind, span: Span) {
        let err = CompileError::syntax(kind, span);
        tracing::trace!(error = %err, pos = self.pos, "syntax error");
        self.errors.push(err);
    }
}
