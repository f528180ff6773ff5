/// Statement parsing methods.
///
/// Dispatch at `statement` is keyed on the current token: `if`, `repeat`, `read`, `write`, or an identifier
/// (assignment). Nested sequences that fail on their first statement come back as an empty [`Block`].
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// `stmt-sequence = statement { ";" statement }`
    ///
    /// Returns `None` when the first statement cannot be parsed.
    fn stmt_sequence(&mut self) -> Option<Block> {
        let first = self.statement()?;
        let mut statements = vec![first];

        while self.check_punct(PunctuationId::Semicolon) {
            self.advance();
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
        }

        Some(Block { statements })
    }

    fn statement(&mut self) -> Option<Spanned<Statement>> {
        let start = self.peek().span;
        let kind = self.peek().kind;
        if self.depth >= MAX_NESTING_DEPTH
            && matches!(kind, TokenKind::Keyword(KeywordId::If | KeywordId::Repeat))
        {
            self.nesting_error(start);
            self.skip_compound();
            return None;
        }

        let stmt = match kind {
            TokenKind::Keyword(KeywordId::If) => Statement::If(self.if_stmt()),
            TokenKind::Keyword(KeywordId::Repeat) => Statement::Repeat(self.repeat_stmt()),
            TokenKind::Identifier => Statement::Assign(self.assign_stmt()),
            TokenKind::Keyword(KeywordId::Read) => Statement::Read(self.read_stmt()),
            TokenKind::Keyword(KeywordId::Write) => Statement::Write(self.write_stmt()),
            _ => {
                let found = self.peek().describe().to_string();
                self.error(SyntaxErrorKind::UnexpectedToken(found), start);
                return None;
            }
        };
        let span = start.merge(self.previous().span);
        Some(Spanned::new(stmt, span))
    }

    fn if_stmt(&mut self) -> IfStmt {
        self.advance(); // if
        self.depth += 1;
        let condition = self.exp();
        self.expect(TokenKind::Keyword(KeywordId::Then));
        let then_branch = self.stmt_sequence().unwrap_or_default();

        let else_branch = if self.check_keyword(KeywordId::Else) {
            self.advance();
            Some(self.stmt_sequence().unwrap_or_default())
        } else {
            None
        };

        self.expect(TokenKind::Keyword(KeywordId::End));
        self.depth -= 1;
        IfStmt {
            condition,
            then_branch,
            else_branch,
        }
    }

    fn repeat_stmt(&mut self) -> RepeatStmt {
        self.advance(); // repeat
        self.depth += 1;
        let body = self.stmt_sequence().unwrap_or_default();
        self.expect(TokenKind::Keyword(KeywordId::Until));
        let until = self.exp();
        self.depth -= 1;
        RepeatStmt { body, until }
    }

    fn assign_stmt(&mut self) -> AssignStmt {
        let name = self.advance().lexeme.clone();
        self.expect(TokenKind::Operator(OperatorId::Assign));
        let value = self.exp();
        AssignStmt { name, value }
    }

    fn read_stmt(&mut self) -> ReadStmt {
        self.advance(); // read
        let name = if self.check(TokenKind::Identifier) {
            self.advance().lexeme.clone()
        } else {
            self.expect(TokenKind::Identifier);
            Ident::new()
        };
        ReadStmt { name }
    }

    fn write_stmt(&mut self) -> WriteStmt {
        self.advance(); // write
        WriteStmt { value: self.exp() }
    }
}
