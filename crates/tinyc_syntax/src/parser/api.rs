/// Result of parsing one token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Best-effort tree; `None` when not even the first statement could be parsed.
    pub program: Option<Program>,
    pub errors: Vec<CompileError>,
}

impl ParseOutput {
    /// Collapse into a `Result`, dropping the partial tree on failure.
    pub fn into_result(self) -> Result<Program, Vec<CompileError>> {
        match self.program {
            Some(program) if self.errors.is_empty() => Ok(program),
            _ => Err(self.errors),
        }
    }
}

/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `tinyc_syntax::lexer`.
///
/// ## Notes
/// Never fails outright: errors are returned next to the best-effort tree in [`ParseOutput`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse()
}
