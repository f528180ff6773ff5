//! Tree dump and token listing
//!
//! The tree dump is a depth-first, pre-order rendering: every node on its own line, children one level deeper
//! than their parent, statements of the same sequence at the same level.

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::frontend::ast::*;
use crate::frontend::lexer::{Token, TokenKind};

/// Renders a [`Program`] as an indented node listing
pub struct TreeFormatter {
    writer: FormatWriter,
}

impl TreeFormatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Render a program and return the dump
    pub fn format(mut self, program: &Program) -> String {
        self.format_block(&program.body);
        self.writer.finish()
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn format_block(&mut self, block: &Block) {
        for stmt in block {
            self.format_statement(stmt);
        }
    }

    fn format_statement(&mut self, stmt: &Spanned<Statement>) {
        let label = match &stmt.node {
            Statement::Assign(a) => format!("Assign to: {}", a.name),
            Statement::Read(r) => format!("Read: {}", r.name),
            other => other.kind_name().to_string(),
        };
        self.node_line(&label, stmt.span);

        self.writer.indent();
        match &stmt.node {
            Statement::If(s) => {
                self.format_expr(&s.condition);
                self.format_block(&s.then_branch);
                if let Some(else_branch) = &s.else_branch {
                    self.format_block(else_branch);
                }
            }
            Statement::Repeat(r) => {
                self.format_block(&r.body);
                self.format_expr(&r.until);
            }
            Statement::Assign(a) => self.format_expr(&a.value),
            Statement::Read(_) => {}
            Statement::Write(w) => self.format_expr(&w.value),
        }
        self.writer.dedent();
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn format_expr(&mut self, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Binary(left, op, right) => {
                self.node_line(&format!("Op: {op}"), expr.span);
                self.writer.indent();
                self.format_expr(left);
                self.format_expr(right);
                self.writer.dedent();
            }
            Expr::Int(value) => self.node_line(&format!("Const: {value}"), expr.span),
            Expr::Ident(name) => self.node_line(&format!("Id: {name}"), expr.span),
            // Nothing was parsed here; the error list already says why.
            Expr::Invalid => {}
        }
    }

    fn node_line(&mut self, label: &str, span: Span) {
        self.writer.write(label);
        if self.writer.config().show_positions {
            self.writer.write(&format!(" [line {}]", span.line));
        }
        self.writer.newline();
    }
}

/// Render a program as an indented node listing.
pub fn format_tree(program: &Program, config: &FormatConfig) -> String {
    TreeFormatter::new(config.clone()).format(program)
}

/// Render a token sequence, one `value, KIND` line per token. The end-of-input token is omitted.
pub fn format_tokens(tokens: &[Token], config: &FormatConfig) -> String {
    let mut writer = FormatWriter::new(config.clone());
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
        writer.write(&format!("{}, {}", token.lexeme, token.kind));
        if config.show_positions {
            writer.write(&format!(" [{}:{}]", token.line(), token.column()));
        }
        writer.newline();
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};

    fn tree(source: &str, config: &FormatConfig) -> String {
        let tokens = lexer::scan(source).into_result().unwrap();
        let program = parser::parse(&tokens).into_result().unwrap();
        format_tree(&program, config)
    }

    #[test]
    fn test_sibling_statements_share_indent() {
        let out = tree("read x; write x", &FormatConfig::default());
        assert_eq!(out, "Read: x\nWrite\n  Id: x\n");
    }

    #[test]
    fn test_operator_children_are_nested() {
        let out = tree("y := 1 - 2 - 3", &FormatConfig::default());
        assert_eq!(
            out,
            "Assign to: y\n  Op: -\n    Op: -\n      Const: 1\n      Const: 2\n    Const: 3\n"
        );
    }

    #[test]
    fn test_repeat_prints_body_before_condition() {
        let out = tree("repeat read x until x", &FormatConfig::default());
        assert_eq!(out, "Repeat\n  Read: x\n  Id: x\n");
    }

    #[test]
    fn test_positions_and_indent_width() {
        let config = FormatConfig::new().with_indent_width(4).with_positions(true);
        let out = tree("read x;\nwrite 7", &config);
        assert_eq!(out, "Read: x [line 1]\nWrite [line 2]\n    Const: 7 [line 2]\n");
    }

    #[test]
    fn test_invalid_factor_renders_nothing() {
        let tokens = lexer::scan("write 1 + )").into_result().unwrap();
        let parsed = parser::parse(&tokens);
        assert!(!parsed.errors.is_empty());
        let program = parsed.program.unwrap();
        assert_eq!(format_tree(&program, &FormatConfig::default()), "Write\n  Op: +\n    Const: 1\n");
    }

    #[test]
    fn test_token_listing_omits_eof() {
        let tokens = lexer::scan("x := 10").into_result().unwrap();
        assert_eq!(
            format_tokens(&tokens, &FormatConfig::default()),
            "x, IDENTIFIER\n:=, ASSIGN\n10, NUMBER\n"
        );
    }

    #[test]
    fn test_token_listing_positions() {
        let tokens = lexer::scan("read\n  x").into_result().unwrap();
        let config = FormatConfig::new().with_positions(true);
        assert_eq!(format_tokens(&tokens, &config), "read, READ [1:1]\nx, IDENTIFIER [2:3]\n");
    }
}
