/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a precedence ladder:
/// comparison → additive → multiplicative → factor.
///
/// ## Notes
/// - Each level reads its operator's associativity from the registry. Left-associative chains fold to the left
///   (`1-2-3` is `(1-2)-3`); a non-associative operator (comparison) is applied at most once, and a second one is
///   left unconsumed for the enclosing rule.
/// - A factor that cannot start records an error and yields [`Expr::Invalid`].
/// - A binary node that would make the tree deeper than [`MAX_NESTING_DEPTH`] is not built; its right operand is
///   parsed and dropped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn exp(&mut self) -> Spanned<Expr> {
        self.comparison().expr
    }

    fn comparison(&mut self) -> Operand {
        self.binary_level(OperatorCategory::Comparison, Self::simple_exp)
    }

    fn simple_exp(&mut self) -> Operand {
        self.binary_level(OperatorCategory::Additive, Self::term)
    }

    fn term(&mut self) -> Operand {
        self.binary_level(OperatorCategory::Multiplicative, Self::factor)
    }

    fn factor(&mut self) -> Operand {
        let (kind, span) = (self.peek().kind, self.peek().span);
        match kind {
            TokenKind::Punctuation(PunctuationId::LParen) => {
                if self.depth >= MAX_NESTING_DEPTH {
                    self.nesting_error(span);
                    self.skip_group();
                    let span = span.merge(self.previous().span);
                    return Operand::leaf(Spanned::new(Expr::Invalid, span));
                }
                self.advance();
                self.depth += 1;
                let inner = self.comparison();
                self.expect(TokenKind::Punctuation(PunctuationId::RParen));
                self.depth -= 1;
                let span = span.merge(self.previous().span);
                Operand {
                    expr: Spanned::new(inner.expr.node, span),
                    height: inner.height,
                }
            }
            TokenKind::Number => {
                let text = self.advance().lexeme.clone();
                let value = self.number(&text, span);
                Operand::leaf(Spanned::new(Expr::Int(value), span))
            }
            TokenKind::Identifier => {
                let name = self.advance().lexeme.clone();
                Operand::leaf(Spanned::new(Expr::Ident(name), span))
            }
            _ => {
                let found = self.peek().describe().to_string();
                self.error(SyntaxErrorKind::UnexpectedFactor(found), span);
                let empty = Span::new(span.start, span.start, span.line, span.column);
                Operand::leaf(Spanned::new(Expr::Invalid, empty))
            }
        }
    }

    // ========================================================================
    // Utilities
    // ========================================================================

    /// One rung of the ladder: `operand { op operand }` for operators of `category`.
    fn binary_level(&mut self, category: OperatorCategory, operand: fn(&mut Self) -> Operand) -> Operand {
        let mut left = operand(self);
        while let Some(id) = self.peek().kind.operator_in(category) {
            let Some(op) = BinaryOp::from_operator(id) else {
                break;
            };
            self.advance();
            let right = operand(self);
            left = self.binary(left, op, right);
            if operators::info_for(id).associativity == Associativity::None {
                break;
            }
        }
        left
    }

    fn binary(&mut self, left: Operand, op: BinaryOp, right: Operand) -> Operand {
        let height = left.height.max(right.height) + 1;
        if height > MAX_NESTING_DEPTH {
            self.nesting_error(right.expr.span);
            return left;
        }
        let span = left.expr.span.merge(right.expr.span);
        Operand {
            expr: Spanned::new(Expr::Binary(Box::new(left.expr), op, Box::new(right.expr)), span),
            height,
        }
    }

    /// Convert a numeric literal, recording `Invalid number` and using 0 when it does not fit.
    fn number(&mut self, text: &str, span: Span) -> i64 {
        match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.error(SyntaxErrorKind::InvalidNumber(text.to_string()), span);
                0
            }
        }
    }
}

/// A parsed expression and the height of its tree.
struct Operand {
    expr: Spanned<Expr>,
    height: usize,
}

impl Operand {
    fn leaf(expr: Spanned<Expr>) -> Self {
        Self { expr, height: 1 }
    }
}
