//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These keep `matches!(...)` noise out of the parser when checking ID-based tokens.

use crate::lexer::{Token, TokenKind};
use tinyc_core::lang::keywords::KeywordId;
use tinyc_core::lang::operators::{self, OperatorCategory, OperatorId};
use tinyc_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return the operator id if this is an operator of `category`.
    pub fn operator_in(&self, category: OperatorCategory) -> Option<OperatorId> {
        self.operator_id().filter(|id| operators::is_in_category(*id, category))
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }
}

impl Token {
    /// How this token is named in diagnostics: its lexeme, or `EOF` for the end marker.
    pub fn describe(&self) -> &str {
        if self.lexeme.is_empty() { TokenKind::Eof.name() } else { &self.lexeme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    #[test]
    fn test_operator_in_category() {
        let plus = TokenKind::Operator(OperatorId::Plus);
        assert_eq!(plus.operator_in(OperatorCategory::Additive), Some(OperatorId::Plus));
        assert_eq!(plus.operator_in(OperatorCategory::Multiplicative), None);
        assert_eq!(TokenKind::Number.operator_in(OperatorCategory::Additive), None);
    }

    #[test]
    fn test_id_checks() {
        let then = TokenKind::Keyword(KeywordId::Then);
        assert!(then.is_keyword(KeywordId::Then));
        assert!(!then.is_keyword(KeywordId::Else));
        assert!(TokenKind::Punctuation(PunctuationId::Semicolon).is_punctuation(PunctuationId::Semicolon));
        assert!(!TokenKind::Identifier.is_punctuation(PunctuationId::LParen));
    }

    #[test]
    fn test_describe_eof() {
        let eof = Token::new(TokenKind::Eof, "", Span::new(3, 3, 1, 4));
        assert_eq!(eof.describe(), "EOF");
        let x = Token::new(TokenKind::Identifier, "x", Span::new(0, 1, 1, 1));
        assert_eq!(x.describe(), "x");
    }
}
