//! Punctuation vocabulary.
//!
//! This module defines the non-operator punctuation of the TINY language: the statement separator and the
//! grouping parentheses.
//!
//! ## Notes
//! - `{` and `}` are comment delimiters, not punctuation; the scanner discards them.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::token_name(PunctuationId::RParen), "CLOSEDBRACKET");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub token_name: &'static str,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ';', "SEMICOLON"),
    info(PunctuationId::LParen, '(', "OPENBRACKET"),
    info(PunctuationId::RParen, ')', "CLOSEDBRACKET"),
];

/// Full metadata for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Stable token-kind name.
pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

/// Resolve a punctuation character.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: char, token_name: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        token_name,
    }
}
