//! Define the reserved-word vocabulary of the TINY language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, token names and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `"If"` and `"ifx"` are not reserved.
//! - The table is ordered exactly like [`KeywordId`]; [`info_for`] relies on that.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("until"), Some(KeywordId::Until));
//! assert_eq!(keywords::from_str("Until"), None);
//! assert_eq!(keywords::as_str(KeywordId::Until), "until");
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Opens or structures a compound statement (`if`, `repeat`, ...).
    ControlFlow,
    /// Starts an I/O statement (`read`, `write`).
    Io,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    /// Source spelling.
    pub canonical: &'static str,
    /// Stable token-kind name used in token listings and "Expected X but got Y" diagnostics.
    pub token_name: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved words, in [`KeywordId`] order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", "IF", KeywordCategory::ControlFlow),
    info(KeywordId::Then, "then", "THEN", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", "ELSE", KeywordCategory::ControlFlow),
    info(KeywordId::End, "end", "END", KeywordCategory::ControlFlow),
    info(KeywordId::Repeat, "repeat", "REPEAT", KeywordCategory::ControlFlow),
    info(KeywordId::Until, "until", "UNTIL", KeywordCategory::ControlFlow),
    info(KeywordId::Read, "read", "READ", KeywordCategory::Io),
    info(KeywordId::Write, "write", "WRITE", KeywordCategory::Io),
];

/// Full metadata for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Stable token-kind name (e.g. `"IF"`).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Keyword category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved word.
/// - `None` otherwise (the caller classifies it as an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    token_name: &'static str,
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
