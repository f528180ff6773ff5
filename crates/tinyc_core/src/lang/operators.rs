//! Operator vocabulary.
//!
//! This module defines the canonical operator set of the TINY language along with the metadata the parser's
//! precedence levels are built from: a category and an associativity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - `:=` is the only two-character operator; the scanner recognises it from a leading `:`.
//! - Comparison operators are non-associative: an expression holds at most one of them.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::operators::{self, Associativity, OperatorId};
//!
//! assert_eq!(operators::from_str(":="), Some(OperatorId::Assign));
//! assert_eq!(operators::info_for(OperatorId::Minus).associativity, Associativity::Left);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    None,
}

/// Precedence level an operator belongs to, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorCategory {
    Assignment,
    Comparison,
    Additive,
    Multiplicative,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Comparison
    Lt,
    Gt,
    Eq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Assignment
    Assign,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Stable token-kind name (e.g. `"LESSTHAN"`).
    pub token_name: &'static str,
    pub category: OperatorCategory,
    pub associativity: Associativity,
}

/// Registry of all operators, in [`OperatorId`] order.
pub const OPERATORS: &[OperatorInfo] = &[
    // Comparison
    op(OperatorId::Lt, "<", "LESSTHAN", OperatorCategory::Comparison, Associativity::None),
    op(OperatorId::Gt, ">", "GREATERTHAN", OperatorCategory::Comparison, Associativity::None),
    op(OperatorId::Eq, "=", "EQUAL", OperatorCategory::Comparison, Associativity::None),
    // Arithmetic
    op(OperatorId::Plus, "+", "PLUS", OperatorCategory::Additive, Associativity::Left),
    op(OperatorId::Minus, "-", "MINUS", OperatorCategory::Additive, Associativity::Left),
    op(OperatorId::Star, "*", "MULT", OperatorCategory::Multiplicative, Associativity::Left),
    op(OperatorId::Slash, "/", "DIV", OperatorCategory::Multiplicative, Associativity::Left),
    // Assignment
    op(OperatorId::Assign, ":=", "ASSIGN", OperatorCategory::Assignment, Associativity::None),
];

/// Full metadata for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Source spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Stable token-kind name.
pub fn token_name(id: OperatorId) -> &'static str {
    info_for(id).token_name
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Resolve a single-character operator. `:=` is never returned here.
pub fn from_char(c: char) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let mut chars = o.spelling.chars();
            chars.next() == Some(c) && chars.next().is_none()
        })
        .map(|o| o.id)
}

/// Return `true` if `id` belongs to the given precedence level.
pub fn is_in_category(id: OperatorId, category: OperatorCategory) -> bool {
    info_for(id).category == category
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    token_name: &'static str,
    category: OperatorCategory,
    associativity: Associativity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        token_name,
        category,
        associativity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_single_character_only() {
        assert_eq!(from_char('<'), Some(OperatorId::Lt));
        assert_eq!(from_char('='), Some(OperatorId::Eq));
        assert_eq!(from_char(':'), None);
    }

    #[test]
    fn test_categories_order_loosest_first() {
        assert!(OperatorCategory::Comparison < OperatorCategory::Additive);
        assert!(OperatorCategory::Additive < OperatorCategory::Multiplicative);
        assert!(is_in_category(OperatorId::Slash, OperatorCategory::Multiplicative));
        assert!(!is_in_category(OperatorId::Plus, OperatorCategory::Comparison));
    }
}
