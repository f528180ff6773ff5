//! TINY language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved words, operators and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and token names via
//! registry tables instead of scattering string comparisons across the scanner and parser.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   token listings, tests).
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::token_name(KeywordId::Repeat), "REPEAT");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
