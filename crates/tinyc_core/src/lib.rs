//! Provide the canonical language vocabulary for the TINY front end.
//!
//! This crate is intentionally tiny and dependency-free. It holds the reserved-word, operator and punctuation
//! tables that both the scanner and the outer tooling consult, so that no spelling is hard-coded twice.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global mutable state, no syntax-tree types.
//! - All tables are `const` data and can be read from any thread without synchronization.

pub mod lang;
