//! Parser for the TINY language
//!
//! Converts a token stream into an AST by recursive descent over the LL(1) grammar:
//!
//! ```text
//! program        = stmt-sequence
//! stmt-sequence  = statement { ";" statement }
//! statement      = if-stmt | repeat-stmt | assign-stmt | read-stmt | write-stmt
//! if-stmt        = "if" exp "then" stmt-sequence [ "else" stmt-sequence ] "end"
//! repeat-stmt    = "repeat" stmt-sequence "until" exp
//! assign-stmt    = identifier ":=" exp
//! read-stmt      = "read" identifier
//! write-stmt     = "write" exp
//! exp            = simple-exp [ ("<" | ">" | "=") simple-exp ]
//! simple-exp     = term { ("+" | "-") term }
//! term           = factor { ("*" | "/") factor }
//! factor         = "(" exp ")" | number | identifier
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use tinyc_syntax::{lexer, parser};
//!
//! let tokens = lexer::scan("read x; write x").into_result().unwrap();
//! let program = parser::parse(&tokens).into_result().unwrap();
//! assert_eq!(program.body.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::{CompileError, SyntaxErrorKind};
use crate::lexer::{Token, TokenKind};
use tinyc_core::lang::keywords::KeywordId;
use tinyc_core::lang::operators::{self, Associativity, OperatorCategory, OperatorId};
use tinyc_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
