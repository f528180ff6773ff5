//! Abstract Syntax Tree definitions for TINY
//!
//! Statement sequences are first-class [`Block`]s and every statement/expression form is its own variant carrying
//! only the fields it needs.

use std::fmt;

use tinyc_core::lang::operators::{self, OperatorId};

/// Source location: byte offsets plus the 1-based line/column of the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Cover both spans; the position is taken from whichever starts first.
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Line where the construct began.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

pub type Ident = String;

/// A program is a single top-level statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Block,
}

/// `stmt ; stmt ; stmt`, in source order.
///
/// A block may be empty when its first statement failed to parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spanned<Statement>> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Spanned<Statement>;
    type IntoIter = std::slice::Iter<'a, Spanned<Statement>>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    If(IfStmt),
    Repeat(RepeatStmt),
    Assign(AssignStmt),
    Read(ReadStmt),
    Write(WriteStmt),
}

impl Statement {
    /// Short kind name, as used by the tree dump.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::If(_) => "If",
            Statement::Repeat(_) => "Repeat",
            Statement::Assign(_) => "Assign",
            Statement::Read(_) => "Read",
            Statement::Write(_) => "Write",
        }
    }
}

/// `if cond then ... [else ...] end`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

/// `repeat ... until cond`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub body: Block,
    pub until: Spanned<Expr>,
}

/// `name := value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: Ident,
    pub value: Spanned<Expr>,
}

/// `read name`
#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    pub name: Ident,
}

/// `write value`
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub value: Spanned<Expr>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Int(i64),
    Ident(Ident),
    /// Placeholder for a factor that could not be parsed (an error has been recorded).
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Lt,
    Gt,
    Eq,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator token to its binary operation. `:=` is not an expression operator.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Lt => Some(BinaryOp::Lt),
            OperatorId::Gt => Some(BinaryOp::Gt),
            OperatorId::Eq => Some(BinaryOp::Eq),
            OperatorId::Plus => Some(BinaryOp::Add),
            OperatorId::Minus => Some(BinaryOp::Sub),
            OperatorId::Star => Some(BinaryOp::Mul),
            OperatorId::Slash => Some(BinaryOp::Div),
            OperatorId::Assign => None,
        }
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::Eq => OperatorId::Eq,
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}
