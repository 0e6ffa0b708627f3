//! The expression tree produced by the parser.
//!
//! The inference engine (`drift-infer`) consumes `Expr` and never
//! constructs it.

use drift_common::Span;

/// An expression node, carrying its source span alongside its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(span: Span, kind: ExprKind) -> Self {
        Self { span, kind }
    }
}

/// The shape of an expression.
///
/// Every `let` is potentially recursive: `name` is in scope inside both
/// `bound` and `body`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    IntLit(i64),
    BoolLit(bool),
    StringLit(String),
    Var(String),
    Lambda {
        param: String,
        body: Box<Expr>,
    },
    App {
        func: Box<Expr>,
        arg: Box<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Let {
        name: String,
        bound: Box<Expr>,
        body: Box<Expr>,
    },
}
