//! Recursive-descent parser for the drift expression language, plus the
//! type-literal surface used by tests to write expected inferred types.
//!
//! This crate is the drift compiler pipeline's parsing stage: it turns
//! source text into the [`Expr`] tree that `drift-infer` consumes. It
//! never reasons about types itself.

mod ast;
mod error;
mod parser;
mod type_literal;

pub use ast::{Expr, ExprKind};
pub use error::ParseError;
pub use parser::parse_expr;
pub use type_literal::parse_test_type;
