//! Hindley-Milner type inference for the drift expression language.
//!
//! This is the hard part: fresh variable supply, unification with an
//! occurs check, substitution composition/application, and a recursive
//! `infer` dispatch with monomorphic (non-generalizing) `let`. Everything
//! else in the drift workspace -- the lexer, parser, and type term model
//! -- exists to supply this crate with `Expr` trees and consume its `Ty`
//! answers.

mod engine;
mod env;
mod error;
mod fresh;
mod subst;
mod unify;

pub use engine::Engine;
pub use env::Environment;
pub use error::TypeError;
pub use fresh::FreshSupply;
pub use subst::Substitution;
