//! The type term model.
//!
//! A [`Ty`] is an immutable, structurally-equal tree with three shapes: a
//! named base type, an unresolved unification variable, or a function
//! arrow. This is the data Hindley-Milner inference is built on top of.

use std::fmt;

/// A type term.
///
/// Equality is structural: two `Ty` values are equal iff their shapes and
/// all nested fields match exactly. Unification never mutates a `Ty` in
/// place -- it extends a substitution (see `drift-infer`) that is applied
/// to produce a new, resolved term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    /// A concrete, named base type (`Int`, `Bool`, `String`, ...).
    Base(String),
    /// An unresolved unification variable, identified by a positive id.
    Unknown(u32),
    /// A function arrow: `arg -> result`. Right-associative in surface syntax.
    Func(Box<Ty>, Box<Ty>),
}

impl Ty {
    /// The `Int` base type.
    pub fn int() -> Ty {
        Ty::base("Int")
    }

    /// The `Bool` base type.
    pub fn bool() -> Ty {
        Ty::base("Bool")
    }

    /// The `String` base type.
    pub fn string() -> Ty {
        Ty::base("String")
    }

    /// Construct a base type by name.
    pub fn base(name: impl Into<String>) -> Ty {
        Ty::Base(name.into())
    }

    /// Construct a function type `arg -> result`.
    pub fn func(arg: Ty, result: Ty) -> Ty {
        Ty::Func(Box::new(arg), Box::new(result))
    }

    /// Whether this term is a `Func` (used to decide when the pretty
    /// printer needs to parenthesize a nested argument).
    pub fn is_func(&self) -> bool {
        matches!(self, Ty::Func(..))
    }
}

impl fmt::Display for Ty {
    /// Parentheses are added around a `Func`'s argument only when that
    /// argument is itself a `Func`, so `A -> B -> C` round-trips instead
    /// of printing as `(A -> B) -> C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Base(name) => write!(f, "{name}"),
            Ty::Unknown(id) => write!(f, "u{id}"),
            Ty::Func(arg, result) => {
                if arg.is_func() {
                    write!(f, "({arg}) -> {result}")
                } else {
                    write!(f, "{arg} -> {result}")
                }
            }
        }
    }
}
