//! Type errors raised during inference.
//!
//! Both variants carry exact, pinned message wording; tests assert
//! against these strings with `assert_eq!`, so the `Display` impl is the
//! single source of truth for wording.

use std::fmt;

use drift_types::Ty;

/// A type error: either a scope error (unbound variable) or a unification
/// failure (mismatch, including an occurs-check violation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// `Var(name)` inferred against an environment that does not bind `name`.
    UnknownVariable { name: String },
    /// Two type terms could not be unified, including the occurs-check
    /// case, which is reported as the same mismatch message using the
    /// chosen pretty forms of the offending terms.
    Mismatch { expected: Ty, found: Ty },
}

impl TypeError {
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        TypeError::UnknownVariable { name: name.into() }
    }

    pub fn mismatch(expected: Ty, found: Ty) -> Self {
        TypeError::Mismatch { expected, found }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnknownVariable { name } => write!(f, "Unknown variable {name}"),
            TypeError::Mismatch { expected, found } => {
                write!(f, "Can't match {expected} with {found}")
            }
        }
    }
}

impl std::error::Error for TypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variable_message() {
        let err = TypeError::unknown_variable("y");
        assert_eq!(err.to_string(), "Unknown variable y");
    }

    #[test]
    fn mismatch_message() {
        let err = TypeError::mismatch(Ty::int(), Ty::bool());
        assert_eq!(err.to_string(), "Can't match Int with Bool");
    }
}
