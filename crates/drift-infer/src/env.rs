//! Typing environment: an immutable mapping from variable names to type
//! terms.
//!
//! Extension returns a *new* environment, leaving the original intact for
//! sibling subtrees: a `Lambda`'s parameter binding must not leak into
//! whatever the caller does next with the un-extended environment. A
//! `Rc`-shared map gives that persistence without cloning on every
//! extension.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use drift_types::Ty;

/// An immutable environment mapping variable names to type terms.
///
/// Cloning an `Environment` is cheap (an `Rc` bump); `extend` never
/// mutates the receiver, it returns a new environment that shares the old
/// map's entries via `Rc::make_mut`'s copy-on-write.
#[derive(Clone, Debug)]
pub struct Environment {
    bindings: Rc<FxHashMap<String, Ty>>,
}

impl Environment {
    /// An environment with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: Rc::new(FxHashMap::default()),
        }
    }

    /// Look up a variable's type term.
    pub fn lookup(&self, name: &str) -> Option<&Ty> {
        self.bindings.get(name)
    }

    /// Return a new environment with `name` bound to `ty`, shadowing any
    /// existing binding for `name`. The receiver is left untouched.
    pub fn extend(&self, name: impl Into<String>, ty: Ty) -> Environment {
        let mut bindings = Rc::clone(&self.bindings);
        Rc::make_mut(&mut bindings).insert(name.into(), ty);
        Environment { bindings }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
