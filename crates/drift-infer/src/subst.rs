//! Substitution: a mapping from unknown ids to type terms.
//!
//! Kept as a single flat map rather than a union-find table: this engine
//! has no need for path compression since `apply` already resolves
//! transitive chains lazily.

use rustc_hash::FxHashMap;

use drift_types::Ty;

/// A mapping from unknown ids to type terms.
///
/// Invariant: no key maps to `Unknown` of itself -- `extend` never inserts
/// a trivial identity binding.
#[derive(Debug, Default, Clone)]
pub struct Substitution {
    bindings: FxHashMap<u32, Ty>,
}

impl Substitution {
    pub fn new() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Insert a single binding `id -> ty`. A no-op if `ty` is exactly
    /// `Unknown(id)` (a trivial identity binding is never stored).
    pub fn extend(&mut self, id: u32, ty: Ty) {
        if matches!(&ty, Ty::Unknown(other) if *other == id) {
            return;
        }
        self.bindings.insert(id, ty);
    }

    /// Recursively rewrite `ty`, replacing every `Unknown(id)` that is a
    /// key of this substitution with the application of `apply` to its
    /// bound value, reaching a fixed point: the result contains no
    /// `Unknown(id)` that is itself a key.
    pub fn apply(&self, ty: &Ty) -> Ty {
        match ty {
            Ty::Base(_) => ty.clone(),
            Ty::Unknown(id) => match self.bindings.get(id) {
                Some(bound) => self.apply(bound),
                None => ty.clone(),
            },
            Ty::Func(arg, result) => {
                Ty::func(self.apply(arg), self.apply(result))
            }
        }
    }
}
