//! Unification.
//!
//! Reconciles two type terms by extending a [`Substitution`] so that
//! `apply(t1) == apply(t2)`. Dispatches over `Ty`'s three shapes against
//! a flat substitution, with an occurs check to keep bindings acyclic.

use drift_types::Ty;

use crate::error::TypeError;
use crate::subst::Substitution;

/// Unify `t1` and `t2` against `subst`, extending it as needed.
///
/// Both arguments are resolved through `subst` before dispatch, so the
/// comparison always sees the current substitution's view of each term.
pub fn unify(subst: &mut Substitution, t1: &Ty, t2: &Ty) -> Result<(), TypeError> {
    let t1 = subst.apply(t1);
    let t2 = subst.apply(t2);

    match (&t1, &t2) {
        (Ty::Unknown(a), Ty::Unknown(b)) if a == b => Ok(()),

        (Ty::Unknown(id), other) | (other, Ty::Unknown(id)) => {
            if occurs(subst, *id, other) {
                Err(TypeError::mismatch(t1.clone(), t2.clone()))
            } else {
                subst.extend(*id, other.clone());
                Ok(())
            }
        }

        (Ty::Base(a), Ty::Base(b)) => {
            if a == b {
                Ok(())
            } else {
                Err(TypeError::mismatch(t1.clone(), t2.clone()))
            }
        }

        (Ty::Func(a1, r1), Ty::Func(a2, r2)) => {
            unify(subst, a1, a2)?;
            unify(subst, r1, r2)
        }

        _ => Err(TypeError::mismatch(t1.clone(), t2.clone())),
    }
}

/// Does `id` occur anywhere within `apply(ty)`?
///
/// Guarantees termination of unification: no binding `id -> t` may be
/// created where `id` occurs within `apply(t)`.
pub fn occurs(subst: &Substitution, id: u32, ty: &Ty) -> bool {
    match subst.apply(ty) {
        Ty::Base(_) => false,
        Ty::Unknown(other) => other == id,
        Ty::Func(arg, result) => occurs(subst, id, &arg) || occurs(subst, id, &result),
    }
}
