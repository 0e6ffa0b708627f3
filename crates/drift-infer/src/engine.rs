//! The inference engine: the recursive `infer` dispatch over expression
//! shapes, plus monomorphic and recursive `let`.
//!
//! One engine owns the mutable inference state (substitution, fresh-id
//! counter) and exposes one function per expression kind. `let` is
//! deliberately non-generalizing: there is no `Scheme`/`generalize`/
//! `instantiate` step here, just a direct environment extension.

use drift_parser::{Expr, ExprKind};
use drift_types::Ty;

use crate::env::Environment;
use crate::error::TypeError;
use crate::fresh::FreshSupply;
use crate::subst::Substitution;
use crate::unify::unify;

/// Owns the mutable state of one inference run: the substitution being
/// built up and the fresh-id counter.
///
/// One engine instance per caller: instances share no state, so
/// concurrent inference just means independent `Engine` values.
#[derive(Debug, Default)]
pub struct Engine {
    pub substitution: Substitution,
    pub fresh_supply: FreshSupply,
}

impl Engine {
    /// Construct an engine with an empty substitution and fresh counter
    /// at 0.
    pub fn new() -> Self {
        Self {
            substitution: Substitution::new(),
            fresh_supply: FreshSupply::new(),
        }
    }

    /// Infer the type of `expr` under `env`.
    ///
    /// The single public operation. Zonks the result before returning:
    /// only unknowns that truly remain free survive in the answer.
    pub fn infer_expr(&mut self, env: &Environment, expr: &Expr) -> Result<Ty, TypeError> {
        let ty = self.infer(env, expr)?;
        Ok(self.substitution.apply(&ty))
    }

    fn infer(&mut self, env: &Environment, expr: &Expr) -> Result<Ty, TypeError> {
        match &expr.kind {
            ExprKind::IntLit(_) => Ok(Ty::int()),
            ExprKind::BoolLit(_) => Ok(Ty::bool()),
            ExprKind::StringLit(_) => Ok(Ty::string()),

            ExprKind::Var(name) => env
                .lookup(name)
                .cloned()
                .ok_or_else(|| TypeError::unknown_variable(name.clone())),

            ExprKind::Lambda { param, body } => {
                let param_ty = self.fresh_supply.fresh();
                let inner_env = env.extend(param.clone(), param_ty.clone());
                let result_ty = self.infer(&inner_env, body)?;
                Ok(Ty::func(param_ty, result_ty))
            }

            ExprKind::App { func, arg } => {
                let func_ty = self.infer(env, func)?;
                let arg_ty = self.infer(env, arg)?;
                let result_ty = self.fresh_supply.fresh();
                self.unify(&func_ty, &Ty::func(arg_ty, result_ty.clone()))?;
                Ok(result_ty)
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond_ty = self.infer(env, cond)?;
                self.unify(&cond_ty, &Ty::bool())?;
                let then_ty = self.infer(env, then_branch)?;
                let else_ty = self.infer(env, else_branch)?;
                self.unify(&then_ty, &else_ty)?;
                Ok(then_ty)
            }

            ExprKind::Let { name, bound, body } => self.infer_let(env, name, bound, body),
        }
    }

    /// Recursive `let` without generalization.
    ///
    /// Every `let` is potentially recursive: `name` is pre-bound to a
    /// fresh unknown before `bound` is inferred, so `bound` may refer to
    /// `name` itself. The name is in scope in `body` too, but goes out of
    /// scope once the `Let` expression as a whole returns.
    fn infer_let(
        &mut self,
        env: &Environment,
        name: &str,
        bound: &Expr,
        body: &Expr,
    ) -> Result<Ty, TypeError> {
        let alpha = self.fresh_supply.fresh();
        let rec_env = env.extend(name.to_string(), alpha.clone());

        let bound_ty = self.infer(&rec_env, bound)?;
        self.unify(&alpha, &bound_ty)?;

        self.infer(&rec_env, body)
    }

    fn unify(&mut self, t1: &Ty, t2: &Ty) -> Result<(), TypeError> {
        unify(&mut self.substitution, t1, t2)
    }
}
