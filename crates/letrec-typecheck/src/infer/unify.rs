//! Unification with occurs check.
//!
//! Both sides are rewritten through the current substitution before they
//! are compared, and every binding is appended to the substitution at once.
//! Procedure types unify domain first, then codomain; the second step sees
//! whatever the first one bound.

use crate::context::{Rule, Subst};
use crate::error::{Result, TypeError};
use crate::types::Ty;
use letrec_log::trace;
use letrec_syntax::Span;

/// Makes `lhs` and `rhs` equal by extending `subst`.
///
/// On failure `subst` keeps any rules appended before the failing step.
///
/// # Errors
///
/// - [`TypeError::CircularType`] if a variable would have to contain itself
/// - [`TypeError::Conflict`] for different base types or a base type
///   against a procedure type
///
/// # Example
///
/// ```
/// use letrec_typecheck::context::Subst;
/// use letrec_typecheck::types::Ty;
/// use letrec_typecheck::unify;
/// use letrec_syntax::Span;
///
/// let mut subst = Subst::new();
/// let lhs = Ty::proc(Ty::Var(1), Ty::proc(Ty::int(), Ty::Var(1)));
/// let rhs = Ty::proc(Ty::bool(), Ty::proc(Ty::Var(3), Ty::Var(4)));
///
/// unify(&lhs, &rhs, &mut subst, Span::DUMMY).unwrap();
/// assert_eq!(subst.to_string(), "{\n\t(t_1, bool)\n\t(t_3, int)\n\t(t_4, bool)\n}");
/// ```
pub fn unify(lhs: &Ty, rhs: &Ty, subst: &mut Subst, span: Span) -> Result<()> {
    let lhs = subst.apply_ty(lhs);
    let rhs = subst.apply_ty(rhs);

    match (lhs, rhs) {
        (Ty::Var(a), Ty::Var(b)) if a == b => Ok(()),

        (Ty::Var(var), other) | (other, Ty::Var(var)) => bind(var, other, subst, span),

        (Ty::Primitive(p), Ty::Primitive(q)) if p == q => Ok(()),

        (Ty::Proc(d1, c1), Ty::Proc(d2, c2)) => {
            unify(&d1, &d2, subst, span)?;
            unify(&c1, &c2, subst, span)
        }

        (expected, found) => Err(TypeError::Conflict {
            expected,
            found,
            span,
        }),
    }
}

/// Binds an unbound variable, after the occurs check.
fn bind(var: u32, ty: Ty, subst: &mut Subst, span: Span) -> Result<()> {
    if ty.occurs_in(var) {
        return Err(TypeError::CircularType { var, ty, span });
    }

    let rule = Rule::new(var, ty);
    trace!("rule {rule}");
    subst.append(rule);
    Ok(())
}
