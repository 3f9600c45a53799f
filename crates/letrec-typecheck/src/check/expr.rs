//! Expression typing.
//!
//! [`type_of`] walks the tree once, threading the context's substitution.
//! The type it returns is not yet rewritten through that substitution;
//! [`crate::infer_program_type`] does that once at the end.

use crate::check::ast_to_ty;
use crate::error::{Result, TypeError};
use crate::infer::{AssignTyping, Context};
use crate::types::Ty;
use letrec_syntax::{Expr, ExprKind, Spanned};

/// Infers the type of `expr` in the context's environment.
///
/// # Errors
///
/// The first [`TypeError`] met, in evaluation order.
pub fn type_of(ctx: &mut Context<'_>, expr: &Expr) -> Result<Ty> {
    match &expr.kind {
        ExprKind::Const(_) => Ok(Ty::int()),

        ExprKind::Bool(_) => Ok(Ty::bool()),

        ExprKind::Var(name) => match ctx.env.lookup(*name) {
            Some(ty) => Ok(ty.clone()),
            None => Err(TypeError::UnboundVariable {
                name: ctx.name(*name),
                span: expr.span(),
            }),
        },

        ExprKind::Diff(lhs, rhs) => {
            let lhs_ty = type_of(ctx, lhs)?;
            ctx.unify(&lhs_ty, &Ty::int(), lhs.span())?;
            let rhs_ty = type_of(ctx, rhs)?;
            ctx.unify(&rhs_ty, &Ty::int(), rhs.span())?;
            Ok(Ty::int())
        }

        ExprKind::IsZero(inner) => {
            let ty = type_of(ctx, inner)?;
            ctx.unify(&ty, &Ty::int(), inner.span())?;
            Ok(Ty::bool())
        }

        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond_ty = type_of(ctx, cond)?;
            ctx.unify(&cond_ty, &Ty::bool(), cond.span())?;
            let then_ty = type_of(ctx, then_branch)?;
            let else_ty = type_of(ctx, else_branch)?;
            ctx.unify(&then_ty, &else_ty, else_branch.span())?;
            Ok(then_ty)
        }

        ExprKind::Let { name, value, body } => {
            let value_ty = type_of(ctx, value)?;
            ctx.env.new_scope();
            ctx.env.bind(*name, value_ty);
            let result = type_of(ctx, body);
            ctx.env.pop_scope();
            result
        }

        ExprKind::Proc {
            param,
            annotation,
            body,
        } => {
            let param_ty = ast_to_ty(ctx, *annotation);
            ctx.env.new_scope();
            ctx.env.bind(*param, param_ty.clone());
            let body_ty = type_of(ctx, body);
            ctx.env.pop_scope();
            Ok(Ty::proc(param_ty, body_ty?))
        }

        ExprKind::Call { rator, rand } => {
            let result_ty = ctx.fresh_var();
            let rator_ty = type_of(ctx, rator)?;
            let rand_ty = type_of(ctx, rand)?;
            ctx.unify(&rator_ty, &Ty::proc(rand_ty, result_ty.clone()), expr.span())?;
            Ok(result_ty)
        }

        ExprKind::Letrec {
            result,
            name,
            param,
            param_annotation,
            proc_body,
            body,
        } => {
            let param_ty = ast_to_ty(ctx, *param_annotation);
            let result_ty = ast_to_ty(ctx, *result);

            ctx.env.new_scope();
            ctx.env.bind(*name, Ty::proc(param_ty.clone(), result_ty.clone()));

            ctx.env.new_scope();
            ctx.env.bind(*param, param_ty);
            let proc_body_ty = type_of(ctx, proc_body);
            ctx.env.pop_scope();

            let outcome = proc_body_ty
                .and_then(|ty| ctx.unify(&ty, &result_ty, proc_body.span()))
                .and_then(|()| type_of(ctx, body));
            ctx.env.pop_scope();
            outcome
        }

        ExprKind::Set { name, value } => {
            let value_ty = type_of(ctx, value)?;
            let bound = match ctx.config.assign {
                AssignTyping::Replace => ctx.env.replace(*name, value_ty).is_some(),
                AssignTyping::Unify => match ctx.env.lookup(*name).cloned() {
                    Some(current) => {
                        ctx.unify(&current, &value_ty, value.span())?;
                        true
                    }
                    None => false,
                },
            };
            if !bound {
                return Err(TypeError::UnboundVariable {
                    name: ctx.name(*name),
                    span: expr.span(),
                });
            }
            Ok(Ty::for_effect())
        }

        ExprKind::Begin(exprs) => {
            let mut last = None;
            for e in exprs {
                last = Some(type_of(ctx, e)?);
            }
            last.ok_or(TypeError::EmptySequence { span: expr.span() })
        }

        ExprKind::NewRef(_) | ExprKind::DeRef(_) | ExprKind::SetRef { .. } => {
            Err(TypeError::UnsupportedExpression {
                construct: expr.kind.construct(),
                span: expr.span(),
            })
        }
    }
}
