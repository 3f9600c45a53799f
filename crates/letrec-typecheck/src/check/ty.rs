//! Annotation conversion.

use crate::infer::Context;
use crate::types::Ty;
use letrec_syntax::Type;

/// Converts an optional source annotation into a type.
///
/// A missing annotation and `?` both become a fresh variable, so every
/// occurrence of the unknown annotation is independent of every other.
pub fn ast_to_ty(ctx: &mut Context<'_>, annotation: Option<Type>) -> Ty {
    match annotation {
        Some(Type::Int) => Ty::int(),
        Some(Type::Bool) => Ty::bool(),
        Some(Type::Unknown) | None => ctx.fresh_var(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TypeEnv;
    use letrec_mem::StringInterner;

    #[test]
    fn test_named_annotations() {
        let interner = StringInterner::new();
        let mut ctx = Context::new(&interner, TypeEnv::new());
        assert_eq!(ast_to_ty(&mut ctx, Some(Type::Int)), Ty::int());
        assert_eq!(ast_to_ty(&mut ctx, Some(Type::Bool)), Ty::bool());
    }

    #[test]
    fn test_unknown_is_purified() {
        let interner = StringInterner::new();
        let mut ctx = Context::new(&interner, TypeEnv::new());
        assert_eq!(ast_to_ty(&mut ctx, Some(Type::Unknown)), Ty::Var(1));
        assert_eq!(ast_to_ty(&mut ctx, None), Ty::Var(2));
        assert_eq!(ast_to_ty(&mut ctx, Some(Type::Unknown)), Ty::Var(3));
    }
}
