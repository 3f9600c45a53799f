//! Type inference for `letrec`.
//!
//! Inference is monomorphic and substitution based: every unknown
//! annotation becomes a fresh variable, every typing rule unifies, and the
//! substitution is kept fully reduced so it can be queried at any point.
//!
//! # Example
//!
//! ```
//! use letrec_typecheck::{infer_program_type, TypeEnv};
//!
//! let (expr, interner) = letrec_syntax::parse("proc (x: ?) zero?(x)").unwrap();
//! let (ty, subst) = infer_program_type(&expr, &interner, TypeEnv::new()).unwrap();
//!
//! assert_eq!(ty.to_string(), "int -> bool");
//! assert_eq!(subst.to_string(), "{\n\t(t_1, int)\n}");
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod context;
pub mod error;
pub mod infer;
pub mod types;

pub use check::type_of;
pub use context::{Rule, Subst, TypeEnv};
pub use error::{Result, TypeError};
pub use infer::{unify, AssignTyping, CheckerConfig, Context};
pub use types::{PrimTy, Ty};

use letrec_log::debug;
use letrec_mem::StringInterner;
use letrec_syntax::Expr;

/// Infers the type of a whole program with the default configuration.
///
/// Returns the program's type, rewritten through the final substitution,
/// together with that substitution.
///
/// # Errors
///
/// The first [`TypeError`] met.
pub fn infer_program_type(
    expr: &Expr,
    interner: &StringInterner,
    env: TypeEnv,
) -> Result<(Ty, Subst)> {
    infer_program_type_with(expr, interner, env, CheckerConfig::default())
}

/// Like [`infer_program_type`], with explicit checker options.
///
/// # Errors
///
/// The first [`TypeError`] met.
pub fn infer_program_type_with(
    expr: &Expr,
    interner: &StringInterner,
    env: TypeEnv,
    config: CheckerConfig,
) -> Result<(Ty, Subst)> {
    let mut ctx = Context::with_config(interner, env, config);
    let ty = type_of(&mut ctx, expr)?;
    let subst = ctx.into_subst();
    let ty = subst.apply_ty(&ty);
    debug!("inferred {ty} with {} rules", subst.len());
    Ok((ty, subst))
}
