//! Inference context for one program.
//!
//! Holds the type environment, the substitution built so far, the fresh
//! variable counter and the checker configuration. A context is created
//! per run, so variable numbering always starts at `t_1`.

use crate::context::{Subst, TypeEnv};
use crate::error::Result;
use crate::infer::unify;
use crate::types::Ty;
use letrec_log::trace;
use letrec_mem::{StringInterner, Symbol};
use letrec_syntax::Span;

/// How `set x = e` is typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignTyping {
    /// The type of `x` becomes the type of `e` in the nearest scope that
    /// binds it.
    #[default]
    Replace,
    /// The type of `e` must unify with the current type of `x`.
    Unify,
}

/// Checker options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Typing rule for assignment
    pub assign: AssignTyping,
}

/// Main inference context.
pub struct Context<'ctx> {
    /// String interner (shared with the parser)
    pub interner: &'ctx StringInterner,

    /// Variable types by scope
    pub env: TypeEnv,

    /// Substitution built so far
    pub subst: Subst,

    /// Checker options
    pub config: CheckerConfig,

    next_var: u32,
}

impl<'ctx> Context<'ctx> {
    /// Creates a context with the default configuration.
    pub fn new(interner: &'ctx StringInterner, env: TypeEnv) -> Self {
        Self::with_config(interner, env, CheckerConfig::default())
    }

    /// Creates a context with an explicit configuration.
    pub fn with_config(interner: &'ctx StringInterner, env: TypeEnv, config: CheckerConfig) -> Self {
        Self {
            interner,
            env,
            subst: Subst::new(),
            config,
            next_var: 1,
        }
    }

    /// Returns a type variable not used before in this run.
    pub fn fresh_var(&mut self) -> Ty {
        let var = self.next_var;
        self.next_var += 1;
        trace!("fresh {}", Ty::Var(var));
        Ty::Var(var)
    }

    /// Unifies two types against the context's substitution.
    pub fn unify(&mut self, lhs: &Ty, rhs: &Ty, span: Span) -> Result<()> {
        unify(lhs, rhs, &mut self.subst, span)
    }

    /// Source name of a symbol, for messages.
    pub fn name(&self, sym: Symbol) -> String {
        self.interner.display(sym)
    }

    /// Consumes the context, returning its substitution.
    pub fn into_subst(self) -> Subst {
        self.subst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_vars_start_at_one() {
        let interner = StringInterner::new();
        let mut ctx = Context::new(&interner, TypeEnv::new());
        assert_eq!(ctx.fresh_var(), Ty::Var(1));
        assert_eq!(ctx.fresh_var(), Ty::Var(2));

        let mut other = Context::new(&interner, TypeEnv::new());
        assert_eq!(other.fresh_var(), Ty::Var(1));
    }

    #[test]
    fn test_unify_extends_subst() {
        let interner = StringInterner::new();
        let mut ctx = Context::new(&interner, TypeEnv::new());
        let t = ctx.fresh_var();
        ctx.unify(&t, &Ty::bool(), Span::DUMMY).unwrap();
        assert_eq!(ctx.subst.apply_ty(&t), Ty::bool());
    }

    #[test]
    fn test_default_config_replaces() {
        assert_eq!(CheckerConfig::default().assign, AssignTyping::Replace);
    }
}
