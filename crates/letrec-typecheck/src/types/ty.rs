//! Core type representation for inference.
//!
//! [`Ty`] is the inferred type of an expression. It is distinct from
//! [`letrec_syntax::Type`], which is only what a programmer may write in an
//! annotation (`int`, `bool`, `?`). The unknown annotation never reaches
//! this module: the inference context purifies it into a fresh [`Ty::Var`].

use std::collections::BTreeSet;

/// An inferred type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    /// Unification variable `t_n`. Ids come from the inference context and
    /// start at 1.
    Var(u32),

    /// Named base type
    Primitive(PrimTy),

    /// Procedure type `domain -> codomain`
    Proc(Box<Ty>, Box<Ty>),
}

/// The named base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimTy {
    /// `int`
    Int,
    /// `bool`
    Bool,
}

impl PrimTy {
    /// The type's name as written in annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PrimTy::Int => "int",
            PrimTy::Bool => "bool",
        }
    }
}

impl Ty {
    /// `int`
    #[must_use]
    pub const fn int() -> Ty {
        Ty::Primitive(PrimTy::Int)
    }

    /// `bool`
    #[must_use]
    pub const fn bool() -> Ty {
        Ty::Primitive(PrimTy::Bool)
    }

    /// Type of expressions evaluated only for their effect (`set`, `setref`).
    ///
    /// Their runtime result is a sentinel integer, so the type is `int`.
    #[must_use]
    pub const fn for_effect() -> Ty {
        Ty::int()
    }

    /// `domain -> codomain`
    #[must_use]
    pub fn proc(domain: Ty, codomain: Ty) -> Ty {
        Ty::Proc(Box::new(domain), Box::new(codomain))
    }

    /// Returns `true` if `var` occurs anywhere in this type.
    #[must_use]
    pub fn occurs_in(&self, var: u32) -> bool {
        match self {
            Ty::Var(v) => *v == var,
            Ty::Primitive(_) => false,
            Ty::Proc(domain, codomain) => domain.occurs_in(var) || codomain.occurs_in(var),
        }
    }

    /// Returns the set of variables in this type, in ascending order.
    #[must_use]
    pub fn free_vars(&self) -> BTreeSet<u32> {
        let mut vars = BTreeSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut BTreeSet<u32>) {
        match self {
            Ty::Var(v) => {
                vars.insert(*v);
            }
            Ty::Primitive(_) => {}
            Ty::Proc(domain, codomain) => {
                domain.collect_free_vars(vars);
                codomain.collect_free_vars(vars);
            }
        }
    }

    /// Replaces every occurrence of `var` with `replacement`.
    #[must_use]
    pub fn substitute(&self, var: u32, replacement: &Ty) -> Ty {
        match self {
            Ty::Var(v) if *v == var => replacement.clone(),
            Ty::Var(_) | Ty::Primitive(_) => self.clone(),
            Ty::Proc(domain, codomain) => Ty::proc(
                domain.substitute(var, replacement),
                codomain.substitute(var, replacement),
            ),
        }
    }
}
