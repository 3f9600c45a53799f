//! Substitutions for type unification.
//!
//! A substitution is an ordered list of rules `t_n := T`. It is kept fully
//! reduced: no rule body mentions the head of any rule. [`Subst::append`]
//! maintains this by rewriting every existing body through the new rule
//! before pushing it, so applying the substitution is a single pass through
//! the rules and the result is already final.
//!
//! # Example
//!
//! ```
//! use letrec_typecheck::context::{Rule, Subst};
//! use letrec_typecheck::types::Ty;
//!
//! let mut subst = Subst::new();
//! subst.append(Rule::new(1, Ty::proc(Ty::Var(2), Ty::bool())));
//! subst.append(Rule::new(2, Ty::int()));
//!
//! // The first rule was rewritten through the second.
//! assert_eq!(subst.resolve(1), Some(&Ty::proc(Ty::int(), Ty::bool())));
//! assert_eq!(subst.apply_ty(&Ty::Var(1)).to_string(), "int -> bool");
//! ```

use crate::types::Ty;
use std::fmt;

/// A single binding `var := body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The bound variable
    pub var: u32,
    /// What it stands for
    pub body: Ty,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(var: u32, body: Ty) -> Self {
        Self { var, body }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", Ty::Var(self.var), self.body)
    }
}

/// Ordered, fully reduced list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subst {
    rules: Vec<Rule>,
}

impl Subst {
    /// Creates an empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites `ty` through every rule in order.
    #[must_use]
    pub fn apply_ty(&self, ty: &Ty) -> Ty {
        self.rules
            .iter()
            .fold(ty.clone(), |acc, rule| acc.substitute(rule.var, &rule.body))
    }

    /// Adds a rule, first propagating it into every existing body.
    ///
    /// The caller must have applied this substitution to `rule.body` and
    /// performed the occurs check; unification does both.
    pub fn append(&mut self, rule: Rule) {
        debug_assert!(
            self.resolve(rule.var).is_none(),
            "{} already has a rule",
            Ty::Var(rule.var)
        );
        debug_assert!(!rule.body.occurs_in(rule.var), "circular rule {rule}");

        for existing in &mut self.rules {
            existing.body = existing.body.substitute(rule.var, &rule.body);
        }
        self.rules.push(rule);
    }

    /// Returns what `var` is bound to, if anything.
    #[must_use]
    pub fn resolve(&self, var: u32) -> Option<&Ty> {
        self.rules.iter().find(|r| r.var == var).map(|r| &r.body)
    }

    /// The rules, oldest first.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for Subst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for rule in &self.rules {
            writeln!(f, "\t{rule}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_subst() {
        let subst = Subst::new();
        assert!(subst.is_empty());
        assert_eq!(subst.apply_ty(&Ty::Var(1)), Ty::Var(1));
        assert_eq!(subst.to_string(), "{\n}");
    }

    #[test]
    fn test_append_propagates() {
        let mut subst = Subst::new();
        subst.append(Rule::new(1, Ty::Var(2)));
        subst.append(Rule::new(3, Ty::proc(Ty::Var(2), Ty::Var(2))));
        subst.append(Rule::new(2, Ty::bool()));

        assert_eq!(subst.resolve(1), Some(&Ty::bool()));
        assert_eq!(subst.resolve(3), Some(&Ty::proc(Ty::bool(), Ty::bool())));
        assert_eq!(subst.len(), 3);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut subst = Subst::new();
        subst.append(Rule::new(1, Ty::proc(Ty::Var(2), Ty::Var(4))));
        subst.append(Rule::new(2, Ty::int()));

        let ty = Ty::proc(Ty::Var(1), Ty::Var(3));
        let once = subst.apply_ty(&ty);
        assert_eq!(subst.apply_ty(&once), once);
        assert_eq!(once.to_string(), "(int -> t_4) -> t_3");
    }

    #[test]
    fn test_resolve_missing() {
        let mut subst = Subst::new();
        subst.append(Rule::new(5, Ty::int()));
        assert_eq!(subst.resolve(4), None);
        assert_eq!(subst.rules()[0], Rule::new(5, Ty::int()));
    }

    #[test]
    fn test_display() {
        let mut subst = Subst::new();
        subst.append(Rule::new(1, Ty::int()));
        subst.append(Rule::new(2, Ty::proc(Ty::bool(), Ty::Var(3))));
        assert_eq!(subst.to_string(), "{\n\t(t_1, int)\n\t(t_2, bool -> t_3)\n}");
    }
}
