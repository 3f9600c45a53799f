//! Expression nodes.
//!
//! A program is a single expression. Expressions own their subexpressions
//! through `Box`/`Vec` and refer to names by interned [`Symbol`].
//!
//! # Examples
//!
//! Building `let y = 74 in -(y, 5)` by hand:
//!
//! ```
//! use letrec_syntax::ast::{Expr, ExprKind};
//! use letrec_mem::StringInterner;
//!
//! let mut interner = StringInterner::new();
//! let y = interner.intern("y");
//!
//! let program = Expr::let_(y, Expr::int(74), Expr::diff(Expr::var(y), Expr::int(5)));
//! assert!(matches!(program.kind, ExprKind::Let { .. }));
//! ```

use super::ty::Type;
use crate::span::{Span, Spanned};
use letrec_mem::Symbol;

/// An expression with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// What kind of expression this is
    pub kind: ExprKind,
    /// Where it was written
    pub span: Span,
}

/// The closed set of expression forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// Integer constant: `42`
    Const(i64),

    /// Boolean constant: `true`, `false`
    Bool(bool),

    /// Variable reference: `x`
    Var(Symbol),

    /// Procedure literal: `proc (x) body` or `proc (x: int) body`
    Proc {
        /// Parameter name
        param: Symbol,
        /// Optional parameter annotation
        annotation: Option<Type>,
        /// Procedure body
        body: Box<Expr>,
    },

    /// Procedure call: `(rator rand)`
    Call {
        /// Expression yielding the procedure
        rator: Box<Expr>,
        /// Argument expression
        rand: Box<Expr>,
    },

    /// Integer difference: `-(a, b)`
    Diff(Box<Expr>, Box<Expr>),

    /// Zero test: `zero?(e)`
    IsZero(Box<Expr>),

    /// Conditional: `if c then a else b`
    If {
        /// Condition, must be boolean
        cond: Box<Expr>,
        /// Taken when the condition is true
        then_branch: Box<Expr>,
        /// Taken when the condition is false
        else_branch: Box<Expr>,
    },

    /// Non-recursive binding: `let x = e in body`
    Let {
        /// Bound name
        name: Symbol,
        /// Bound expression, evaluated outside the binding
        value: Box<Expr>,
        /// Scope of the binding
        body: Box<Expr>,
    },

    /// Recursive procedure: `letrec [T] f (x[: T]) = e in body`
    Letrec {
        /// Optional result annotation
        result: Option<Type>,
        /// Procedure name, visible in `proc_body` and `body`
        name: Symbol,
        /// Parameter name
        param: Symbol,
        /// Optional parameter annotation
        param_annotation: Option<Type>,
        /// Procedure body
        proc_body: Box<Expr>,
        /// Scope of the procedure
        body: Box<Expr>,
    },

    /// Cell allocation: `newref(e)`
    NewRef(Box<Expr>),

    /// Cell read: `deref(e)`
    DeRef(Box<Expr>),

    /// Cell write: `setref(r, e)`
    SetRef {
        /// Expression yielding the reference
        target: Box<Expr>,
        /// New contents
        value: Box<Expr>,
    },

    /// Sequence: `begin e1; e2; ... end`, never empty
    Begin(Vec<Expr>),

    /// Variable assignment: `set x = e`
    Set {
        /// Assigned name
        name: Symbol,
        /// New value
        value: Box<Expr>,
    },
}

impl ExprKind {
    /// Keyword-ish name of the construct, for diagnostics.
    #[must_use]
    pub const fn construct(&self) -> &'static str {
        match self {
            ExprKind::Const(_) => "integer constant",
            ExprKind::Bool(_) => "boolean constant",
            ExprKind::Var(_) => "variable",
            ExprKind::Proc { .. } => "proc",
            ExprKind::Call { .. } => "call",
            ExprKind::Diff(..) => "difference",
            ExprKind::IsZero(_) => "zero?",
            ExprKind::If { .. } => "if",
            ExprKind::Let { .. } => "let",
            ExprKind::Letrec { .. } => "letrec",
            ExprKind::NewRef(_) => "newref",
            ExprKind::DeRef(_) => "deref",
            ExprKind::SetRef { .. } => "setref",
            ExprKind::Begin(_) => "begin",
            ExprKind::Set { .. } => "set",
        }
    }
}

impl Expr {
    /// Creates an expression at `span`.
    #[must_use]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    fn synth(kind: ExprKind) -> Self {
        Self::new(kind, Span::DUMMY)
    }

    /// `n`
    #[must_use]
    pub fn int(n: i64) -> Self {
        Self::synth(ExprKind::Const(n))
    }

    /// `true` / `false`
    #[must_use]
    pub fn bool(b: bool) -> Self {
        Self::synth(ExprKind::Bool(b))
    }

    /// `x`
    #[must_use]
    pub fn var(name: Symbol) -> Self {
        Self::synth(ExprKind::Var(name))
    }

    /// `proc (param[: annotation]) body`
    #[must_use]
    pub fn proc_(param: Symbol, annotation: Option<Type>, body: Expr) -> Self {
        Self::synth(ExprKind::Proc {
            param,
            annotation,
            body: Box::new(body),
        })
    }

    /// `(rator rand)`
    #[must_use]
    pub fn call(rator: Expr, rand: Expr) -> Self {
        Self::synth(ExprKind::Call {
            rator: Box::new(rator),
            rand: Box::new(rand),
        })
    }

    /// `-(lhs, rhs)`
    #[must_use]
    pub fn diff(lhs: Expr, rhs: Expr) -> Self {
        Self::synth(ExprKind::Diff(Box::new(lhs), Box::new(rhs)))
    }

    /// `zero?(e)`
    #[must_use]
    pub fn is_zero(e: Expr) -> Self {
        Self::synth(ExprKind::IsZero(Box::new(e)))
    }

    /// `if cond then a else b`
    #[must_use]
    pub fn if_(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Self::synth(ExprKind::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// `let name = value in body`
    #[must_use]
    pub fn let_(name: Symbol, value: Expr, body: Expr) -> Self {
        Self::synth(ExprKind::Let {
            name,
            value: Box::new(value),
            body: Box::new(body),
        })
    }

    /// `letrec [result] name (param[: param_annotation]) = proc_body in body`
    #[must_use]
    pub fn letrec(
        result: Option<Type>,
        name: Symbol,
        param: Symbol,
        param_annotation: Option<Type>,
        proc_body: Expr,
        body: Expr,
    ) -> Self {
        Self::synth(ExprKind::Letrec {
            result,
            name,
            param,
            param_annotation,
            proc_body: Box::new(proc_body),
            body: Box::new(body),
        })
    }

    /// `newref(e)`
    #[must_use]
    pub fn newref(e: Expr) -> Self {
        Self::synth(ExprKind::NewRef(Box::new(e)))
    }

    /// `deref(e)`
    #[must_use]
    pub fn deref(e: Expr) -> Self {
        Self::synth(ExprKind::DeRef(Box::new(e)))
    }

    /// `setref(target, value)`
    #[must_use]
    pub fn setref(target: Expr, value: Expr) -> Self {
        Self::synth(ExprKind::SetRef {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    /// `begin e1; ...; en end`
    #[must_use]
    pub fn begin(exprs: Vec<Expr>) -> Self {
        Self::synth(ExprKind::Begin(exprs))
    }

    /// `set name = value`
    #[must_use]
    pub fn set(name: Symbol, value: Expr) -> Self {
        Self::synth(ExprKind::Set {
            name,
            value: Box::new(value),
        })
    }

    /// Returns `true` if some subexpression is a `set`.
    #[must_use]
    pub fn assigns_variables(&self) -> bool {
        match &self.kind {
            ExprKind::Set { .. } => true,
            ExprKind::Const(_) | ExprKind::Bool(_) | ExprKind::Var(_) => false,
            ExprKind::Proc { body, .. } => body.assigns_variables(),
            ExprKind::NewRef(e) | ExprKind::DeRef(e) | ExprKind::IsZero(e) => e.assigns_variables(),
            ExprKind::SetRef { target, value } => target.assigns_variables() || value.assigns_variables(),
            ExprKind::Call { rator, rand } => rator.assigns_variables() || rand.assigns_variables(),
            ExprKind::Diff(a, b) => a.assigns_variables() || b.assigns_variables(),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                cond.assigns_variables()
                    || then_branch.assigns_variables()
                    || else_branch.assigns_variables()
            }
            ExprKind::Let { value, body, .. } => value.assigns_variables() || body.assigns_variables(),
            ExprKind::Letrec {
                proc_body, body, ..
            } => proc_body.assigns_variables() || body.assigns_variables(),
            ExprKind::Begin(exprs) => exprs.iter().any(Expr::assigns_variables),
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}
