//! Type checking errors.

use crate::types::Ty;
use letrec_syntax::{Span, Spanned};
use std::fmt;

/// Type inference errors. Inference stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Variable with no binding in scope.
    UnboundVariable {
        /// Name of the variable
        name: String,
        /// Source location
        span: Span,
    },

    /// Occurs check failure: `var` would have to contain itself.
    CircularType {
        /// The variable being bound
        var: u32,
        /// The type it occurs in
        ty: Ty,
        /// Source location
        span: Span,
    },

    /// Two types that cannot be made equal.
    Conflict {
        /// Left-hand side of the failed unification
        expected: Ty,
        /// Right-hand side of the failed unification
        found: Ty,
        /// Source location
        span: Span,
    },

    /// Construct with no type in the `int`/`bool`/procedure type language.
    UnsupportedExpression {
        /// Name of the construct (`newref`, `deref`, `setref`)
        construct: &'static str,
        /// Source location
        span: Span,
    },

    /// `begin` with no expressions (only reachable from hand-built trees).
    EmptySequence {
        /// Source location
        span: Span,
    },
}

impl TypeError {
    /// Short, message-free description of the error kind.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            TypeError::UnboundVariable { .. } => "unbound variable",
            TypeError::CircularType { .. } => "circular type",
            TypeError::Conflict { .. } => "type conflict",
            TypeError::UnsupportedExpression { .. } => "unsupported expression",
            TypeError::EmptySequence { .. } => "empty sequence",
        }
    }
}

impl Spanned for TypeError {
    fn span(&self) -> Span {
        match self {
            TypeError::UnboundVariable { span, .. }
            | TypeError::CircularType { span, .. }
            | TypeError::Conflict { span, .. }
            | TypeError::UnsupportedExpression { span, .. }
            | TypeError::EmptySequence { span } => *span,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnboundVariable { name, .. } => {
                write!(f, "unbound variable '{name}'")
            }
            TypeError::CircularType { var, ty, .. } => {
                write!(f, "circular type: {} occurs in {ty}", Ty::Var(*var))
            }
            TypeError::Conflict {
                expected, found, ..
            } => {
                write!(f, "type conflict: cannot unify {expected} with {found}")
            }
            TypeError::UnsupportedExpression { construct, .. } => {
                write!(f, "'{construct}' cannot be typed: references have no type")
            }
            TypeError::EmptySequence { .. } => {
                write!(f, "'begin' needs at least one expression")
            }
        }
    }
}

impl std::error::Error for TypeError {}

/// Result type for type checking operations.
pub type Result<T> = std::result::Result<T, TypeError>;
