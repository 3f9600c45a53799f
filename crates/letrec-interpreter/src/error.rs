//! Runtime errors.

use letrec_mem::StoreError;
use letrec_syntax::{Span, Spanned};
use std::fmt;

/// Errors raised while evaluating a program. Evaluation stops at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Variable with no binding in the environment.
    UnboundVariable {
        /// Name of the variable
        name: String,
        /// Location of the reference
        span: Span,
    },

    /// A construct received a value of the wrong kind, e.g. `zero?(true)`.
    ValueMismatch {
        /// Kind of value the construct needs
        expected: &'static str,
        /// Kind of value it got
        found: &'static str,
        /// Location of the offending operand
        span: Span,
    },

    /// `set` on a name that does not denote a cell.
    ///
    /// Only raised with by-value bindings, where no name denotes a cell.
    NotAssignable {
        /// The assigned name
        name: String,
        /// Location of the `set`
        span: Span,
    },

    /// `begin` with no expressions (only reachable from hand-built trees).
    EmptySequence {
        /// Location of the `begin`
        span: Span,
    },

    /// `-(a, b)` outside the 64-bit range.
    IntegerOverflow {
        /// Location of the difference
        span: Span,
    },

    /// Read of an invalid or uninitialised cell.
    Store {
        /// The store's own error
        error: StoreError,
        /// Location of the access
        span: Span,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name, .. } => write!(f, "unbound variable '{name}'"),
            Self::ValueMismatch {
                expected, found, ..
            } => write!(f, "expected {expected} value, found {found}"),
            Self::NotAssignable { name, .. } => {
                write!(f, "cannot assign to '{name}': it is not bound to a cell")
            }
            Self::EmptySequence { .. } => write!(f, "'begin' needs at least one expression"),
            Self::IntegerOverflow { .. } => write!(f, "integer overflow in difference"),
            Self::Store { error, .. } => write!(f, "store error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl Spanned for RuntimeError {
    fn span(&self) -> Span {
        match self {
            Self::UnboundVariable { span, .. }
            | Self::ValueMismatch { span, .. }
            | Self::NotAssignable { span, .. }
            | Self::EmptySequence { span }
            | Self::IntegerOverflow { span }
            | Self::Store { span, .. } => *span,
        }
    }
}

/// Result type for evaluation.
pub type Result<T> = std::result::Result<T, RuntimeError>;
