//! Expressed values.

use crate::env::Environment;
use crate::error::{Result, RuntimeError};
use letrec_mem::{Ref, Symbol};
use letrec_syntax::{Expr, Span};
use std::fmt;
use std::rc::Rc;

/// Result of `setref`.
pub const SETREF_RESULT: i64 = -1_000_001;

/// Result of `set`.
pub const SET_RESULT: i64 = -1_000_002;

/// A value an expression can produce.
///
/// Values borrow procedure bodies from the program tree, so they cannot
/// outlive it.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpVal<'a> {
    /// Integer
    Int(i64),
    /// Boolean
    Bool(bool),
    /// Closure
    Proc(Procedure<'a>),
    /// Address of a store cell
    Ref(Ref),
}

/// A closure: parameter, body, and the environment it was created in.
#[derive(Debug, Clone)]
pub struct Procedure<'a> {
    /// Parameter name
    pub param: Symbol,
    /// Body, borrowed from the program
    pub body: &'a Expr,
    /// Captured environment
    pub env: Rc<Environment<'a>>,
}

impl PartialEq for Procedure<'_> {
    /// Closures are equal when they are the same code in the same frame.
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param
            && std::ptr::eq(self.body, other.body)
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl<'a> ExpVal<'a> {
    /// Kind of value, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ExpVal::Int(_) => "integer",
            ExpVal::Bool(_) => "boolean",
            ExpVal::Proc(_) => "procedure",
            ExpVal::Ref(_) => "reference",
        }
    }

    fn mismatch(&self, expected: &'static str, span: Span) -> RuntimeError {
        RuntimeError::ValueMismatch {
            expected,
            found: self.kind(),
            span,
        }
    }

    /// The integer, or a mismatch error at `span`.
    pub fn to_int(&self, span: Span) -> Result<i64> {
        match self {
            ExpVal::Int(n) => Ok(*n),
            other => Err(other.mismatch("integer", span)),
        }
    }

    /// The boolean, or a mismatch error at `span`.
    pub fn to_bool(&self, span: Span) -> Result<bool> {
        match self {
            ExpVal::Bool(b) => Ok(*b),
            other => Err(other.mismatch("boolean", span)),
        }
    }

    /// The reference, or a mismatch error at `span`.
    pub fn to_ref(&self, span: Span) -> Result<Ref> {
        match self {
            ExpVal::Ref(r) => Ok(*r),
            other => Err(other.mismatch("reference", span)),
        }
    }

    /// The closure, or a mismatch error at `span`.
    pub fn into_proc(self, span: Span) -> Result<Procedure<'a>> {
        match self {
            ExpVal::Proc(p) => Ok(p),
            other => Err(other.mismatch("procedure", span)),
        }
    }
}

impl fmt::Display for ExpVal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpVal::Int(n) => write!(f, "{n}"),
            ExpVal::Bool(b) => write!(f, "{b}"),
            ExpVal::Proc(_) => write!(f, "<procedure>"),
            ExpVal::Ref(r) => write!(f, "{r}"),
        }
    }
}
