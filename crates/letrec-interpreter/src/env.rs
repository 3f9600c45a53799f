//! Runtime environments.
//!
//! An environment is an immutable chain of frames shared through `Rc`.
//! Extending never copies or touches the tail, so a closure can keep the
//! environment it was created in for as long as it lives.
//!
//! A `letrec` frame stores a procedure description rather than a closure.
//! Each lookup of its name builds a fresh closure whose environment is that
//! same frame, which gives recursion without a reference cycle. The
//! evaluator decides whether that closure is then placed in a cell.

use crate::value::{ExpVal, Procedure};
use letrec_mem::{Ref, Symbol};
use letrec_syntax::Expr;
use std::rc::Rc;

/// What a name is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Denoted<'a> {
    /// The value itself (by-value bindings, `letrec` procedures)
    Value(ExpVal<'a>),
    /// A store cell holding the value (by-reference bindings)
    Cell(Ref),
}

/// A frame in the environment chain.
#[derive(Debug)]
pub enum Environment<'a> {
    /// No bindings
    Empty,
    /// One ordinary binding
    Extend {
        /// Bound name
        name: Symbol,
        /// What it denotes
        denoted: Denoted<'a>,
        /// Enclosing environment
        tail: Rc<Environment<'a>>,
    },
    /// A recursive procedure
    RecProc {
        /// Procedure name
        name: Symbol,
        /// Parameter name
        param: Symbol,
        /// Procedure body
        body: &'a Expr,
        /// Enclosing environment
        tail: Rc<Environment<'a>>,
    },
}

impl<'a> Environment<'a> {
    /// The empty environment.
    #[must_use]
    pub fn empty() -> Rc<Self> {
        Rc::new(Environment::Empty)
    }

    /// Adds a binding in front of `tail`.
    #[must_use]
    pub fn extend(name: Symbol, denoted: Denoted<'a>, tail: &Rc<Self>) -> Rc<Self> {
        Rc::new(Environment::Extend {
            name,
            denoted,
            tail: Rc::clone(tail),
        })
    }

    /// Adds a recursive procedure in front of `tail`.
    #[must_use]
    pub fn extend_rec(name: Symbol, param: Symbol, body: &'a Expr, tail: &Rc<Self>) -> Rc<Self> {
        Rc::new(Environment::RecProc {
            name,
            param,
            body,
            tail: Rc::clone(tail),
        })
    }

    /// Finds the innermost binding of `name`.
    pub fn lookup(self: &Rc<Self>, name: Symbol) -> Option<Denoted<'a>> {
        let mut frame = self;
        loop {
            match frame.as_ref() {
                Environment::Empty => return None,
                Environment::Extend {
                    name: bound,
                    denoted,
                    tail,
                } => {
                    if *bound == name {
                        return Some(denoted.clone());
                    }
                    frame = tail;
                }
                Environment::RecProc {
                    name: bound,
                    param,
                    body,
                    tail,
                } => {
                    if *bound == name {
                        return Some(Denoted::Value(ExpVal::Proc(Procedure {
                            param: *param,
                            body: *body,
                            env: Rc::clone(frame),
                        })));
                    }
                    frame = tail;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_innermost() {
        let x = Symbol::new(0);
        let y = Symbol::new(1);
        let empty = Environment::empty();
        let outer = Environment::extend(x, Denoted::Value(ExpVal::Int(1)), &empty);
        let inner = Environment::extend(x, Denoted::Cell(Ref::new(4)), &outer);

        assert_eq!(inner.lookup(x), Some(Denoted::Cell(Ref::new(4))));
        assert_eq!(outer.lookup(x), Some(Denoted::Value(ExpVal::Int(1))));
        assert_eq!(inner.lookup(y), None);
    }

    #[test]
    fn test_rec_frame_closes_over_itself() {
        let f = Symbol::new(0);
        let n = Symbol::new(1);
        let body = Expr::var(n);
        let env = Environment::extend_rec(f, n, &body, &Environment::empty());

        let Some(Denoted::Value(ExpVal::Proc(proc_))) = env.lookup(f) else {
            panic!("expected a procedure");
        };
        assert_eq!(proc_.param, n);
        assert!(Rc::ptr_eq(&proc_.env, &env));

        // Every lookup builds a new closure over the same frame.
        assert_eq!(env.lookup(f), Some(Denoted::Value(ExpVal::Proc(proc_))));
    }
}
