//! Type pretty-printing for messages and the CLI.
//!
//! Variables print as `t_n`. Either side of an arrow is parenthesised when
//! it is itself a procedure type, so the output never depends on arrow
//! associativity.

use crate::types::Ty;
use std::fmt;

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Var(n) => write!(f, "t_{n}"),
            Ty::Primitive(prim) => f.write_str(prim.name()),
            Ty::Proc(domain, codomain) => {
                write_side(domain, f)?;
                f.write_str(" -> ")?;
                write_side(codomain, f)
            }
        }
    }
}

fn write_side(ty: &Ty, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if matches!(ty, Ty::Proc(..)) {
        write!(f, "({ty})")
    } else {
        write!(f, "{ty}")
    }
}
