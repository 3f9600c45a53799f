//! Abstract syntax tree for `letrec` programs.
//!
//! - [`expr`] - expressions, the whole of a program
//! - [`ty`] - source-level type annotations
//!
//! Trees own their children and are never mutated once built. Every node
//! carries a [`Span`](crate::span::Span); nodes built by hand through the
//! constructor helpers get [`Span::DUMMY`](crate::span::Span::DUMMY).

pub mod expr;
pub mod ty;

pub use expr::{Expr, ExprKind};
pub use ty::Type;
