//! Per-construct inference rules.

pub mod expr;
pub mod ty;

pub use expr::type_of;
pub use ty::ast_to_ty;
