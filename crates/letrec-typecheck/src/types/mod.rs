//! Type representation.
//!
//! - **Ty**: inferred types, with unification variables
//! - **Display**: `int`, `t_3`, `(int -> bool) -> int`

pub mod display;
pub mod ty;

pub use ty::{PrimTy, Ty};
