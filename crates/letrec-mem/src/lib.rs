//! Memory infrastructure for the `letrec` language core.
//!
//! - **Symbols and interning**: identifiers are interned once by the parser
//!   and compared as 32-bit [`Symbol`]s everywhere else.
//! - **Store**: the append-only cell arena behind `newref`, `set` and the
//!   by-reference binding mode. See [`Store`].

pub mod interner;
pub mod store;
pub mod symbol;

pub use interner::StringInterner;
pub use store::{Ref, Store, StoreError};
pub use symbol::Symbol;
