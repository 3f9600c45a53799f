//! Inference machinery: the unifier and the per-run context.

pub mod context;
pub mod unify;

pub use context::{AssignTyping, CheckerConfig, Context};
pub use unify::unify;
