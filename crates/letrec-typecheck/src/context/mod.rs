//! Inference state that outlives a single expression.
//!
//! - **Subst**: the accumulated, fully reduced substitution
//! - **TypeEnv**: scope stack of variable types

pub mod env;
pub mod subst;

pub use env::TypeEnv;
pub use subst::{Rule, Subst};
