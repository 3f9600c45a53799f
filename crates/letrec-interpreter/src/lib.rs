//! Evaluator for `letrec`.
//!
//! The interpreter walks the expression tree directly, passing an immutable
//! [`Environment`] chain and threading one mutable [`Store`] per session.
//! Procedures are closures over the environment they were created in;
//! `letrec` procedures see themselves through a recursive frame.
//!
//! # Example
//!
//! ```
//! use letrec_interpreter::{evaluate_program, BindingMode, ExpVal};
//!
//! let source = "let y = 74 in let p = proc (x) -(y, x) in (p 5)";
//! let (expr, interner) = letrec_syntax::parse(source).unwrap();
//!
//! let (value, store) = evaluate_program(&expr, &interner, BindingMode::ByReference).unwrap();
//! assert_eq!(value, ExpVal::Int(69));
//! assert_eq!(store.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod eval;
pub mod value;

pub use env::{Denoted, Environment};
pub use error::{Result, RuntimeError};
pub use eval::{BindingMode, Interpreter, InterpreterConfig};
pub use value::{ExpVal, Procedure, SETREF_RESULT, SET_RESULT};

use letrec_mem::{Store, StringInterner};
use letrec_syntax::Expr;

/// Evaluates a program in the empty environment with a fresh store.
///
/// Returns the program's value and the store as it was left.
///
/// # Errors
///
/// The first [`RuntimeError`] met.
pub fn evaluate_program<'a>(
    expr: &'a Expr,
    interner: &'a StringInterner,
    mode: BindingMode,
) -> Result<(ExpVal<'a>, Store<ExpVal<'a>>)> {
    let mut interp = Interpreter::with_config(interner, InterpreterConfig { mode });
    let value = interp.evaluate_program(expr, &Environment::empty())?;
    Ok((value, interp.into_store()))
}
