//! `letrec` syntax: lexer, parser, AST and diagnostics.
//!
//! The language core works on [`ast::Expr`] trees. This crate produces them
//! from source text, prints them back, and renders errors from any later
//! phase against the source.
//!
//! # Modules
//!
//! - [`span`] - source location tracking
//! - [`token`] - token kinds
//! - [`lexer`] - tokenization and identifier interning
//! - [`ast`] - expressions and type annotations
//! - [`parser`] - recursive descent parser
//! - [`pretty`] - source printer
//! - [`diagnostic`] - error rendering with source highlighting
//! - [`error`] - lexer and parser errors
//!
//! # Examples
//!
//! ```
//! use letrec_syntax::ast::ExprKind;
//!
//! let (expr, interner) = letrec_syntax::parse("let x = 5 in zero?(x)").unwrap();
//!
//! let ExprKind::Let { name, .. } = expr.kind else { unreachable!() };
//! assert_eq!(interner.resolve(name), Some("x"));
//! ```

#![warn(missing_docs)]

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod token;

pub use ast::{Expr, ExprKind, Type};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticLevel, Emitter};
pub use error::{LexerError, LexerResult, ParserError, ParserResult, SyntaxError, SyntaxResult};
pub use lexer::Lexer;
pub use parser::Parser;
pub use pretty::{PrettyConfig, PrettyPrinter};
pub use span::{Span, Spanned};
pub use token::{Token, TokenKind};

use letrec_mem::StringInterner;

/// Lexes and parses a whole program with a fresh interner.
///
/// # Errors
///
/// Returns the first lexer or parser error.
pub fn parse(source: &str) -> SyntaxResult<(Expr, StringInterner)> {
    parse_with_interner(source, StringInterner::new())
}

/// Lexes and parses a whole program, interning into `interner`.
///
/// # Errors
///
/// Returns the first lexer or parser error.
pub fn parse_with_interner(
    source: &str,
    interner: StringInterner,
) -> SyntaxResult<(Expr, StringInterner)> {
    let (tokens, interner) = Lexer::with_interner(source, interner).lex_with_interner()?;
    let expr = Parser::new(tokens, &interner).parse_program()?;
    letrec_log::debug!("parsed {} ({} identifiers)", expr.kind.construct(), interner.len());
    Ok((expr, interner))
}
