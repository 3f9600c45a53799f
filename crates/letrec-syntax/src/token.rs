//! Tokens of the `letrec` surface syntax.
//!
//! # Examples
//!
//! ```
//! use letrec_syntax::token::{Token, TokenKind};
//! use letrec_syntax::span::Span;
//! use letrec_mem::Symbol;
//!
//! let kw = Token::new(TokenKind::Letrec, Span::new(0, 6, 1, 1, 1, 7));
//! let name = Token::new(TokenKind::Ident(Symbol::new(0)), Span::new(7, 11, 1, 8, 1, 12));
//!
//! assert!(kw.kind.is_keyword());
//! assert!(!name.kind.is_keyword());
//! ```

use crate::span::{Span, Spanned};
use letrec_mem::Symbol;
use std::fmt;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Keywords =====
    /// `let`
    Let,
    /// `letrec`
    Letrec,
    /// `in`
    In,
    /// `proc`
    Proc,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `zero?`
    ZeroTest,
    /// `newref`
    NewRef,
    /// `deref`
    DeRef,
    /// `setref`
    SetRef,
    /// `set`
    Set,
    /// `begin`
    Begin,
    /// `end`
    End,

    // ===== Literals =====
    /// Identifier (variable, parameter or procedure name)
    Ident(Symbol),
    /// Integer literal, possibly negative: `42`, `-7`
    Int(i64),
    /// `true` or `false`
    Bool(bool),

    // ===== Punctuation =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `=`
    Eq,
    /// `-`
    Minus,
    /// `;`
    Semi,
    /// `?`, the unknown type annotation
    Question,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Maps reserved words to their keyword kind.
    ///
    /// `true` and `false` are literals but reserved all the same.
    #[must_use]
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "let" => TokenKind::Let,
            "letrec" => TokenKind::Letrec,
            "in" => TokenKind::In,
            "proc" => TokenKind::Proc,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "zero?" => TokenKind::ZeroTest,
            "newref" => TokenKind::NewRef,
            "deref" => TokenKind::DeRef,
            "setref" => TokenKind::SetRef,
            "set" => TokenKind::Set,
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` for reserved words.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Letrec
                | TokenKind::In
                | TokenKind::Proc
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::ZeroTest
                | TokenKind::NewRef
                | TokenKind::DeRef
                | TokenKind::SetRef
                | TokenKind::Set
                | TokenKind::Begin
                | TokenKind::End
        )
    }

    /// Human-readable description used in "expected ..." messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(_) => "identifier".to_string(),
            TokenKind::Int(_) => "integer".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{other}'"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Let => f.write_str("let"),
            TokenKind::Letrec => f.write_str("letrec"),
            TokenKind::In => f.write_str("in"),
            TokenKind::Proc => f.write_str("proc"),
            TokenKind::If => f.write_str("if"),
            TokenKind::Then => f.write_str("then"),
            TokenKind::Else => f.write_str("else"),
            TokenKind::ZeroTest => f.write_str("zero?"),
            TokenKind::NewRef => f.write_str("newref"),
            TokenKind::DeRef => f.write_str("deref"),
            TokenKind::SetRef => f.write_str("setref"),
            TokenKind::Set => f.write_str("set"),
            TokenKind::Begin => f.write_str("begin"),
            TokenKind::End => f.write_str("end"),
            TokenKind::Ident(sym) => write!(f, "{sym}"),
            TokenKind::Int(n) => write!(f, "{n}"),
            TokenKind::Bool(b) => write!(f, "{b}"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Eq => f.write_str("="),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Semi => f.write_str(";"),
            TokenKind::Question => f.write_str("?"),
            TokenKind::Eof => f.write_str("<eof>"),
        }
    }
}

/// A token together with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What was lexed
    pub kind: TokenKind,
    /// Where it was lexed
    pub span: Span,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}
