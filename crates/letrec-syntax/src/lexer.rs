//! Tokenization of `letrec` source text.
//!
//! The lexer makes a single pass over the source, interning identifiers as it
//! goes. Whitespace separates tokens, `%` starts a comment that runs to the
//! end of the line, and the first unrecognised character aborts lexing.
//!
//! Identifiers may contain letters, digits, `_` and `?` after a leading
//! letter or `_`, which is how `zero?` comes out as a single keyword. A `-`
//! immediately followed by a digit is a negative literal; any other `-` is
//! the difference operator.
//!
//! # Examples
//!
//! ```
//! use letrec_syntax::lexer::Lexer;
//! use letrec_syntax::token::TokenKind;
//!
//! let (tokens, interner) = Lexer::new("-(x, -3)").lex_with_interner().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! let x = interner.lookup("x").unwrap();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Minus,
//!         TokenKind::LParen,
//!         TokenKind::Ident(x),
//!         TokenKind::Comma,
//!         TokenKind::Int(-3),
//!         TokenKind::RParen,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use crate::error::{LexerError, LexerResult};
use crate::span::Span;
use crate::token::{Token, TokenKind};
use letrec_mem::StringInterner;
use std::iter::Peekable;
use std::str::Chars;

/// Lexical analyzer for `letrec` source code.
pub struct Lexer<'input> {
    input: &'input str,
    chars: Peekable<Chars<'input>>,
    /// Current byte offset
    position: usize,
    /// Current line (1-indexed)
    line: usize,
    /// Current column (1-indexed)
    column: usize,
    interner: StringInterner,
}

impl<'input> Lexer<'input> {
    /// Creates a lexer with a fresh interner.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self::with_interner(input, StringInterner::new())
    }

    /// Creates a lexer that interns into an existing interner.
    ///
    /// Embedders that pre-bind names in an initial environment use this so
    /// that the program's identifiers agree with their symbols.
    #[must_use]
    pub fn with_interner(input: &'input str, interner: StringInterner) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
            line: 1,
            column: 1,
            interner,
        }
    }

    /// Tokenizes the whole input, ending with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexerError`] encountered.
    pub fn lex(self) -> LexerResult<Vec<Token>> {
        self.lex_with_interner().map(|(tokens, _)| tokens)
    }

    /// Tokenizes the whole input and hands back the interner as well.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexerError`] encountered.
    pub fn lex_with_interner(mut self) -> LexerResult<(Vec<Token>, StringInterner)> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();
            if self.peek().is_none() {
                break;
            }
            tokens.push(self.next_token()?);
        }

        let eof = Span::point(self.position, self.line, self.column);
        tokens.push(Token::new(TokenKind::Eof, eof));

        letrec_log::trace!("lexed {} tokens", tokens.len());
        Ok((tokens, self.interner))
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += ch.len_utf8();

        Some(ch)
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if ch == '%' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn span_from(&self, start: usize, line: usize, col: usize) -> Span {
        Span::new(start, self.position, line, col, self.line, self.column)
    }

    fn next_token(&mut self) -> LexerResult<Token> {
        let (start, line, col) = (self.position, self.line, self.column);
        let Some(ch) = self.bump() else {
            return Ok(Token::new(TokenKind::Eof, Span::point(start, line, col)));
        };

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Eq,
            ';' => TokenKind::Semi,
            '?' => TokenKind::Question,
            '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                return self.lex_number(start, line, col);
            }
            '-' => TokenKind::Minus,
            c if c.is_ascii_digit() => return self.lex_number(start, line, col),
            c if c.is_alphabetic() || c == '_' => return Ok(self.lex_word(start, line, col)),
            c => {
                return Err(LexerError::UnknownChar {
                    ch: c,
                    span: self.span_from(start, line, col),
                });
            }
        };

        Ok(Token::new(kind, self.span_from(start, line, col)))
    }

    fn lex_number(&mut self, start: usize, line: usize, col: usize) -> LexerResult<Token> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }

        let input = self.input;
        let text = &input[start..self.position];
        let span = self.span_from(start, line, col);
        match text.parse::<i64>() {
            Ok(n) => Ok(Token::new(TokenKind::Int(n), span)),
            Err(_) => Err(LexerError::InvalidNumeric {
                literal: text.to_string(),
                span,
            }),
        }
    }

    fn lex_word(&mut self, start: usize, line: usize, col: usize) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '?')
        {
            self.bump();
        }

        let input = self.input;
        let text = &input[start..self.position];
        let kind = match TokenKind::keyword(text) {
            Some(kw) => kw,
            None => TokenKind::Ident(self.interner.intern(text)),
        };
        Token::new(kind, self.span_from(start, line, col))
    }
}
