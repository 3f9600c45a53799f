//! Recursive descent parser for `letrec`.
//!
//! Every form starts with a distinguishing token, so the grammar needs one
//! token of lookahead everywhere except after `letrec`, where a result
//! annotation may precede the procedure name:
//!
//! ```text
//! expr  := INT | 'true' | 'false' | IDENT
//!        | '-' '(' expr ',' expr ')'
//!        | 'zero?' '(' expr ')'
//!        | 'if' expr 'then' expr 'else' expr
//!        | 'let' IDENT '=' expr 'in' expr
//!        | 'proc' '(' IDENT [':' ann] ')' expr
//!        | 'letrec' [ann] IDENT '(' IDENT [':' ann] ')' '=' expr 'in' expr
//!        | '(' expr expr ')'
//!        | 'newref' '(' expr ')' | 'deref' '(' expr ')'
//!        | 'setref' '(' expr ',' expr ')'
//!        | 'begin' expr { ';' expr } 'end'
//!        | 'set' IDENT '=' expr
//! ann   := 'int' | 'bool' | '?'
//! ```
//!
//! Parsing stops at the first error.

use crate::ast::{Expr, ExprKind, Type};
use crate::error::{ParserError, ParserResult};
use crate::span::Span;
use crate::token::{Token, TokenKind};
use letrec_mem::{StringInterner, Symbol};

/// Parser over a lexed token stream.
pub struct Parser<'a> {
    /// Token stream, terminated by `Eof`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Interner the tokens were lexed with, for annotation names
    interner: &'a StringInterner,
}

impl<'a> Parser<'a> {
    /// Creates a parser. `tokens` must come from a [`Lexer`](crate::Lexer)
    /// that used `interner`.
    #[must_use]
    pub fn new(tokens: Vec<Token>, interner: &'a StringInterner) -> Self {
        Self {
            tokens,
            pos: 0,
            interner,
        }
    }

    /// Parses a whole program: one expression followed by end of input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParserError`] encountered.
    pub fn parse_program(&mut self) -> ParserResult<Expr> {
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Eof)?;
        Ok(expr)
    }

    /// Returns the current token. The stream always ends with `Eof`, and
    /// the parser never moves past it.
    fn current(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => *token,
            None => self
                .tokens
                .last()
                .copied()
                .unwrap_or(Token::new(TokenKind::Eof, Span::point(0, 1, 1))),
        }
    }

    fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    fn bump(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn unexpected(&self, expected: &[&str]) -> ParserError {
        let token = self.current();
        ParserError::UnexpectedToken {
            expected: expected.iter().map(|s| (*s).to_string()).collect(),
            found: self.describe(token.kind),
            span: token.span,
        }
    }

    fn describe(&self, kind: TokenKind) -> String {
        match kind {
            TokenKind::Ident(sym) => format!("'{}'", self.interner.display(sym)),
            TokenKind::Int(n) => format!("'{n}'"),
            other => other.describe(),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParserResult<Token> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(&[&kind.describe()]))
        }
    }

    fn expect_ident(&mut self) -> ParserResult<Symbol> {
        match self.current().kind {
            TokenKind::Ident(sym) => {
                self.bump();
                Ok(sym)
            }
            _ => Err(self.unexpected(&["identifier"])),
        }
    }

    /// Parses one expression.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParserError`] encountered.
    pub fn parse_expr(&mut self) -> ParserResult<Expr> {
        let start = self.current();

        match start.kind {
            TokenKind::Int(n) => {
                self.bump();
                Ok(Expr::new(ExprKind::Const(n), start.span))
            }
            TokenKind::Bool(b) => {
                self.bump();
                Ok(Expr::new(ExprKind::Bool(b), start.span))
            }
            TokenKind::Ident(sym) => {
                self.bump();
                Ok(Expr::new(ExprKind::Var(sym), start.span))
            }
            TokenKind::Minus => self.parse_diff(),
            TokenKind::ZeroTest => {
                self.bump();
                let (arg, end) = self.parse_parenthesized()?;
                Ok(Expr::new(ExprKind::IsZero(Box::new(arg)), Span::merge(start.span, end)))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Proc => self.parse_proc(),
            TokenKind::Letrec => self.parse_letrec(),
            TokenKind::LParen => self.parse_call(),
            TokenKind::NewRef => {
                self.bump();
                let (arg, end) = self.parse_parenthesized()?;
                Ok(Expr::new(ExprKind::NewRef(Box::new(arg)), Span::merge(start.span, end)))
            }
            TokenKind::DeRef => {
                self.bump();
                let (arg, end) = self.parse_parenthesized()?;
                Ok(Expr::new(ExprKind::DeRef(Box::new(arg)), Span::merge(start.span, end)))
            }
            TokenKind::SetRef => self.parse_setref(),
            TokenKind::Begin => self.parse_begin(),
            TokenKind::Set => self.parse_set(),
            _ => Err(self.unexpected(&["expression"])),
        }
    }

    /// `( expr )`, returning the expression and the closing paren's span.
    fn parse_parenthesized(&mut self) -> ParserResult<(Expr, Span)> {
        self.expect(TokenKind::LParen)?;
        let inner = self.parse_expr()?;
        let close = self.expect(TokenKind::RParen)?;
        Ok((inner, close.span))
    }

    fn parse_diff(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        self.expect(TokenKind::LParen)?;
        let lhs = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let rhs = self.parse_expr()?;
        let close = self.expect(TokenKind::RParen)?;

        Ok(Expr::new(
            ExprKind::Diff(Box::new(lhs), Box::new(rhs)),
            Span::merge(start, close.span),
        ))
    }

    fn parse_if(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.parse_expr()?;
        self.expect(TokenKind::Else)?;
        let else_branch = self.parse_expr()?;

        let span = Span::merge(start, else_branch.span);
        Ok(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            span,
        ))
    }

    fn parse_let(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::In)?;
        let body = self.parse_expr()?;

        let span = Span::merge(start, body.span);
        Ok(Expr::new(
            ExprKind::Let {
                name,
                value: Box::new(value),
                body: Box::new(body),
            },
            span,
        ))
    }

    /// `( IDENT [':' ann] )`
    fn parse_param(&mut self) -> ParserResult<(Symbol, Option<Type>)> {
        self.expect(TokenKind::LParen)?;
        let param = self.expect_ident()?;
        let annotation = if self.check(TokenKind::Colon) {
            self.bump();
            Some(self.parse_annotation()?)
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        Ok((param, annotation))
    }

    fn parse_proc(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        let (param, annotation) = self.parse_param()?;
        let body = self.parse_expr()?;

        let span = Span::merge(start, body.span);
        Ok(Expr::new(
            ExprKind::Proc {
                param,
                annotation,
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_letrec(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;

        // `letrec f (` is untyped; anything else leads with a result annotation.
        let untyped = matches!(self.current().kind, TokenKind::Ident(_))
            && self.peek_kind(1) == TokenKind::LParen;
        let result = if untyped {
            None
        } else {
            Some(self.parse_annotation()?)
        };

        let name = self.expect_ident()?;
        let (param, param_annotation) = self.parse_param()?;
        self.expect(TokenKind::Eq)?;
        let proc_body = self.parse_expr()?;
        self.expect(TokenKind::In)?;
        let body = self.parse_expr()?;

        let span = Span::merge(start, body.span);
        Ok(Expr::new(
            ExprKind::Letrec {
                result,
                name,
                param,
                param_annotation,
                proc_body: Box::new(proc_body),
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_call(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        let rator = self.parse_expr()?;
        let rand = self.parse_expr()?;
        let close = self.expect(TokenKind::RParen)?;

        Ok(Expr::new(
            ExprKind::Call {
                rator: Box::new(rator),
                rand: Box::new(rand),
            },
            Span::merge(start, close.span),
        ))
    }

    fn parse_setref(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        self.expect(TokenKind::LParen)?;
        let target = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let value = self.parse_expr()?;
        let close = self.expect(TokenKind::RParen)?;

        Ok(Expr::new(
            ExprKind::SetRef {
                target: Box::new(target),
                value: Box::new(value),
            },
            Span::merge(start, close.span),
        ))
    }

    fn parse_begin(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;

        if self.check(TokenKind::End) {
            let end = self.bump().span;
            return Err(ParserError::EmptyBegin {
                span: Span::merge(start, end),
            });
        }

        let mut exprs = vec![self.parse_expr()?];
        while self.check(TokenKind::Semi) {
            self.bump();
            exprs.push(self.parse_expr()?);
        }

        if !self.check(TokenKind::End) {
            return Err(self.unexpected(&["';'", "'end'"]));
        }
        let end = self.bump().span;

        Ok(Expr::new(ExprKind::Begin(exprs), Span::merge(start, end)))
    }

    fn parse_set(&mut self) -> ParserResult<Expr> {
        let start = self.bump().span;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expr()?;

        let span = Span::merge(start, value.span);
        Ok(Expr::new(
            ExprKind::Set {
                name,
                value: Box::new(value),
            },
            span,
        ))
    }

    /// `int`, `bool` or `?`.
    fn parse_annotation(&mut self) -> ParserResult<Type> {
        let token = self.current();
        match token.kind {
            TokenKind::Question => {
                self.bump();
                Ok(Type::Unknown)
            }
            TokenKind::Ident(sym) => {
                let name = self.interner.display(sym);
                match Type::from_name(&name) {
                    Some(ty) => {
                        self.bump();
                        Ok(ty)
                    }
                    None => Err(ParserError::UnknownAnnotation {
                        found: name,
                        span: token.span,
                    }),
                }
            }
            TokenKind::Eof => Err(self.unexpected(&["type annotation"])),
            other => Err(ParserError::UnknownAnnotation {
                found: other.to_string(),
                span: token.span,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;
    use crate::parse;

    fn parse_ok(source: &str) -> (Expr, StringInterner) {
        match parse(source) {
            Ok(result) => result,
            Err(err) => panic!("failed to parse {source:?}: {err}"),
        }
    }

    fn parse_err(source: &str) -> ParserError {
        match parse(source) {
            Err(SyntaxError::Parser(err)) => err,
            other => panic!("expected parser error for {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(parse_ok("42").0.kind, ExprKind::Const(42));
        assert_eq!(parse_ok("-7").0.kind, ExprKind::Const(-7));
        assert_eq!(parse_ok("true").0.kind, ExprKind::Bool(true));
    }

    #[test]
    fn test_diff_and_zero() {
        let (expr, _) = parse_ok("zero?(-(5, 4))");
        let ExprKind::IsZero(inner) = expr.kind else {
            panic!("expected zero?");
        };
        let ExprKind::Diff(lhs, rhs) = inner.kind else {
            panic!("expected difference");
        };
        assert_eq!(lhs.kind, ExprKind::Const(5));
        assert_eq!(rhs.kind, ExprKind::Const(4));
    }

    #[test]
    fn test_let_proc_call() {
        let (expr, interner) = parse_ok("let y = 74 in let p = proc (x) -(y, x) in (p 5)");
        let y = interner.lookup("y").unwrap();
        let ExprKind::Let { name, value, body } = expr.kind else {
            panic!("expected let");
        };
        assert_eq!(name, y);
        assert_eq!(value.kind, ExprKind::Const(74));
        let ExprKind::Let { body, .. } = body.kind else {
            panic!("expected inner let");
        };
        assert!(matches!(body.kind, ExprKind::Call { .. }));
    }

    #[test]
    fn test_annotated_proc() {
        let (expr, _) = parse_ok("proc (x: ?) zero?(x)");
        let ExprKind::Proc { annotation, .. } = expr.kind else {
            panic!("expected proc");
        };
        assert_eq!(annotation, Some(Type::Unknown));

        let (expr, _) = parse_ok("proc (b: bool) b");
        assert!(matches!(expr.kind, ExprKind::Proc { annotation: Some(Type::Bool), .. }));
    }

    #[test]
    fn test_untyped_letrec() {
        let (expr, interner) =
            parse_ok("letrec double (x) = if zero?(x) then 0 else -((double -(x, 1)), -2) in (double 3)");
        let ExprKind::Letrec {
            result,
            name,
            param,
            param_annotation,
            ..
        } = expr.kind
        else {
            panic!("expected letrec");
        };
        assert_eq!(result, None);
        assert_eq!(param_annotation, None);
        assert_eq!(interner.resolve(name), Some("double"));
        assert_eq!(interner.resolve(param), Some("x"));
    }

    #[test]
    fn test_typed_letrec() {
        let (expr, _) = parse_ok("letrec int f (x: int) = x in (f 1)");
        assert!(matches!(
            expr.kind,
            ExprKind::Letrec {
                result: Some(Type::Int),
                param_annotation: Some(Type::Int),
                ..
            }
        ));

        let (expr, _) = parse_ok("letrec ? f (x: ?) = x in f");
        assert!(matches!(
            expr.kind,
            ExprKind::Letrec {
                result: Some(Type::Unknown),
                param_annotation: Some(Type::Unknown),
                ..
            }
        ));
    }

    #[test]
    fn test_store_forms() {
        let (expr, _) = parse_ok("let r = newref(1) in begin setref(r, 2); deref(r) end");
        let ExprKind::Let { body, .. } = expr.kind else {
            panic!("expected let");
        };
        let ExprKind::Begin(exprs) = body.kind else {
            panic!("expected begin");
        };
        assert_eq!(exprs.len(), 2);
        assert!(matches!(exprs[0].kind, ExprKind::SetRef { .. }));
        assert!(matches!(exprs[1].kind, ExprKind::DeRef(_)));
    }

    #[test]
    fn test_set() {
        let (expr, _) = parse_ok("let x = 0 in begin set x = 5; x end");
        let ExprKind::Let { body, .. } = expr.kind else {
            panic!("expected let");
        };
        assert!(matches!(&body.kind, ExprKind::Begin(e) if matches!(e[0].kind, ExprKind::Set { .. })));
    }

    #[test]
    fn test_spans_cover_forms() {
        let (expr, _) = parse_ok("if true\nthen 1\nelse 2");
        assert_eq!(expr.span.start_line, 1);
        assert_eq!(expr.span.end_line, 3);
        assert_eq!(expr.span.start, 0);
    }

    #[test]
    fn test_unknown_annotation() {
        let err = parse_err("proc (x: float) x");
        assert!(matches!(err, ParserError::UnknownAnnotation { ref found, .. } if found == "float"));

        let err = parse_err("letrec string f (x) = x in f");
        assert!(matches!(err, ParserError::UnknownAnnotation { ref found, .. } if found == "string"));
    }

    #[test]
    fn test_unexpected_token() {
        let err = parse_err("let = 1 in 2");
        assert_eq!(err.to_string(), "expected identifier, found '='");

        let err = parse_err("if true then 1");
        assert_eq!(err.to_string(), "expected 'else', found end of input");
    }

    #[test]
    fn test_trailing_input() {
        let err = parse_err("1 2");
        assert_eq!(err.to_string(), "expected end of input, found '2'");
    }

    #[test]
    fn test_empty_begin() {
        assert!(matches!(parse_err("begin end"), ParserError::EmptyBegin { .. }));
        assert!(matches!(parse_err("begin 1; end"), ParserError::UnexpectedToken { .. }));
    }
}
