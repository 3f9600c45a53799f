//! Pretty-printer for `letrec` expressions.
//!
//! Output is always valid surface syntax: parsing what the printer produces
//! gives back the same tree, spans aside. The `fmt` command of the CLI is
//! this printer over a parsed file.
//!
//! # Examples
//!
//! ```
//! use letrec_syntax::{parse, PrettyConfig, PrettyPrinter};
//!
//! let (expr, interner) = parse("let   x=1 in -(x,2)").unwrap();
//! let printer = PrettyPrinter::new(&interner).with_config(PrettyConfig::compact());
//!
//! assert_eq!(printer.print_expr(&expr), "let x = 1 in -(x, 2)");
//! ```

use crate::ast::{Expr, ExprKind, Type};
use letrec_mem::{StringInterner, Symbol};

/// Configuration for pretty-printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Indentation unit for nested lines
    pub indent: String,
    /// Break `let`/`letrec`/`if`/`begin` across lines
    pub multiline: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            multiline: true,
        }
    }
}

impl PrettyConfig {
    /// Everything on one line.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            multiline: false,
            ..Self::default()
        }
    }
}

/// Pretty-printer for `letrec` expressions.
pub struct PrettyPrinter<'a> {
    interner: &'a StringInterner,
    config: PrettyConfig,
}

impl<'a> PrettyPrinter<'a> {
    /// Creates a printer with the default (multi-line) configuration.
    #[must_use]
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            config: PrettyConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: PrettyConfig) -> Self {
        self.config = config;
        self
    }

    /// Prints an expression.
    #[must_use]
    pub fn print_expr(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, expr, 0);
        out
    }

    fn name(&self, sym: Symbol) -> String {
        self.interner.display(sym)
    }

    /// Line break followed by indentation, or a single space in compact mode.
    fn newline(&self, out: &mut String, level: usize) {
        if self.config.multiline {
            out.push('\n');
            out.push_str(&self.config.indent.repeat(level));
        } else {
            out.push(' ');
        }
    }

    fn write_param(&self, out: &mut String, param: Symbol, annotation: Option<Type>) {
        out.push('(');
        out.push_str(&self.name(param));
        if let Some(ty) = annotation {
            out.push_str(": ");
            out.push_str(&ty.to_string());
        }
        out.push(')');
    }

    fn write_expr(&self, out: &mut String, expr: &Expr, level: usize) {
        match &expr.kind {
            ExprKind::Const(n) => out.push_str(&n.to_string()),
            ExprKind::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            ExprKind::Var(sym) => out.push_str(&self.name(*sym)),
            ExprKind::Proc {
                param,
                annotation,
                body,
            } => {
                out.push_str("proc ");
                self.write_param(out, *param, *annotation);
                out.push(' ');
                self.write_expr(out, body, level);
            }
            ExprKind::Call { rator, rand } => {
                out.push('(');
                self.write_expr(out, rator, level);
                out.push(' ');
                self.write_expr(out, rand, level);
                out.push(')');
            }
            ExprKind::Diff(lhs, rhs) => {
                out.push_str("-(");
                self.write_expr(out, lhs, level);
                out.push_str(", ");
                self.write_expr(out, rhs, level);
                out.push(')');
            }
            ExprKind::IsZero(inner) => {
                out.push_str("zero?(");
                self.write_expr(out, inner, level);
                out.push(')');
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("if ");
                self.write_expr(out, cond, level + 1);
                self.newline(out, level);
                out.push_str("then ");
                self.write_expr(out, then_branch, level + 1);
                self.newline(out, level);
                out.push_str("else ");
                self.write_expr(out, else_branch, level + 1);
            }
            ExprKind::Let { name, value, body } => {
                out.push_str("let ");
                out.push_str(&self.name(*name));
                out.push_str(" = ");
                self.write_expr(out, value, level + 1);
                self.newline(out, level);
                out.push_str("in ");
                self.write_expr(out, body, level);
            }
            ExprKind::Letrec {
                result,
                name,
                param,
                param_annotation,
                proc_body,
                body,
            } => {
                out.push_str("letrec ");
                if let Some(ty) = result {
                    out.push_str(&ty.to_string());
                    out.push(' ');
                }
                out.push_str(&self.name(*name));
                out.push(' ');
                self.write_param(out, *param, *param_annotation);
                out.push_str(" =");
                self.newline(out, level + 1);
                self.write_expr(out, proc_body, level + 1);
                self.newline(out, level);
                out.push_str("in ");
                self.write_expr(out, body, level);
            }
            ExprKind::NewRef(inner) => {
                out.push_str("newref(");
                self.write_expr(out, inner, level);
                out.push(')');
            }
            ExprKind::DeRef(inner) => {
                out.push_str("deref(");
                self.write_expr(out, inner, level);
                out.push(')');
            }
            ExprKind::SetRef { target, value } => {
                out.push_str("setref(");
                self.write_expr(out, target, level);
                out.push_str(", ");
                self.write_expr(out, value, level);
                out.push(')');
            }
            ExprKind::Begin(exprs) => {
                out.push_str("begin");
                for (i, e) in exprs.iter().enumerate() {
                    if i > 0 {
                        out.push(';');
                    }
                    self.newline(out, level + 1);
                    self.write_expr(out, e, level + 1);
                }
                self.newline(out, level);
                out.push_str("end");
            }
            ExprKind::Set { name, value } => {
                out.push_str("set ");
                out.push_str(&self.name(*name));
                out.push_str(" = ");
                self.write_expr(out, value, level);
            }
        }
    }
}
