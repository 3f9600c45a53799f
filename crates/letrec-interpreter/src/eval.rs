//! The evaluator.

use crate::env::{Denoted, Environment};
use crate::error::{Result, RuntimeError};
use crate::value::{ExpVal, Procedure, SETREF_RESULT, SET_RESULT};
use letrec_log::{debug, trace};
use letrec_mem::{Ref, Store, StringInterner, Symbol};
use letrec_syntax::{Expr, ExprKind, Span, Spanned};
use std::rc::Rc;

/// How `let` and procedure parameters are bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BindingMode {
    /// Names denote values directly; `set` is not available.
    ByValue,
    /// Every binding gets a fresh cell and variables read through the
    /// store. Arguments are copied into the callee's cell.
    #[default]
    ByReference,
}

/// Evaluator options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Binding discipline
    pub mode: BindingMode,
}

/// One evaluation session: the store plus configuration.
///
/// The store lives as long as the interpreter and is never collected.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    store: Store<ExpVal<'a>>,
    config: InterpreterConfig,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter with the default configuration.
    #[must_use]
    pub fn new(interner: &'a StringInterner) -> Self {
        Self::with_config(interner, InterpreterConfig::default())
    }

    /// Creates an interpreter with an explicit configuration.
    #[must_use]
    pub fn with_config(interner: &'a StringInterner, config: InterpreterConfig) -> Self {
        Self {
            interner,
            store: Store::new(),
            config,
        }
    }

    /// The store, for inspection after a run.
    #[must_use]
    pub fn store(&self) -> &Store<ExpVal<'a>> {
        &self.store
    }

    /// Consumes the interpreter, returning its store.
    #[must_use]
    pub fn into_store(self) -> Store<ExpVal<'a>> {
        self.store
    }

    /// Evaluates a whole program in `env`.
    ///
    /// # Errors
    ///
    /// The first [`RuntimeError`] met.
    pub fn evaluate_program(&mut self, expr: &'a Expr, env: &Rc<Environment<'a>>) -> Result<ExpVal<'a>> {
        debug!("evaluating with {:?} bindings", self.config.mode);
        let value = self.value_of(expr, env)?;
        debug!("result {value}, {} cells", self.store.len());
        Ok(value)
    }

    /// Evaluates `expr` in `env`.
    ///
    /// # Errors
    ///
    /// The first [`RuntimeError`] met.
    pub fn value_of(&mut self, expr: &'a Expr, env: &Rc<Environment<'a>>) -> Result<ExpVal<'a>> {
        let span = expr.span();
        match &expr.kind {
            ExprKind::Const(n) => Ok(ExpVal::Int(*n)),

            ExprKind::Bool(b) => Ok(ExpVal::Bool(*b)),

            ExprKind::Var(name) => match self.lookup(env, *name, span)? {
                Denoted::Value(value) => Ok(value),
                Denoted::Cell(r) => self.load(r, span),
            },

            ExprKind::Proc { param, body, .. } => Ok(ExpVal::Proc(Procedure {
                param: *param,
                body,
                env: Rc::clone(env),
            })),

            ExprKind::Diff(lhs, rhs) => {
                let a = self.value_of(lhs, env)?.to_int(lhs.span())?;
                let b = self.value_of(rhs, env)?.to_int(rhs.span())?;
                a.checked_sub(b)
                    .map(ExpVal::Int)
                    .ok_or(RuntimeError::IntegerOverflow { span })
            }

            ExprKind::IsZero(inner) => {
                let n = self.value_of(inner, env)?.to_int(inner.span())?;
                Ok(ExpVal::Bool(n == 0))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.value_of(cond, env)?.to_bool(cond.span())? {
                    self.value_of(then_branch, env)
                } else {
                    self.value_of(else_branch, env)
                }
            }

            ExprKind::Let { name, value, body } => {
                let value = self.value_of(value, env)?;
                let denoted = self.bind(value);
                let env = Environment::extend(*name, denoted, env);
                self.value_of(body, &env)
            }

            ExprKind::Letrec {
                name,
                param,
                proc_body,
                body,
                ..
            } => {
                let env = Environment::extend_rec(*name, *param, proc_body, env);
                self.value_of(body, &env)
            }

            ExprKind::Call { rator, rand } => {
                let procedure = self.value_of(rator, env)?.into_proc(rator.span())?;
                let arg = self.value_of(rand, env)?;
                self.apply(procedure, arg)
            }

            ExprKind::NewRef(inner) => {
                let value = self.value_of(inner, env)?;
                let r = self.store.new_ref();
                trace!("newref {r}");
                self.write(r, value, span)?;
                Ok(ExpVal::Ref(r))
            }

            ExprKind::DeRef(inner) => {
                let r = self.value_of(inner, env)?.to_ref(inner.span())?;
                self.load(r, span)
            }

            ExprKind::SetRef { target, value } => {
                let r = self.value_of(target, env)?.to_ref(target.span())?;
                let value = self.value_of(value, env)?;
                self.write(r, value, span)?;
                Ok(ExpVal::Int(SETREF_RESULT))
            }

            ExprKind::Begin(exprs) => {
                let mut last = None;
                for e in exprs {
                    last = Some(self.value_of(e, env)?);
                }
                last.ok_or(RuntimeError::EmptySequence { span })
            }

            ExprKind::Set { name, value } => {
                let Denoted::Cell(r) = self.lookup(env, *name, span)? else {
                    return Err(RuntimeError::NotAssignable {
                        name: self.interner.display(*name),
                        span,
                    });
                };
                let value = self.value_of(value, env)?;
                self.write(r, value, span)?;
                Ok(ExpVal::Int(SET_RESULT))
            }
        }
    }

    /// Runs a closure's body with its parameter bound to `arg`.
    fn apply(&mut self, procedure: Procedure<'a>, arg: ExpVal<'a>) -> Result<ExpVal<'a>> {
        let denoted = self.bind(arg);
        let env = Environment::extend(procedure.param, denoted, &procedure.env);
        self.value_of(procedure.body, &env)
    }

    fn bind(&mut self, value: ExpVal<'a>) -> Denoted<'a> {
        match self.config.mode {
            BindingMode::ByValue => Denoted::Value(value),
            BindingMode::ByReference => Denoted::Cell(self.alloc(value)),
        }
    }

    /// Resolves `name`. With by-reference bindings every name denotes a
    /// cell, so a `letrec` procedure is copied into a fresh one on each
    /// lookup; assigning to that cell leaves the recursive frame untouched.
    fn lookup(&mut self, env: &Rc<Environment<'a>>, name: Symbol, span: Span) -> Result<Denoted<'a>> {
        let denoted = env.lookup(name).ok_or_else(|| RuntimeError::UnboundVariable {
            name: self.interner.display(name),
            span,
        })?;
        match (self.config.mode, denoted) {
            (BindingMode::ByReference, Denoted::Value(value)) => Ok(Denoted::Cell(self.alloc(value))),
            (_, denoted) => Ok(denoted),
        }
    }

    fn alloc(&mut self, value: ExpVal<'a>) -> Ref {
        let r = self.store.alloc(value);
        trace!("alloc {r}");
        r
    }

    fn load(&self, r: Ref, span: Span) -> Result<ExpVal<'a>> {
        self.store
            .load(r)
            .cloned()
            .map_err(|error| RuntimeError::Store { error, span })
    }

    fn write(&mut self, r: Ref, value: ExpVal<'a>, span: Span) -> Result<()> {
        trace!("write {r} := {value}");
        self.store
            .store(r, value)
            .map(|_| ())
            .map_err(|error| RuntimeError::Store { error, span })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(interner: &mut StringInterner) -> (Symbol, Symbol, Symbol) {
        (interner.intern("x"), interner.intern("y"), interner.intern("f"))
    }

    #[test]
    fn test_by_value_allocates_nothing() {
        let mut interner = StringInterner::new();
        let (x, _, _) = names(&mut interner);
        let program = Expr::let_(x, Expr::int(3), Expr::diff(Expr::var(x), Expr::int(1)));

        let config = InterpreterConfig {
            mode: BindingMode::ByValue,
        };
        let mut interp = Interpreter::with_config(&interner, config);
        let value = interp.evaluate_program(&program, &Environment::empty()).unwrap();
        assert_eq!(value, ExpVal::Int(2));
        assert!(interp.store().is_empty());
    }

    #[test]
    fn test_by_reference_allocates_per_binding() {
        let mut interner = StringInterner::new();
        let (x, y, f) = names(&mut interner);
        // let f = proc (y) y in let x = 1 in (f x)
        let program = Expr::let_(
            f,
            Expr::proc_(y, None, Expr::var(y)),
            Expr::let_(x, Expr::int(1), Expr::call(Expr::var(f), Expr::var(x))),
        );

        let mut interp = Interpreter::new(&interner);
        let value = interp.evaluate_program(&program, &Environment::empty()).unwrap();
        assert_eq!(value, ExpVal::Int(1));
        assert_eq!(interp.store().len(), 3);
    }

    #[test]
    fn test_set_by_value_not_assignable() {
        let mut interner = StringInterner::new();
        let (x, _, _) = names(&mut interner);
        let program = Expr::let_(x, Expr::int(1), Expr::set(x, Expr::int(2)));

        let config = InterpreterConfig {
            mode: BindingMode::ByValue,
        };
        let mut interp = Interpreter::with_config(&interner, config);
        let err = interp.evaluate_program(&program, &Environment::empty()).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::NotAssignable {
                name: "x".to_string(),
                span: Span::DUMMY,
            }
        );
    }

    #[test]
    fn test_rec_lookup_allocates_cell() {
        let mut interner = StringInterner::new();
        let (x, _, f) = names(&mut interner);
        // letrec f (x) = x in begin set f = 5; (f 7) end
        let program = Expr::letrec(
            None,
            f,
            x,
            None,
            Expr::var(x),
            Expr::begin(vec![
                Expr::set(f, Expr::int(5)),
                Expr::call(Expr::var(f), Expr::int(7)),
            ]),
        );

        let mut interp = Interpreter::new(&interner);
        let value = interp.evaluate_program(&program, &Environment::empty()).unwrap();
        assert_eq!(value, ExpVal::Int(7));
        // one cell per lookup of `f`, one for the argument
        assert_eq!(interp.store().len(), 3);
        assert_eq!(interp.store().load(Ref::new(0)), Ok(&ExpVal::Int(5)));
    }

    #[test]
    fn test_mismatch_points_at_operand() {
        let interner = StringInterner::new();
        let program = Expr::is_zero(Expr::bool(true));
        let err = Interpreter::new(&interner)
            .evaluate_program(&program, &Environment::empty())
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::ValueMismatch {
                expected: "integer",
                found: "boolean",
                ..
            }
        ));
    }

    #[test]
    fn test_overflow() {
        let interner = StringInterner::new();
        let program = Expr::diff(Expr::int(i64::MIN), Expr::int(1));
        let err = Interpreter::new(&interner)
            .evaluate_program(&program, &Environment::empty())
            .unwrap_err();
        assert!(matches!(err, RuntimeError::IntegerOverflow { .. }));
    }

    #[test]
    fn test_empty_begin() {
        let interner = StringInterner::new();
        let program = Expr::begin(Vec::new());
        let err = Interpreter::new(&interner)
            .evaluate_program(&program, &Environment::empty())
            .unwrap_err();
        assert!(matches!(err, RuntimeError::EmptySequence { .. }));
    }

    #[test]
    fn test_deref_of_integer() {
        let interner = StringInterner::new();
        let program = Expr::deref(Expr::int(3));
        let err = Interpreter::new(&interner)
            .evaluate_program(&program, &Environment::empty())
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::ValueMismatch {
                expected: "reference",
                ..
            }
        ));
    }
}
