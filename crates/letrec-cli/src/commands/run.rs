//! `letrec run`: evaluate and print the value.

use super::CommandError;
use crate::options::Options;
use letrec_interpreter::{evaluate_program, BindingMode, ExpVal};
use letrec_log::info;
use letrec_mem::Store;
use letrec_syntax::{DiagnosticBuilder, DiagnosticLevel, Emitter, Span, parse};
use std::fmt::Write as _;

pub fn execute(opts: &Options, source: &str, emitter: &Emitter) -> Result<String, CommandError> {
    let (expr, interner) = parse(source)?;

    if opts.mode == BindingMode::ByValue && expr.assigns_variables() {
        let warning = DiagnosticBuilder::new(
            DiagnosticLevel::Warning,
            "program uses `set`; with --by-value, variables cannot be assigned".to_string(),
            Span::DUMMY,
        )
        .build();
        emitter.emit(&warning, source);
    }

    let (value, store) = evaluate_program(&expr, &interner, opts.mode)?;
    info!("evaluated to {value} with {} cells", store.len());

    let mut out = format!("{value}\n");
    if opts.show_store {
        out.push_str(&render_store(&store));
    }
    Ok(out)
}

fn render_store(store: &Store<ExpVal<'_>>) -> String {
    let mut out = format!("store ({} cells):\n", store.len());
    for (r, cell) in store.iter() {
        let _ = match cell {
            Some(value) => writeln!(out, "  {r} = {value}"),
            None => writeln!(out, "  {r} = <uninitialized>"),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::options;
    use crate::options::Command;

    fn run(opts: &Options, source: &str) -> Result<String, CommandError> {
        execute(opts, source, &Emitter::new(false))
    }

    #[test]
    fn test_prints_value() {
        let source = "let y = 74 in let p = proc (x) -(y, x) in (p 5)";
        let opts = options(Command::Run, source);
        assert_eq!(run(&opts, source).unwrap(), "69\n");
    }

    #[test]
    fn test_show_store() {
        let source = "let x = 1 in begin set x = 2; x end";
        let mut opts = options(Command::Run, source);
        opts.show_store = true;
        assert_eq!(
            run(&opts, source).unwrap(),
            "2\nstore (1 cells):\n  ref(0) = 2\n"
        );
    }

    #[test]
    fn test_by_value_set_fails() {
        let source = "let x = 1 in set x = 2";
        let mut opts = options(Command::Run, source);
        opts.mode = BindingMode::ByValue;
        assert!(matches!(run(&opts, source), Err(CommandError::Runtime(_))));
    }

    #[test]
    fn test_syntax_error() {
        let source = "let x = in x";
        let opts = options(Command::Run, source);
        assert!(matches!(run(&opts, source), Err(CommandError::Syntax(_))));
    }
}
