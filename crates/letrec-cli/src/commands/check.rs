//! `letrec check`: infer and print the type.

use super::CommandError;
use crate::options::Options;
use letrec_log::info;
use letrec_syntax::parse;
use letrec_typecheck::{CheckerConfig, TypeEnv, infer_program_type_with};
use std::fmt::Write as _;

pub fn execute(opts: &Options, source: &str) -> Result<String, CommandError> {
    let (expr, interner) = parse(source)?;
    let config = CheckerConfig {
        assign: opts.assign,
    };
    let (ty, subst) = infer_program_type_with(&expr, &interner, TypeEnv::new(), config)?;
    info!("type {ty}");

    let mut out = format!("{ty}\n");
    if opts.show_subst {
        let _ = writeln!(out, "{subst}");
    }
    Ok(out)
}
