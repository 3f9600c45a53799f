//! `letrec fmt`: reprint in canonical layout.

use super::CommandError;
use letrec_syntax::{PrettyPrinter, parse};

pub fn execute(source: &str) -> Result<String, CommandError> {
    let (expr, interner) = parse(source)?;
    let mut out = PrettyPrinter::new(&interner).print_expr(&expr);
    out.push('\n');
    Ok(out)
}
