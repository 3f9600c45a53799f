//! `letrec`: run, type-check or format programs.
//!
//! ```text
//! letrec run -e "let y = 74 in let p = proc (x) -(y, x) in (p 5)"
//! letrec check --show-subst prog.lr
//! letrec fmt prog.lr
//! ```

mod commands;
mod options;

use letrec_log::{debug, warn};
use options::{Invocation, USAGE};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let color = std::io::stderr().is_terminal();

    let opts = match options::parse_args(&args, color) {
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Execute(opts)) => opts,
        Err(err) => {
            eprintln!("letrec: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    letrec_log::set_colors(opts.color);
    if let Err(err) = letrec_log::init_from_env() {
        warn!("ignoring {}: {err}", letrec_log::ENV_VAR);
    }
    if let Some(level) = opts.log_level {
        letrec_log::set_level(level);
    }
    debug!("{:?} on {:?}", opts.command, opts.input);

    commands::execute(&opts)
}
