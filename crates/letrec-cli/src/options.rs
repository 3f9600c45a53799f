//! Command-line parsing.
//!
//! ```text
//! letrec <run|check|fmt> [options] <FILE | -e EXPR>
//! ```

use letrec_interpreter::BindingMode;
use letrec_log::Level;
use letrec_typecheck::AssignTyping;
use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "\
usage: letrec <run|check|fmt> [options] <FILE | -e EXPR>

commands:
  run      evaluate the program and print its value
  check    infer the program's type
  fmt      print the program in canonical layout

options:
  -e EXPR              use EXPR as the program instead of a file
  --by-value           bind names to values instead of store cells (run)
  --assign=MODE        type `set` by `replace` (default) or `unify` (check)
  --show-store         print the final store after the value (run)
  --show-subst         print the final substitution after the type (check)
  --log-level=LEVEL    error, warn, info, debug or trace (overrides LETREC_LOG)
  --no-color           plain diagnostics
  -h, --help           print this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Check,
    Fmt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Inline(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub input: Input,
    pub mode: BindingMode,
    pub assign: AssignTyping,
    pub show_store: bool,
    pub show_subst: bool,
    pub log_level: Option<Level>,
    pub color: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Execute(Options),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingCommand,
    UnknownCommand(String),
    UnknownOption(String),
    MissingValue(&'static str),
    InvalidValue { option: &'static str, value: String },
    MissingInput,
    ExtraArgument(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCommand => write!(f, "no command given"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command '{cmd}'"),
            Self::UnknownOption(opt) => write!(f, "unknown option '{opt}'"),
            Self::MissingValue(opt) => write!(f, "option '{opt}' needs a value"),
            Self::InvalidValue { option, value } => {
                write!(f, "invalid value '{value}' for '{option}'")
            }
            Self::MissingInput => write!(f, "no program given (pass a file or -e EXPR)"),
            Self::ExtraArgument(arg) => write!(f, "unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for UsageError {}

/// Parses the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S], color: bool) -> Result<Invocation, UsageError> {
    let mut args = args.iter().map(AsRef::as_ref);

    let command = match args.next() {
        None => return Err(UsageError::MissingCommand),
        Some("-h" | "--help") => return Ok(Invocation::Help),
        Some("run") => Command::Run,
        Some("check") => Command::Check,
        Some("fmt") => Command::Fmt,
        Some(other) => return Err(UsageError::UnknownCommand(other.to_string())),
    };

    let mut input = None;
    let mut opts = Options {
        command,
        input: Input::Inline(String::new()),
        mode: BindingMode::ByReference,
        assign: AssignTyping::Replace,
        show_store: false,
        show_subst: false,
        log_level: None,
        color,
    };

    while let Some(arg) = args.next() {
        match arg {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-e" => {
                let expr = args.next().ok_or(UsageError::MissingValue("-e"))?;
                set_input(&mut input, Input::Inline(expr.to_string()), expr)?;
            }
            "--by-value" => opts.mode = BindingMode::ByValue,
            "--show-store" => opts.show_store = true,
            "--show-subst" => opts.show_subst = true,
            "--no-color" => opts.color = false,
            _ => {
                if let Some(value) = arg.strip_prefix("--assign=") {
                    opts.assign = match value {
                        "replace" => AssignTyping::Replace,
                        "unify" => AssignTyping::Unify,
                        _ => {
                            return Err(UsageError::InvalidValue {
                                option: "--assign",
                                value: value.to_string(),
                            });
                        }
                    };
                } else if let Some(value) = arg.strip_prefix("--log-level=") {
                    let level = value.parse().map_err(|_| UsageError::InvalidValue {
                        option: "--log-level",
                        value: value.to_string(),
                    })?;
                    opts.log_level = Some(level);
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(UsageError::UnknownOption(arg.to_string()));
                } else {
                    set_input(&mut input, Input::File(PathBuf::from(arg)), arg)?;
                }
            }
        }
    }

    opts.input = input.ok_or(UsageError::MissingInput)?;
    Ok(Invocation::Execute(opts))
}

fn set_input(slot: &mut Option<Input>, input: Input, arg: &str) -> Result<(), UsageError> {
    if slot.is_some() {
        return Err(UsageError::ExtraArgument(arg.to_string()));
    }
    *slot = Some(input);
    Ok(())
}
