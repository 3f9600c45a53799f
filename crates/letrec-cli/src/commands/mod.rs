//! Command implementations.
//!
//! Each command turns source text into the text it prints on success.
//! Failures come back as a [`CommandError`] and are rendered against the
//! source by [`execute`].

pub mod check;
pub mod fmt;
pub mod run;

use crate::options::{Command, Input, Options};
use letrec_interpreter::RuntimeError;
use letrec_log::debug;
use letrec_syntax::{Diagnostic, DiagnosticBuilder, DiagnosticLevel, Emitter, Span, SyntaxError};
use letrec_typecheck::TypeError;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Any failure of a command.
#[derive(Debug)]
pub enum CommandError {
    Io { path: PathBuf, error: io::Error },
    Syntax(SyntaxError),
    Type(TypeError),
    Runtime(RuntimeError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => write!(f, "cannot read {}: {error}", path.display()),
            Self::Syntax(err) => write!(f, "{err}"),
            Self::Type(err) => write!(f, "{err}"),
            Self::Runtime(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SyntaxError> for CommandError {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl From<TypeError> for CommandError {
    fn from(err: TypeError) -> Self {
        Self::Type(err)
    }
}

impl From<RuntimeError> for CommandError {
    fn from(err: RuntimeError) -> Self {
        Self::Runtime(err)
    }
}

impl CommandError {
    /// Builds the diagnostic for this error.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Self::Syntax(err) => Diagnostic::from(err),
            Self::Type(err) => Diagnostic::from_error(err),
            Self::Runtime(err) => Diagnostic::from_error(err),
            Self::Io { .. } => {
                DiagnosticBuilder::new(DiagnosticLevel::Error, self.to_string(), Span::DUMMY).build()
            }
        }
    }
}

/// Runs the selected command, printing its output or its error.
pub fn execute(opts: &Options) -> ExitCode {
    let emitter = Emitter::new(opts.color);

    let source = match load_source(&opts.input) {
        Ok(source) => source,
        Err(err) => {
            emitter.emit(&err.diagnostic(), "");
            return ExitCode::FAILURE;
        }
    };
    debug!("{} bytes of source", source.len());

    let result = match opts.command {
        Command::Run => run::execute(opts, &source, &emitter),
        Command::Check => check::execute(opts, &source),
        Command::Fmt => fmt::execute(&source),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            emitter.emit(&err.diagnostic(), &source);
            ExitCode::FAILURE
        }
    }
}

/// Reads the program text. A file named `-` is standard input.
pub fn load_source(input: &Input) -> Result<String, CommandError> {
    match input {
        Input::Inline(source) => Ok(source.clone()),
        Input::File(path) if path.as_os_str() == "-" => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|error| CommandError::Io {
                    path: path.clone(),
                    error,
                })?;
            Ok(source)
        }
        Input::File(path) => {
            debug!("reading {}", path.display());
            std::fs::read_to_string(path).map_err(|error| CommandError::Io {
                path: path.clone(),
                error,
            })
        }
    }
}
