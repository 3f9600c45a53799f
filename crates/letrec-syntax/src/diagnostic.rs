//! Error reporting with source highlighting.
//!
//! The emitter renders any spanned error (syntax, type or runtime) as a
//! header line plus the offending source lines, underlined:
//!
//! ```text
//! 1:10: error: unknown type annotation 'float'
//!    1 | proc (x: float) x
//!      |          ^^^^^
//!    help: annotations are `int`, `bool` or `?`
//! ```

use crate::error::{ParserError, SyntaxError};
use crate::span::{Span, Spanned};
use std::fmt;
use std::fmt::Write as _;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// The command failed
    Error,
    /// Suspicious, but the command went ahead
    Warning,
    /// Additional information
    Note,
    /// Suggestion for fixing the issue
    Help,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Note => write!(f, "note"),
            Self::Help => write!(f, "help"),
        }
    }
}

impl DiagnosticLevel {
    /// Returns the ANSI color code for this level.
    #[must_use]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
            Self::Note => "\x1b[36m",
            Self::Help => "\x1b[32m",
        }
    }

    /// Returns the reset ANSI code.
    #[must_use]
    pub const fn reset_code() -> &'static str {
        "\x1b[0m"
    }

    /// Formats this level, colored if requested.
    #[must_use]
    pub fn format_colored(&self, use_colors: bool) -> String {
        if use_colors {
            format!("{}{}{}", self.color_code(), self, Self::reset_code())
        } else {
            self.to_string()
        }
    }
}

/// A note attached to a diagnostic, pointing at a second location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticNote {
    /// Note message
    pub message: String,
    /// Source span
    pub span: Span,
}

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic level
    pub level: DiagnosticLevel,
    /// Primary message
    pub message: String,
    /// Primary location
    pub span: Span,
    /// `help:` lines
    pub suggestions: Vec<String>,
    /// Related locations
    pub notes: Vec<DiagnosticNote>,
}

impl Diagnostic {
    /// Shorthand for an error diagnostic built from any spanned error.
    #[must_use]
    pub fn from_error<E: fmt::Display + Spanned>(err: &E) -> Self {
        DiagnosticBuilder::new(DiagnosticLevel::Error, err.to_string(), err.span()).build()
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        let builder = DiagnosticBuilder::new(DiagnosticLevel::Error, err.to_string(), err.span());
        match err {
            SyntaxError::Parser(ParserError::UnknownAnnotation { .. }) => builder
                .suggest("annotations are `int`, `bool` or `?`".to_string())
                .build(),
            _ => builder.build(),
        }
    }
}

/// Builder for diagnostics.
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic.
    #[must_use]
    pub fn new(level: DiagnosticLevel, message: String, span: Span) -> Self {
        Self {
            diagnostic: Diagnostic {
                level,
                message,
                span,
                suggestions: Vec::new(),
                notes: Vec::new(),
            },
        }
    }

    /// Adds a `help:` line.
    #[must_use]
    pub fn suggest(mut self, suggestion: String) -> Self {
        self.diagnostic.suggestions.push(suggestion);
        self
    }

    /// Adds a note at another location.
    #[must_use]
    pub fn note(mut self, message: String, span: Span) -> Self {
        self.diagnostic.notes.push(DiagnosticNote { message, span });
        self
    }

    /// Finishes the diagnostic.
    #[must_use]
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}

/// Renders diagnostics against their source text.
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    use_colors: bool,
}

impl Emitter {
    /// Creates an emitter.
    #[must_use]
    pub const fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Writes a diagnostic to standard error.
    pub fn emit(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render(diagnostic, source));
    }

    /// Writes a syntax error to standard error.
    pub fn emit_syntax_error(&self, error: &SyntaxError, source: &str) {
        self.emit(&Diagnostic::from(error), source);
    }

    /// Renders a diagnostic to a string.
    ///
    /// Diagnostics without a real location (synthesised trees) get the
    /// header line only.
    #[must_use]
    pub fn render(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let mut out = String::new();
        let span = diagnostic.span;
        let level = diagnostic.level.format_colored(self.use_colors);

        if span.is_dummy() {
            let _ = writeln!(out, "{level}: {}", diagnostic.message);
        } else {
            let _ = writeln!(
                out,
                "{}:{}: {level}: {}",
                span.start_line, span.start_col, diagnostic.message
            );
            self.render_source(&mut out, diagnostic.level, span, source);
        }

        for suggestion in &diagnostic.suggestions {
            let help = DiagnosticLevel::Help.format_colored(self.use_colors);
            let _ = writeln!(out, "   {help}: {suggestion}");
        }

        for note in &diagnostic.notes {
            let prefix = DiagnosticLevel::Note.format_colored(self.use_colors);
            let _ = writeln!(
                out,
                "   {prefix} at {}:{}: {}",
                note.span.start_line, note.span.start_col, note.message
            );
        }

        out
    }

    fn render_source(&self, out: &mut String, level: DiagnosticLevel, span: Span, source: &str) {
        let lines: Vec<&str> = source.lines().collect();
        if lines.is_empty() {
            return;
        }

        let start_line = span.start_line.saturating_sub(1).min(lines.len() - 1);
        let end_line = span.end_line.saturating_sub(1).min(lines.len() - 1);

        for (line_idx, line) in lines.iter().enumerate().take(end_line + 1).skip(start_line) {
            let _ = writeln!(out, "{:4} | {line}", line_idx + 1);

            let from = if line_idx == start_line { span.start_col } else { 1 };
            let to = if line_idx == end_line {
                span.end_col
            } else {
                line.chars().count() + 1
            };

            let indent = " ".repeat(from.saturating_sub(1));
            // Zero-width spans (end of input) still get a single caret.
            let carets = "^".repeat(to.saturating_sub(from).max(1));
            if self.use_colors {
                let _ = writeln!(
                    out,
                    "     | {indent}{}{carets}{}",
                    level.color_code(),
                    DiagnosticLevel::reset_code()
                );
            } else {
                let _ = writeln!(out, "     | {indent}{carets}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_diagnostic_level_colors() {
        assert_eq!(DiagnosticLevel::Error.format_colored(false), "error");
        let colored = DiagnosticLevel::Warning.format_colored(true);
        assert!(colored.starts_with("\x1b[33m"));
        assert!(colored.contains("warning"));
    }

    #[test]
    fn test_render_underlines_span() {
        let source = "proc (x: float) x";
        let err = parse(source).unwrap_err();
        let text = Emitter::new(false).render(&Diagnostic::from(&err), source);

        assert_eq!(
            text,
            "1:10: error: parser error: unknown type annotation 'float'\n\
             \x20  1 | proc (x: float) x\n\
             \x20    |          ^^^^^\n\
             \x20  help: annotations are `int`, `bool` or `?`\n"
        );
    }

    #[test]
    fn test_render_end_of_input() {
        let source = "if true then 1";
        let err = parse(source).unwrap_err();
        let text = Emitter::new(false).render(&Diagnostic::from(&err), source);
        assert!(text.starts_with("1:15: error:"));
        assert!(text.contains("|               ^\n"));
    }

    #[test]
    fn test_render_dummy_span_has_no_source() {
        let diagnostic = DiagnosticBuilder::new(
            DiagnosticLevel::Error,
            "unbound variable 'x'".to_string(),
            Span::DUMMY,
        )
        .note("bound here".to_string(), Span::point(0, 1, 1))
        .build();

        let text = Emitter::new(false).render(&diagnostic, "x");
        assert_eq!(text, "error: unbound variable 'x'\n   note at 1:1: bound here\n");
    }

    #[test]
    fn test_render_multiline_span() {
        let source = "let x = 1\nin y";
        let span = Span::new(0, 14, 1, 1, 2, 5);
        let diagnostic = DiagnosticBuilder::new(DiagnosticLevel::Warning, "w".to_string(), span).build();
        let text = Emitter::new(false).render(&diagnostic, source);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "   1 | let x = 1");
        assert_eq!(lines[2], "     | ^^^^^^^^^");
        assert_eq!(lines[3], "   2 | in y");
        assert_eq!(lines[4], "     | ^^^^");
    }
}
