//! Error types for the lexer and parser.
//!
//! Both stop at the first error; there is no recovery.

use crate::span::{Span, Spanned};
use std::fmt;

/// Errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Character that starts no token.
    ///
    /// ```text
    /// let x = 4 + 1 in x
    ///           ^
    /// error: unknown character '+'
    /// ```
    UnknownChar {
        /// The unexpected character
        ch: char,
        /// Location in source
        span: Span,
    },

    /// Integer literal that does not fit in 64 bits.
    InvalidNumeric {
        /// The literal text
        literal: String,
        /// Location in source
        span: Span,
    },
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChar { ch, .. } => write!(f, "unknown character '{ch}'"),
            Self::InvalidNumeric { literal, .. } => {
                write!(f, "integer literal '{literal}' out of range")
            }
        }
    }
}

impl std::error::Error for LexerError {}

impl Spanned for LexerError {
    fn span(&self) -> Span {
        match self {
            Self::UnknownChar { span, .. } | Self::InvalidNumeric { span, .. } => *span,
        }
    }
}

/// Errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// Unexpected token encountered.
    ///
    /// ```text
    /// let = 42 in x
    ///     ^
    /// error: expected identifier, found '='
    /// ```
    UnexpectedToken {
        /// Descriptions of what would have been accepted
        expected: Vec<String>,
        /// The token actually found
        found: String,
        /// Location in source
        span: Span,
    },

    /// Type annotation other than `int`, `bool` or `?`.
    ///
    /// ```text
    /// proc (x: float) x
    ///          ^^^^^
    /// error: unknown type annotation 'float'
    /// ```
    UnknownAnnotation {
        /// The annotation text
        found: String,
        /// Location in source
        span: Span,
    },

    /// `begin end` with nothing in between.
    EmptyBegin {
        /// Location in source
        span: Span,
    },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                expected, found, ..
            } => {
                write!(f, "expected ")?;
                if expected.len() == 1 {
                    write!(f, "{}", expected[0])?;
                } else {
                    write!(f, "one of: {}", expected.join(", "))?;
                }
                write!(f, ", found {found}")
            }
            Self::UnknownAnnotation { found, .. } => {
                write!(f, "unknown type annotation '{found}'")
            }
            Self::EmptyBegin { .. } => write!(f, "'begin' needs at least one expression"),
        }
    }
}

impl std::error::Error for ParserError {}

impl Spanned for ParserError {
    fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::UnknownAnnotation { span, .. }
            | Self::EmptyBegin { span } => *span,
        }
    }
}

/// Combined lexer or parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Lexer error
    Lexer(LexerError),
    /// Parser error
    Parser(ParserError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexer(err) => write!(f, "lexer error: {err}"),
            Self::Parser(err) => write!(f, "parser error: {err}"),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexer(err) => Some(err),
            Self::Parser(err) => Some(err),
        }
    }
}

impl Spanned for SyntaxError {
    fn span(&self) -> Span {
        match self {
            Self::Lexer(err) => err.span(),
            Self::Parser(err) => err.span(),
        }
    }
}

impl From<LexerError> for SyntaxError {
    fn from(err: LexerError) -> Self {
        Self::Lexer(err)
    }
}

impl From<ParserError> for SyntaxError {
    fn from(err: ParserError) -> Self {
        Self::Parser(err)
    }
}

/// Result type for lexer operations.
pub type LexerResult<T> = Result<T, LexerError>;

/// Result type for parser operations.
pub type ParserResult<T> = Result<T, ParserError>;

/// Result type for syntax operations (lexer or parser).
pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_error_display() {
        let err = LexerError::UnknownChar {
            ch: '+',
            span: Span::new(10, 11, 1, 11, 1, 12),
        };
        assert_eq!(err.to_string(), "unknown character '+'");

        let err = LexerError::InvalidNumeric {
            literal: "99999999999999999999".to_string(),
            span: Span::new(0, 20, 1, 1, 1, 21),
        };
        assert_eq!(
            err.to_string(),
            "integer literal '99999999999999999999' out of range"
        );
    }

    #[test]
    fn test_parser_error_display() {
        let err = ParserError::UnexpectedToken {
            expected: vec!["identifier".to_string()],
            found: "'='".to_string(),
            span: Span::new(4, 5, 1, 5, 1, 6),
        };
        assert_eq!(err.to_string(), "expected identifier, found '='");

        let err = ParserError::UnexpectedToken {
            expected: vec!["'then'".to_string(), "'else'".to_string()],
            found: "end of input".to_string(),
            span: Span::point(9, 1, 10),
        };
        assert_eq!(err.to_string(), "expected one of: 'then', 'else', found end of input");

        let err = ParserError::UnknownAnnotation {
            found: "float".to_string(),
            span: Span::new(9, 14, 1, 10, 1, 15),
        };
        assert_eq!(err.to_string(), "unknown type annotation 'float'");
    }

    #[test]
    fn test_syntax_error_from_and_span() {
        let span = Span::new(0, 1, 1, 1, 1, 2);
        let syntax: SyntaxError = LexerError::UnknownChar { ch: '@', span }.into();
        assert!(matches!(syntax, SyntaxError::Lexer(_)));
        assert_eq!(syntax.span(), span);
        assert_eq!(syntax.to_string(), "lexer error: unknown character '@'");

        let syntax: SyntaxError = ParserError::EmptyBegin { span }.into();
        assert!(matches!(syntax, SyntaxError::Parser(_)));
    }
}
