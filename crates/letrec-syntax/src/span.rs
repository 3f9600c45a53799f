//! Source location tracking for tokens and AST nodes.
//!
//! Every token and every expression carries a [`Span`] so that syntax, type
//! and runtime errors can all point back at the offending source text.
//!
//! # Examples
//!
//! ```
//! use letrec_syntax::span::Span;
//!
//! let head = Span::new(0, 6, 1, 1, 1, 7);
//! let tail = Span::new(20, 25, 2, 4, 2, 9);
//! let whole = Span::merge(head, tail);
//!
//! assert_eq!(whole.start, 0);
//! assert_eq!(whole.end, 25);
//! assert_eq!(whole.to_string(), "1:1");
//! ```

use std::fmt;

/// Byte offsets plus 1-indexed line/column positions of a source region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the span start (0-indexed)
    pub start: usize,

    /// Byte offset of the span end (exclusive)
    pub end: usize,

    /// Line number of the span start (1-indexed)
    pub start_line: usize,

    /// Column number of the span start (1-indexed, in bytes)
    pub start_col: usize,

    /// Line number of the span end (1-indexed)
    pub end_line: usize,

    /// Column number of the span end (1-indexed, in bytes)
    pub end_col: usize,
}

impl Span {
    /// Span attached to synthesised nodes that have no source text.
    pub const DUMMY: Span = Span::new(0, 0, 0, 0, 0, 0);

    /// Creates a span from byte offsets and line/column positions.
    #[must_use]
    pub const fn new(
        start: usize,
        end: usize,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start,
            end,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Creates a span covering `left` through `right`.
    #[must_use]
    pub const fn merge(left: Span, right: Span) -> Self {
        Self {
            start: left.start,
            end: right.end,
            start_line: left.start_line,
            start_col: left.start_col,
            end_line: right.end_line,
            end_col: right.end_col,
        }
    }

    /// Creates a zero-length span, e.g. for end of input.
    #[must_use]
    pub const fn point(offset: usize, line: usize, col: usize) -> Self {
        Self::new(offset, offset, line, col, line, col)
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span has zero length.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` for the span of a synthesised node.
    #[must_use]
    pub const fn is_dummy(&self) -> bool {
        self.start_line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Anything that knows where it came from in the source.
pub trait Spanned {
    /// Returns the source span of this item.
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}
