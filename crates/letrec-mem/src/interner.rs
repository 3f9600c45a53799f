//! Identifier interning.
//!
//! The interner keeps two tables:
//! - `strings`: `Symbol` id to owned string (for resolving)
//! - `symbols`: string to `Symbol` (for interning)
//!
//! Unlike a compiler interner there are no pre-interned keywords: keywords
//! are recognised by the lexer and never reach the interner, so the first
//! identifier of a program is always `Symbol(0)`.
//!
//! # Examples
//!
//! ```
//! use letrec_mem::StringInterner;
//!
//! let mut interner = StringInterner::new();
//!
//! let f = interner.intern("fact");
//! let again = interner.intern("fact");
//! let n = interner.intern("n");
//!
//! assert_eq!(f, again);
//! assert_ne!(f, n);
//! assert_eq!(interner.resolve(f), Some("fact"));
//! ```

use crate::symbol::Symbol;

// Use hashbrown if available (faster), otherwise std::collections::HashMap
#[cfg(feature = "symbols")]
use hashbrown::HashMap;

#[cfg(not(feature = "symbols"))]
use std::collections::HashMap;

/// Bidirectional map between identifier text and [`Symbol`]s.
#[derive(Debug, Clone, Default)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    symbols: HashMap<Box<str>, Symbol>,
}

impl StringInterner {
    /// Creates an empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interner and interns `names` in order.
    ///
    /// Useful for building an initial environment: the returned symbols are
    /// `0..names.len()` in the order given.
    ///
    /// ```
    /// use letrec_mem::StringInterner;
    ///
    /// let interner = StringInterner::with_names(&["i", "v", "x"]);
    /// assert_eq!(interner.lookup("v").map(|s| s.as_u32()), Some(1));
    /// ```
    #[must_use]
    pub fn with_names(names: &[&str]) -> Self {
        let mut interner = Self::new();
        for name in names {
            interner.intern(name);
        }
        interner
    }

    /// Interns `s`, returning its existing symbol if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.symbols.get(s) {
            return sym;
        }

        let sym = Symbol::new(self.strings.len() as u32);
        self.strings.push(s.into());
        self.symbols.insert(s.into(), sym);
        sym
    }

    /// Returns the symbol for `s` without interning it.
    #[must_use]
    pub fn lookup(&self, s: &str) -> Option<Symbol> {
        self.symbols.get(s).copied()
    }

    /// Resolves a symbol back to its text, or `None` for a foreign symbol.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.strings.get(sym.as_usize()).map(|s| &**s)
    }

    /// Resolves a symbol for display, falling back to its raw id.
    ///
    /// Error messages use this so a symbol from another interner still
    /// prints as something readable.
    #[must_use]
    pub fn display(&self, sym: Symbol) -> String {
        match self.resolve(sym) {
            Some(s) => s.to_string(),
            None => sym.to_string(),
        }
    }

    /// Returns the number of interned identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
