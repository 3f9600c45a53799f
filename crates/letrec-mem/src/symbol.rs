//! Interned identifier handles.
//!
//! Every variable, parameter and procedure name in a `letrec` program is
//! interned once by the parser. The evaluator and the type checker then
//! compare names as [`Symbol`]s and only go back to the interner to print
//! them.
//!
//! # Examples
//!
//! ```
//! use letrec_mem::Symbol;
//!
//! let x = Symbol::new(0);
//! let y = Symbol::new(1);
//!
//! assert_ne!(x, y);
//! assert_eq!(x.as_u32(), 0);
//! ```

use std::fmt;

/// A 32-bit handle to an interned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol from a raw id.
    ///
    /// Only the interner should mint symbols for real names; tests use this
    /// to build environments by hand.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw id as an index into the interner's table.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_identity() {
        assert_eq!(Symbol::new(3), Symbol::from(3));
        assert_ne!(Symbol::new(3), Symbol::new(4));
        assert_eq!(Symbol::new(7).as_usize(), 7);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new(42).to_string(), "#42");
    }

    #[test]
    fn test_symbol_as_map_key() {
        use std::collections::HashMap;

        let mut scope = HashMap::new();
        scope.insert(Symbol::new(1), "outer");
        scope.insert(Symbol::new(1), "shadowed");
        scope.insert(Symbol::new(2), "other");

        assert_eq!(scope.len(), 2);
        assert_eq!(scope[&Symbol::new(1)], "shadowed");
    }
}
