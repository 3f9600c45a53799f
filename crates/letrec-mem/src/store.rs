//! The mutable cell store.
//!
//! A [`Store`] is an append-only vector of cells addressed by [`Ref`]. Cells
//! are allocated empty with [`Store::new_ref`] and filled with
//! [`Store::store`]; an allocated address stays valid for the lifetime of the
//! store. Nothing is ever freed.
//!
//! Allocation and initialisation are separate so that a cell can exist before
//! its contents do. [`Store::alloc`] does both in one step.
//!
//! # Examples
//!
//! ```
//! use letrec_mem::Store;
//!
//! let mut store = Store::new();
//! let r = store.new_ref();
//! assert!(store.load(r).is_err());
//!
//! store.store(r, 42).unwrap();
//! assert_eq!(store.load(r), Ok(&42));
//!
//! let s = store.alloc(7);
//! assert_ne!(r, s);
//! assert_eq!(store.len(), 2);
//! ```

use std::fmt;

/// Address of a cell in a [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ref(u32);

impl Ref {
    /// Creates a reference from a raw address.
    #[must_use]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw address.
    #[must_use]
    pub const fn addr(self) -> u32 {
        self.0
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ref({})", self.0)
    }
}

/// Failure to read or write a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The address was never allocated by this store
    InvalidRef(Ref),
    /// The cell was allocated but never written
    Uninitialized(Ref),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidRef(r) => write!(f, "invalid store address {r}"),
            StoreError::Uninitialized(r) => write!(f, "read of uninitialized cell {r}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Append-only, index-addressed cells.
#[derive(Debug, Clone)]
pub struct Store<T> {
    cells: Vec<Option<T>>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<T> Store<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a fresh, uninitialised cell and returns its address.
    ///
    /// Addresses are handed out in increasing order starting from 0.
    pub fn new_ref(&mut self) -> Ref {
        let r = Ref::new(self.cells.len() as u32);
        self.cells.push(None);
        r
    }

    /// Overwrites the cell at `r` and returns `r`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRef`] if `r` was not allocated here.
    pub fn store(&mut self, r: Ref, value: T) -> StoreResult<Ref> {
        match self.cells.get_mut(r.index()) {
            Some(cell) => {
                *cell = Some(value);
                Ok(r)
            }
            None => Err(StoreError::InvalidRef(r)),
        }
    }

    /// Allocates a cell already holding `value`.
    pub fn alloc(&mut self, value: T) -> Ref {
        let r = Ref::new(self.cells.len() as u32);
        self.cells.push(Some(value));
        r
    }

    /// Reads the cell at `r`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRef`] for an address this store never
    /// handed out and [`StoreError::Uninitialized`] for a reserved cell that
    /// was never written.
    pub fn load(&self, r: Ref) -> StoreResult<&T> {
        match self.cells.get(r.index()) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(StoreError::Uninitialized(r)),
            None => Err(StoreError::InvalidRef(r)),
        }
    }

    /// Returns the number of allocated cells, which is also the next address.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over every cell in address order.
    pub fn iter(&self) -> impl Iterator<Item = (Ref, Option<&T>)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Ref::new(i as u32), cell.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = Store::new();
        let r = store.new_ref();
        assert_eq!(store.store(r, "v"), Ok(r));
        assert_eq!(store.load(r), Ok(&"v"));
    }

    #[test]
    fn test_overwrite() {
        let mut store = Store::new();
        let r = store.alloc(1);
        store.store(r, 2).unwrap();
        assert_eq!(store.load(r), Ok(&2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_addresses_are_monotonic() {
        let mut store: Store<i64> = Store::new();
        let refs: Vec<_> = (0..5).map(|_| store.new_ref()).collect();
        for (i, r) in refs.iter().enumerate() {
            assert_eq!(r.addr() as usize, i);
        }
    }

    #[test]
    fn test_uninitialized_read() {
        let mut store: Store<i64> = Store::new();
        let r = store.new_ref();
        assert_eq!(store.load(r), Err(StoreError::Uninitialized(r)));
    }

    #[test]
    fn test_invalid_ref() {
        let mut store: Store<i64> = Store::new();
        let bogus = Ref::new(3);
        assert_eq!(store.load(bogus), Err(StoreError::InvalidRef(bogus)));
        assert_eq!(store.store(bogus, 1), Err(StoreError::InvalidRef(bogus)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_earlier_cells_survive_growth() {
        let mut store = Store::new();
        let first = store.alloc(String::from("first"));
        for i in 0..1_000 {
            store.alloc(i.to_string());
        }
        assert_eq!(store.load(first).map(String::as_str), Ok("first"));
    }

    #[test]
    fn test_iter_reports_holes() {
        let mut store = Store::new();
        store.alloc(10);
        store.new_ref();
        let cells: Vec<_> = store.iter().map(|(r, v)| (r.addr(), v.copied())).collect();
        assert_eq!(cells, vec![(0, Some(10)), (1, None)]);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Uninitialized(Ref::new(2));
        assert_eq!(err.to_string(), "read of uninitialized cell ref(2)");
    }
}
