//! Lazy property memoization.
//!
//! Page objects expose their child wrappers as lazily built, cached
//! properties. [`LazyProp`] is the explicit cell for that pattern:
//! compute on first access, return the cached value afterwards.
//! Thread-unsafe by contract — one session, one logical thread of
//! control; nothing in this crate is shared across sessions.

use std::cell::OnceCell;
use std::fmt;

/// A compute-once, cache-forever property cell
pub struct LazyProp<T> {
    cell: OnceCell<T>,
}

impl<T> Default for LazyProp<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LazyProp<T> {
    /// Create an empty cell
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it with `init` on first access
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    /// The cached value, if it has been computed
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the value has been computed yet
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyProp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyProp").field("value", &self.get()).finish()
    }
}
