//! Lazy one-time initialization.

use std::fmt;

use parking_lot::RwLock;

/// A value computed on first access, then cached forever.
///
/// Readers take a shared lock; only the first caller that finds the cell
/// empty takes the write lock, and it checks again before running the
/// initializer, so the initializer runs at most once even under contention.
pub struct Memo<T> {
    cell: RwLock<Option<T>>,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Memo {
            cell: RwLock::new(None),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.read().is_some()
    }

    pub fn into_inner(self) -> Option<T> {
        self.cell.into_inner()
    }
}

impl<T: Clone> Memo<T> {
    /// The cached value, computing it with `init` if this is the first call.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> T {
        if let Some(value) = self.cell.read().as_ref() {
            return value.clone();
        }
        let mut slot = self.cell.write();
        slot.get_or_insert_with(|| {
            tracing::trace!("memo initialized");
            init()
        })
        .clone()
    }

    /// The cached value, if already computed.
    pub fn get(&self) -> Option<T> {
        self.cell.read().clone()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.read().as_ref() {
            Some(value) => write!(f, "Memo({value:?})"),
            None => write!(f, "Memo(<uninit>)"),
        }
    }
}
