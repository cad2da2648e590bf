//! Validation before mutation.

use std::fmt;

type Veto<T> = Box<dyn FnMut(&str, &T, &T) -> bool + Send>;

/// A named value whose changes must be approved.
///
/// The callback runs before the store with the property name, the current
/// value and the proposed one; returning `false` keeps the current value.
pub struct Vetoable<T> {
    name: String,
    value: T,
    check: Veto<T>,
}

impl<T> Vetoable<T> {
    pub fn new<F>(name: impl Into<String>, initial: T, check: F) -> Self
    where
        F: FnMut(&str, &T, &T) -> bool + Send + 'static,
    {
        Vetoable {
            name: name.into(),
            value: initial,
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value` if the callback accepts it. Returns whether it did.
    pub fn set(&mut self, value: T) -> bool {
        let accepted = (self.check)(&self.name, &self.value, &value);
        if accepted {
            self.value = value;
        } else {
            tracing::debug!(property = %self.name, "change vetoed");
        }
        accepted
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Vetoable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vetoable")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
