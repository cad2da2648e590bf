//! Change notification after mutation.

use std::fmt;

type OnChange<T> = Box<dyn FnMut(&str, &T, &T) + Send>;

/// A named value that reports every change.
///
/// The callback runs after the new value is stored and receives the property
/// name, the previous value and the current one.
pub struct Observable<T> {
    name: String,
    value: T,
    on_change: OnChange<T>,
}

impl<T> Observable<T> {
    pub fn new<F>(name: impl Into<String>, initial: T, on_change: F) -> Self
    where
        F: FnMut(&str, &T, &T) + Send + 'static,
    {
        Observable {
            name: name.into(),
            value: initial,
            on_change: Box::new(on_change),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value`, then notify.
    pub fn set(&mut self, value: T) {
        let old = std::mem::replace(&mut self.value, value);
        tracing::trace!(property = %self.name, "observable changed");
        (self.on_change)(&self.name, &old, &self.value);
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
