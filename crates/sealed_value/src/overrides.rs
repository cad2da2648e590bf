//! Named field replacements for `copy`.

use smallvec::SmallVec;

use sealed_ir::Name;

use crate::Value;

/// Ordered set of `field = value` replacements.
///
/// Setting the same field twice keeps the last value.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    entries: SmallVec<[(Name, Value); 4]>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an override.
    #[must_use]
    pub fn set(mut self, field: impl Into<Name>, value: impl Into<Value>) -> Self {
        let field = field.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = value;
        } else {
            self.entries.push((field, value));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
