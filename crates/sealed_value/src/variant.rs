//! Immutable variant instances.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use sealed_ir::{InvalidVariantReason, Name, SealedError, SealedResult, UnionId, VariantId};

use crate::conform::check_field;
use crate::{Heap, Overrides, Value, VariantLayout};

/// One instance of a variant: its layout plus its field values.
///
/// Field values are stored once and never mutated. `clone` shares the
/// instance (same identity); `copy` always produces a new one.
#[derive(Clone)]
pub struct VariantValue {
    layout: Arc<VariantLayout>,
    /// Field values in layout order.
    fields: Heap<Vec<Value>>,
}

impl VariantValue {
    /// Build an instance from positional field values.
    ///
    /// Fails with `InvalidVariant` when the arity is wrong or a value does not
    /// satisfy its field type.
    pub fn new(layout: Arc<VariantLayout>, fields: Vec<Value>) -> SealedResult<Self> {
        if fields.len() != layout.arity() {
            return Err(SealedError::invalid(
                layout.name().clone(),
                InvalidVariantReason::ArityMismatch {
                    expected: layout.arity(),
                    got: fields.len(),
                },
            ));
        }
        for (field, value) in layout.fields().iter().zip(&fields) {
            check_field(layout.registry(), layout.name(), field, value)?;
        }
        Ok(VariantValue {
            layout,
            fields: Heap::new(fields),
        })
    }

    /// Build an instance from named field values, filling omitted fields
    /// from their declared defaults.
    pub fn from_named(
        layout: Arc<VariantLayout>,
        named: &[(&str, Value)],
    ) -> SealedResult<Self> {
        let mut slots: Vec<Option<Value>> = vec![None; layout.arity()];
        for (field, value) in named {
            let index = layout
                .field_index(field)
                .ok_or_else(|| SealedError::unknown_field(layout.name(), *field))?;
            slots[index] = Some(value.clone());
        }
        let mut fields = Vec::with_capacity(slots.len());
        for (slot, field) in slots.into_iter().zip(layout.fields()) {
            match slot.or_else(|| field.default().cloned()) {
                Some(value) => fields.push(value),
                None => {
                    return Err(SealedError::invalid(
                        layout.name().clone(),
                        InvalidVariantReason::MissingField {
                            field: field.name().clone(),
                        },
                    ))
                }
            }
        }
        VariantValue::new(layout, fields)
    }

    pub fn layout(&self) -> &Arc<VariantLayout> {
        &self.layout
    }

    pub fn id(&self) -> VariantId {
        self.layout.id()
    }

    /// The variant's tag name.
    pub fn name(&self) -> &Name {
        self.layout.name()
    }

    /// Field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let index = self.layout.field_index(field)?;
        self.fields.get(index)
    }

    /// Field value by position.
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    /// All field values in declaration order (component access).
    pub fn destructure(&self) -> &[Value] {
        &self.fields
    }

    /// Field names paired with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.layout
            .fields()
            .iter()
            .map(|f| f.name())
            .zip(self.fields.iter())
    }

    /// Whether this variant belongs to `union`.
    pub fn is_member_of(&self, union: UnionId) -> bool {
        self.layout.is_member_of(union)
    }

    /// New instance of the same variant with `overrides` applied.
    ///
    /// Unknown field names fail with `UnknownField`; ill-typed overrides fail
    /// with `InvalidVariant`. `self` is left untouched either way.
    pub fn copy(&self, overrides: &Overrides) -> SealedResult<VariantValue> {
        let mut fields: Vec<Value> = self.fields.to_vec();
        for (name, value) in overrides.iter() {
            let index = self
                .layout
                .field_index(name.as_str())
                .ok_or_else(|| SealedError::unknown_field(self.name(), name))?;
            if let Some(field) = self.layout.field(index) {
                check_field(self.layout.registry(), self.name(), field, value)?;
            }
            fields[index] = value.clone();
        }
        Ok(VariantValue {
            layout: Arc::clone(&self.layout),
            fields: Heap::new(fields),
        })
    }

    /// Identity comparison: true only for the same instance (or clones of it).
    pub fn same_instance(&self, other: &VariantValue) -> bool {
        Heap::ptr_eq(&self.fields, &other.fields)
    }
}

impl PartialEq for VariantValue {
    fn eq(&self, other: &Self) -> bool {
        if self.same_instance(other) {
            return true;
        }
        // Layouts are shared per registry; equal ids from two registries are
        // still different variants.
        Arc::ptr_eq(&self.layout, &other.layout) && self.fields == other.fields
    }
}

impl Eq for VariantValue {}

impl Hash for VariantValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
        self.name().hash(state);
        self.fields.hash(state);
    }
}

/// `Name(field=value, ...)`; unit variants print as the bare name.
impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if self.layout.is_unit() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.name().as_str());
        for (name, value) in self.iter() {
            s.field(name.as_str(), value);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests;
