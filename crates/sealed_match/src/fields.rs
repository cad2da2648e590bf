//! Read-only view of a matched variant, passed to guards and handlers.

use sealed_ir::Name;
use sealed_value::{Value, VariantValue};

/// The fields of the value being dispatched.
///
/// Typed accessors return `None` when the field is absent or holds a
/// different type.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    value: &'a VariantValue,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a VariantValue) -> Self {
        Fields { value }
    }

    /// Tag of the matched variant.
    pub fn name(&self) -> &'a Name {
        self.value.name()
    }

    /// The whole matched value.
    pub fn value(&self) -> &'a VariantValue {
        self.value
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.value.get(field)
    }

    pub fn at(&self, index: usize) -> Option<&'a Value> {
        self.value.at(index)
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_int)
    }

    pub fn float(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_float)
    }

    pub fn bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    pub fn str(&self, field: &str) -> Option<&'a str> {
        self.get(field).and_then(Value::as_str)
    }

    /// A nested variant value (a union-typed field).
    pub fn variant(&self, field: &str) -> Option<&'a VariantValue> {
        self.get(field).and_then(Value::as_variant)
    }
}
