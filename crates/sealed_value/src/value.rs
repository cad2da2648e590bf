//! Field payload values.

use std::fmt;
use std::hash::{Hash, Hasher};

use sealed_stack::ensure_sufficient_stack;

use crate::{Heap, VariantValue};

/// A value stored in a variant field.
///
/// Scalars are inline; strings, lists and optionals go through [`Heap`] and
/// can only be built with the factory methods below.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    /// Compared and hashed by bit pattern, so equality stays an equivalence
    /// relation (`NaN == NaN`, `0.0 != -0.0`).
    Float(f64),
    Bool(bool),
    Char(char),
    Unit,
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    /// Absent optional.
    None,
    /// Present optional.
    Some(Heap<Value>),
    /// An instance of a union variant.
    Variant(VariantValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    pub fn some(inner: Value) -> Self {
        Value::Some(Heap::new(inner))
    }

    /// `Some(inner)` for `Some`, `None` otherwise.
    pub fn optional(inner: Option<Value>) -> Self {
        match inner {
            Some(v) => Value::some(v),
            None => Value::None,
        }
    }
}

// Accessors

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_variant(&self) -> Option<&VariantValue> {
        match self {
            Value::Variant(v) => Some(v),
            _ => None,
        }
    }

    /// The inner value of a present optional; `None` for absent or non-optional.
    pub fn as_some(&self) -> Option<&Value> {
        match self {
            Value::Some(inner) => Some(inner),
            _ => None,
        }
    }

    /// Short description of the runtime shape, used in type-mismatch errors.
    pub fn type_name(&self) -> String {
        match self {
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Char(_) => "char".to_string(),
            Value::Unit => "unit".to_string(),
            Value::Str(_) => "str".to_string(),
            Value::List(_) => "list".to_string(),
            Value::None => "none".to_string(),
            Value::Some(inner) => format!("{}?", inner.type_name()),
            Value::Variant(v) => v.name().to_string(),
        }
    }

    /// Identity comparison: true only when both values share the same
    /// allocation (scalars are never identical, they have no allocation).
    pub fn same_instance(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Heap::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Some(a), Value::Some(b)) => Heap::ptr_eq(a, b),
            (Value::Variant(a), Value::Variant(b)) => a.same_instance(b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Unit, Value::Unit) | (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Some(a), Value::Some(b)) => a == b,
            (Value::Variant(a), Value::Variant(b)) => a == b,
            _ => false,
        })
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            std::mem::discriminant(self).hash(state);
            match self {
                Value::Int(n) => n.hash(state),
                Value::Float(n) => n.to_bits().hash(state),
                Value::Bool(b) => b.hash(state),
                Value::Char(c) => c.hash(state),
                Value::Unit | Value::None => {}
                Value::Str(s) => s.hash(state),
                Value::List(items) => items.hash(state),
                Value::Some(inner) => inner.hash(state),
                Value::Variant(v) => v.hash(state),
            }
        });
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Int(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: 100.0, not 100
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Unit => write!(f, "()"),
            Value::Str(s) => write!(f, "{}", s.as_str()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::None => write!(f, "None"),
            Value::Some(inner) => write!(f, "Some({})", &**inner),
            Value::Variant(v) => write!(f, "{v}"),
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Char(c) => write!(f, "{c:?}"),
            _ => write!(f, "{self}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<VariantValue> for Value {
    fn from(v: VariantValue) -> Self {
        Value::Variant(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
