//! Declared field types.

use std::fmt;

use crate::{Name, UnionId};

/// Type constraint attached to a variant field.
///
/// Checked whenever a field value is stored: at construction, when a default
/// is declared, and on every `copy` override.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    Int,
    Float,
    Bool,
    Char,
    Str,
    Unit,
    /// Accepts any value.
    Any,
    /// Homogeneous list.
    List(Box<FieldType>),
    /// Either absent (`None`) or a value of the inner type.
    Optional(Box<FieldType>),
    /// Any variant that is a member of the given union.
    Union { id: UnionId, name: Name },
}

impl FieldType {
    /// Shorthand for `List(inner)`.
    pub fn list(inner: FieldType) -> Self {
        FieldType::List(Box::new(inner))
    }

    /// Shorthand for `Optional(inner)`.
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    /// Shorthand for a union-typed field.
    pub fn union(id: UnionId, name: impl Into<Name>) -> Self {
        FieldType::Union {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => write!(f, "int"),
            FieldType::Float => write!(f, "float"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Char => write!(f, "char"),
            FieldType::Str => write!(f, "str"),
            FieldType::Unit => write!(f, "unit"),
            FieldType::Any => write!(f, "any"),
            FieldType::List(inner) => write!(f, "[{inner}]"),
            FieldType::Optional(inner) => write!(f, "{inner}?"),
            FieldType::Union { name, .. } => write!(f, "{name}"),
        }
    }
}
