//! Field-type validation.

use sealed_ir::{FieldType, InvalidVariantReason, Name, SealedError, SealedResult};
use sealed_stack::ensure_sufficient_stack;

use crate::{FieldLayout, RegistryToken, Value};

/// Whether `value` satisfies `ty`.
///
/// Optionals are never implicitly wrapped: an `int?` field takes
/// `Value::None` or `Value::some(int)`, not a bare int.
///
/// `registry` is the registry of the variant that holds the field. A
/// union-typed field only takes variants frozen by that same registry, since
/// union ids from different registries overlap.
pub fn conforms(ty: &FieldType, value: &Value, registry: Option<&RegistryToken>) -> bool {
    ensure_sufficient_stack(|| match (ty, value) {
        (FieldType::Any, _)
        | (FieldType::Int, Value::Int(_))
        | (FieldType::Float, Value::Float(_))
        | (FieldType::Bool, Value::Bool(_))
        | (FieldType::Char, Value::Char(_))
        | (FieldType::Str, Value::Str(_))
        | (FieldType::Unit, Value::Unit)
        | (FieldType::Optional(_), Value::None) => true,
        (FieldType::List(inner), Value::List(items)) => {
            items.iter().all(|v| conforms(inner, v, registry))
        }
        (FieldType::Optional(inner), Value::Some(v)) => conforms(inner, v, registry),
        (FieldType::Union { id, .. }, Value::Variant(v)) => {
            v.layout().registry() == registry && v.is_member_of(*id)
        }
        _ => false,
    })
}

/// Check a value about to be stored in `field` of the variant `scope`.
pub fn check_field(
    registry: Option<&RegistryToken>,
    scope: &Name,
    field: &FieldLayout,
    value: &Value,
) -> SealedResult<()> {
    if conforms(field.ty(), value, registry) {
        Ok(())
    } else {
        Err(SealedError::invalid(
            scope.clone(),
            InvalidVariantReason::FieldTypeMismatch {
                field: field.name().clone(),
                expected: field.ty().clone(),
                got: value.type_name(),
            },
        ))
    }
}
