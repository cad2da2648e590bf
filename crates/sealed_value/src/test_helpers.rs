//! Shared fixtures for unit tests.

use std::sync::Arc;

use sealed_ir::{FieldType, UnionId, VariantId};

use crate::{FieldLayout, Value, VariantLayout, VariantValue};

/// Union id used by the `Shape` fixtures.
pub(crate) const SHAPE: UnionId = UnionId::from_raw(0);

/// `Person(name: str, age: int, email: str)`.
pub(crate) fn person_layout() -> Arc<VariantLayout> {
    let layout = VariantLayout::new(
        VariantId::from_raw(0),
        "Person",
        vec![
            FieldLayout::new("name", FieldType::Str),
            FieldLayout::new("age", FieldType::Int),
            FieldLayout::new("email", FieldType::Str),
        ],
    )
    .unwrap();
    Arc::new(layout)
}

pub(crate) fn person(
    layout: &Arc<VariantLayout>,
    name: &str,
    age: i64,
    email: &str,
) -> VariantValue {
    VariantValue::new(
        Arc::clone(layout),
        vec![Value::from(name), Value::int(age), Value::from(email)],
    )
    .unwrap()
}

/// `Circle(radius: float)`, a member of `SHAPE`.
pub(crate) fn circle_layout() -> Arc<VariantLayout> {
    let layout = VariantLayout::new(
        VariantId::from_raw(1),
        "Circle",
        vec![FieldLayout::new("radius", FieldType::Float)],
    )
    .unwrap()
    .with_unions([SHAPE]);
    Arc::new(layout)
}

pub(crate) fn circle(layout: &Arc<VariantLayout>, radius: f64) -> VariantValue {
    VariantValue::new(Arc::clone(layout), vec![Value::float(radius)]).unwrap()
}
