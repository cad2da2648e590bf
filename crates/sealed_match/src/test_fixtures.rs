//! Registries shared by the unit tests.

use sealed_ir::{FieldType, UnionId, VariantId};
use sealed_types::{RegistryBuilder, UnionRegistry};
use sealed_value::FieldLayout;

/// `PaymentStatus = Pending(amount) | Completed(amount, transaction_id) | Failed(reason)`.
pub(crate) struct Payments {
    pub(crate) registry: UnionRegistry,
    pub(crate) status: UnionId,
    pub(crate) pending: VariantId,
    pub(crate) completed: VariantId,
    pub(crate) failed: VariantId,
}

pub(crate) fn payments() -> Payments {
    let mut b = RegistryBuilder::new();
    let pending = b
        .variant("Pending", vec![FieldLayout::new("amount", FieldType::Float)])
        .unwrap();
    let completed = b
        .variant(
            "Completed",
            vec![
                FieldLayout::new("amount", FieldType::Float),
                FieldLayout::new("transaction_id", FieldType::Str),
            ],
        )
        .unwrap();
    let failed = b
        .variant("Failed", vec![FieldLayout::new("reason", FieldType::Str)])
        .unwrap();
    let status = b
        .union("PaymentStatus")
        .unwrap()
        .members([pending, completed, failed])
        .finish()
        .unwrap();
    Payments {
        registry: b.finish().unwrap(),
        status,
        pending,
        completed,
        failed,
    }
}

/// `OrderStatus = Active | Shipped(tracking, international) | Delivered`
/// where `Active = Waiting(days) | Processing(estimated_days, priority)`.
pub(crate) struct Orders {
    pub(crate) registry: UnionRegistry,
    pub(crate) order: UnionId,
    pub(crate) active: UnionId,
    pub(crate) waiting: VariantId,
    pub(crate) processing: VariantId,
    pub(crate) shipped: VariantId,
    pub(crate) delivered: VariantId,
}

pub(crate) fn orders() -> Orders {
    let mut b = RegistryBuilder::new();
    let waiting = b
        .variant("Waiting", vec![FieldLayout::new("days", FieldType::Int)])
        .unwrap();
    let processing = b
        .variant(
            "Processing",
            vec![
                FieldLayout::new("estimated_days", FieldType::Int),
                FieldLayout::new("priority", FieldType::Bool),
            ],
        )
        .unwrap();
    let shipped = b
        .variant(
            "Shipped",
            vec![
                FieldLayout::new("tracking", FieldType::Str),
                FieldLayout::new("international", FieldType::Bool),
            ],
        )
        .unwrap();
    let delivered = b.unit_variant("Delivered").unwrap();
    let active = b
        .union("Active")
        .unwrap()
        .members([waiting, processing])
        .finish()
        .unwrap();
    let order = b
        .union("OrderStatus")
        .unwrap()
        .sub_union(active)
        .members([shipped, delivered])
        .finish()
        .unwrap();
    Orders {
        registry: b.finish().unwrap(),
        order,
        active,
        waiting,
        processing,
        shipped,
        delivered,
    }
}
