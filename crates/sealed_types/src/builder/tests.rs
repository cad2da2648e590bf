use super::*;
use pretty_assertions::assert_eq;
use sealed_ir::FieldType;
use sealed_value::Value;

fn field(name: &str, ty: FieldType) -> FieldLayout {
    FieldLayout::new(name, ty)
}

#[test]
fn test_define_simple_union() {
    let mut b = RegistryBuilder::new();
    let pending = b
        .variant("Pending", vec![field("amount", FieldType::Float)])
        .unwrap();
    let failed = b
        .variant(
            "Failed",
            vec![
                field("error", FieldType::Str),
                field("code", FieldType::Int),
            ],
        )
        .unwrap();
    let status = b.union("PaymentStatus").unwrap().member(pending).member(failed).finish().unwrap();
    let registry = b.finish().unwrap();

    assert_eq!(registry.union_id("PaymentStatus"), Some(status));
    assert_eq!(registry.leaves(status), &[pending, failed]);
    assert!(registry.layout(pending).unwrap().is_member_of(status));
}

#[test]
fn test_duplicate_variant_name_is_rejected() {
    let mut b = RegistryBuilder::new();
    b.unit_variant("Loading").unwrap();
    let err = b.unit_variant("Loading").unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "Loading",
            InvalidVariantReason::DuplicateVariant {
                name: Name::new("Loading")
            }
        )
    );
}

#[test]
fn test_duplicate_union_name_is_rejected() {
    let mut b = RegistryBuilder::new();
    let idle = b.unit_variant("Idle").unwrap();
    b.union("State").unwrap().member(idle).finish().unwrap();
    let Err(err) = b.union("State") else {
        panic!("second definition of `State` should fail");
    };
    assert_eq!(
        err,
        SealedError::invalid(
            "State",
            InvalidVariantReason::DuplicateUnion {
                name: Name::new("State")
            }
        )
    );
}

#[test]
fn test_empty_union_is_rejected() {
    let mut b = RegistryBuilder::new();
    let err = b.union("Nothing").unwrap().finish().unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid("Nothing", InvalidVariantReason::EmptyUnion)
    );
}

#[test]
fn test_member_listed_twice_is_rejected() {
    let mut b = RegistryBuilder::new();
    let idle = b.unit_variant("Idle").unwrap();
    let err = b
        .union("State")
        .unwrap()
        .member(idle)
        .member(idle)
        .finish()
        .unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "State",
            InvalidVariantReason::DuplicateTag {
                tag: Name::new("Idle")
            }
        )
    );
}

#[test]
fn test_foreign_variant_id_is_rejected() {
    let mut b = RegistryBuilder::new();
    let err = b
        .union("State")
        .unwrap()
        .member(VariantId::from_raw(42))
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        SealedError::InvalidVariant {
            reason: InvalidVariantReason::UnknownTag { .. },
            ..
        }
    ));
}

#[test]
fn test_declared_but_undefined_union_fails_finish() {
    let mut b = RegistryBuilder::new();
    b.declare_union("Later").unwrap();
    let err = b.finish().unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "Later",
            InvalidVariantReason::UndefinedUnion {
                name: Name::new("Later")
            }
        )
    );
}

#[test]
fn test_recursive_union_via_forward_declaration() {
    let mut b = RegistryBuilder::new();
    let list = b.declare_union("IntList").unwrap();
    let nil = b.unit_variant("Nil").unwrap();
    let cons = b
        .variant(
            "Cons",
            vec![
                field("head", FieldType::Int),
                field("tail", FieldType::union(list, "IntList")),
            ],
        )
        .unwrap();
    let defined = b.union("IntList").unwrap().member(nil).member(cons).finish().unwrap();
    assert_eq!(defined, list);
    let registry = b.finish().unwrap();

    let empty = registry.unit(nil).unwrap();
    let one = registry
        .construct(cons, vec![Value::int(1), Value::from(empty)])
        .unwrap();
    assert_eq!(one.to_string(), "Cons(head=1, tail=Nil)");
}

#[test]
fn test_sub_union_cycle_fails_finish() {
    let mut b = RegistryBuilder::new();
    let a = b.declare_union("A").unwrap();
    let x = b.unit_variant("X").unwrap();
    let inner = b.union("B").unwrap().member(x).sub_union(a).finish().unwrap();
    b.union("A").unwrap().sub_union(inner).finish().unwrap();
    let err = b.finish().unwrap_err();
    assert!(matches!(
        err,
        SealedError::InvalidVariant {
            reason: InvalidVariantReason::CyclicUnion { .. },
            ..
        }
    ));
}

#[test]
fn test_membership_spans_nested_unions() {
    let mut b = RegistryBuilder::new();
    let delivered = b.unit_variant("Delivered").unwrap();
    let cancelled = b.unit_variant("Cancelled").unwrap();
    let processing = b.unit_variant("Processing").unwrap();
    let terminal = b
        .union("Terminal")
        .unwrap()
        .members([delivered, cancelled])
        .finish()
        .unwrap();
    let order = b
        .union("OrderStatus")
        .unwrap()
        .member(processing)
        .sub_union(terminal)
        .finish()
        .unwrap();
    let registry = b.finish().unwrap();

    assert_eq!(registry.leaves(order), &[processing, delivered, cancelled]);
    let layout = registry.layout(delivered).unwrap();
    assert_eq!(layout.unions(), &[terminal, order]);
    assert!(!registry.layout(processing).unwrap().is_member_of(terminal));
}

#[test]
fn test_variant_with_bad_default_is_rejected() {
    let mut b = RegistryBuilder::new();
    let err = b
        .variant(
            "Configuration",
            vec![FieldLayout::with_default("port", FieldType::Int, "8080")],
        )
        .unwrap_err();
    assert_eq!(err.code(), sealed_ir::ErrorCode::E1001);
    assert_eq!(b.variant_id("Configuration"), None);
}
