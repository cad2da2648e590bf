use super::*;
use crate::test_helpers::{circle, circle_layout, person, person_layout, SHAPE};
use crate::FieldLayout;
use pretty_assertions::assert_eq;
use sealed_ir::FieldType;

#[test]
fn test_construction_checks_arity() {
    let layout = person_layout();
    let err = VariantValue::new(Arc::clone(&layout), vec![Value::from("Alice")]).unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "Person",
            InvalidVariantReason::ArityMismatch {
                expected: 3,
                got: 1
            }
        )
    );
}

#[test]
fn test_construction_checks_field_types() {
    let layout = person_layout();
    let err = VariantValue::new(
        layout,
        vec![
            Value::from("Alice"),
            Value::from("thirty"),
            Value::from("alice@example.com"),
        ],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SealedError::InvalidVariant {
            reason: InvalidVariantReason::FieldTypeMismatch { .. },
            ..
        }
    ));
}

#[test]
fn test_display_matches_data_class_style() {
    let layout = person_layout();
    let p = person(&layout, "Alice", 30, "alice@example.com");
    assert_eq!(
        p.to_string(),
        "Person(name=Alice, age=30, email=alice@example.com)"
    );
}

#[test]
fn test_unit_variant_displays_bare_name() {
    let layout = Arc::new(VariantLayout::new(VariantId::from_raw(5), "Loading", vec![]).unwrap());
    let loading = VariantValue::new(layout, vec![]).unwrap();
    assert_eq!(loading.to_string(), "Loading");
}

#[test]
fn test_accessors() {
    let layout = person_layout();
    let p = person(&layout, "Bob", 25, "bob@example.com");
    assert_eq!(p.get("age"), Some(&Value::int(25)));
    assert_eq!(p.get("height"), None);
    assert_eq!(p.at(0), Some(&Value::from("Bob")));
    assert_eq!(p.destructure().len(), 3);
    let names: Vec<&str> = p.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["name", "age", "email"]);
}

#[test]
fn test_equality_is_structural_and_identity_is_separate() {
    let layout = person_layout();
    let person1 = person(&layout, "Alice", 30, "alice@example.com");
    let person2 = person(&layout, "Alice", 30, "alice@example.com");

    assert_eq!(person1, person2);
    assert!(!person1.same_instance(&person2));
    assert!(person1.same_instance(&person1));
    assert!(person1.same_instance(&person1.clone()));
}

#[test]
fn test_copy_replaces_only_overridden_fields() {
    let layout = person_layout();
    let person1 = person(&layout, "Alice", 30, "alice@example.com");
    let person3 = person1.copy(&Overrides::new().set("age", 31)).unwrap();

    assert_eq!(
        person3.to_string(),
        "Person(name=Alice, age=31, email=alice@example.com)"
    );
    assert_eq!(
        person1.to_string(),
        "Person(name=Alice, age=30, email=alice@example.com)"
    );
    assert_ne!(person1, person3);
}

#[test]
fn test_copy_without_overrides_is_equal_but_distinct() {
    let layout = person_layout();
    let original = person(&layout, "Alice", 30, "alice@example.com");
    let copied = original.copy(&Overrides::new()).unwrap();
    assert_eq!(original, copied);
    assert!(!original.same_instance(&copied));
}

#[test]
fn test_copy_rejects_unknown_field() {
    let layout = person_layout();
    let original = person(&layout, "Alice", 30, "alice@example.com");
    let err = original
        .copy(&Overrides::new().set("age", 31).set("height", 170))
        .unwrap_err();
    assert_eq!(err, SealedError::unknown_field("Person", "height"));
    assert_eq!(original.get("age"), Some(&Value::int(30)));
}

#[test]
fn test_copy_rejects_ill_typed_override() {
    let layout = person_layout();
    let original = person(&layout, "Alice", 30, "alice@example.com");
    let err = original
        .copy(&Overrides::new().set("name", 42))
        .unwrap_err();
    assert_eq!(err.code(), sealed_ir::ErrorCode::E1001);
}

#[test]
fn test_overrides_last_write_wins() {
    let overrides = Overrides::new().set("age", 31).set("age", 40);
    assert_eq!(overrides.len(), 1);
    let layout = person_layout();
    let copied = person(&layout, "Alice", 30, "a@b.c")
        .copy(&overrides)
        .unwrap();
    assert_eq!(copied.get("age"), Some(&Value::int(40)));
}

#[test]
fn test_named_construction_uses_defaults() {
    let layout = Arc::new(
        VariantLayout::new(
            VariantId::from_raw(2),
            "Configuration",
            vec![
                FieldLayout::with_default("host", FieldType::Str, "localhost"),
                FieldLayout::with_default("port", FieldType::Int, 8080),
                FieldLayout::with_default("ssl", FieldType::Bool, false),
                FieldLayout::with_default("timeout", FieldType::Int, 30),
            ],
        )
        .unwrap(),
    );

    let default_config = VariantValue::from_named(Arc::clone(&layout), &[]).unwrap();
    assert_eq!(
        default_config.to_string(),
        "Configuration(host=localhost, port=8080, ssl=false, timeout=30)"
    );

    let prod = VariantValue::from_named(
        layout,
        &[("host", Value::from("api.example.com")), ("ssl", Value::from(true))],
    )
    .unwrap();
    assert_eq!(
        prod.to_string(),
        "Configuration(host=api.example.com, port=8080, ssl=true, timeout=30)"
    );
}

#[test]
fn test_named_construction_requires_fields_without_defaults() {
    let layout = person_layout();
    let err = VariantValue::from_named(layout, &[("name", Value::from("Alice"))]).unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "Person",
            InvalidVariantReason::MissingField {
                field: Name::new("age")
            }
        )
    );
}

#[test]
fn test_named_construction_rejects_unknown_field() {
    let layout = person_layout();
    let err = VariantValue::from_named(layout, &[("nickname", Value::from("Al"))]).unwrap_err();
    assert_eq!(err, SealedError::unknown_field("Person", "nickname"));
}

#[test]
fn test_layout_rejects_duplicate_fields_and_bad_defaults() {
    let err = VariantLayout::new(
        VariantId::from_raw(3),
        "Point",
        vec![
            FieldLayout::new("x", FieldType::Int),
            FieldLayout::new("x", FieldType::Int),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "Point",
            InvalidVariantReason::DuplicateField {
                field: Name::new("x")
            }
        )
    );

    let err = VariantLayout::new(
        VariantId::from_raw(4),
        "Money",
        vec![FieldLayout::with_default("currency", FieldType::Str, 1)],
    )
    .unwrap_err();
    assert_eq!(err.code(), sealed_ir::ErrorCode::E1001);
}

#[test]
fn test_membership_comes_from_layout() {
    let layout = circle_layout();
    let c = circle(&layout, 1.0);
    assert!(c.is_member_of(SHAPE));
    assert!(!c.is_member_of(UnionId::from_raw(7)));
    assert_eq!(c.layout().unions(), &[SHAPE]);
}

#[test]
fn test_variants_with_different_layouts_are_not_equal() {
    let circles = circle_layout();
    let people = person_layout();
    let a = Value::from(circle(&circles, 1.0));
    let b = Value::from(person(&people, "A", 1, "a"));
    assert_ne!(a, b);

    // same id and name, different fields: two registries' `P`
    let single = |field: &str| {
        let layout = VariantLayout::new(
            VariantId::from_raw(0),
            "P",
            vec![FieldLayout::new(field, FieldType::Str)],
        )
        .unwrap();
        VariantValue::new(Arc::new(layout), vec![Value::from("A")]).unwrap()
    };
    let named = single("name");
    let titled = single("title");
    assert_eq!(named.id(), titled.id());
    assert_ne!(named, titled);
    assert_ne!(named, single("name"));
    assert_eq!(named, named.copy(&Overrides::new()).unwrap());
}
