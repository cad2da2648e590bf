//! Property tests for structural equality and `copy`.

use std::sync::Arc;

use proptest::prelude::*;

use crate::test_helpers::{person, person_layout};
use crate::{Overrides, Value, VariantLayout, VariantValue};

fn arb_person() -> impl Strategy<Value = (String, i64, String)> {
    ("[a-zA-Z]{1,8}", 0i64..120, "[a-z]{1,6}@[a-z]{1,6}\\.com")
}

/// Optional replacement for each of the three `Person` fields.
fn arb_overrides() -> impl Strategy<Value = (Option<String>, Option<i64>, Option<String>)> {
    (
        proptest::option::of("[a-zA-Z]{1,8}"),
        proptest::option::of(0i64..120),
        proptest::option::of("[a-z]{1,6}@[a-z]{1,6}\\.com"),
    )
}

fn build(layout: &Arc<VariantLayout>, p: &(String, i64, String)) -> VariantValue {
    person(layout, &p.0, p.1, &p.2)
}

proptest! {
    #[test]
    fn copy_keeps_untouched_fields_and_applies_overrides(
        p in arb_person(),
        (name, age, email) in arb_overrides(),
    ) {
        let layout = person_layout();
        let original = build(&layout, &p);
        let before = original.destructure().to_vec();

        let mut overrides = Overrides::new();
        if let Some(n) = &name {
            overrides = overrides.set("name", n.as_str());
        }
        if let Some(a) = age {
            overrides = overrides.set("age", a);
        }
        if let Some(e) = &email {
            overrides = overrides.set("email", e.as_str());
        }

        let copied = original.copy(&overrides).unwrap();

        let expect_name = name.map_or_else(|| Value::from(p.0.as_str()), Value::from);
        let expect_age = age.map_or(Value::int(p.1), Value::int);
        let expect_email = email.map_or_else(|| Value::from(p.2.as_str()), Value::from);
        prop_assert_eq!(copied.get("name"), Some(&expect_name));
        prop_assert_eq!(copied.get("age"), Some(&expect_age));
        prop_assert_eq!(copied.get("email"), Some(&expect_email));

        // The input is never mutated.
        prop_assert_eq!(original.destructure(), before.as_slice());
        prop_assert!(!original.same_instance(&copied));
    }

    #[test]
    fn equality_is_independent_of_identity(p in arb_person()) {
        let layout = person_layout();
        let a = build(&layout, &p);
        let b = build(&layout, &p);
        let c = build(&layout, &p);

        // reflexive, symmetric, transitive
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a == b, b == a);
        prop_assert!(a == b && b == c && a == c);
        prop_assert!(!a.same_instance(&b));
    }

    #[test]
    fn differing_field_breaks_equality(p in arb_person(), bump in 1i64..10) {
        let layout = person_layout();
        let a = build(&layout, &p);
        let b = a.copy(&Overrides::new().set("age", p.1 + bump)).unwrap();
        prop_assert_ne!(a, b);
    }
}
