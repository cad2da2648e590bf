// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end: define `PaymentStatus`, dispatch one value, count handler calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sealed_ir::{FieldType, SealedError};
use sealed_match::{MatchExt, MatchTable};
use sealed_types::{RegistryBuilder, UnionRegistry};
use sealed_value::{FieldLayout, Overrides, Value};

#[derive(Default)]
struct Calls {
    pending: AtomicUsize,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

fn define() -> (UnionRegistry, sealed_ir::UnionId) {
    let mut b = RegistryBuilder::new();
    let pending = b
        .variant("Pending", vec![FieldLayout::new("amount", FieldType::Float)])
        .unwrap();
    let completed = b
        .variant(
            "Completed",
            vec![
                FieldLayout::new("amount", FieldType::Float),
                FieldLayout::new("transactionId", FieldType::Str),
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
    (b.finish().unwrap(), status)
}

fn describe(
    registry: &UnionRegistry,
    status: sealed_ir::UnionId,
    calls: &Arc<Calls>,
) -> MatchTable<String> {
    let (p, c, f) = (Arc::clone(calls), Arc::clone(calls), Arc::clone(calls));
    registry
        .matcher(status)
        .arm("Pending", move |fields| {
            p.pending.fetch_add(1, Ordering::SeqCst);
            format!("Pending: ${:?}", fields.float("amount").unwrap())
        })
        .arm("Completed", move |fields| {
            c.completed.fetch_add(1, Ordering::SeqCst);
            format!(
                "Completed: ${:?} (transaction {})",
                fields.float("amount").unwrap(),
                fields.str("transactionId").unwrap()
            )
        })
        .arm("Failed", move |fields| {
            f.failed.fetch_add(1, Ordering::SeqCst);
            format!("Failed: {}", fields.str("reason").unwrap())
        })
        .build()
        .unwrap()
}

#[test]
fn completed_payment_runs_only_the_completed_handler() {
    let (registry, status) = define();
    let calls = Arc::new(Calls::default());
    let table = describe(&registry, status, &calls);

    let completed = registry
        .construct(
            registry.variant_id("Completed").unwrap(),
            vec![Value::float(102.5), Value::string("TXN-1")],
        )
        .unwrap();

    assert_eq!(
        table.apply(&completed).unwrap(),
        "Completed: $102.5 (transaction TXN-1)"
    );
    assert_eq!(calls.pending.load(Ordering::SeqCst), 0);
    assert_eq!(calls.completed.load(Ordering::SeqCst), 1);
    assert_eq!(calls.failed.load(Ordering::SeqCst), 0);
}

#[test]
fn copied_payment_dispatches_with_new_fields() {
    let (registry, status) = define();
    let calls = Arc::new(Calls::default());
    let table = describe(&registry, status, &calls);

    let pending = registry
        .construct_named(
            registry.variant_id("Pending").unwrap(),
            &[("amount", Value::float(100.0))],
        )
        .unwrap();
    let raised = pending.copy(&Overrides::new().set("amount", 250.0)).unwrap();

    assert_eq!(table.apply(&pending).unwrap(), "Pending: $100.0");
    assert_eq!(table.apply(&raised).unwrap(), "Pending: $250.0");
    assert_ne!(pending, raised);
    assert_eq!(calls.pending.load(Ordering::SeqCst), 2);
}

#[test]
fn table_missing_a_tag_is_rejected_at_build_time() {
    let (registry, status) = define();
    let err = registry
        .matcher::<()>(status)
        .arm("Pending", |_| ())
        .arm("Completed", |_| ())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SealedError::NonExhaustiveMatch { ref missing, .. } if missing.len() == 1
    ));
    assert_eq!(
        err.to_string(),
        "non-exhaustive match on `PaymentStatus`: `Failed` not covered"
    );
}
