//! Guarded arms: first passing guard wins, failed guards fall through.

use std::io::Write;

use sealed_ir::FieldType;
use sealed_match::{Fields, MatchExt};
use sealed_types::RegistryBuilder;
use sealed_value::FieldLayout;

use crate::DemoResult;

pub fn run(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "=== Guarded Matching ===")?;
    writeln!(out)?;
    user_status(out)?;
    order_status(out)?;
    payment_status(out)?;
    Ok(())
}

fn age_in(f: &Fields<'_>, range: std::ops::RangeInclusive<i64>) -> bool {
    f.int("age").is_some_and(|age| range.contains(&age))
}

fn working_age(f: &Fields<'_>) -> bool {
    age_in(f, 18..=64)
}

fn days_since_placed(f: &Fields<'_>) -> i64 {
    f.int("days_since_placed").unwrap_or_default()
}

fn estimated_days(f: &Fields<'_>) -> i64 {
    f.int("estimated_days").unwrap_or_default()
}

fn is_priority(f: &Fields<'_>) -> bool {
    f.bool("is_priority") == Some(true)
}

fn tracking_number<'a>(f: &Fields<'a>) -> &'a str {
    f.str("tracking_number").unwrap_or_default()
}

fn amount(f: &Fields<'_>) -> f64 {
    f.float("amount").unwrap_or_default()
}

/// One tag, several guards, and a fallback for anything left.
fn user_status(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Guards on a single tag ---")?;

    let mut b = RegistryBuilder::new();
    let user = b.variant(
        "User",
        vec![
            FieldLayout::new("name", FieldType::Str),
            FieldLayout::new("age", FieldType::Int),
            FieldLayout::new("is_verified", FieldType::Bool),
        ],
    )?;
    let people = b.union("People")?.member(user).finish()?;
    let registry = b.finish()?;

    let status = registry
        .matcher::<&'static str>(people)
        .arm_if("User", |f| age_in(f, 0..=17), |_| "Minor")
        .arm_if(
            "User",
            |f| working_age(f) && f.bool("is_verified") == Some(true),
            |_| "Adult (verified)",
        )
        .arm_if("User", working_age, |_| "Adult (unverified)")
        .arm_if("User", |f| age_in(f, 65..=200), |_| "Senior")
        .otherwise(|_| "Unknown")
        .build()?;

    let users = [
        ("Alice", 16, false),
        ("Bob", 25, true),
        ("Charlie", 30, false),
        ("Dave", 70, true),
        ("Eve", -1, true),
    ];
    for (name, age, verified) in users {
        let value = registry.construct(user, vec![name.into(), age.into(), verified.into()])?;
        writeln!(out, "{name}: {}", status.apply(&value)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Several guarded arms per tag, in the order they must be tried.
fn order_status(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Guards across tags ---")?;

    let mut b = RegistryBuilder::new();
    let pending = b.variant(
        "Pending",
        vec![FieldLayout::new("days_since_placed", FieldType::Int)],
    )?;
    let processing = b.variant(
        "Processing",
        vec![
            FieldLayout::new("estimated_days", FieldType::Int),
            FieldLayout::new("is_priority", FieldType::Bool),
        ],
    )?;
    let shipped = b.variant(
        "Shipped",
        vec![
            FieldLayout::new("tracking_number", FieldType::Str),
            FieldLayout::new("is_international", FieldType::Bool),
        ],
    )?;
    let delivered = b.unit_variant("Delivered")?;
    let order = b
        .union("OrderStatus")?
        .members([pending, processing, shipped, delivered])
        .finish()?;
    let registry = b.finish()?;

    let message = registry
        .matcher::<String>(order)
        .arm_if(
            "Pending",
            |f| days_since_placed(f) > 3,
            |f| format!("Warning: order pending for {} days", days_since_placed(f)),
        )
        .arm("Pending", |f| format!("Order pending ({} days)", days_since_placed(f)))
        .arm_if(
            "Processing",
            |f| is_priority(f) && estimated_days(f) <= 1,
            |_| "Priority processing - arrives tomorrow".to_string(),
        )
        .arm_if("Processing", is_priority, |f| {
            format!("Priority processing - arrives in {} days", estimated_days(f))
        })
        .arm("Processing", |f| {
            format!("Processing - arrives in {} days", estimated_days(f))
        })
        .arm_if(
            "Shipped",
            |f| f.bool("is_international") == Some(true),
            |f| format!("International shipping (tracking: {})", tracking_number(f)),
        )
        .arm("Shipped", |f| {
            format!("Shipping (tracking: {})", tracking_number(f))
        })
        .arm("Delivered", |_| "Delivered".to_string())
        .build()?;

    let orders = [
        registry.construct(pending, vec![1.into()])?,
        registry.construct(pending, vec![5.into()])?,
        registry.construct(processing, vec![1.into(), true.into()])?,
        registry.construct(processing, vec![2.into(), true.into()])?,
        registry.construct(processing, vec![3.into(), false.into()])?,
        registry.construct(shipped, vec!["ABC123".into(), false.into()])?,
        registry.construct(shipped, vec!["INT456".into(), true.into()])?,
        registry.unit(delivered)?,
    ];
    for value in &orders {
        writeln!(out, "{}", message.apply(value)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Handlers that compute from several fields.
fn payment_status(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Payment status ---")?;

    let mut b = RegistryBuilder::new();
    let pending = b.variant("Pending", vec![FieldLayout::new("amount", FieldType::Float)])?;
    let processing = b.variant(
        "Processing",
        vec![
            FieldLayout::new("amount", FieldType::Float),
            FieldLayout::new("fee", FieldType::Float),
        ],
    )?;
    let completed = b.variant(
        "Completed",
        vec![
            FieldLayout::new("amount", FieldType::Float),
            FieldLayout::new("transaction_id", FieldType::Str),
        ],
    )?;
    let failed = b.variant("Failed", vec![FieldLayout::new("reason", FieldType::Str)])?;
    let status = b
        .union("PaymentStatus")?
        .members([pending, processing, completed, failed])
        .finish()?;
    let registry = b.finish()?;

    let message = registry
        .matcher::<String>(status)
        .arm("Pending", |f| format!("Payment pending: ${:?}", amount(f)))
        .arm("Processing", |f| {
            let fee = f.float("fee").unwrap_or_default();
            format!(
                "Processing: ${:?} + fee ${fee:?} = ${:?}",
                amount(f),
                amount(f) + fee
            )
        })
        .arm("Completed", |f| {
            format!(
                "Completed: ${:?} (transaction: {})",
                amount(f),
                f.str("transaction_id").unwrap_or_default()
            )
        })
        .arm("Failed", |f| {
            format!("Failed: {}", f.str("reason").unwrap_or_default())
        })
        .build()?;

    let payments = [
        registry.construct(pending, vec![100.0.into()])?,
        registry.construct(processing, vec![100.0.into(), 2.5.into()])?,
        registry.construct(completed, vec![102.5.into(), "TXN-12345".into()])?,
        registry.construct(failed, vec!["Card declined".into()])?,
    ];
    for value in &payments {
        writeln!(out, "{}", message.apply(value)?)?;
    }
    writeln!(out)?;
    Ok(())
}
