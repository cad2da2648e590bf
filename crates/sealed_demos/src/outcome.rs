//! The success/failure union convention for fallible operations.

use std::io::Write;

use sealed_ir::FieldType;
use sealed_match::outcome::{MESSAGE_FIELD, VALUE_FIELD};
use sealed_match::{MatchExt, OutcomeUnion};
use sealed_types::RegistryBuilder;
use sealed_value::Value;

use crate::DemoResult;

pub fn run(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "=== Result Union Convention ===")?;
    writeln!(out)?;

    let mut b = RegistryBuilder::new();
    let parsed = OutcomeUnion::define(&mut b, "ParseOutcome", FieldType::Int)?;
    let registry = b.finish()?;

    let describe = registry
        .matcher::<String>(parsed.union())
        .arm("Success", |f| {
            let value = f.get(VALUE_FIELD).map(ToString::to_string).unwrap_or_default();
            format!("Parsed: {value}")
        })
        .arm("Failure", |f| {
            format!("Could not parse: {}", f.str(MESSAGE_FIELD).unwrap_or_default())
        })
        .build()?;

    for input in ["42", "4x2"] {
        let result = input.parse::<i64>().map(Value::int);
        let outcome = parsed.from_result(&registry, result)?;
        writeln!(out, "{input:?} -> {outcome}")?;
        writeln!(out, "  {}", describe.apply(&outcome)?)?;

        let doubled = match parsed.to_result(&registry, &outcome)? {
            Ok(value) => value.as_int().map(|n| n * 2),
            Err(_) => None,
        };
        if let Some(doubled) = doubled {
            writeln!(out, "  Doubled: {doubled}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}
