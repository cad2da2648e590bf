//! Property cells: lazy memoization, change notification, vetoed updates.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use sealed_props::{Memo, Observable, Vetoable};

use crate::DemoResult;

/// Lines produced by property callbacks, written out after each step.
type EventLog = Arc<Mutex<Vec<String>>>;

pub fn run(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "=== Properties ===")?;
    writeln!(out)?;
    lazy(out)?;
    observable(out)?;
    vetoable(out)?;
    Ok(())
}

fn flush(log: &EventLog, out: &mut dyn Write) -> io::Result<()> {
    for line in log.lock().drain(..) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

struct ExpensiveObject {
    data: Memo<String>,
}

impl ExpensiveObject {
    /// The cached data, and whether this call computed it.
    fn data(&self) -> (String, bool) {
        let mut computed = false;
        let data = self.data.get_or_init(|| {
            computed = true;
            "Expensive Result".to_string()
        });
        (data, computed)
    }
}

fn lazy(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Lazy ---")?;

    let object = ExpensiveObject { data: Memo::new() };
    writeln!(out, "Object created")?;
    for attempt in ["First", "Second"] {
        let (data, computed) = object.data();
        if computed {
            writeln!(out, "  Computing expensive data...")?;
        }
        writeln!(out, "{attempt} access: {data}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn observable(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Observable ---")?;

    let log = EventLog::default();
    let events = Arc::clone(&log);
    let mut name = Observable::new("name", "Initial".to_string(), move |prop, old, new| {
        events.lock().push(format!("  {prop} changed: {old} -> {new}"));
    });
    name.set("First".to_string());
    name.set("Second".to_string());
    flush(&log, out)?;
    writeln!(out, "Current {}: {}", name.name(), name.get())?;
    writeln!(out)?;
    Ok(())
}

fn vetoable(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Vetoable ---")?;

    let log = EventLog::default();
    let events = Arc::clone(&log);
    let mut price = Vetoable::new("price", 0.0_f64, move |prop, old, new| {
        let accepted = *new >= 0.0;
        let line = if accepted {
            format!("  Accepted: {prop} changed from {old:?} to {new:?}")
        } else {
            format!("  Rejected: {prop} cannot be negative")
        };
        events.lock().push(line);
        accepted
    });
    price.set(100.0);
    price.set(-50.0);
    flush(&log, out)?;
    writeln!(out, "Final price: {:?}", price.get())?;
    writeln!(out)?;
    Ok(())
}
