//! Data variants: structural equality, `copy`, defaults, validated
//! construction, and an immutable bank account.

use std::io::Write;

use sealed_ir::{FieldType, VariantId};
use sealed_match::MatchExt;
use sealed_types::{RegistryBuilder, UnionRegistry};
use sealed_value::{FieldLayout, Overrides, Value, VariantValue};

use crate::{DemoError, DemoResult};

pub fn run(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "=== Data Variants ===")?;
    writeln!(out)?;
    person(out)?;
    configuration(out)?;
    optional_fields(out)?;
    validated(out)?;
    bank_account(out)?;
    Ok(())
}

/// Equality by value, identity by instance, `copy` leaves the source alone.
fn person(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Equality and copy ---")?;

    let mut b = RegistryBuilder::new();
    let person = b.variant(
        "Person",
        vec![
            FieldLayout::new("name", FieldType::Str),
            FieldLayout::new("age", FieldType::Int),
            FieldLayout::new("email", FieldType::Str),
        ],
    )?;
    let registry = b.finish()?;

    let fields = || -> Vec<Value> { vec!["Alice".into(), 30.into(), "alice@example.com".into()] };
    let person1 = registry.construct(person, fields())?;
    let person2 = registry.construct(person, fields())?;

    writeln!(out, "person1 == person2: {}", person1 == person2)?;
    writeln!(out, "person1 === person2: {}", person1.same_instance(&person2))?;
    writeln!(out, "person1: {person1}")?;

    let person3 = person1.copy(&Overrides::new().set("age", 31))?;
    writeln!(out, "person3 (age changed): {person3}")?;
    writeln!(out, "person1 after copy: {person1}")?;

    let parts: Vec<String> = person1.destructure().iter().map(ToString::to_string).collect();
    writeln!(out, "Destructured: {}", parts.join(", "))?;

    match person1.copy(&Overrides::new().set("nickname", "Al")) {
        Ok(copied) => writeln!(out, "Copied: {copied}")?,
        Err(err) => writeln!(out, "Copy rejected: {err}")?,
    }
    writeln!(out)?;
    Ok(())
}

/// Omitted fields take their declared defaults.
fn configuration(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Defaults ---")?;

    let mut b = RegistryBuilder::new();
    let config = b.variant(
        "Configuration",
        vec![
            FieldLayout::with_default("host", FieldType::Str, "localhost"),
            FieldLayout::with_default("port", FieldType::Int, 8080),
            FieldLayout::with_default("debug", FieldType::Bool, false),
        ],
    )?;
    let registry = b.finish()?;

    let default = registry.construct_named(config, &[])?;
    let production = registry.construct_named(
        config,
        &[("host", "api.example.com".into()), ("port", 443.into())],
    )?;
    writeln!(out, "Default: {default}")?;
    writeln!(out, "Production: {production}")?;
    writeln!(out)?;
    Ok(())
}

/// An optional field defaulting to `None`, filled in later through `copy`.
fn optional_fields(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Optional fields ---")?;

    let mut b = RegistryBuilder::new();
    let success = b.variant("Success", vec![FieldLayout::new("data", FieldType::Str)])?;
    let error = b.variant(
        "Error",
        vec![
            FieldLayout::new("message", FieldType::Str),
            FieldLayout::with_default("code", FieldType::optional(FieldType::Int), Value::None),
        ],
    )?;
    let response = b.union("Response")?.members([success, error]).finish()?;
    let registry = b.finish()?;

    let describe = registry
        .matcher::<String>(response)
        .arm("Success", |f| {
            format!("Request succeeded: {}", f.str("data").unwrap_or_default())
        })
        .arm("Error", |f| {
            let message = f.str("message").unwrap_or_default();
            match f.get("code").and_then(Value::as_some).and_then(Value::as_int) {
                Some(code) => format!("Request failed: {message} (code {code})"),
                None => format!("Request failed: {message}"),
            }
        })
        .build()?;

    let ok = registry.construct(success, vec!["OK".into()])?;
    let timeout = registry.construct_named(error, &[("message", "Timeout".into())])?;
    let gateway = timeout.copy(&Overrides::new().set("code", Value::some(504.into())))?;

    for value in [&ok, &timeout, &gateway] {
        writeln!(out, "{value} -> {}", describe.apply(value)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Only well-formed addresses become `Email` values.
fn create_email(
    registry: &UnionRegistry,
    email: VariantId,
    raw: &str,
) -> DemoResult<Option<VariantValue>> {
    let well_formed = raw
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
    if !well_formed {
        return Ok(None);
    }
    Ok(Some(registry.construct(email, vec![raw.into()])?))
}

fn validated(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Validated construction ---")?;

    let mut b = RegistryBuilder::new();
    let email = b.variant("Email", vec![FieldLayout::new("value", FieldType::Str)])?;
    let registry = b.finish()?;

    match create_email(&registry, email, "user@example.com")? {
        Some(valid) => writeln!(out, "Valid email: {valid}")?,
        None => writeln!(out, "Valid email: None")?,
    }
    match create_email(&registry, email, "not-an-email")? {
        Some(invalid) => writeln!(out, "Invalid email: {invalid}")?,
        None => writeln!(out, "Invalid email: None")?,
    }
    writeln!(out)?;
    Ok(())
}

/// `Money`, `Transaction` and `Account` variants; every operation returns a
/// new account.
struct Bank {
    registry: UnionRegistry,
    money: VariantId,
    transaction: VariantId,
    account: VariantId,
}

impl Bank {
    fn new() -> DemoResult<Self> {
        let mut b = RegistryBuilder::new();
        let funds = b.declare_union("Funds")?;
        let entry = b.declare_union("Entry")?;

        let money = b.variant(
            "Money",
            vec![
                FieldLayout::new("amount", FieldType::Float),
                FieldLayout::with_default("currency", FieldType::Str, "USD"),
            ],
        )?;
        let transaction = b.variant(
            "Transaction",
            vec![
                FieldLayout::new("amount", FieldType::union(funds, "Funds")),
                FieldLayout::new("kind", FieldType::Str),
            ],
        )?;
        let account = b.variant(
            "Account",
            vec![
                FieldLayout::new("number", FieldType::Str),
                FieldLayout::new("balance", FieldType::union(funds, "Funds")),
                FieldLayout::new(
                    "transactions",
                    FieldType::list(FieldType::union(entry, "Entry")),
                ),
            ],
        )?;
        b.union("Funds")?.member(money).finish()?;
        b.union("Entry")?.member(transaction).finish()?;

        Ok(Bank {
            registry: b.finish()?,
            money,
            transaction,
            account,
        })
    }

    fn usd(&self, amount: f64) -> DemoResult<VariantValue> {
        if amount < 0.0 {
            return Err(DemoError::Rejected("Amount cannot be negative"));
        }
        Ok(self
            .registry
            .construct_named(self.money, &[("amount", amount.into())])?)
    }

    fn open(&self, number: &str, initial: VariantValue) -> DemoResult<VariantValue> {
        Ok(self.registry.construct(
            self.account,
            vec![number.into(), initial.into(), Value::list(Vec::new())],
        )?)
    }

    fn deposit(&self, account: &VariantValue, amount: &VariantValue) -> DemoResult<VariantValue> {
        let balance = balance(account)?;
        let (current, currency) = funds(balance)?;
        let (added, added_currency) = funds(amount)?;
        if currency != added_currency {
            return Err(DemoError::Rejected("Currency mismatch"));
        }
        self.record(account, balance, current + added, amount, "DEPOSIT")
    }

    fn withdraw(&self, account: &VariantValue, amount: &VariantValue) -> DemoResult<VariantValue> {
        let balance = balance(account)?;
        let (current, currency) = funds(balance)?;
        let (taken, taken_currency) = funds(amount)?;
        if currency != taken_currency {
            return Err(DemoError::Rejected("Currency mismatch"));
        }
        if taken > current {
            return Err(DemoError::Rejected("Insufficient funds"));
        }
        self.record(account, balance, current - taken, amount, "WITHDRAWAL")
    }

    fn record(
        &self,
        account: &VariantValue,
        balance: &VariantValue,
        new_amount: f64,
        amount: &VariantValue,
        kind: &str,
    ) -> DemoResult<VariantValue> {
        let entry = self
            .registry
            .construct(self.transaction, vec![amount.clone().into(), kind.into()])?;
        let mut history = transactions(account)?.to_vec();
        history.push(entry.into());

        let new_balance = balance.copy(&Overrides::new().set("amount", new_amount))?;
        Ok(account.copy(
            &Overrides::new()
                .set("balance", new_balance)
                .set("transactions", history),
        )?)
    }
}

fn malformed() -> DemoError {
    DemoError::Rejected("Malformed account")
}

fn balance(account: &VariantValue) -> DemoResult<&VariantValue> {
    account
        .get("balance")
        .and_then(Value::as_variant)
        .ok_or_else(malformed)
}

fn transactions(account: &VariantValue) -> DemoResult<&[Value]> {
    account
        .get("transactions")
        .and_then(Value::as_list)
        .ok_or_else(malformed)
}

/// `(amount, currency)` of a `Money` value.
fn funds(money: &VariantValue) -> DemoResult<(f64, &str)> {
    let amount = money.get("amount").and_then(Value::as_float);
    let currency = money.get("currency").and_then(Value::as_str);
    amount.zip(currency).ok_or_else(malformed)
}

fn show_funds(money: &VariantValue) -> DemoResult<String> {
    let (amount, currency) = funds(money)?;
    Ok(format!("{currency} {amount:?}"))
}

fn bank_account(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Immutable bank account ---")?;

    let bank = Bank::new()?;
    let account = bank.open("ACC-001", bank.usd(1000.0)?)?;
    writeln!(out, "Initial balance: {}", show_funds(balance(&account)?)?)?;

    let account = bank.deposit(&account, &bank.usd(500.0)?)?;
    writeln!(out, "After deposit: {}", show_funds(balance(&account)?)?)?;

    let account = bank.withdraw(&account, &bank.usd(200.0)?)?;
    writeln!(out, "After withdrawal: {}", show_funds(balance(&account)?)?)?;

    writeln!(out, "Transaction history:")?;
    for entry in transactions(&account)?.iter().filter_map(Value::as_variant) {
        let kind = entry.get("kind").and_then(Value::as_str).unwrap_or_default();
        let amount = entry
            .get("amount")
            .and_then(Value::as_variant)
            .ok_or_else(malformed)?;
        writeln!(out, "  {kind}: {}", show_funds(amount)?)?;
    }

    match bank.withdraw(&account, &bank.usd(5000.0)?) {
        Ok(_) => writeln!(out, "Overdraft accepted")?,
        Err(err) => writeln!(out, "Overdraft rejected: {err}")?,
    }
    writeln!(out, "Balance unchanged: {}", show_funds(balance(&account)?)?)?;
    writeln!(out)?;
    Ok(())
}
