//! Closed unions: a flat one, one made of sub-unions, and a native enum.

use std::io::Write;

use sealed_ir::FieldType;
use sealed_match::MatchExt;
use sealed_types::RegistryBuilder;
use sealed_value::FieldLayout;

use crate::DemoResult;

pub fn run(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "=== Sealed Types ===")?;
    writeln!(out)?;
    flat_union(out)?;
    nested_unions(out)?;
    native_enum(out)?;
    Ok(())
}

/// `Result = Success(data) | Error(message) | Loading`, every tag handled.
fn flat_union(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Flat union ---")?;

    let mut b = RegistryBuilder::new();
    let success = b.variant("Success", vec![FieldLayout::new("data", FieldType::Str)])?;
    let error = b.variant("Error", vec![FieldLayout::new("message", FieldType::Str)])?;
    let loading = b.unit_variant("Loading")?;
    let result = b
        .union("Result")?
        .members([success, error, loading])
        .finish()?;
    let registry = b.finish()?;

    let describe = registry
        .matcher::<String>(result)
        .arm("Success", |f| format!("Data: {}", f.str("data").unwrap_or_default()))
        .arm("Error", |f| format!("Error: {}", f.str("message").unwrap_or_default()))
        .arm("Loading", |_| "Loading...".to_string())
        .build()?;

    let values = [
        registry.construct(success, vec!["User data".into()])?,
        registry.construct(error, vec!["Network error".into()])?,
        registry.unit(loading)?,
    ];
    for value in &values {
        writeln!(out, "{}", describe.apply(value)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// `UiState = LoadingState | DataState | ErrorState`, with
/// `SuccessWithLoading` a member of both `LoadingState` and `DataState`.
fn nested_unions(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Sub-unions and multi-union membership ---")?;

    let mut b = RegistryBuilder::new();
    let idle = b.unit_variant("Idle")?;
    let loading = b.unit_variant("Loading")?;
    let success = b.variant("Success", vec![FieldLayout::new("data", FieldType::Str)])?;
    let empty = b.variant("Empty", vec![FieldLayout::new("message", FieldType::Str)])?;
    let network = b.variant("NetworkError", vec![FieldLayout::new("code", FieldType::Int)])?;
    let validation =
        b.variant("ValidationError", vec![FieldLayout::new("field", FieldType::Str)])?;
    let refreshing = b.variant(
        "SuccessWithLoading",
        vec![
            FieldLayout::new("data", FieldType::Str),
            FieldLayout::new("is_refreshing", FieldType::Bool),
        ],
    )?;

    let loading_state = b
        .union("LoadingState")?
        .members([idle, loading, refreshing])
        .finish()?;
    let data_state = b
        .union("DataState")?
        .members([success, empty, refreshing])
        .finish()?;
    let error_state = b
        .union("ErrorState")?
        .members([network, validation])
        .finish()?;
    let ui_state = b
        .union("UiState")?
        .sub_union(loading_state)
        .sub_union(data_state)
        .sub_union(error_state)
        .finish()?;
    let registry = b.finish()?;

    let describe = registry
        .matcher::<String>(ui_state)
        .arm("Idle", |_| "Idle".to_string())
        .arm("Loading", |_| "Loading...".to_string())
        .arm("Success", |f| format!("Success: {}", f.str("data").unwrap_or_default()))
        .arm("Empty", |f| format!("Empty: {}", f.str("message").unwrap_or_default()))
        .arm("NetworkError", |f| {
            format!("Network error (code: {})", f.int("code").unwrap_or_default())
        })
        .arm("ValidationError", |f| {
            format!("Validation failed: {}", f.str("field").unwrap_or_default())
        })
        .arm("SuccessWithLoading", |f| {
            format!(
                "Data: {} (refreshing: {})",
                f.str("data").unwrap_or_default(),
                f.bool("is_refreshing").unwrap_or_default()
            )
        })
        .build()?;

    let states = [
        registry.unit(idle)?,
        registry.unit(loading)?,
        registry.construct(success, vec!["User list".into()])?,
        registry.construct(empty, vec!["No results".into()])?,
        registry.construct(network, vec![404.into()])?,
        registry.construct(validation, vec!["email".into()])?,
        registry.construct(refreshing, vec!["Data".into(), true.into()])?,
    ];
    for state in &states {
        writeln!(out, "{}", describe.apply(state)?)?;
    }

    let both = &states[6];
    for union in [loading_state, data_state, error_state] {
        let name = registry
            .union(union)
            .map(|def| def.name().as_str())
            .unwrap_or_default();
        let tag = registry
            .tag_in(both, union)
            .map_or("-", |tag| tag.as_str());
        writeln!(out, "{} in {name}: {tag}", both.name())?;
    }
    writeln!(out)?;
    Ok(())
}

/// The same shape as a native enum: exhaustiveness is checked by rustc.
enum ApiResponse<T> {
    Success { data: T, cached: bool },
    Error { code: u16, message: String },
    Loading,
}

struct UserProfile {
    name: String,
}

fn native_enum(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Native enum ---")?;

    let responses = [
        ApiResponse::Success {
            data: UserProfile {
                name: "Alice".to_string(),
            },
            cached: false,
        },
        ApiResponse::Success {
            data: UserProfile {
                name: "Bob".to_string(),
            },
            cached: true,
        },
        ApiResponse::Error {
            code: 503,
            message: "Service unavailable".to_string(),
        },
        ApiResponse::Loading,
    ];
    for response in &responses {
        match response {
            ApiResponse::Success { data, cached } => {
                writeln!(out, "User: {}", data.name)?;
                if *cached {
                    writeln!(out, "(cached)")?;
                }
            }
            ApiResponse::Error { code, message } => writeln!(out, "Error {code}: {message}")?,
            ApiResponse::Loading => writeln!(out, "Loading...")?,
        }
    }
    writeln!(out)?;
    Ok(())
}
