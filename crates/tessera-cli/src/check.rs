//! # Check Subcommand
//!
//! Builds a value of a named type from a JSON native and reports what the
//! value object made of it: its type, emptiness, rendering, canonical
//! native, and whether that canonical native rebuilds an equal value.
//!
//! Exit codes: 0 when the input is valid, 1 when the type rejects it, 2 on
//! operational errors (unknown type, unreadable input).

use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tessera_core::{AnyValueObject, Native};

use crate::config::{CliConfig, OutputFormat};
use crate::kinds::TypeExpr;

/// Arguments for the `tessera check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Type name: a scalar, `list<scalar>`, `map<scalar>`, or a configured alias.
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// JSON native to build from. Read from stdin when omitted.
    #[arg(value_name = "JSON")]
    pub json: Option<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Outcome of building one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Concrete type name, e.g. `ValueObjectList<Date>`.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether construction succeeded.
    pub valid: bool,
    /// Whether the value is its type's empty instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    /// `Display` rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Canonical native.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<Native>,
    /// Whether the canonical native rebuilds an equal value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roundtrip: Option<bool>,
    /// Why construction failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Build `expr` from `native` and describe the result.
pub fn evaluate(expr: &TypeExpr, native: &Native) -> CheckReport {
    let type_name = expr.type_name();
    match expr.build(native) {
        Ok(value) => {
            let canonical = value.native_value();
            let roundtrip = roundtrips(expr, value.as_ref(), &canonical);
            CheckReport {
                type_name,
                valid: true,
                empty: Some(value.is_empty_value()),
                display: Some(value.to_string()),
                native: Some(canonical),
                roundtrip: Some(roundtrip),
                error: None,
            }
        }
        Err(e) => {
            tracing::info!(%type_name, error = %e, "input rejected");
            CheckReport {
                type_name,
                valid: false,
                empty: None,
                display: None,
                native: None,
                roundtrip: None,
                error: Some(e.to_string()),
            }
        }
    }
}

fn roundtrips(expr: &TypeExpr, value: &dyn AnyValueObject, canonical: &Native) -> bool {
    match expr.build(canonical) {
        Ok(rebuilt) => rebuilt.equals_any(value).unwrap_or(false),
        Err(e) => {
            tracing::warn!(error = %e, "canonical native failed to rebuild");
            false
        }
    }
}

/// Render a report as aligned text lines.
pub fn render_text(report: &CheckReport) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut lines = vec![
        ("type", report.type_name.clone()),
        ("valid", yes_no(report.valid).to_string()),
    ];
    if let Some(empty) = report.empty {
        lines.push(("empty", yes_no(empty).to_string()));
    }
    if let Some(display) = &report.display {
        lines.push(("display", display.clone()));
    }
    if let Some(native) = &report.native {
        lines.push(("native", native.to_string()));
    }
    if let Some(roundtrip) = report.roundtrip {
        lines.push(("roundtrip", yes_no(roundtrip).to_string()));
    }
    if let Some(error) = &report.error {
        lines.push(("error", error.clone()));
    }
    let width = lines.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;
    lines
        .into_iter()
        .map(|(key, value)| format!("{:<width$} {value}", format!("{key}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a report in the requested format.
pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when valid, 1 when the input is rejected.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let expr = config.resolve(&args.type_name)?;
    let raw = match &args.json {
        Some(json) => json.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read JSON from stdin")?;
            buffer
        }
    };
    let native: Native = serde_json::from_str(&raw).context("input is not valid JSON")?;
    tracing::debug!(%expr, "checking input");

    let report = evaluate(&expr, &native);
    println!("{}", render(&report, config.output_format(args.format))?);
    Ok(if report.valid { 0 } else { 1 })
}
