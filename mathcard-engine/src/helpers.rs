//! Helper functions shared by the analyzers and tools
//!
//! Argument extraction for tool calls and the small text builders used for
//! standard forms.

use mathcard_core::{EngineError, NumberFormat, Relation};
use serde::Serialize;
use serde_json::Value;

/// JSON type name for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a required numeric argument
pub fn number_arg(args: &Value, tool: &str, name: &str) -> Result<f64, EngineError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(EngineError::arg_missing(tool, name)),
        Some(value) => as_number(value, tool, name),
    }
}

/// Extract an optional numeric argument, falling back to `default`
pub fn optional_number(args: &Value, tool: &str, name: &str, default: f64) -> Result<f64, EngineError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => as_number(value, tool, name),
    }
}

fn as_number(value: &Value, tool: &str, name: &str) -> Result<f64, EngineError> {
    let n = value
        .as_f64()
        .ok_or_else(|| EngineError::arg_type(tool, name, "number", json_type_name(value)))?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(EngineError::invalid_param(format!("'{}' must be finite", name))
            .in_tool(tool)
            .for_arg(name))
    }
}

/// Extract a required string argument
pub fn string_arg<'a>(args: &'a Value, tool: &str, name: &str) -> Result<&'a str, EngineError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(EngineError::arg_missing(tool, name)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(EngineError::arg_type(tool, name, "string", json_type_name(other))),
    }
}

/// Extract an inequality relation such as `">="`
pub fn relation_arg(args: &Value, tool: &str, name: &str) -> Result<Relation, EngineError> {
    let text = string_arg(args, tool, name)?;
    text.parse::<Relation>()
        .map_err(|e| EngineError::from(e).in_tool(tool).for_arg(name))
}

/// Extract an optional non-negative integer argument
pub fn optional_count(args: &Value, tool: &str, name: &str, default: usize) -> Result<usize, EngineError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| EngineError::arg_type(tool, name, "non-negative integer", json_type_name(value))),
    }
}

/// Serialize an engine record for the tool boundary
pub fn to_json<T: Serialize>(record: &T) -> Result<Value, EngineError> {
    serde_json::to_value(record).map_err(EngineError::from)
}

/// Polynomial text from `(coefficient, variable part)` terms in order.
///
/// Zero terms are skipped and signs are folded into the joins:
/// `[(2, "x²"), (-3, "x"), (1, "")]` gives `2x² - 3x + 1`.
pub fn polynomial_text(fmt: NumberFormat, terms: &[(f64, &str)]) -> String {
    let mut out = String::new();
    for &(coef, var) in terms {
        if fmt.compact(coef) == "0" {
            continue;
        }
        let magnitude = if out.is_empty() { coef } else { coef.abs() };
        let body = if var.is_empty() {
            fmt.compact(magnitude)
        } else {
            format!("{}{}", fmt.coefficient(magnitude), var)
        };
        if out.is_empty() {
            out = body;
        } else {
            let sign = if coef < 0.0 { '-' } else { '+' };
            out = format!("{} {} {}", out, sign, body);
        }
    }
    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// `body`, `-body` or `k·body` for a scalar multiple
pub fn scaled(fmt: NumberFormat, coef: f64, body: &str) -> String {
    match fmt.compact(coef).as_str() {
        "1" => body.to_string(),
        "-1" => format!("-{}", body),
        other => format!("{}·{}", other, body),
    }
}

/// ` + d` / ` - |d|`, or nothing for zero
pub fn offset(fmt: NumberFormat, d: f64) -> String {
    if fmt.compact(d) == "0" {
        String::new()
    } else {
        format!(" {}", fmt.signed(d))
    }
}
