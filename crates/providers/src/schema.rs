//! Argument checks against a tool's JSON input schema.
//!
//! Only the subset the catalogs use is enforced: `required`, per-property
//! `type` for the primitive JSON types, and `enum`. Unknown properties are
//! passed through untouched.

use serde_json::{Map, Value};

use crate::traits::ProviderError;

/// Validate `args` against `schema` and return them as an object.
///
/// `null` arguments are treated as an empty object. Properties explicitly set
/// to `null` count as absent.
pub fn validate_arguments(schema: &Value, args: Value) -> Result<Map<String, Value>, ProviderError> {
    let args = match args {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(ProviderError::InvalidArguments(format!(
                "arguments must be an object, got {}",
                type_name(&other)
            )))
        }
    };

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if args.get(field).map_or(true, Value::is_null) {
                return Err(ProviderError::InvalidArguments(format!(
                    "missing required argument `{field}`"
                )));
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(args);
    };

    for (field, value) in &args {
        if value.is_null() {
            continue;
        }
        let Some(prop) = properties.get(field) else {
            continue;
        };

        if let Some(expected) = prop.get("type").and_then(Value::as_str) {
            if !matches_type(expected, value) {
                return Err(ProviderError::InvalidArguments(format!(
                    "argument `{field}` must be of type {expected}, got {}",
                    type_name(value)
                )));
            }
        }

        if let Some(allowed) = prop.get("enum").and_then(Value::as_array) {
            if !allowed.contains(value) {
                let choices: Vec<String> = allowed
                    .iter()
                    .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                    .collect();
                return Err(ProviderError::InvalidArguments(format!(
                    "argument `{field}` must be one of: {}",
                    choices.join(", ")
                )));
            }
        }
    }

    Ok(args)
}

fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
