//! Review API response validation

use serde_json::Value;
use tracing::warn;

use crate::error::{PollError, Result};

/// Checks the shape of a review API response and returns its submissions
///
/// The response must be an object holding a `homeworks` array. A missing or
/// non-integer `current_date` is only logged, since the cursor can recover
/// from it on its own.
pub fn validate_response(response: &Value) -> Result<&[Value]> {
    let object = response.as_object().ok_or_else(|| {
        PollError::schema(format!("response is not an object: {}", kind(response)))
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| PollError::schema("response has no \"homeworks\" key"))?;

    let homeworks = homeworks.as_array().ok_or_else(|| {
        PollError::schema(format!("\"homeworks\" is not a list: {}", kind(homeworks)))
    })?;

    match object.get("current_date") {
        None | Some(Value::Null) => warn!("Response has no \"current_date\""),
        Some(value) if value.as_i64().is_none() => {
            warn!("\"current_date\" is not an integer: {}", kind(value))
        }
        Some(_) => {}
    }

    Ok(homeworks)
}

/// Server-reported timestamp to use as the next cursor, if usable
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
