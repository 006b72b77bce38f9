//! Url-encoded form bodies.

use serde_json::{Map, Value};

use crate::errors::{ClientError, CustomResult};

/// Serializes a flat mapping to `application/x-www-form-urlencoded`,
/// omitting every key whose value stringifies empty. The omission is
/// load-bearing: several `/scripts` endpoints reject requests that carry
/// empty-string parameters.
pub fn encode(body: &Map<String, Value>) -> CustomResult<String, ClientError> {
    let pairs: Vec<(&str, String)> = body
        .iter()
        .filter_map(|(key, value)| {
            let value = stringify(value);
            (!value.is_empty()).then_some((key.as_str(), value))
        })
        .collect();

    serde_urlencoded::to_string(&pairs)
        .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
