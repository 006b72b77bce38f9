//! Query-string response adapter for the legacy payment profile endpoint.
//!
//! `/scripts/payment_profile.asp` answers `text/html` whose body is an
//! `application/x-www-form-urlencoded` query string with vendor camelCase
//! keys. Single-valued keys unwrap to scalars, repeated keys stay ordered
//! lists, and every key is normalized to snake_case with the `ord_` prefix
//! stripped.

use serde_json::{Map, Value};

use crate::{
    response::{ApiResponse, Response},
    transform::to_snake_key,
};

pub fn parse(response: &Response) -> ApiResponse {
    let mut values: Map<String, Value> = Map::new();
    for token in response.body.split(['&', ';']) {
        // A token without `=` is not a key-value pair and carries no
        // value, so a plain-text error page never parses as data.
        if !token.contains('=') {
            continue;
        }
        for (key, value) in url::form_urlencoded::parse(token.as_bytes()) {
            let entry = values
                .entry(to_snake_key(&key))
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = entry {
                items.push(Value::String(value.into_owned()));
            }
        }
    }

    // Some endpoints signal failure with an empty body and a 200 status;
    // a parse yielding no values is never a success.
    if values.is_empty() {
        return ApiResponse::failure_from(response);
    }

    let unwrapped = values
        .into_iter()
        .map(|(key, value)| match value {
            Value::Array(mut items) if items.len() == 1 => {
                (key, items.pop().unwrap_or(Value::Null))
            }
            other => (key, other),
        })
        .collect();
    ApiResponse::Success(Value::Object(unwrapped))
}
