//! JSON response adapter.

use serde_json::Value;

use crate::response::{ApiResponse, Response};

/// Parses the body as JSON, preserving structure and value types. Parse
/// failure degrades to the `{status, body}` failure shape rather than
/// erroring: the gateway routinely returns plain-text bodies under a JSON
/// content type on server errors.
pub fn parse(response: &Response) -> ApiResponse {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => ApiResponse::Success(value),
        Err(_) => ApiResponse::failure_from(response),
    }
}
