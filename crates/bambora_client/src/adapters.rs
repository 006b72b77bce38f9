//! Response adapters and the content-type dispatch that selects them.

use error_stack::report;

use crate::{
    errors::{ClientError, CustomResult},
    response::{ApiResponse, Response},
};

pub mod json;
pub mod query_string;

/// Selects and runs the adapter for a response, purely from its
/// `Content-Type` header (parameters after `;` are discarded).
///
/// The gateway answers `application/json` on the `/v1` APIs and `text/html`
/// (carrying a query string) on `/scripts/payment_profile.asp`. Anything
/// else fails closed so undocumented vendor error types are surfaced with
/// their raw body instead of silently dropped.
pub fn parse(response: &Response) -> CustomResult<ApiResponse, ClientError> {
    let content_type = response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    if content_type == mime::APPLICATION_JSON.essence_str() {
        Ok(json::parse(response))
    } else if content_type == mime::TEXT_HTML.essence_str() {
        Ok(query_string::parse(response))
    } else {
        Err(report!(ClientError::UnknownContentType {
            content_type: content_type.to_string(),
            body: response.body.clone(),
        }))
    }
}
