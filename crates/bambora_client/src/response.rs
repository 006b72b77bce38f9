//! Raw response envelope and the normalized result type.

use serde_json::Value;

/// The raw transport result: opaque to the adapters except for the
/// content type and body text.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
    /// The request body that produced this response, kept so that
    /// empty-bodied error responses can echo it back in the failure shape
    /// (matching the HTTP layer the gateway's older clients were built on).
    pub request_body: Option<String>,
}

/// Every resource method resolves to this discriminated result.
///
/// `Success` carries the parsed vendor payload with normalized keys.
/// `Failure` is the degraded `{status, body}` diagnostic shape produced
/// when the body cannot be parsed for the selected adapter — including the
/// gateway's habit of signalling failure with an empty 200.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(Value),
    Failure { status: u16, body: String },
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The parsed payload, when this is a success.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub(crate) fn failure_from(response: &Response) -> Self {
        let body = if response.body.is_empty() {
            response.request_body.clone().unwrap_or_default()
        } else {
            response.body.clone()
        };
        Self::Failure {
            status: response.status,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_echoes_the_request_body_when_the_response_body_is_empty() {
        let response = Response {
            status: 500,
            content_type: None,
            body: String::new(),
            request_body: Some("original request".to_string()),
        };
        assert_eq!(
            ApiResponse::failure_from(&response),
            ApiResponse::Failure {
                status: 500,
                body: "original request".to_string(),
            }
        );
    }

    #[test]
    fn failure_prefers_the_response_body() {
        let response = Response {
            status: 500,
            content_type: None,
            body: "GARTHIM! ATTACK!".to_string(),
            request_body: Some("original request".to_string()),
        };
        assert_eq!(
            ApiResponse::failure_from(&response),
            ApiResponse::Failure {
                status: 500,
                body: "GARTHIM! ATTACK!".to_string(),
            }
        );
    }
}
