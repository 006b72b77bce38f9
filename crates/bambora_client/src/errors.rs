//! Error types shared across the crate.

use error_stack::Report;

/// Alias for `Result` carrying an [`error_stack::Report`] in the error
/// position.
pub type CustomResult<T, E> = Result<T, Report<E>>;

/// Failures the library itself can produce.
///
/// Vendor-side failures that arrive as unparsable or empty bodies are not
/// errors: they normalize to [`crate::ApiResponse::Failure`] so callers see
/// one discriminated result type instead of a mix of raised errors and
/// sentinel mappings.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A request body could not be encoded into its wire format.
    #[error("Failed to encode request body")]
    RequestEncodingFailed,

    /// The base URL and path could not be combined into a request URL.
    #[error("Failed to construct the request URL")]
    UrlConstruction,

    /// The HTTP call failed below the protocol level (connection refused,
    /// DNS, TLS, interrupted body read).
    #[error("Failed to execute the request towards the payment gateway")]
    RequestFailed,

    /// The gateway answered with a content type no adapter handles. The
    /// raw body is carried for diagnosability since the vendor sometimes
    /// returns undocumented types on error.
    #[error("Unknown Content Type: {content_type}")]
    UnknownContentType { content_type: String, body: String },

    /// Merchant report lookups require a non-empty, numeric merchant id.
    #[error("Merchant id must be a non-empty string of digits")]
    InvalidMerchantId,

    /// The gateway reported an authentication failure inside an otherwise
    /// well-formed response payload.
    #[error("Authentication failed")]
    InvalidAuthentication { payload: serde_json::Value },

    /// The gateway rejected the request as invalid inside an otherwise
    /// well-formed response payload.
    #[error("The request is invalid")]
    InvalidRequest { payload: serde_json::Value },
}
