//! Crate-wide constants.

/// Base64 engine used for passcode construction.
pub const BASE64_ENGINE: base64::engine::GeneralPurpose =
    base64::engine::general_purpose::STANDARD;

/// Default base URL for the merchant reports API.
pub const REPORTS_BASE_URL: &str = "https://api.na.bambora.com";

/// Header names used on outgoing requests.
pub mod headers {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const SUB_MERCHANT_ID: &str = "Sub-Merchant-Id";
}

/// Content type sent with XML report bodies.
pub const APPLICATION_XML: &str = "application/xml";

/// XML declaration prepended to document-mode request bodies. The gateway
/// expects single-quoted attributes here.
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";
