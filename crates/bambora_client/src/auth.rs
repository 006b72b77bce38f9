//! Passcode authorization header construction.

use base64::Engine;

use crate::{
    consts::{headers, BASE64_ENGINE},
    secret::{PeekInterface, Secret},
};

/// Per-endpoint credentials held by a resource client.
///
/// The gateway issues a separate API key ("pass code") per endpoint family,
/// while the merchant and sub-merchant ids are account-wide.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub merchant_id: String,
    pub sub_merchant_id: Option<String>,
    pub api_key: Secret<String>,
}

impl Credentials {
    /// The `Passcode` token: base64 of `merchant_id:api_key`, without line
    /// breaks.
    pub fn passcode(&self) -> String {
        BASE64_ENGINE.encode(format!("{}:{}", self.merchant_id, self.api_key.peek()))
    }
}

/// Builds the header set for one request.
#[derive(Debug)]
pub struct Headers<'a> {
    credentials: &'a Credentials,
    content_type: Option<String>,
}

impl<'a> Headers<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            content_type: None,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn build(self) -> Vec<(String, String)> {
        let mut headers = vec![(
            headers::AUTHORIZATION.to_string(),
            format!("Passcode {}", self.credentials.passcode()),
        )];
        if let Some(content_type) = self.content_type {
            headers.push((headers::CONTENT_TYPE.to_string(), content_type));
        }
        if let Some(sub_merchant_id) = &self.credentials.sub_merchant_id {
            headers.push((headers::SUB_MERCHANT_ID.to_string(), sub_merchant_id.clone()));
        }
        headers
    }
}
