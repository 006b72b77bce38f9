//! Merchant report endpoints.
//!
//! These live on the dedicated reporting host and authenticate with the
//! merchant's reporting passcode rather than an endpoint API key. The
//! gateway signals authentication and validation failures inside a 200
//! payload's `message` field, so those are promoted to errors here.

use crate::{
    auth::Credentials,
    errors::{ClientError, CustomResult},
    response::ApiResponse,
    rest::RestClient,
    secret::Secret,
};

const SUB_PATH: &str = "/v1/reports/merchants";

const AUTHENTICATION_FAILED: &str = "Authentication failed";
const REQUEST_INVALID: &str = "The request is invalid";

/// Client for `/v1/reports/merchants`.
#[derive(Debug)]
pub struct MerchantReportResource<'a> {
    client: &'a RestClient,
    credentials: Credentials,
}

impl<'a> MerchantReportResource<'a> {
    pub fn new(client: &'a RestClient, reporting_passcode: Secret<String>) -> Self {
        Self {
            client,
            credentials: client.credentials(reporting_passcode),
        }
    }

    /// Fetch the report for one merchant.
    pub fn get(&self, merchant_id: &str) -> CustomResult<ApiResponse, ClientError> {
        validate_merchant_id(merchant_id)?;
        let response = self.client.get(
            &format!("{SUB_PATH}/{merchant_id}"),
            Vec::new(),
            &self.credentials,
        )?;
        inspect(response)
    }

    /// Fetch the reports for every merchant the passcode can see.
    pub fn get_all(&self) -> CustomResult<ApiResponse, ClientError> {
        let response = self.client.get(SUB_PATH, Vec::new(), &self.credentials)?;
        inspect(response)
    }
}

fn validate_merchant_id(merchant_id: &str) -> CustomResult<(), ClientError> {
    if merchant_id.is_empty() || !merchant_id.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(error_stack::report!(ClientError::InvalidMerchantId)
            .attach_printable(format!("merchant id: {merchant_id:?}")));
    }
    Ok(())
}

/// The reporting endpoint answers rejected requests with a 200 JSON body
/// whose message field names the failure. Promote the two known ones to
/// errors so callers do not mistake them for report data. The gateway is
/// inconsistent about the field's casing (`message` vs `Message`) and a
/// trailing period, so both spellings are accepted.
fn inspect(response: ApiResponse) -> CustomResult<ApiResponse, ClientError> {
    let message = response
        .value()
        .and_then(|payload| payload.get("message").or_else(|| payload.get("Message")))
        .and_then(|message| message.as_str())
        .map(|message| message.trim_end_matches('.'));

    match (message, response.value()) {
        (Some(AUTHENTICATION_FAILED), Some(payload)) => {
            Err(error_stack::report!(ClientError::InvalidAuthentication {
                payload: payload.clone(),
            }))
        }
        (Some(REQUEST_INVALID), Some(payload)) => {
            Err(error_stack::report!(ClientError::InvalidRequest {
                payload: payload.clone(),
            }))
        }
        _ => Ok(response),
    }
}
