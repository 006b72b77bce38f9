//! Bank payment profile endpoint under `/scripts`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    errors::{ClientError, CustomResult},
    response::ApiResponse,
    rest::RestClient,
    secret::{PeekInterface, Secret},
    transform,
};

use super::profiles::to_value;

const SUB_PATH: &str = "/scripts/payment_profile.asp";
const SERVICE_VERSION: &str = "1.0";
const RESPONSE_FORMAT: &str = "QS";
const CREATE_OPERATION_TYPE: &str = "N";

/// Caller-supplied fields for a bank payment profile.
///
/// Every field is optional; absent fields stay out of the form body since
/// the endpoint rejects empty-string parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BankProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    /// `CA` or `US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Client for `/scripts/payment_profile.asp`. Unlike the `/v1` endpoints,
/// authentication travels in the form body (`passCode`) rather than an
/// `Authorization` header, and the gateway answers with a query string.
#[derive(Debug)]
pub struct BankProfileResource<'a> {
    client: &'a RestClient,
    api_key: Secret<String>,
}

impl<'a> BankProfileResource<'a> {
    pub fn new(client: &'a RestClient, api_key: Secret<String>) -> Self {
        Self { client, api_key }
    }

    /// Create a bank payment profile.
    pub fn create(&self, profile: &BankProfileParams) -> CustomResult<ApiResponse, ClientError> {
        let body = self.profile_body(profile)?;
        self.client.post_form(SUB_PATH, body)
    }

    fn profile_body(
        &self,
        profile: &BankProfileParams,
    ) -> CustomResult<Map<String, Value>, ClientError> {
        let mut fields = match to_value(profile)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        fields.insert(
            "pass_code".to_string(),
            Value::String(self.api_key.peek().clone()),
        );
        fields.insert(
            "merchant_id".to_string(),
            Value::String(self.client.merchant_id().to_string()),
        );
        if let Some(sub_merchant_id) = self.client.sub_merchant_id() {
            fields.insert(
                "sub_merchant_id".to_string(),
                Value::String(sub_merchant_id.to_string()),
            );
        }
        fields.insert(
            "service_version".to_string(),
            Value::String(SERVICE_VERSION.to_string()),
        );
        fields.insert(
            "response_format".to_string(),
            Value::String(RESPONSE_FORMAT.to_string()),
        );
        fields.insert(
            "operation_type".to_string(),
            Value::String(CREATE_OPERATION_TYPE.to_string()),
        );

        Ok(fields
            .into_iter()
            .map(|(key, value)| (transform::to_vendor_key(&key), value))
            .collect())
    }
}
