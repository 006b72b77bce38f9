//! Batch payment file upload.

use serde_json::{json, Value};

use crate::{
    auth::Credentials,
    builders::{
        batch_payment_csv::{self, BatchTransaction},
        multipart::MultipartMixedRequest,
    },
    errors::{ClientError, CustomResult},
    response::ApiResponse,
    rest::RestClient,
    secret::Secret,
};

const SUB_PATH: &str = "/v1/batchpayments";

/// Upload options sent alongside the transaction file.
///
/// `process_date` only takes effect when `process_now` is `0`.
#[derive(Debug, Clone)]
pub struct BatchPaymentOptions {
    pub process_now: u8,
    pub process_date: Option<String>,
}

impl Default for BatchPaymentOptions {
    fn default() -> Self {
        Self {
            process_now: 1,
            process_date: None,
        }
    }
}

/// Client for `/v1/batchpayments`: bank EFT (CAD) and ACH (USD) transfers,
/// uploaded as a CSV file inside a multipart request.
#[derive(Debug)]
pub struct BatchPaymentResource<'a> {
    client: &'a RestClient,
    credentials: Credentials,
}

impl<'a> BatchPaymentResource<'a> {
    pub fn new(client: &'a RestClient, api_key: Secret<String>) -> Self {
        Self {
            client,
            credentials: client.credentials(api_key),
        }
    }

    /// Post a batch of bank transactions.
    ///
    /// The transactions are serialized to CSV and become the `data` part of
    /// the upload; `options` plus the configured sub-merchant id become the
    /// `criteria` part.
    pub fn create(
        &self,
        transactions: &[BatchTransaction],
        options: BatchPaymentOptions,
    ) -> CustomResult<ApiResponse, ClientError> {
        let file_contents = batch_payment_csv::build(transactions)?;
        let payload = MultipartMixedRequest::new(
            &self.criteria(&options),
            self.filename(),
            file_contents,
        )?;
        self.client
            .post_multipart(SUB_PATH, payload, &self.credentials)
    }

    fn criteria(&self, options: &BatchPaymentOptions) -> Value {
        let mut criteria = json!({
            "process_now": options.process_now,
            "sub_merchant_id": self.client.sub_merchant_id(),
        });
        if let (Some(fields), Some(date)) = (criteria.as_object_mut(), &options.process_date) {
            fields.insert("process_date".to_string(), Value::String(date.clone()));
        }
        criteria
    }

    fn filename(&self) -> String {
        format!(
            "merchant_{}.txt",
            self.client.sub_merchant_id().unwrap_or_default()
        )
    }
}
