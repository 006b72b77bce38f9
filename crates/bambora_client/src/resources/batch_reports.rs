//! Batch payment report endpoint under `/scripts/reporting`.

use std::{collections::HashMap, sync::LazyLock};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    builders::xml::XmlRequestBody,
    errors::{ClientError, CustomResult},
    response::ApiResponse,
    rest::RestClient,
    secret::{PeekInterface, Secret},
};

use super::profiles::to_value;

const SUB_PATH: &str = "/scripts/reporting/report.aspx";
const REPORT_FORMAT: &str = "JSON";
const REPORT_VERSION: &str = "2.0";
const SESSION_SOURCE: &str = "external";

/// Sentinel used when a record carries a message id the table does not
/// know. The gateway never validates ids, so new codes can appear without
/// notice; surfacing them beats dropping them.
pub const UNKNOWN_MESSAGE: &str = "Unknown message ID";

/// Bank-to-bank transaction validation messages keyed by the gateway's
/// numeric message id.
static MESSAGES: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (1, "Transaction approved"),
        (2, "Transaction declined"),
        (3, "Invalid institution number"),
        (4, "Invalid transit number"),
        (5, "Invalid account number"),
        (6, "Invalid amount"),
        (7, "Account closed"),
        (8, "Account frozen"),
        (9, "Insufficient funds"),
        (10, "Payment stopped or recalled"),
        (11, "No agreement existed"),
        (12, "Not according to agreement"),
        (13, "Agreement revoked"),
        (14, "Default by a financial institution"),
        (15, "Customer initiated return"),
        (16, "Account not found"),
        (17, "Invalid customer code"),
    ])
});

/// Report filters for a batch payment status query.
///
/// The filter triplet (`rpt_filter_by_1`, `rpt_filter_value_1`,
/// `rpt_operation_type_1`) travels together; absent fields stay out of the
/// XML body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReportFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpt_filter_by_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpt_filter_value_1: Option<Value>,
    /// Comparison operator for the filter, e.g. `EQ`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpt_operation_type_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpt_from_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpt_to_date_time: Option<String>,
    /// `BatchPaymentsEFT` or `BatchPaymentsACH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

/// Client for `/scripts/reporting/report.aspx`: statuses of batch
/// bank-to-bank transactions. Authenticates through a `passCode` element
/// in the XML body.
#[derive(Debug)]
pub struct BatchReportResource<'a> {
    client: &'a RestClient,
    api_key: Secret<String>,
}

impl<'a> BatchReportResource<'a> {
    pub fn new(client: &'a RestClient, api_key: Secret<String>) -> Self {
        Self { client, api_key }
    }

    /// Query batch transaction statuses.
    ///
    /// Successful results always carry a `record` array (empty for
    /// zero-result queries) and each record gains a `messages` list derived
    /// from its `message_id` field.
    pub fn show(&self, filters: &BatchReportFilters) -> CustomResult<ApiResponse, ClientError> {
        let body = XmlRequestBody::document(self.report_body(filters)?);
        Ok(post_process(self.client.post_xml(SUB_PATH, body)?))
    }

    fn report_body(
        &self,
        filters: &BatchReportFilters,
    ) -> CustomResult<Map<String, Value>, ClientError> {
        let mut body = match to_value(filters)? {
            Value::Object(body) => body,
            _ => Map::new(),
        };
        body.insert(
            "rpt_format".to_string(),
            Value::String(REPORT_FORMAT.to_string()),
        );
        body.insert(
            "rpt_version".to_string(),
            Value::String(REPORT_VERSION.to_string()),
        );
        body.insert(
            "session_source".to_string(),
            Value::String(SESSION_SOURCE.to_string()),
        );
        body.insert(
            "merchant_id".to_string(),
            Value::String(self.client.merchant_id().to_string()),
        );
        body.insert(
            "pass_code".to_string(),
            Value::String(self.api_key.peek().clone()),
        );
        if let Some(sub_merchant_id) = self.client.sub_merchant_id() {
            body.insert(
                "sub_merchant_id".to_string(),
                Value::String(sub_merchant_id.to_string()),
            );
        }
        Ok(body)
    }
}

fn post_process(response: ApiResponse) -> ApiResponse {
    match response {
        ApiResponse::Success(Value::Object(mut report)) => {
            let records = match report.remove("record") {
                Some(Value::Array(records)) => {
                    records.into_iter().map(annotate_record).collect()
                }
                // Zero-result queries omit the key entirely.
                _ => Vec::new(),
            };
            report.insert("record".to_string(), Value::Array(records));
            ApiResponse::Success(Value::Object(report))
        }
        other => other,
    }
}

fn annotate_record(record: Value) -> Value {
    match record {
        Value::Object(mut record) => {
            if let Some(message_id) = record.get("message_id") {
                let messages = resolve_messages(message_id);
                record.insert("messages".to_string(), Value::Array(messages));
            }
            Value::Object(record)
        }
        other => other,
    }
}

fn resolve_messages(message_id: &Value) -> Vec<Value> {
    let ids = match message_id {
        Value::String(ids) => ids.clone(),
        other => other.to_string(),
    };
    ids.split(',')
        .map(|id| {
            let message = id
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|id| MESSAGES.get(&id).copied())
                .unwrap_or(UNKNOWN_MESSAGE);
            Value::String(message.to_string())
        })
        .collect()
}
