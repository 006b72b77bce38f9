//! Payment endpoints.

use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    auth::Credentials,
    errors::{ClientError, CustomResult},
    request::Method,
    response::ApiResponse,
    rest::RestClient,
    secret::Secret,
};

use super::profiles::to_value;

const SUB_PATH: &str = "/v1/payments";

/// Options for a payment against a stored profile. Defaults to the
/// profile's first card, pre-authorization only.
#[derive(Debug, Clone)]
pub struct ProfilePaymentOptions {
    pub card_id: u32,
    /// `false` pre-authorizes; `true` completes the purchase.
    pub complete: bool,
}

impl Default for ProfilePaymentOptions {
    fn default() -> Self {
        Self {
            card_id: 1,
            complete: false,
        }
    }
}

/// Client for `/v1/payments`: card payments, profile-backed payments, and
/// the void/return/completion sub-endpoints.
#[derive(Debug)]
pub struct PaymentResource<'a> {
    client: &'a RestClient,
    credentials: Credentials,
}

impl<'a> PaymentResource<'a> {
    pub fn new(client: &'a RestClient, api_key: Secret<String>) -> Self {
        Self {
            client,
            credentials: client.credentials(api_key),
        }
    }

    /// Make a payment. The body is passed through as-is; the gateway
    /// decides the payment method from its `payment_method` field.
    pub fn create<T: Serialize>(&self, payment_data: &T) -> CustomResult<ApiResponse, ClientError> {
        self.client
            .send_json(Method::Post, SUB_PATH, to_value(payment_data)?, &self.credentials)
    }

    /// Make a payment against a stored payment profile.
    pub fn create_with_payment_profile(
        &self,
        customer_code: &str,
        amount: f64,
        options: ProfilePaymentOptions,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.create(&profile_payment_body(customer_code, amount, &options))
    }

    /// Fetch a payment by transaction id.
    pub fn get(&self, payment_id: &str) -> CustomResult<ApiResponse, ClientError> {
        self.client.get(
            &format!("{SUB_PATH}/{payment_id}"),
            Vec::new(),
            &self.credentials,
        )
    }

    /// Void a transaction.
    pub fn void(&self, payment_id: &str, amount: f64) -> CustomResult<ApiResponse, ClientError> {
        self.client.send_json(
            Method::Post,
            &format!("{SUB_PATH}/{payment_id}/void"),
            json!({ "amount": amount }),
            &self.credentials,
        )
    }

    /// Return (refund) a completed transaction.
    pub fn return_payment(
        &self,
        payment_id: &str,
        amount: f64,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.client.send_json(
            Method::Post,
            &format!("{SUB_PATH}/{payment_id}/returns"),
            json!({ "amount": amount }),
            &self.credentials,
        )
    }

    /// Complete (capture) a pre-authorized transaction.
    pub fn complete(
        &self,
        payment_id: &str,
        amount: f64,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.client.send_json(
            Method::Post,
            &format!("{SUB_PATH}/{payment_id}/completions"),
            json!({ "amount": amount }),
            &self.credentials,
        )
    }
}

fn profile_payment_body(
    customer_code: &str,
    amount: f64,
    options: &ProfilePaymentOptions,
) -> Value {
    json!({
        "amount": amount,
        "payment_method": "payment_profile",
        "payment_profile": {
            "customer_code": customer_code,
            "card_id": options.card_id,
            "complete": options.complete,
        },
    })
}
