//! Payment profile endpoints.

use error_stack::ResultExt;
use serde::Serialize;

use crate::{
    auth::Credentials,
    errors::{ClientError, CustomResult},
    request::Method,
    response::ApiResponse,
    rest::RestClient,
    secret::Secret,
};

const SUB_PATH: &str = "/v1/profiles";

/// Client for `/v1/profiles` and its card sub-resource.
#[derive(Debug)]
pub struct ProfileResource<'a> {
    client: &'a RestClient,
    credentials: Credentials,
}

impl<'a> ProfileResource<'a> {
    pub fn new(client: &'a RestClient, api_key: Secret<String>) -> Self {
        Self {
            client,
            credentials: client.credentials(api_key),
        }
    }

    /// Create a payment profile from card or token data.
    pub fn create<T: Serialize>(&self, profile_data: &T) -> CustomResult<ApiResponse, ClientError> {
        self.client
            .send_json(Method::Post, SUB_PATH, to_value(profile_data)?, &self.credentials)
    }

    /// Fetch a payment profile by customer code.
    pub fn get(&self, customer_code: &str) -> CustomResult<ApiResponse, ClientError> {
        self.client.get(
            &format!("{SUB_PATH}/{customer_code}"),
            Vec::new(),
            &self.credentials,
        )
    }

    /// Replace the profile's billing and card details.
    pub fn update<T: Serialize>(
        &self,
        customer_code: &str,
        profile_data: &T,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.client.send_json(
            Method::Put,
            &format!("{SUB_PATH}/{customer_code}"),
            to_value(profile_data)?,
            &self.credentials,
        )
    }

    /// Delete a payment profile.
    pub fn delete(&self, customer_code: &str) -> CustomResult<ApiResponse, ClientError> {
        self.client
            .delete(&format!("{SUB_PATH}/{customer_code}"), &self.credentials)
    }

    /// Add a card to the profile.
    pub fn add_card<T: Serialize>(
        &self,
        customer_code: &str,
        card_data: &T,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.client.send_json(
            Method::Post,
            &format!("{SUB_PATH}/{customer_code}/cards"),
            to_value(card_data)?,
            &self.credentials,
        )
    }

    /// List the cards on the profile.
    pub fn get_cards(&self, customer_code: &str) -> CustomResult<ApiResponse, ClientError> {
        self.client.get(
            &format!("{SUB_PATH}/{customer_code}/cards"),
            Vec::new(),
            &self.credentials,
        )
    }

    /// Update a card's expiry fields.
    pub fn update_card<T: Serialize>(
        &self,
        customer_code: &str,
        card_id: u32,
        card_data: &T,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.client.send_json(
            Method::Put,
            &format!("{SUB_PATH}/{customer_code}/cards/{card_id}"),
            to_value(card_data)?,
            &self.credentials,
        )
    }

    /// Remove a card from the profile.
    pub fn delete_card(
        &self,
        customer_code: &str,
        card_id: u32,
    ) -> CustomResult<ApiResponse, ClientError> {
        self.client.delete(
            &format!("{SUB_PATH}/{customer_code}/cards/{card_id}"),
            &self.credentials,
        )
    }
}

pub(crate) fn to_value<T: Serialize>(body: &T) -> CustomResult<serde_json::Value, ClientError> {
    serde_json::to_value(body).change_context(ClientError::RequestEncodingFailed)
}
