//! Client library for the Bambora payment gateway.
//!
//! The gateway exposes several endpoint families with wildly different wire
//! conventions: JSON under `/v1`, url-encoded form posts answered with
//! query strings under `/scripts/payment_profile.asp`, XML report queries
//! under `/scripts/reporting/report.aspx`, and a multipart file upload for
//! batch payments. This crate hides those differences behind one request
//! pipeline (header builder -> body builder -> transport -> response
//! adapter) and hands back every result as an [`ApiResponse`].
//!
//! ```no_run
//! use bambora_client::{Client, Config};
//!
//! let client = Client::new(Config {
//!     base_url: "https://api.na.bambora.com".to_string(),
//!     merchant_id: "300200578".to_string(),
//!     ..Config::default()
//! })
//! .expect("valid base url");
//!
//! let profiles = client.profiles("profiles-api-key");
//! let response = profiles.get("02355E2e58Bf488EAB4EaFAD7083dB6A");
//! ```
//!
//! All methods issue exactly one blocking HTTP call and return its parsed
//! result; the library never retries and holds no state across calls apart
//! from the immutable credentials on the client.

pub mod adapters;
pub mod auth;
pub mod builders;
pub mod client;
pub mod config;
pub mod consts;
pub mod errors;
pub mod request;
pub mod resources;
pub mod response;
pub mod rest;
pub mod secret;
pub mod transform;

pub use self::{
    client::Client,
    config::Config,
    errors::{ClientError, CustomResult},
    response::ApiResponse,
    secret::{ExposeInterface, PeekInterface, Secret},
};
