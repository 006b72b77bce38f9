//! Client configuration.

use serde::Deserialize;

use crate::consts::REPORTS_BASE_URL;

/// Every option the client recognizes, with its default.
///
/// The gateway splits its surface across hosts: the JSON APIs live on the
/// main API host, the legacy `/scripts` endpoints on the merchant web host,
/// and merchant reports on a fixed production host. When `scripts_url` or
/// `reports_url` are not set they fall back to `base_url` and the
/// production reports host respectively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Base URL for the `/v1` JSON APIs, e.g. `https://api.na.bambora.com`.
    pub base_url: String,
    /// Base URL for the `/scripts` endpoints. Defaults to `base_url`.
    pub scripts_url: Option<String>,
    /// Base URL for the merchant reports API. Defaults to the production
    /// reports host.
    pub reports_url: Option<String>,
    /// The merchant id used to derive passcodes.
    pub merchant_id: String,
    /// Sub-merchant account to act on behalf of, when present.
    pub sub_merchant_id: Option<String>,
}

impl Config {
    pub(crate) fn scripts_url(&self) -> &str {
        self.scripts_url.as_deref().unwrap_or(&self.base_url)
    }

    pub(crate) fn reports_url(&self) -> &str {
        self.reports_url.as_deref().unwrap_or(REPORTS_BASE_URL)
    }
}
