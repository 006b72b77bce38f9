//! Top-level client handing out per-endpoint resource clients.

use crate::{
    config::Config,
    errors::{ClientError, CustomResult},
    resources::{
        bank_profiles::BankProfileResource, batch_payments::BatchPaymentResource,
        batch_reports::BatchReportResource, merchant_reports::MerchantReportResource,
        payments::PaymentResource, profiles::ProfileResource,
    },
    rest::RestClient,
    secret::Secret,
};

/// Entry point for the library.
///
/// Holds one transport per gateway host and constructs resource clients on
/// demand. The gateway issues a separate API key per endpoint family, so
/// each accessor takes the key for its family.
///
/// A `Client` is safe to reuse for sequential calls; it holds no mutable
/// state across requests.
#[derive(Debug)]
pub struct Client {
    api: RestClient,
    scripts: RestClient,
    reports: RestClient,
}

impl Client {
    pub fn new(config: Config) -> CustomResult<Self, ClientError> {
        let api = RestClient::new(
            &config.base_url,
            &config.merchant_id,
            config.sub_merchant_id.clone(),
        )?;
        let scripts = RestClient::new(
            config.scripts_url(),
            &config.merchant_id,
            config.sub_merchant_id.clone(),
        )?;
        let reports = RestClient::new(
            config.reports_url(),
            &config.merchant_id,
            config.sub_merchant_id.clone(),
        )?;
        Ok(Self {
            api,
            scripts,
            reports,
        })
    }

    /// Payment profile endpoints under `/v1/profiles`.
    pub fn profiles(&self, api_key: impl Into<Secret<String>>) -> ProfileResource<'_> {
        ProfileResource::new(&self.api, api_key.into())
    }

    /// Payment endpoints under `/v1/payments`.
    pub fn payments(&self, api_key: impl Into<Secret<String>>) -> PaymentResource<'_> {
        PaymentResource::new(&self.api, api_key.into())
    }

    /// Batch payment upload under `/v1/batchpayments`.
    pub fn batch_payments(&self, api_key: impl Into<Secret<String>>) -> BatchPaymentResource<'_> {
        BatchPaymentResource::new(&self.api, api_key.into())
    }

    /// Bank payment profiles under `/scripts/payment_profile.asp`.
    pub fn bank_profiles(&self, api_key: impl Into<Secret<String>>) -> BankProfileResource<'_> {
        BankProfileResource::new(&self.scripts, api_key.into())
    }

    /// Batch payment reports under `/scripts/reporting/report.aspx`.
    pub fn batch_reports(&self, api_key: impl Into<Secret<String>>) -> BatchReportResource<'_> {
        BatchReportResource::new(&self.scripts, api_key.into())
    }

    /// Merchant reports under `/v1/reports/merchants`.
    pub fn merchant_reports(
        &self,
        reporting_passcode: impl Into<Secret<String>>,
    ) -> MerchantReportResource<'_> {
        MerchantReportResource::new(&self.reports, reporting_passcode.into())
    }
}
