use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::error::{RateError, Result};
use crate::core::key_store::AccessKeyProvider;
use crate::core::rate::{ExchangeRateProvider, RateDate, RateDocument};

/// Historical rates client for fixer.io compatible APIs.
///
/// Rates are quoted against the provider's base currency (EUR for fixer.io).
pub struct FixerRateClient {
    base_url: String,
    access_key: String,
}

impl FixerRateClient {
    /// Obtains the access key once; no request is made here.
    pub fn new(base_url: &str, keys: &dyn AccessKeyProvider) -> Result<Self> {
        let access_key = keys.access_key()?;
        Ok(FixerRateClient {
            base_url: base_url.to_string(),
            access_key,
        })
    }

    fn request_url(&self, date: RateDate) -> String {
        format!("{}{}?access_key={}", self.base_url, date, self.access_key)
    }

    fn redacted_url(&self, date: RateDate) -> String {
        format!("{}{}?access_key=***", self.base_url, date)
    }

    async fn fetch_rates(&self, date: RateDate) -> Result<RateDocument> {
        let url = self.request_url(date);
        debug!(url = %self.redacted_url(date), "Requesting exchange rates");

        let client = reqwest::Client::builder().user_agent("xrate/1.0").build()?;
        let response = client.get(&url).send().await?.error_for_status()?;

        debug!(status = %response.status(), "Received fixer response");

        let text = response.text().await?;
        parse_rates(&text)
    }
}

impl std::fmt::Debug for FixerRateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixerRateClient")
            .field("base_url", &self.base_url)
            .field("access_key", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct FixerResponse {
    rates: Option<HashMap<String, f64>>,
    error: Option<FixerErrorBody>,
}

#[derive(Debug, Deserialize)]
struct FixerErrorBody {
    code: Option<i64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    info: Option<String>,
}

fn parse_rates(text: &str) -> Result<RateDocument> {
    if text.trim().is_empty() {
        return Err(RateError::EmptyResponse);
    }

    let data: FixerResponse = serde_json::from_str(text)?;
    match (data.rates, data.error) {
        (Some(rates), _) => Ok(RateDocument::new(rates)),
        (None, Some(error)) => Err(RateError::ProviderRejected {
            code: error.code,
            info: error
                .info
                .or(error.kind)
                .unwrap_or_else(|| "unknown error".to_string()),
        }),
        (None, None) => Err(RateError::MissingRates),
    }
}

#[async_trait]
impl ExchangeRateProvider for FixerRateClient {
    #[instrument(name = "FixerRateFetch", skip(self, date), fields(date = %date))]
    async fn exchange_rate(&self, currency: &str, date: RateDate) -> Result<f64> {
        self.fetch_rates(date).await?.rate(currency)
    }

    #[instrument(name = "FixerCrossRateFetch", skip(self, date), fields(date = %date))]
    async fn cross_rate(&self, from: &str, to: &str, date: RateDate) -> Result<f64> {
        self.fetch_rates(date).await?.cross_rate(from, to)
    }
}
