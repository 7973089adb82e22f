//! fxratesapi.com integration
//!
//! One GET against the latest-rates endpoint. The response carries a `rates`
//! object keyed by currency code, all quoted against the provider's base.

use super::source::RateSource;
use super::table::RateTable;
use crate::error::{Result, XchangeError};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.fxratesapi.com/latest";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client settings
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    rates: Option<HashMap<String, serde_json::Value>>,
}

/// Decode a latest-rates response body into a rate table
pub fn parse_rates_response(body: &str) -> Result<RateTable> {
    let data: LatestRatesResponse = serde_json::from_str(body).map_err(|e| {
        XchangeError::FetchFailure(format!("Error parsing API response: {}", e))
    })?;

    if data.success == Some(false) {
        return Err(XchangeError::FetchFailure(format!(
            "API reported failure: {}",
            data.description.as_deref().unwrap_or("no description")
        )));
    }

    // Entries without a numeric rate are coverage gaps, not a broken response
    let rates = data
        .rates
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(code, value)| match value.as_f64() {
            Some(rate) => Some((code, rate)),
            None => {
                warn!("Skipping non-numeric rate for {}: {}", code, value);
                None
            }
        })
        .collect();

    RateTable::new(rates).map(|table| table.with_metadata(data.base, data.date))
}

/// fxratesapi.com rate source
pub struct FxRatesApiClient {
    config: ClientConfig,
    client: Client,
}

impl FxRatesApiClient {
    /// Create a new client with the given settings
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| XchangeError::FetchFailure(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl RateSource for FxRatesApiClient {
    async fn fetch_rates(&self) -> Result<RateTable> {
        info!(
            "Fetching rates from {} (timeout {:?})",
            self.config.api_url, self.config.timeout
        );

        let response = self
            .client
            .get(&self.config.api_url)
            .send()
            .await
            .map_err(|e| XchangeError::FetchFailure(format!("Error fetching data from API: {}", e)))?;

        if !response.status().is_success() {
            return Err(XchangeError::FetchFailure(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| XchangeError::FetchFailure(format!("Error reading API response: {}", e)))?;
        debug!("Received {} bytes", body.len());

        let table = parse_rates_response(&body)?;
        info!(
            "Loaded {} rates at {} (base: {}, date: {})",
            table.len(),
            table.fetched_at().to_rfc3339(),
            table.base().unwrap_or("unknown"),
            table.date().unwrap_or("unknown")
        );

        Ok(table)
    }

    fn name(&self) -> &str {
        "fxratesapi"
    }
}
