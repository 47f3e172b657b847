//! CWA open-data client
//!
//! HTTP client for the Central Weather Administration open-data
//! platform. One GET per fetch, no retries; failures carry enough
//! context for the API layer to map them to response statuses.

use domain::Locality;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiResponse, LocationBlock};

/// Dataset identifier for the 36-hour municipal forecast
pub const DATASET_ID: &str = "F-C0032-001";

/// Forecast fetch errors
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Service-side misconfiguration, recoverable only by operator
    /// action
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Upstream response parsed cleanly but the requested locality is
    /// absent from it
    #[error("no forecast data for {locality}")]
    LocalityNotFound { locality: String },

    /// The upstream call itself failed: transport error, non-2xx
    /// status, or a body that does not parse
    #[error("upstream API error: {message}")]
    Upstream {
        /// HTTP status from the provider, when the call got that far
        status: Option<u16>,
        message: String,
        /// Upstream response body, when available
        body: Option<serde_json::Value>,
    },
}

/// Upstream client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CwaConfig {
    /// Open-data platform base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Open-data platform authorization key. Absence is not fatal at
    /// startup; every fetch fails with a configuration error until it
    /// is set.
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://opendata.cwa.gov.tw/api".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for CwaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Envelope subset for one locality, ready for normalization
#[derive(Debug, Clone)]
pub struct LocalityForecast {
    /// Upstream dataset description
    pub dataset_description: String,
    /// Upstream issue time, verbatim
    pub issue_time: String,
    /// The matching locality block
    pub location: LocationBlock,
}

/// CWA open-data HTTP client
#[derive(Debug)]
pub struct CwaClient {
    client: Client,
    config: CwaConfig,
}

impl CwaClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: CwaConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Authorization key, rejected before any network I/O when unset
    /// or empty
    fn api_key(&self) -> Result<&str, ForecastError> {
        match self.config.api_key.as_ref().map(ExposeSecret::expose_secret) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ForecastError::Configuration(
                "upstream API key is not set".to_string(),
            )),
        }
    }

    /// Fetch the 36-hour forecast block for one locality.
    ///
    /// Exactly one outbound call per invocation, no retries. Callers
    /// pass entries of the fixed locality table, so the name is not
    /// re-validated here.
    #[instrument(skip_all, fields(locality = %locality.name()))]
    pub async fn fetch_locality_forecast(
        &self,
        locality: &Locality,
    ) -> Result<LocalityForecast, ForecastError> {
        let key = self.api_key()?;
        let url = format!("{}/v1/rest/datastore/{DATASET_ID}", self.config.base_url);

        debug!(url = %url, "Fetching 36-hour forecast");

        let response = self
            .client
            .get(&url)
            .query(&[("Authorization", key), ("locationName", locality.name())])
            .send()
            .await
            .map_err(|e| ForecastError::Upstream {
                status: None,
                message: e.to_string(),
                body: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::upstream_failure(status, response.text().await.ok()));
        }

        let envelope: ApiResponse =
            response.json().await.map_err(|e| ForecastError::Upstream {
                status: Some(status.as_u16()),
                message: format!("malformed upstream body: {e}"),
                body: None,
            })?;

        let records = envelope.records;
        let location = records
            .location
            .into_iter()
            .find(|block| block.location_name == locality.name())
            .ok_or_else(|| {
                warn!("Locality missing from upstream payload");
                ForecastError::LocalityNotFound {
                    locality: locality.name().to_string(),
                }
            })?;

        Ok(LocalityForecast {
            dataset_description: records.dataset_description,
            issue_time: records.issue_time,
            location,
        })
    }

    /// Build the error for a non-2xx upstream response, preferring the
    /// body's own `message` field when the body parses as JSON
    fn upstream_failure(status: reqwest::StatusCode, text: Option<String>) -> ForecastError {
        let body = text
            .filter(|t| !t.is_empty())
            .map(|t| serde_json::from_str(&t).unwrap_or_else(|_| serde_json::Value::String(t)));

        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(
                || format!("upstream responded with HTTP {status}"),
                ToString::to_string,
            );

        ForecastError::Upstream {
            status: Some(status.as_u16()),
            message,
            body,
        }
    }
}
