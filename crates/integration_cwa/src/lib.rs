//! CWA open-data integration
//!
//! Client and normalization for the Central Weather Administration
//! 36-hour municipal forecast dataset (`F-C0032-001`,
//! <https://opendata.cwa.gov.tw>).

pub mod client;
pub mod models;
pub mod normalize;

pub use client::{CwaClient, CwaConfig, DATASET_ID, ForecastError, LocalityForecast};
pub use normalize::normalize;

// Re-exported so downstream crates can build a `CwaConfig` without
// depending on secrecy directly.
pub use secrecy::SecretString;
