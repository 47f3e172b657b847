//! Raw CWA envelope models
//!
//! Deserialize-only types mirroring the open-data response for
//! dataset `F-C0032-001`. Each weather element carries its own array
//! of time windows; slot *i* across elements refers to the same
//! window. Timestamps stay strings and pass through verbatim.

use serde::Deserialize;

/// Full response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub records: Records,
}

/// Dataset records: description, issue time, per-locality blocks
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    pub dataset_description: String,
    pub issue_time: String,
    #[serde(default)]
    pub location: Vec<LocationBlock>,
}

/// One locality's data
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBlock {
    pub location_name: String,
    #[serde(default)]
    pub weather_element: Vec<WeatherElement>,
}

/// One element kind's sequence of time windows
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherElement {
    pub element_name: String,
    #[serde(default)]
    pub time: Vec<TimeSlot>,
}

/// One forecast window for one element
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub parameter: Parameter,
}

/// Element value for one window. The unit is reported for some
/// elements only and is not used here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub parameter_name: String,
    #[serde(default)]
    pub parameter_unit: Option<String>,
}
