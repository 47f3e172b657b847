//! Outbound forecast shapes and weather element kinds

use serde::Serialize;

/// A category of weather measurement in the upstream dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Weather condition text (`Wx`)
    Condition,
    /// Probability of precipitation (`PoP`)
    RainProbability,
    /// Minimum temperature (`MinT`)
    MinTemperature,
    /// Maximum temperature (`MaxT`)
    MaxTemperature,
    /// Comfort index (`CI`)
    ComfortIndex,
}

impl ElementKind {
    /// Map an upstream `elementName` to a kind.
    ///
    /// Returns `None` for element names outside the fixed mapping;
    /// normalization skips those. Wind speed is the notable case: the
    /// 36-hour dataset never supplies it, so the output field stays
    /// empty.
    #[must_use]
    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "Wx" => Some(Self::Condition),
            "PoP" => Some(Self::RainProbability),
            "MinT" => Some(Self::MinTemperature),
            "MaxT" => Some(Self::MaxTemperature),
            "CI" => Some(Self::ComfortIndex),
            _ => None,
        }
    }
}

/// One forecast time window, flattened across all element kinds.
///
/// Every field is a string on purpose: values pass through from the
/// provider with only a unit suffix appended where noted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    /// Window start, upstream format, verbatim
    pub start_time: String,
    /// Window end, upstream format, verbatim
    pub end_time: String,
    /// Weather condition text
    pub weather: String,
    /// Rain probability with a trailing `%`
    pub rain: String,
    /// Minimum temperature with a trailing `°C`
    pub min_temp: String,
    /// Maximum temperature with a trailing `°C`
    pub max_temp: String,
    /// Comfort index text
    pub comfort: String,
    /// Always empty. The source dataset defines but never supplies
    /// wind speed; the field is kept for output-shape compatibility.
    pub wind_speed: String,
}

/// Full forecast payload for one locality
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    /// Official locality name
    pub location_name: String,
    /// Upstream dataset description
    pub dataset_description: String,
    /// Upstream issue time, verbatim
    pub update_time: String,
    /// One record per time window, upstream order
    pub forecasts: Vec<ForecastRecord>,
}
