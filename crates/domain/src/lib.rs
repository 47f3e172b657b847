//! Domain layer for Formosa Weather
//!
//! Core vocabulary of the forecast proxy: the fixed locality table,
//! weather element kinds, and the outbound response shapes.

pub mod forecast;
pub mod locality;

pub use forecast::{ElementKind, ForecastRecord, WeatherResponse};
pub use locality::{Division, LOCALITIES, Locality};
