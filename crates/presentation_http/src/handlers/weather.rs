//! Per-locality forecast handler

use axum::Json;
use domain::{Locality, WeatherResponse};
use integration_cwa::normalize;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

/// Success envelope for forecast responses
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReply {
    pub success: bool,
    pub data: WeatherResponse,
}

/// Fetch, normalize, and serve one locality's 36-hour forecast
pub async fn locality_forecast(
    state: AppState,
    locality: &'static Locality,
) -> Result<Json<ForecastReply>, ApiError> {
    let fetched = state.forecasts.fetch_locality_forecast(locality).await?;
    let data = normalize(
        &fetched.location,
        &fetched.dataset_description,
        &fetched.issue_time,
    );

    Ok(Json(ForecastReply {
        success: true,
        data,
    }))
}
