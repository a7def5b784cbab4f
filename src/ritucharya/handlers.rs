use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use super::dto::{Advice, SeasonQuery, SeasonalResponse};
use super::services::{
    advisory_for_month, month_index, temperature_at, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};
use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/ritucharya", get(seasonal_advisory))
}

#[instrument(skip(state))]
pub async fn seasonal_advisory(
    State(state): State<AppState>,
    Query(q): Query<SeasonQuery>,
) -> Result<Json<SeasonalResponse>, ApiError> {
    let detected = q.latitude();
    let location = if detected.is_some() { "detected" } else { "default" };
    let latitude = detected.unwrap_or(DEFAULT_LATITUDE);
    let longitude = q.longitude().unwrap_or(DEFAULT_LONGITUDE);

    let temperature = temperature_at(state.weather.as_ref(), latitude, longitude).await;
    let advisory = advisory_for_month(month_index(OffsetDateTime::now_utc().month()));

    info!(season = %advisory.season, ?temperature, location, "seasonal advisory");
    Ok(Json(SeasonalResponse {
        temperature,
        season: advisory.season,
        advice: Advice {
            ritual: advisory.ritual,
            food: advisory.food,
        },
        location,
    }))
}
