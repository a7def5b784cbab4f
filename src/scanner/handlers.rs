use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use super::dto::{AnalyzeFoodRequest, AnalyzeFoodResponse};
use super::services::MealScan;
use crate::{
    ai::{generate, Generated},
    error::{required, ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze-food", post(analyze_food))
}

#[instrument(skip(state, payload))]
pub async fn analyze_food(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AnalyzeFoodRequest>,
) -> Result<Json<AnalyzeFoodResponse>, ApiError> {
    let image = required(payload.image.as_deref(), "Image is required")?;
    let Some(scan) = MealScan::from_upload(image) else {
        warn!("image payload is not a usable data URI");
        return Err(ApiError::bad_request("Image is required"));
    };

    let Generated { result, is_mock } = generate(state.completions.as_ref(), &scan).await;
    info!(score = result.score, category = %result.category, is_mock, "meal analysed");
    Ok(Json(AnalyzeFoodResponse {
        analysis: result,
        is_mock,
    }))
}
