use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{SwapRequest, SwapResponse};
use super::services::CravingSwap;
use crate::{
    ai::{generate, Generated},
    error::{present, required, ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/swap-food", post(swap_food))
}

#[instrument(skip(state, payload))]
pub async fn swap_food(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SwapRequest>,
) -> Result<Json<SwapResponse>, ApiError> {
    let craving = required(payload.craving.as_deref(), "Craving is required")?;
    let request = CravingSwap {
        craving: craving.to_string(),
        dosha: present(payload.dosha.as_deref()).map(str::to_string),
    };
    let Generated { result, is_mock } = generate(state.completions.as_ref(), &request).await;
    info!(swap = %result.name, is_mock, "craving swapped");
    Ok(Json(SwapResponse {
        swap: result,
        is_mock,
    }))
}
