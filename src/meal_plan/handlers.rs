use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{MealPlanRequest, MealPlanResponse};
use super::services::DayPlan;
use crate::{
    ai::{generate, Generated},
    error::{required, ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/generate-plan", post(generate_plan))
}

#[instrument(skip(state, payload))]
pub async fn generate_plan(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MealPlanRequest>,
) -> Result<Json<MealPlanResponse>, ApiError> {
    let dosha = required(payload.dosha.as_deref(), "Dosha is required")?;
    let request = DayPlan {
        dosha: dosha.to_string(),
    };
    let Generated { result, is_mock } = generate(state.completions.as_ref(), &request).await;
    info!(dosha, is_mock, "meal plan generated");
    Ok(Json(MealPlanResponse {
        plan: result,
        is_mock,
    }))
}
