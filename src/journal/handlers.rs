use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{DashboardResponse, LogFoodRequest, LogFoodResponse};
use super::services::{self, NewFoodLog};
use crate::{
    error::{ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/log-food", post(log_food))
        .route("/dashboard/:user_id", get(dashboard))
}

#[instrument(skip(state, payload))]
pub async fn log_food(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LogFoodRequest>,
) -> Result<Json<LogFoodResponse>, ApiError> {
    let entry = NewFoodLog::try_from(payload)?;
    let (log, streak) = services::record(&state.db, &entry)
        .await
        .map_err(ApiError::internal("Failed to log food"))?;

    info!(user_id = %entry.user_id, score = entry.score, streak = streak.current, "food logged");
    Ok(Json(LogFoodResponse {
        success: true,
        log,
        streak,
    }))
}

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let dashboard = services::dashboard(&state.db, &user_id)
        .await
        .map_err(ApiError::internal("Failed to load dashboard"))?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(dashboard.into()))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::state::AppState;
    use crate::test_support::{get_json, post_json, post_raw};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn missing_food_name_is_400() {
        let (status, body) = post_json(
            build_app(AppState::fake()),
            "/api/log-food",
            json!({ "userId": "u1", "score": 70 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required data");
    }

    #[tokio::test]
    async fn out_of_range_score_is_400() {
        let (status, _) = post_json(
            build_app(AppState::fake()),
            "/api/log-food",
            json!({ "userId": "u1", "foodName": "Poha", "score": 140 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_outage_is_500() {
        let (status, body) = post_raw(
            build_app(AppState::fake()),
            "/api/log-food",
            r#"{"userId":"u1","foodName":"Poha","score":82,"category":"Satvik"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to log food");
    }

    #[tokio::test]
    async fn dashboard_outage_is_500() {
        let (status, body) = get_json(build_app(AppState::fake()), "/api/dashboard/u1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to load dashboard");
    }
}
