use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{RoutineRequest, RoutineResponse};
use super::services::DailyRoutine;
use crate::{
    ai::{generate, Generated},
    error::{present, ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/dinacharya", post(build_routine))
}

#[instrument(skip(state, payload))]
pub async fn build_routine(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RoutineRequest>,
) -> Result<Json<RoutineResponse>, ApiError> {
    let (Some(wake_up_time), Some(dosha)) = (
        present(payload.wake_up_time.as_deref()),
        present(payload.dosha.as_deref()),
    ) else {
        return Err(ApiError::bad_request("Wake up time and Dosha are required"));
    };

    let request = DailyRoutine {
        wake_up_time: wake_up_time.to_string(),
        dosha: dosha.to_string(),
    };
    let Generated { result, is_mock } = generate(state.completions.as_ref(), &request).await;
    info!(rituals = result.rituals.len(), is_mock, "routine built");
    Ok(Json(RoutineResponse {
        routine: result,
        is_mock,
    }))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::state::AppState;
    use crate::test_support::{post_json, FixedWeather, ScriptedCompletions};
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn mock_mode_returns_flat_rituals() {
        let (status, body) = post_json(
            build_app(AppState::fake()),
            "/api/dinacharya",
            json!({ "wakeUpTime": "05:30", "dosha": "Vata" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isMock"], true);
        assert_eq!(body["rituals"].as_array().unwrap().len(), 3);
        assert_eq!(body["rituals"][0]["activity"], "Brahma Muhurta");
    }

    #[tokio::test]
    async fn each_missing_field_is_400() {
        for payload in [
            json!({ "dosha": "Vata" }),
            json!({ "wakeUpTime": "05:30" }),
            json!({ "wakeUpTime": "", "dosha": "Vata" }),
        ] {
            let client = ScriptedCompletions::content("{}");
            let app = build_app(AppState::fake_with(client.clone(), Arc::new(FixedWeather(None))));
            let (status, body) = post_json(app, "/api/dinacharya", payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Wake up time and Dosha are required");
            assert_eq!(client.calls(), 0);
        }
    }

    #[tokio::test]
    async fn provider_routine_reaches_client() {
        let client = ScriptedCompletions::content(
            r#"{"rituals":[{"time":"06:00 AM","activity":"Abhyanga","description":"Warm sesame oil massage."}]}"#,
        );
        let app = build_app(AppState::fake_with(client.clone(), Arc::new(FixedWeather(None))));
        let (status, body) =
            post_json(app, "/api/dinacharya", json!({ "wakeUpTime": "06:00", "dosha": "Vata" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isMock"], false);
        assert_eq!(body["rituals"][0]["activity"], "Abhyanga");
        let prompt = client.last_prompt().unwrap();
        assert!(prompt.instruction().contains("wakes up at 06:00"));
    }

    #[tokio::test]
    async fn unusable_reply_matches_no_credential_mock() {
        let client = ScriptedCompletions::content("Here is your routine: wake early and walk.");
        let app = build_app(AppState::fake_with(client.clone(), Arc::new(FixedWeather(None))));
        let (status, unusable) = post_json(app, "/api/dinacharya", json!({ "wakeUpTime": "06:00", "dosha": "Pitta" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(client.calls(), 1);

        let (_, mock) = post_json(build_app(AppState::fake()), "/api/dinacharya", json!({ "wakeUpTime": "06:00", "dosha": "Pitta" })).await;
        assert_eq!(unusable, mock);
        assert_eq!(unusable["isMock"], true);
    }
}
