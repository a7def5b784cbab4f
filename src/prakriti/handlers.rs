use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{SavePrakritiRequest, SavePrakritiResponse, ScoreRequest, ScoreResponse};
use super::quiz::{QuizQuestion, QUESTIONS};
use super::{repo, services::score_answers};
use crate::{
    ayurveda::Dosha,
    error::{required, ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/prakriti/questions", get(questions))
        .route("/prakriti/score", post(score))
        .route("/save-prakriti", post(save_prakriti))
}

pub async fn questions() -> Json<&'static [QuizQuestion]> {
    Json(&QUESTIONS[..])
}

#[instrument(skip(payload))]
pub async fn score(ApiJson(payload): ApiJson<ScoreRequest>) -> Result<Json<ScoreResponse>, ApiError> {
    if payload.answers.len() != QUESTIONS.len() {
        return Err(ApiError::bad_request(format!(
            "Expected {} answers, got {}",
            QUESTIONS.len(),
            payload.answers.len()
        )));
    }
    let outcome = score_answers(&payload.answers)
        .ok_or_else(|| ApiError::bad_request("No answers given"))?;
    info!(dosha = %outcome.dosha, "prakriti scored");
    Ok(Json(ScoreResponse {
        dosha: outcome.dosha,
        tally: outcome.tally,
    }))
}

#[instrument(skip(state, payload))]
pub async fn save_prakriti(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SavePrakritiRequest>,
) -> Result<Json<SavePrakritiResponse>, ApiError> {
    let user_id = required(payload.user_id.as_deref(), "Missing data")?;
    let prakriti: Dosha = required(payload.prakriti.as_deref(), "Missing data")?
        .parse()
        .map_err(|e| ApiError::bad_request(format!("Invalid prakriti: {e}")))?;

    let user = repo::update_prakriti(&state.db, user_id, prakriti)
        .await
        .map_err(ApiError::internal("Failed to save"))?
        .ok_or_else(ApiError::user_not_found)?;

    info!(user_id, %prakriti, "prakriti saved");
    Ok(Json(SavePrakritiResponse {
        success: true,
        user,
    }))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::state::AppState;
    use crate::test_support::{get_json, post_json};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn lists_five_questions() {
        let (status, body) = get_json(build_app(AppState::fake()), "/api/prakriti/questions").await;
        assert_eq!(status, StatusCode::OK);
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0]["options"][2]["dosha"], "Kapha");
    }

    #[tokio::test]
    async fn scores_tied_sheet_by_first_to_top() {
        let (status, body) = post_json(
            build_app(AppState::fake()),
            "/api/prakriti/score",
            json!({ "answers": ["Pitta", "Vata", "Kapha", "Pitta", "Vata"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dosha"], "Pitta");
        assert_eq!(body["tally"], json!({ "Vata": 2, "Pitta": 2, "Kapha": 1 }));
    }

    #[tokio::test]
    async fn short_answer_sheet_is_400() {
        let (status, _) = post_json(
            build_app(AppState::fake()),
            "/api/prakriti/score",
            json!({ "answers": ["Vata", "Vata"] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn save_without_user_is_400() {
        let (status, body) = post_json(
            build_app(AppState::fake()),
            "/api/save-prakriti",
            json!({ "prakriti": "Vata" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing data");
    }

    #[tokio::test]
    async fn save_unknown_dosha_is_400() {
        let (status, _) = post_json(
            build_app(AppState::fake()),
            "/api/save-prakriti",
            json!({ "userId": "u1", "prakriti": "Agni" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_outage_is_500() {
        let (status, body) = post_json(
            build_app(AppState::fake()),
            "/api/save-prakriti",
            json!({ "userId": "u1", "prakriti": "pitta" }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to save");
    }
}
