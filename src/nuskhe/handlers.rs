use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{RemedyRequest, RemedyResponse};
use super::services::Nuskha;
use crate::{
    ai::{generate, Generated},
    error::{present, required, ApiError, ApiJson},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/nuskhe", post(find_remedy))
}

#[instrument(skip(state, payload))]
pub async fn find_remedy(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RemedyRequest>,
) -> Result<Json<RemedyResponse>, ApiError> {
    let symptom = required(payload.symptom.as_deref(), "Symptom is required")?;
    let request = Nuskha {
        symptom: symptom.to_string(),
        dosha: present(payload.dosha.as_deref()).map(str::to_string),
    };
    let Generated { result, is_mock } = generate(state.completions.as_ref(), &request).await;
    info!(title = %result.title, is_mock, "remedy suggested");
    Ok(Json(RemedyResponse {
        remedy: result,
        is_mock,
    }))
}
