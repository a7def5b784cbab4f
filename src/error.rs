use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::error;

/// Errors surfaced to HTTP clients. Provider failures never end up here;
/// they are absorbed into mock results by `ai::pipeline`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Unknown `userId` in a body or path. Clients only ever see 200, 400 or 500.
    pub fn user_not_found() -> Self {
        Self::BadRequest("User not found".into())
    }

    /// For `map_err`: keeps the cause for the server log, shows `message` to the client.
    pub fn internal(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |cause| Self::Internal { message, cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, cause } = &self {
            error!(error = format!("{cause:#}"), "{message}");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// JSON body extractor that ignores the Content-Type header (the web client
/// posts JSON as text/plain) and turns every rejection into a 400.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}")))?;
        Ok(Self(value))
    }
}

/// Trimmed, non-empty view of an optional request field.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    present(value).ok_or_else(|| ApiError::bad_request(message))
}
