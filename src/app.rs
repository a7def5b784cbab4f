use std::net::SocketAddr;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::state::AppState;
use crate::{dinacharya, journal, meal_plan, nuskhe, prakriti, ritucharya, scanner, swapper};

/// Meal photos arrive as base64 data URIs inside JSON bodies.
const BODY_LIMIT_BYTES: usize = 20 * 1024 * 1024;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest("/api",
              Router::new()
                  .merge(scanner::router())
                  .merge(dinacharya::router())
                  .merge(meal_plan::router())
                  .merge(nuskhe::router())
                  .merge(swapper::router())
                  .merge(ritucharya::router())
                  .merge(prakriti::router())
                  .merge(journal::router())
                  .route("/health", get(|| async { "ok" }))
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
        .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_json;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_json(build_app(AppState::fake()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = get_json(build_app(AppState::fake()), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
