use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::ai::client::{CompletionClient, CompletionEnvelope, CompletionError};
use crate::ai::Prompt;
use crate::ritucharya::weather::WeatherSource;

enum Script {
    Reply(CompletionEnvelope),
    Fail(CompletionError),
}

/// Completion client that replays one canned answer and counts calls.
pub struct ScriptedCompletions {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<Prompt>>,
}

impl ScriptedCompletions {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn content(content: &str) -> Arc<Self> {
        Self::new(Script::Reply(CompletionEnvelope::with_content(content)))
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Script::Reply(CompletionEnvelope::default()))
    }

    pub fn failing(err: CompletionError) -> Arc<Self> {
        Self::new(Script::Fail(err))
    }

    /// For routes that should never reach the provider.
    pub fn unused() -> Arc<Self> {
        Self::failing(CompletionError::Transport("unexpected call".into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletions {
    async fn complete(&self, prompt: &Prompt) -> Result<CompletionEnvelope, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());
        match &self.script {
            Script::Reply(envelope) => Ok(envelope.clone()),
            Script::Fail(err) => Err(err.clone()),
        }
    }
}

/// Weather source with a fixed reading; `None` behaves like an outage.
pub struct FixedWeather(pub Option<f64>);

#[async_trait]
impl WeatherSource for FixedWeather {
    async fn current_temperature(&self, _latitude: f64, _longitude: f64) -> anyhow::Result<f64> {
        self.0.ok_or_else(|| anyhow::anyhow!("weather service unavailable"))
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

/// Posts without a Content-Type header, the way the browser client does.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}
