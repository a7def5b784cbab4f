use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::ai::prompt::{Prompt, UserContent};
use crate::config::AiConfig;

/// Raw chat-completion response. Only the fields the normalizer reads are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionEnvelope {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionEnvelope {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ChoiceMessage {
                    content: Some(content.into()),
                }),
            }],
        }
    }
}

/// Why a completion call produced no envelope.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompletionError {
    #[error("no completion credential configured")]
    MissingCredential,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("provider returned status {status}")]
    Status { status: u16, body: String },
    #[error("provider envelope could not be decoded: {0}")]
    Envelope(String),
}

/// One synchronous, non-streaming completion. No retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<CompletionEnvelope, CompletionError>;
}

// --- wire format (OpenAI-compatible chat completions) ---

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

/// OpenRouter client. Holds the settings it was built from; a missing key
/// short-circuits to `CompletionError::MissingCredential` without touching the network.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: Client,
    settings: AiConfig,
}

impl OpenRouterClient {
    pub fn new(settings: AiConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("build completion http client")?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: MessageContent::Text(system),
            });
        }
        let content = match &prompt.user {
            UserContent::Text(text) => MessageContent::Text(text),
            UserContent::Vision { text, image_url } => MessageContent::Parts(vec![
                ContentPart::Text { text },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: image_url },
                },
            ]),
        };
        messages.push(ChatMessage {
            role: "user",
            content,
        });
        ChatRequest {
            model: &self.settings.model,
            messages,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    #[instrument(skip(self, prompt), fields(feature = %prompt.feature))]
    async fn complete(&self, prompt: &Prompt) -> Result<CompletionEnvelope, CompletionError> {
        let Some(api_key) = self.settings.api_key.as_deref() else {
            return Err(CompletionError::MissingCredential);
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.settings.site_url)
            .header("X-Title", &self.settings.site_name)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope = response
            .json::<CompletionEnvelope>()
            .await
            .map_err(|e| CompletionError::Envelope(e.to_string()))?;
        debug!(choices = envelope.choices.len(), "completion received");
        Ok(envelope)
    }
}
