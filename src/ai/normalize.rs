use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::ai::client::CompletionEnvelope;
use crate::ai::prompt::FeatureId;

/// Provider replied, but nothing usable came back. All-or-nothing: there is no partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedReply {
    #[error("completion carried no message content")]
    MissingContent,
    #[error("content is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("JSON does not match the {feature} schema: {reason}")]
    SchemaMismatch { feature: FeatureId, reason: String },
}

/// Drops a leading ``` / ```json fence and a trailing ``` fence, plus surrounding whitespace.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// First choice's content, unfenced and parsed.
pub fn normalize(envelope: &CompletionEnvelope) -> Result<Value, MalformedReply> {
    let content = envelope
        .first_content()
        .ok_or(MalformedReply::MissingContent)?;
    serde_json::from_str(strip_code_fence(content))
        .map_err(|e| MalformedReply::InvalidJson(e.to_string()))
}

/// Binds parsed JSON to a feature's schema type and runs its field rules.
pub fn conform<T>(feature: FeatureId, value: Value) -> Result<T, MalformedReply>
where
    T: DeserializeOwned + Validate,
{
    let typed: T = serde_json::from_value(value).map_err(|e| MalformedReply::SchemaMismatch {
        feature,
        reason: e.to_string(),
    })?;
    typed
        .validate()
        .map_err(|e| MalformedReply::SchemaMismatch {
            feature,
            reason: e.to_string(),
        })?;
    Ok(typed)
}
