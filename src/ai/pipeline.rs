use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use validator::Validate;

use crate::ai::client::{CompletionClient, CompletionError};
use crate::ai::normalize::{self, MalformedReply};
use crate::ai::prompt::{FeatureId, Prompt};

/// A validated request for one AI feature: knows its template, its schema and its mock.
pub trait PromptedFeature {
    type Output: DeserializeOwned + Serialize + Validate + Send;

    const FEATURE: FeatureId;

    fn prompt(&self) -> Prompt;

    /// Static result shaped exactly like a provider result.
    fn mock(&self) -> Self::Output;
}

/// What one provider round-trip produced.
#[derive(Debug)]
pub enum ProviderOutcome<T> {
    Structured(T),
    Unparseable(MalformedReply),
    Failed(CompletionError),
}

/// Result handed to handlers; `is_mock` becomes the `isMock` sibling field.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub result: T,
    pub is_mock: bool,
}

pub async fn consult<F>(client: &dyn CompletionClient, feature: &F) -> ProviderOutcome<F::Output>
where
    F: PromptedFeature + Sync,
{
    let envelope = match client.complete(&feature.prompt()).await {
        Ok(envelope) => envelope,
        Err(err) => return ProviderOutcome::Failed(err),
    };
    match normalize::normalize(&envelope).and_then(|v| normalize::conform(F::FEATURE, v)) {
        Ok(result) => ProviderOutcome::Structured(result),
        Err(reason) => ProviderOutcome::Unparseable(reason),
    }
}

/// Runs the feature against the provider and falls back to its mock on any failure.
pub async fn generate<F>(client: &dyn CompletionClient, feature: &F) -> Generated<F::Output>
where
    F: PromptedFeature + Sync,
{
    let feature_id = F::FEATURE;
    match consult(client, feature).await {
        ProviderOutcome::Structured(result) => {
            debug!(feature = %feature_id, "provider result accepted");
            return Generated {
                result,
                is_mock: false,
            };
        }
        ProviderOutcome::Failed(CompletionError::MissingCredential) => {
            warn!(feature = %feature_id, "no completion credential configured; serving mock");
        }
        ProviderOutcome::Failed(err) => {
            warn!(feature = %feature_id, error = %err, "completion failed; serving mock");
        }
        ProviderOutcome::Unparseable(reason) => {
            warn!(feature = %feature_id, %reason, "provider reply unusable; serving mock");
        }
    }
    Generated {
        result: feature.mock(),
        is_mock: true,
    }
}
