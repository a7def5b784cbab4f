use std::fmt;

use serde::Serialize;

/// The AI-backed features. Each one owns a prompt template, a result schema and a mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureId {
    MealAnalysis,
    Routine,
    Remedy,
    MealPlan,
    Swap,
}

impl FeatureId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureId::MealAnalysis => "meal-analysis",
            FeatureId::Routine => "routine",
            FeatureId::Remedy => "remedy",
            FeatureId::MealPlan => "meal-plan",
            FeatureId::Swap => "swap",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-role payload: plain text, or text plus an image for the vision feature.
#[derive(Debug, Clone, PartialEq)]
pub enum UserContent {
    Text(String),
    Vision { text: String, image_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub feature: FeatureId,
    pub system: Option<String>,
    pub user: UserContent,
}

impl Prompt {
    pub fn text(feature: FeatureId, system: &str, body: String) -> Self {
        Self {
            feature,
            system: Some(system.to_string()),
            user: UserContent::Text(body),
        }
    }

    pub fn vision(feature: FeatureId, text: String, image_url: String) -> Self {
        Self {
            feature,
            system: None,
            user: UserContent::Vision { text, image_url },
        }
    }

    /// The instruction text of the user message, without any image payload.
    pub fn instruction(&self) -> &str {
        match &self.user {
            UserContent::Text(text) => text,
            UserContent::Vision { text, .. } => text,
        }
    }
}

/// Closes a template with the JSON-only discipline line and the schema shape.
/// Every template goes through here so the schema is always the last thing the model reads.
pub fn with_schema(body: &str, schema: &str) -> String {
    format!(
        "{}\n\nReturn ONLY valid JSON (no prose, no markdown) with this structure:\n{}",
        body.trim_end(),
        schema.trim()
    )
}
