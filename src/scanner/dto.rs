use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::ayurveda::FoodQuality;

#[derive(Debug, Deserialize)]
pub struct AnalyzeFoodRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// Satvik analysis of one meal photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MealAnalysis {
    /// Prana Score, 0-100.
    #[serde(deserialize_with = "prana_score")]
    pub score: u8,
    pub category: FoodQuality,
    #[validate(length(min = 1))]
    pub breakdown: String,
    #[validate(length(min = 1))]
    pub advice: String,
    #[validate(length(min = 1))]
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeFoodResponse {
    pub analysis: MealAnalysis,
    #[serde(rename = "isMock")]
    pub is_mock: bool,
}

/// Models answer with integers or floats; both are accepted and rounded.
fn prana_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !(0.0..=100.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "score {raw} outside 0..=100"
        )));
    }
    Ok(raw.round() as u8)
}
