use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    #[serde(default)]
    pub craving: Option<String>,
    #[serde(default)]
    pub dosha: Option<String>,
}

/// A satvik dish that stands in for a junk-food craving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FoodSwap {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub why: String,
    #[validate(length(min = 1))]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SwapResponse {
    pub swap: FoodSwap,
    #[serde(rename = "isMock")]
    pub is_mock: bool,
}
