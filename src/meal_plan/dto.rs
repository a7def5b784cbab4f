use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct MealPlanRequest {
    #[serde(default)]
    pub dosha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlannedMeal {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub benefits: String,
}

/// One Satvik day: breakfast, lunch, dinner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MealPlan {
    #[validate(nested)]
    pub breakfast: PlannedMeal,
    #[validate(nested)]
    pub lunch: PlannedMeal,
    #[validate(nested)]
    pub dinner: PlannedMeal,
}

#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    pub plan: MealPlan,
    #[serde(rename = "isMock")]
    pub is_mock: bool,
}
