use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineRequest {
    #[serde(default)]
    pub wake_up_time: Option<String>,
    #[serde(default)]
    pub dosha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ritual {
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(length(min = 1))]
    pub activity: String,
    #[validate(length(min = 1))]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Routine {
    #[validate(length(min = 1), nested)]
    pub rituals: Vec<Ritual>,
}

/// `{ rituals: [...], isMock }`: the routine is not wrapped in a key.
#[derive(Debug, Serialize)]
pub struct RoutineResponse {
    #[serde(flatten)]
    pub routine: Routine,
    #[serde(rename = "isMock")]
    pub is_mock: bool,
}
