use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct RemedyRequest {
    #[serde(default)]
    pub symptom: Option<String>,
    #[serde(default)]
    pub dosha: Option<String>,
}

/// A home remedy (nuskha) built from kitchen ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Remedy {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub procedure: String,
    #[validate(length(min = 1))]
    pub why: String,
    #[validate(length(min = 1))]
    pub warning: String,
}

#[derive(Debug, Serialize)]
pub struct RemedyResponse {
    pub remedy: Remedy,
    #[serde(rename = "isMock")]
    pub is_mock: bool,
}
