use serde::{Deserialize, Serialize};

use super::repo::UserProfile;
use super::services::Tally;
use crate::ayurveda::Dosha;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Dosha>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub dosha: Dosha,
    pub tally: Tally,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePrakritiRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub prakriti: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavePrakritiResponse {
    pub success: bool,
    pub user: UserProfile,
}
