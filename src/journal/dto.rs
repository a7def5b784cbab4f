use serde::{Deserialize, Serialize};

use super::repo_types::{FoodLog, Streak};
use super::services::Dashboard;
use crate::ayurveda::Dosha;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFoodRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogFoodResponse {
    pub success: bool,
    pub log: FoodLog,
    pub streak: Streak,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub streak: Option<Streak>,
    pub total_points: i64,
    pub prakriti: Option<Dosha>,
    pub recent: Vec<FoodLog>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(d: Dashboard) -> Self {
        Self {
            streak: d.streak,
            total_points: d.total_points,
            prakriti: d.prakriti,
            recent: d.recent,
        }
    }
}
