use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FoodLog {
    pub id: Uuid,
    pub user_id: String,
    pub food_name: String,
    pub is_satvik: bool,
    pub score: i32,
    pub category: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub user_id: String,
    pub current: i32,
    pub best: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub last_log: OffsetDateTime,
}
