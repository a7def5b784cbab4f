use anyhow::Context;
use sqlx::PgPool;

use super::dto::LogFoodRequest;
use super::repo;
use super::repo_types::{FoodLog, Streak};
use crate::ayurveda::{Dosha, FoodQuality};
use crate::error::{present, ApiError};
use crate::prakriti::repo::find_user;

pub const RECENT_LOGS: i64 = 10;

/// A validated food-log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodLog {
    pub user_id: String,
    pub food_name: String,
    pub score: i32,
    pub category: Option<FoodQuality>,
}

impl NewFoodLog {
    pub fn is_satvik(&self) -> bool {
        self.category == Some(FoodQuality::Satvik)
    }
}

impl TryFrom<LogFoodRequest> for NewFoodLog {
    type Error = ApiError;

    fn try_from(req: LogFoodRequest) -> Result<Self, Self::Error> {
        let (Some(user_id), Some(food_name), Some(score)) = (
            present(req.user_id.as_deref()),
            present(req.food_name.as_deref()),
            req.score,
        ) else {
            return Err(ApiError::bad_request("Missing required data"));
        };
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(ApiError::bad_request("Score must be between 0 and 100"));
        }
        let category = present(req.category.as_deref())
            .map(str::parse::<FoodQuality>)
            .transpose()
            .map_err(ApiError::bad_request)?;

        Ok(Self {
            user_id: user_id.to_string(),
            food_name: food_name.to_string(),
            score: score.round() as i32,
            category,
        })
    }
}

/// Inserts the log and extends the streak atomically.
pub async fn record(db: &PgPool, entry: &NewFoodLog) -> anyhow::Result<(FoodLog, Streak)> {
    let mut tx = db.begin().await.context("begin food log")?;
    let log = repo::insert_log(&mut tx, entry).await.context("insert food log")?;
    let streak = repo::bump_streak(&mut tx, &entry.user_id)
        .await
        .context("bump streak")?;
    tx.commit().await.context("commit food log")?;
    Ok((log, streak))
}

pub struct Dashboard {
    pub streak: Option<Streak>,
    pub total_points: i64,
    pub prakriti: Option<Dosha>,
    pub recent: Vec<FoodLog>,
}

/// `None` when the user does not exist.
pub async fn dashboard(db: &PgPool, user_id: &str) -> anyhow::Result<Option<Dashboard>> {
    let Some(user) = find_user(db, user_id).await.context("load user")? else {
        return Ok(None);
    };
    let streak = repo::find_streak(db, user_id).await.context("load streak")?;
    let total_points = repo::total_points(db, user_id).await.context("sum scores")?;
    let recent = repo::recent_logs(db, user_id, RECENT_LOGS)
        .await
        .context("load recent logs")?;

    Ok(Some(Dashboard {
        streak,
        total_points,
        prakriti: user.prakriti.as_deref().and_then(|p| p.parse().ok()),
        recent,
    }))
}
