use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::repo_types::{FoodLog, Streak};
use super::services::NewFoodLog;

pub async fn insert_log(
    tx: &mut Transaction<'_, Postgres>,
    entry: &NewFoodLog,
) -> anyhow::Result<FoodLog> {
    let log = sqlx::query_as::<_, FoodLog>(
        r#"
        INSERT INTO food_logs (id, user_id, food_name, is_satvik, score, category)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, food_name, is_satvik, score, category, created_at
    "#,
    )
    .bind(Uuid::new_v4())
    .bind(&entry.user_id)
    .bind(&entry.food_name)
    .bind(entry.is_satvik())
    .bind(entry.score)
    .bind(entry.category.map(|c| c.as_str()))
    .fetch_one(&mut **tx)
    .await?;
    Ok(log)
}

/// First log starts the streak at 1; every later log extends it and lifts `best`.
pub async fn bump_streak(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
) -> anyhow::Result<Streak> {
    let streak = sqlx::query_as::<_, Streak>(
        r#"
        INSERT INTO streaks (user_id, current, best, last_log)
        VALUES ($1, 1, 1, now())
        ON CONFLICT (user_id) DO UPDATE
        SET current = streaks.current + 1,
            best = GREATEST(streaks.best, streaks.current + 1),
            last_log = now()
        RETURNING user_id, current, best, last_log
    "#,
    )
    .bind(user_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(streak)
}

pub async fn find_streak(db: &PgPool, user_id: &str) -> anyhow::Result<Option<Streak>> {
    let streak = sqlx::query_as::<_, Streak>(
        r#"
        SELECT user_id, current, best, last_log
        FROM streaks
        WHERE user_id = $1
    "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(streak)
}

pub async fn total_points(db: &PgPool, user_id: &str) -> anyhow::Result<i64> {
    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE(SUM(score), 0)::BIGINT
        FROM food_logs
        WHERE user_id = $1
    "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(total)
}

pub async fn recent_logs(db: &PgPool, user_id: &str, limit: i64) -> anyhow::Result<Vec<FoodLog>> {
    let rows = sqlx::query_as::<_, FoodLog>(
        r#"
        SELECT id, user_id, food_name, is_satvik, score, category, created_at
        FROM food_logs
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
    "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
