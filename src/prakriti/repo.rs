use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::ayurveda::Dosha;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub prakriti: Option<String>,
}

/// `None` when no user has this id.
pub async fn update_prakriti(
    db: &PgPool,
    user_id: &str,
    prakriti: Dosha,
) -> anyhow::Result<Option<UserProfile>> {
    let user = sqlx::query_as::<_, UserProfile>(
        r#"
        UPDATE users
        SET prakriti = $2
        WHERE id = $1
        RETURNING id, email, name, prakriti
    "#,
    )
    .bind(user_id)
    .bind(prakriti.db_value())
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn find_user(db: &PgPool, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
    let user = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, email, name, prakriti
        FROM users
        WHERE id = $1
    "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(user)
}
