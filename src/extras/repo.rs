use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

/// Extra-calorie entry outside the meal routine. Append-only; any number
/// per day. `honest` is the user's own accuracy marker.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ExtraCalories {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: Option<String>,
    pub calories: i32,
    pub honest: bool,
    pub day: Date,
}

const COLUMNS: &str = "id, user_id, description, calories, honest, day";

impl ExtraCalories {
    pub async fn list_for_day(
        db: &PgPool,
        user_id: Uuid,
        day: Date,
    ) -> anyhow::Result<Vec<ExtraCalories>> {
        let rows = sqlx::query_as::<_, ExtraCalories>(&format!(
            "SELECT {COLUMNS} FROM extra_calories WHERE user_id = $1 AND day = $2"
        ))
        .bind(user_id)
        .bind(day)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        description: &str,
        calories: i32,
        honest: bool,
        day: Date,
    ) -> anyhow::Result<ExtraCalories> {
        let row = sqlx::query_as::<_, ExtraCalories>(&format!(
            r#"
            INSERT INTO extra_calories (user_id, description, calories, honest, day)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(description)
        .bind(calories)
        .bind(honest)
        .bind(day)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Delete one entry if it belongs to the user; false when no row matched.
    pub async fn delete_for_user(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM extra_calories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
