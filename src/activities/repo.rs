use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

/// Physical-activity record; one row per (user, day).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub distance_km: f64,
    pub exercise_calories: i32,
    pub work_calories: i32,
    pub day: Date,
}

const COLUMNS: &str = "id, user_id, distance_km, exercise_calories, work_calories, day";

impl Activity {
    pub async fn find_for_day(
        db: &PgPool,
        user_id: Uuid,
        day: Date,
    ) -> anyhow::Result<Option<Activity>> {
        let row = sqlx::query_as::<_, Activity>(&format!(
            "SELECT {COLUMNS} FROM activities WHERE user_id = $1 AND day = $2"
        ))
        .bind(user_id)
        .bind(day)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Upsert the day's record in one statement; fields not supplied keep
    /// their stored value (zero on first insert).
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        day: Date,
        distance_km: Option<f64>,
        exercise_calories: Option<i32>,
        work_calories: Option<i32>,
    ) -> anyhow::Result<Activity> {
        let row = sqlx::query_as::<_, Activity>(&format!(
            r#"
            INSERT INTO activities (user_id, distance_km, exercise_calories, work_calories, day)
            VALUES ($1, COALESCE($2, 0), COALESCE($3, 0), COALESCE($4, 0), $5)
            ON CONFLICT (user_id, day) DO UPDATE
            SET distance_km = COALESCE($2, activities.distance_km),
                exercise_calories = COALESCE($3, activities.exercise_calories),
                work_calories = COALESCE($4, activities.work_calories)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(distance_km)
        .bind(exercise_calories)
        .bind(work_calories)
        .bind(day)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Most recent records, newest first.
    pub async fn recent(db: &PgPool, user_id: Uuid, limit: i64) -> anyhow::Result<Vec<Activity>> {
        let rows = sqlx::query_as::<_, Activity>(&format!(
            "SELECT {COLUMNS} FROM activities WHERE user_id = $1 ORDER BY day DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
