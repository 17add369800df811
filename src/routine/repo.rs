use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

use crate::balance::compute;

/// One meal slot of a user's day. At most one row per (user, period, day).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MealRoutine {
    pub id: Uuid,
    pub user_id: Uuid,
    pub period: String,
    pub meal: String,
    pub protein: Option<String>,
    pub calories: Option<i32>,
    pub completed: bool,
    pub day: Date,
}

const COLUMNS: &str = "id, user_id, period, meal, protein, calories, completed, day";

impl MealRoutine {
    pub async fn list_for_day(
        db: &PgPool,
        user_id: Uuid,
        day: Date,
    ) -> anyhow::Result<Vec<MealRoutine>> {
        let rows = sqlx::query_as::<_, MealRoutine>(&format!(
            "SELECT {COLUMNS} FROM meal_routines WHERE user_id = $1 AND day = $2"
        ))
        .bind(user_id)
        .bind(day)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Insert the five standard periods for the day, then return the full
    /// day. Existing rows are left untouched, so concurrent seeding cannot
    /// duplicate a period.
    pub async fn seed_standard_day(
        db: &PgPool,
        user_id: Uuid,
        day: Date,
    ) -> anyhow::Result<Vec<MealRoutine>> {
        let mut tx = db.begin().await?;
        for period in compute::standard_periods() {
            sqlx::query(
                r#"
                INSERT INTO meal_routines (user_id, period, meal, day)
                VALUES ($1, $2, $2, $3)
                ON CONFLICT (user_id, period, day) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(period)
            .bind(day)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Self::list_for_day(db, user_id, day).await
    }

    /// Upsert the day's row for a period in one statement. The meal text is
    /// set to the period label on insert and kept as-is on update.
    pub async fn mark(
        db: &PgPool,
        user_id: Uuid,
        period: &str,
        protein: Option<&str>,
        calories: i32,
        completed: bool,
        day: Date,
    ) -> anyhow::Result<MealRoutine> {
        let row = sqlx::query_as::<_, MealRoutine>(&format!(
            r#"
            INSERT INTO meal_routines (user_id, period, meal, protein, calories, completed, day)
            VALUES ($1, $2, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, period, day) DO UPDATE
            SET protein = EXCLUDED.protein,
                calories = EXCLUDED.calories,
                completed = EXCLUDED.completed
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(period)
        .bind(protein)
        .bind(calories)
        .bind(completed)
        .bind(day)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
