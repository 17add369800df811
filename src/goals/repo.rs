use serde::Serialize;
use sqlx::{FromRow, PgExecutor, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Weight-goal entry. Append-only; the newest row carries the user's
/// current weight.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub recorded_at: OffsetDateTime,
}

const COLUMNS: &str = "id, user_id, current_weight_kg, target_weight_kg, recorded_at";

impl WeightGoal {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        user_id: Uuid,
        current_weight_kg: f64,
        target_weight_kg: f64,
    ) -> anyhow::Result<WeightGoal> {
        let goal = sqlx::query_as::<_, WeightGoal>(&format!(
            r#"
            INSERT INTO weight_goals (user_id, current_weight_kg, target_weight_kg)
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(current_weight_kg)
        .bind(target_weight_kg)
        .fetch_one(db)
        .await?;
        Ok(goal)
    }

    /// All goals, newest first.
    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WeightGoal>> {
        let rows = sqlx::query_as::<_, WeightGoal>(&format!(
            "SELECT {COLUMNS} FROM weight_goals WHERE user_id = $1 ORDER BY recorded_at DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// All goals, oldest first (chart history).
    pub async fn list_chronological(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WeightGoal>> {
        let rows = sqlx::query_as::<_, WeightGoal>(&format!(
            "SELECT {COLUMNS} FROM weight_goals WHERE user_id = $1 ORDER BY recorded_at ASC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn latest_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<WeightGoal>> {
        let row = sqlx::query_as::<_, WeightGoal>(&format!(
            "SELECT {COLUMNS} FROM weight_goals WHERE user_id = $1 ORDER BY recorded_at DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
