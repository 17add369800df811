use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

use super::aggregator::BalanceBreakdown;

/// Cached daily balance row; a materialized result, always re-derivable
/// from the source records.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyBalance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub consumed_calories: i32,
    pub expended_calories: i32,
    pub basal_metabolism: i32,
    pub professional_expenditure: i32,
    pub day: Date,
}

const COLUMNS: &str =
    "id, user_id, consumed_calories, expended_calories, basal_metabolism, professional_expenditure, day";

impl DailyBalance {
    /// Upsert the (user, day) row in one atomic statement; every field is
    /// overwritten with the freshly computed figures.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        day: Date,
        breakdown: &BalanceBreakdown,
    ) -> anyhow::Result<DailyBalance> {
        let row = sqlx::query_as::<_, DailyBalance>(&format!(
            r#"
            INSERT INTO daily_balances
                (user_id, consumed_calories, expended_calories, basal_metabolism, professional_expenditure, day)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, day) DO UPDATE
            SET consumed_calories = EXCLUDED.consumed_calories,
                expended_calories = EXCLUDED.expended_calories,
                basal_metabolism = EXCLUDED.basal_metabolism,
                professional_expenditure = EXCLUDED.professional_expenditure
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(breakdown.total_consumed)
        .bind(breakdown.total_expended)
        .bind(breakdown.basal_metabolism)
        .bind(breakdown.professional_expenditure)
        .bind(day)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
