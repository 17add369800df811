use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::WeightGoal;

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub id: Uuid,
    pub peso_atual: f64,
    pub peso_meta: f64,
    pub falta_perder: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub data_registro: OffsetDateTime,
}

impl From<WeightGoal> for GoalResponse {
    fn from(goal: WeightGoal) -> Self {
        Self {
            id: goal.id,
            peso_atual: goal.current_weight_kg,
            peso_meta: goal.target_weight_kg,
            falta_perder: ((goal.current_weight_kg - goal.target_weight_kg) * 10.0).round() / 10.0,
            data_registro: goal.recorded_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub peso_atual: Option<f64>,
    pub peso_meta: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreateGoalResponse {
    pub message: String,
    pub meta: GoalResponse,
}

/// One chart point of the weight history, dd/mm/yyyy.
#[derive(Debug, Serialize)]
pub struct HistoryPoint {
    pub data: String,
    pub peso: f64,
    pub meta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falta_perder_is_rounded_to_one_decimal() {
        let goal = WeightGoal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            current_weight_kg: 92.5,
            target_weight_kg: 85.2,
            recorded_at: OffsetDateTime::UNIX_EPOCH,
        };
        let dto = GoalResponse::from(goal);
        assert_eq!(dto.falta_perder, 7.3);
    }
}
