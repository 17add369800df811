use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::repo::MealRoutine;

#[derive(Debug, Serialize)]
pub struct RoutineResponse {
    pub id: Uuid,
    pub periodo: String,
    pub refeicao: String,
    pub proteina_selecionada: Option<String>,
    pub calorias: Option<i32>,
    pub concluido: bool,
    pub data: Date,
}

impl From<MealRoutine> for RoutineResponse {
    fn from(routine: MealRoutine) -> Self {
        Self {
            id: routine.id,
            periodo: routine.period,
            refeicao: routine.meal,
            proteina_selecionada: routine.protein,
            calorias: routine.calories,
            concluido: routine.completed,
            data: routine.day,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkMealRequest {
    pub periodo: Option<String>,
    pub proteina_selecionada: Option<String>,
    #[serde(default)]
    pub concluido: bool,
}

#[derive(Debug, Serialize)]
pub struct MarkMealResponse {
    pub message: String,
    pub rotina: RoutineResponse,
}

#[derive(Debug, Serialize)]
pub struct RoutineTotals {
    pub total_calorias: i32,
    pub refeicoes_concluidas: usize,
    pub total_refeicoes: usize,
}
