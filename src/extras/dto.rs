use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::repo::ExtraCalories;

#[derive(Debug, Serialize)]
pub struct ExtraResponse {
    pub id: Uuid,
    pub descricao: Option<String>,
    pub calorias: i32,
    pub data: Date,
    pub sincero: bool,
}

impl From<ExtraCalories> for ExtraResponse {
    fn from(extra: ExtraCalories) -> Self {
        Self {
            id: extra.id,
            descricao: extra.description,
            calorias: extra.calories,
            data: extra.day,
            sincero: extra.honest,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DayExtrasResponse {
    pub calorias_extras: Vec<ExtraResponse>,
    pub total: i32,
}

#[derive(Debug, Deserialize)]
pub struct RegisterExtraRequest {
    pub descricao: Option<String>,
    pub calorias: Option<i32>,
    pub sincero: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct RegisterExtraResponse {
    pub message: String,
    pub caloria_extra: ExtraResponse,
}
