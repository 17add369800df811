use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::repo::Activity;

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub km_percorridos: f64,
    pub calorias_perdidas: i32,
    pub calorias_trabalho: i32,
    pub data: Date,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            km_percorridos: activity.distance_km,
            calorias_perdidas: activity.exercise_calories,
            calorias_trabalho: activity.work_calories,
            data: activity.day,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterActivityRequest {
    pub km_percorridos: Option<f64>,
    pub calorias_perdidas: Option<i32>,
    pub calorias_trabalho: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RegisterActivityResponse {
    pub message: String,
    pub atividade: ActivityResponse,
}
