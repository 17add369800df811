use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};

use super::dto::{ActivityResponse, RegisterActivityRequest, RegisterActivityResponse};
use super::repo::Activity;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::util;

const HISTORY_DAYS: i64 = 30;

pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/hoje", get(today_activity))
        .route("/registrar", post(register))
        .route("/historico", get(history))
}

/// Today's activity, or a zeroed placeholder when nothing was logged yet.
#[instrument(skip(state))]
pub async fn today_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Response, ApiError> {
    match Activity::find_for_day(&state.db, user_id, util::today()).await? {
        Some(activity) => Ok(Json(ActivityResponse::from(activity)).into_response()),
        None => Ok(Json(json!({
            "message": "Nenhuma atividade registrada hoje",
            "atividade": {
                "km_percorridos": 0,
                "calorias_perdidas": 0,
                "calorias_trabalho": 0,
            },
        }))
        .into_response()),
    }
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<RegisterActivityRequest>,
) -> Result<Json<RegisterActivityResponse>, ApiError> {
    let activity = Activity::upsert(
        &state.db,
        user_id,
        util::today(),
        payload.km_percorridos,
        payload.calorias_perdidas,
        payload.calorias_trabalho,
    )
    .await?;

    info!(user_id = %user_id, activity_id = %activity.id, "activity registered");
    Ok(Json(RegisterActivityResponse {
        message: "Atividade registrada com sucesso!".into(),
        atividade: activity.into(),
    }))
}

#[instrument(skip(state))]
pub async fn history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let activities = Activity::recent(&state.db, user_id, HISTORY_DAYS).await?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}
