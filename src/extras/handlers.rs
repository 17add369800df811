use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{DayExtrasResponse, RegisterExtraRequest, RegisterExtraResponse};
use super::repo::ExtraCalories;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::util;

pub fn extras_routes() -> Router<AppState> {
    Router::new()
        .route("/hoje", get(today_extras))
        .route("/registrar", post(register))
        .route("/:id", delete(remove))
}

#[instrument(skip(state))]
pub async fn today_extras(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DayExtrasResponse>, ApiError> {
    let extras = ExtraCalories::list_for_day(&state.db, user_id, util::today()).await?;
    let total: i32 = extras.iter().map(|e| e.calories).sum();

    Ok(Json(DayExtrasResponse {
        calorias_extras: extras.into_iter().map(Into::into).collect(),
        total,
    }))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<RegisterExtraRequest>,
) -> Result<(StatusCode, Json<RegisterExtraResponse>), ApiError> {
    let Some(calories) = payload.calorias else {
        return Err(ApiError::validation("Campo 'calorias' é obrigatório"));
    };

    let extra = ExtraCalories::create(
        &state.db,
        user_id,
        payload.descricao.as_deref().unwrap_or(""),
        calories,
        payload.sincero.unwrap_or(true),
        util::today(),
    )
    .await?;

    info!(user_id = %user_id, calories, "extra calories registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterExtraResponse {
            message: "Calorias extras registradas!".into(),
            caloria_extra: extra.into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = ExtraCalories::delete_for_user(&state.db, id, user_id).await?;
    if !deleted {
        warn!(user_id = %user_id, %id, "extra-calorie entry not found");
        return Err(ApiError::not_found("Registro não encontrado"));
    }

    Ok(Json(json!({ "message": "Registro deletado com sucesso!" })))
}
