use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::macros::format_description;
use tracing::{info, instrument};

use super::dto::{CreateGoalRequest, CreateGoalResponse, GoalResponse, HistoryPoint};
use super::repo::WeightGoal;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_TARGET_WEIGHT_KG: f64 = 85.0;

pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/ultima", get(latest))
        .route("/criar", post(create))
        .route("/historico", get(history))
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<GoalResponse>>, ApiError> {
    let goals = WeightGoal::list_for_user(&state.db, user_id).await?;
    Ok(Json(goals.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn latest(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = WeightGoal::latest_for_user(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Nenhuma meta encontrada."))?;
    Ok(Json(goal.into()))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<CreateGoalResponse>), ApiError> {
    let Some(current_weight) = payload.peso_atual else {
        return Err(ApiError::validation("O campo 'peso_atual' é obrigatório."));
    };
    let target_weight = payload.peso_meta.unwrap_or(DEFAULT_TARGET_WEIGHT_KG);

    let goal = WeightGoal::create(&state.db, user_id, current_weight, target_weight).await?;

    info!(user_id = %user_id, goal_id = %goal.id, "weight goal created");
    Ok((
        StatusCode::CREATED,
        Json(CreateGoalResponse {
            message: "Meta criada com sucesso!".into(),
            meta: goal.into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<HistoryPoint>>, ApiError> {
    let format = format_description!("[day]/[month]/[year]");

    let goals = WeightGoal::list_chronological(&state.db, user_id).await?;
    let mut points = Vec::with_capacity(goals.len());
    for goal in goals {
        points.push(HistoryPoint {
            data: goal.recorded_at.format(format).map_err(anyhow::Error::new)?,
            peso: goal.current_weight_kg,
            meta: goal.target_weight_kg,
        });
    }
    Ok(Json(points))
}
