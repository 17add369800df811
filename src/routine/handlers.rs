use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{MarkMealRequest, MarkMealResponse, RoutineResponse, RoutineTotals};
use super::repo::MealRoutine;
use crate::auth::extractors::AuthUser;
use crate::balance::compute;
use crate::error::ApiError;
use crate::state::AppState;
use crate::util;

pub fn routine_routes() -> Router<AppState> {
    Router::new()
        .route("/hoje", get(today_routine))
        .route("/marcar", post(mark_meal))
        .route("/calorias-totais", get(total_calories))
}

/// Today's routine; the standard periods are seeded on first query.
#[instrument(skip(state))]
pub async fn today_routine(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<RoutineResponse>>, ApiError> {
    let day = util::today();

    let mut routines = MealRoutine::list_for_day(&state.db, user_id, day).await?;
    if routines.is_empty() {
        routines = MealRoutine::seed_standard_day(&state.db, user_id, day).await?;
        info!(user_id = %user_id, %day, "standard meal routine seeded");
    }

    Ok(Json(routines.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, payload))]
pub async fn mark_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<MarkMealRequest>,
) -> Result<Json<MarkMealResponse>, ApiError> {
    let Some(period) = payload.periodo else {
        return Err(ApiError::validation("O campo 'periodo' é obrigatório."));
    };
    let protein = payload.proteina_selecionada.as_deref();
    let calories = compute::meal_calories(&period, protein);

    let routine = MealRoutine::mark(
        &state.db,
        user_id,
        &period,
        protein,
        calories,
        payload.concluido,
        util::today(),
    )
    .await?;

    Ok(Json(MarkMealResponse {
        message: "Refeição atualizada com sucesso!".into(),
        rotina: routine.into(),
    }))
}

/// Sum of calories over today's completed meals.
#[instrument(skip(state))]
pub async fn total_calories(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<RoutineTotals>, ApiError> {
    let routines = MealRoutine::list_for_day(&state.db, user_id, util::today()).await?;

    let completed: Vec<_> = routines.iter().filter(|r| r.completed).collect();
    let total: i32 = completed.iter().map(|r| r.calories.unwrap_or(0)).sum();

    Ok(Json(RoutineTotals {
        total_calorias: total,
        refeicoes_concluidas: completed.len(),
        total_refeicoes: routines.len(),
    }))
}
