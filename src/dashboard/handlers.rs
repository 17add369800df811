use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::dto::DashboardResponse;
use crate::activities::repo::Activity;
use crate::auth::extractors::AuthUser;
use crate::balance::aggregator::{self, BalanceInputs};
use crate::error::ApiError;
use crate::extras::repo::ExtraCalories;
use crate::goals::repo::WeightGoal;
use crate::profile::repo::User;
use crate::routine::repo::MealRoutine;
use crate::state::AppState;
use crate::util;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// Consolidated view: profile, latest goal, today's records and the balance
/// breakdown. The balance is computed from the rows fetched here and is not
/// persisted.
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado"))?;
    let day = util::today();

    let latest_goal = WeightGoal::latest_for_user(&state.db, user_id).await?;
    let activity = Activity::find_for_day(&state.db, user_id, day).await?;
    let routines = MealRoutine::list_for_day(&state.db, user_id, day).await?;
    let extras = ExtraCalories::list_for_day(&state.db, user_id, day).await?;

    let weight_kg = latest_goal
        .as_ref()
        .map(|goal| goal.current_weight_kg)
        .or(user.initial_weight_kg)
        .unwrap_or(0.0);

    let breakdown = aggregator::compute_balance(&BalanceInputs {
        weight_kg,
        height_m: user.height_m.unwrap_or(0.0),
        age: aggregator::effective_age(user.age),
        profession: user.profession.clone().unwrap_or_default(),
        exercise_calories: activity
            .as_ref()
            .map(|a| a.exercise_calories)
            .unwrap_or(0),
        meal_calories: aggregator::completed_meal_calories(&routines),
        extra_calories: aggregator::total_extra_calories(&extras),
    });

    Ok(Json(DashboardResponse {
        user: user.into(),
        meta: latest_goal.map(Into::into),
        atividade: activity.map(Into::into),
        rotinas: routines.into_iter().map(Into::into).collect(),
        calorias_extras: extras.into_iter().map(Into::into).collect(),
        balanco_calorico: breakdown.into(),
    }))
}
