use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;
use uuid::Uuid;

use super::aggregator;
use super::dto::{BalanceReport, TmbResponse};
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::profile::repo::User;
use crate::state::AppState;
use crate::util;

pub fn calc_routes() -> Router<AppState> {
    Router::new()
        .route("/tmb", get(tmb))
        .route("/balanco-calorico", get(balanco_calorico))
}

async fn fetch_user(state: &AppState, user_id: Uuid) -> Result<User, ApiError> {
    User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado"))
}

/// Basal metabolic rate and professional expenditure for the current user.
#[instrument(skip(state))]
pub async fn tmb(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<TmbResponse>, ApiError> {
    let user = fetch_user(&state, user_id).await?;
    let (tmb, professional) = aggregator::basal_terms_for_user(&state.db, &user).await?;

    Ok(Json(TmbResponse {
        tmb,
        gasto_profissional: professional,
        total_gasto_basal: tmb + professional,
    }))
}

/// Full caloric balance for today; refreshes the cached daily row.
#[instrument(skip(state))]
pub async fn balanco_calorico(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<BalanceReport>, ApiError> {
    let user = fetch_user(&state, user_id).await?;
    let breakdown = aggregator::compute_and_store(&state.db, &user, util::today()).await?;
    Ok(Json(breakdown.into()))
}
