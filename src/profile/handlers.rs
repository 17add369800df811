use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{UpdateProfileRequest, UpdateProfileResponse, UserProfile};
use super::repo::User;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/update", put(update))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado."))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, ApiError> {
    let user = User::update_profile(
        &state.db,
        user_id,
        payload.altura,
        payload.profissao.as_deref(),
        payload.idade,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Usuário não encontrado."))?;

    info!(user_id = %user.id, "profile updated");
    Ok(Json(UpdateProfileResponse {
        message: "Perfil atualizado com sucesso!".into(),
        user: user.into(),
    }))
}
