use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::dto::{AuthResponse, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest};
use super::jwt::JwtKeys;
use super::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::goals::repo::WeightGoal;
use crate::profile::repo::User;
use crate::state::AppState;

// Registration defaults applied when the optional profile fields are
// absent, empty or non-positive.
const DEFAULT_HEIGHT_M: f64 = 1.67;
const DEFAULT_INITIAL_WEIGHT_KG: f64 = 103.0;
const DEFAULT_TARGET_WEIGHT_KG: f64 = 85.0;
const DEFAULT_AGE: i32 = 18;
const DEFAULT_PROFESSION: &str = "Não informado";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/cadastro", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/ping", get(ping))
}

fn is_valid_phone(phone: &str) -> bool {
    lazy_static! {
        static ref PHONE_RE: Regex = Regex::new(r"^[+(]?[0-9][0-9 ()\-]{6,18}$").unwrap();
    }
    PHONE_RE.is_match(phone)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (Some(name), Some(phone), Some(password)) =
        (payload.nome, payload.telefone, payload.senha)
    else {
        return Err(ApiError::validation(
            "Nome, telefone e senha são obrigatórios.",
        ));
    };

    let name = name.trim().to_string();
    let phone = phone.trim().to_string();
    if name.is_empty() || phone.is_empty() || password.is_empty() {
        return Err(ApiError::validation(
            "Nome, telefone e senha são obrigatórios.",
        ));
    }

    if !is_valid_phone(&phone) {
        warn!(telefone = %phone, "invalid phone");
        return Err(ApiError::validation("Telefone inválido."));
    }

    if User::find_by_phone(&state.db, &phone).await?.is_some() {
        warn!(telefone = %phone, "phone already registered");
        return Err(ApiError::validation("Telefone já cadastrado."));
    }

    let height_m = payload.altura.filter(|v| *v > 0.0).unwrap_or(DEFAULT_HEIGHT_M);
    let initial_weight_kg = payload
        .peso_inicial
        .filter(|v| *v > 0.0)
        .unwrap_or(DEFAULT_INITIAL_WEIGHT_KG);
    let profession = payload
        .profissao
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFESSION.to_string());
    let age = payload.idade.filter(|v| *v > 0).unwrap_or(DEFAULT_AGE);
    let target_weight_kg = payload
        .peso_meta
        .filter(|v| *v > 0.0)
        .unwrap_or(DEFAULT_TARGET_WEIGHT_KG);

    let hash = hash_password(&password)?;

    // The user and their initial goal commit or roll back as one unit.
    let mut tx = state.db.begin().await?;
    let user = User::create(
        &mut *tx,
        &name,
        &phone,
        &hash,
        height_m,
        initial_weight_kg,
        &profession,
        age,
    )
    .await?;
    WeightGoal::create(&mut *tx, user.id, initial_weight_kg, target_weight_kg).await?;
    tx.commit().await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(user.id)?;
    let refresh_token = keys.sign_refresh(user.id)?;

    info!(user_id = %user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Usuário cadastrado com sucesso!".into(),
            access_token,
            refresh_token,
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(phone), Some(password)) = (payload.telefone, payload.senha) else {
        return Err(ApiError::validation("Telefone e senha são obrigatórios."));
    };

    let user = User::find_by_phone(&state.db, &phone)
        .await?
        .ok_or_else(|| {
            warn!(telefone = %phone, "login with unknown phone");
            ApiError::Unauthorized("Telefone ou senha incorretos.".into())
        })?;

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::Unauthorized("Telefone ou senha incorretos.".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(user.id)?;
    let refresh_token = keys.sign_refresh(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login realizado com sucesso!".into(),
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let access_token = keys.sign_access(claims.sub)?;
    Ok(Json(RefreshResponse { access_token }))
}

pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "Pong! API Auth funcionando 🔥" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_validation_accepts_common_shapes() {
        assert!(is_valid_phone("11988887777"));
        assert!(is_valid_phone("+55 11 98888-7777"));
        assert!(is_valid_phone("(11) 98888-7777"));
    }

    #[test]
    fn phone_validation_rejects_garbage() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("123"));
    }
}
