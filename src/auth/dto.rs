use serde::{Deserialize, Serialize};

use crate::profile::dto::UserProfile;

/// Registration body. Only nome/telefone/senha are mandatory; the rest fall
/// back to the registration defaults.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub senha: Option<String>,
    pub altura: Option<f64>,
    pub peso_inicial: Option<f64>,
    pub profissao: Option<String>,
    pub idade: Option<i32>,
    pub peso_meta: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub telefone: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}
