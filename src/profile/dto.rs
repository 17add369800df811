use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::User;

/// Public profile shape; field names match the original wire format.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub nome: String,
    pub telefone: String,
    pub altura: Option<f64>,
    pub peso_inicial: Option<f64>,
    pub profissao: Option<String>,
    pub idade: i32,
    pub imc: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub data_cadastro: OffsetDateTime,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let imc = user.bmi();
        Self {
            id: user.id,
            nome: user.name,
            telefone: user.phone,
            altura: user.height_m,
            peso_inicial: user.initial_weight_kg,
            profissao: user.profession,
            idade: user.age,
            imc,
            data_cadastro: user.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub altura: Option<f64>,
    pub profissao: Option<String>,
    pub idade: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_exposes_derived_bmi() {
        let user = User {
            id: Uuid::new_v4(),
            name: "João".into(),
            phone: "11911112222".into(),
            password_hash: "secret".into(),
            height_m: Some(1.75),
            initial_weight_kg: Some(80.0),
            profession: Some("Estoquista".into()),
            age: 30,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let profile = UserProfile::from(user);
        assert_eq!(profile.imc, Some(26.1));

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["nome"], "João");
        assert_eq!(json["telefone"], "11911112222");
        assert!(json.get("password_hash").is_none());
    }
}
