use serde::Serialize;
use sqlx::{FromRow, PgExecutor, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String, // unique login key
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub height_m: Option<f64>,
    pub initial_weight_kg: Option<f64>,
    pub profession: Option<String>,
    pub age: i32,
    pub created_at: OffsetDateTime,
}

const COLUMNS: &str =
    "id, name, phone, password_hash, height_m, initial_weight_kg, profession, age, created_at";

impl User {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_phone(db: &PgPool, phone: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE phone = $1"
        ))
        .bind(phone)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        name: &str,
        phone: &str,
        password_hash: &str,
        height_m: f64,
        initial_weight_kg: f64,
        profession: &str,
        age: i32,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, phone, password_hash, height_m, initial_weight_kg, profession, age)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .bind(height_m)
        .bind(initial_weight_kg)
        .bind(profession)
        .bind(age)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Update only the supplied profile fields.
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        height_m: Option<f64>,
        profession: Option<&str>,
        age: Option<i32>,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET height_m = COALESCE($2, height_m),
                profession = COALESCE($3, profession),
                age = COALESCE($4, age)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(height_m)
        .bind(profession)
        .bind(age)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Body-mass index from the registered height and initial weight,
    /// rounded to one decimal. None when either is absent or non-positive.
    pub fn bmi(&self) -> Option<f64> {
        let height = self.height_m?;
        let weight = self.initial_weight_kg?;
        if height <= 0.0 || weight <= 0.0 {
            return None;
        }
        Some((weight / (height * height) * 10.0).round() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(height_m: Option<f64>, weight_kg: Option<f64>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Maria".into(),
            phone: "11988887777".into(),
            password_hash: "x".into(),
            height_m,
            initial_weight_kg: weight_kg,
            profession: None,
            age: 30,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn bmi_rounds_to_one_decimal() {
        let user = user_with(Some(1.67), Some(103.0));
        assert_eq!(user.bmi(), Some(36.9));
    }

    #[test]
    fn bmi_is_none_without_height_or_weight() {
        assert_eq!(user_with(None, Some(80.0)).bmi(), None);
        assert_eq!(user_with(Some(1.75), None).bmi(), None);
        assert_eq!(user_with(Some(0.0), Some(80.0)).bmi(), None);
    }
}
