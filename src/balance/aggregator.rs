use serde::Serialize;
use sqlx::PgPool;
use time::Date;

use super::compute::{self, Sex};
use super::repo::DailyBalance;
use crate::activities::repo::Activity;
use crate::extras::repo::ExtraCalories;
use crate::goals::repo::WeightGoal;
use crate::profile::repo::User;
use crate::routine::repo::MealRoutine;

const DEFAULT_AGE: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BalanceStatus {
    #[serde(rename = "deficit")]
    Deficit,
    #[serde(rename = "superavit")]
    Surplus,
}

/// Everything the balance fold needs for one (user, day).
#[derive(Debug, Clone)]
pub struct BalanceInputs {
    pub weight_kg: f64,
    pub height_m: f64,
    pub age: i32,
    pub profession: String,
    pub exercise_calories: i32,
    pub meal_calories: i32,
    pub extra_calories: i32,
}

/// One day's energy balance with every intermediate figure exposed, so
/// callers never recompute a sub-term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceBreakdown {
    pub basal_metabolism: i32,
    pub professional_expenditure: i32,
    pub exercise_calories: i32,
    pub total_expended: i32,
    pub meal_calories: i32,
    pub extra_calories: i32,
    pub total_consumed: i32,
    pub balance: i32,
    pub status: BalanceStatus,
}

pub fn effective_age(age: i32) -> i32 {
    if age > 0 {
        age
    } else {
        DEFAULT_AGE
    }
}

/// BMR and professional expenditure. Both are zero when the profile lacks a
/// usable weight or height; a missing sub-term degrades to zero instead of
/// failing the computation.
pub fn basal_terms(weight_kg: f64, height_m: f64, age: i32, profession: &str) -> (i32, i32) {
    if weight_kg <= 0.0 || height_m <= 0.0 {
        return (0, 0);
    }
    let bmr = compute::basal_metabolic_rate(weight_kg, height_m, age, Sex::default());
    (bmr, compute::professional_expenditure(bmr, profession))
}

/// Fold the day's figures into a balance. Ties count as superavit.
pub fn compute_balance(inputs: &BalanceInputs) -> BalanceBreakdown {
    let (basal_metabolism, professional_expenditure) = basal_terms(
        inputs.weight_kg,
        inputs.height_m,
        inputs.age,
        &inputs.profession,
    );

    let total_expended = basal_metabolism + professional_expenditure + inputs.exercise_calories;
    let total_consumed = inputs.meal_calories + inputs.extra_calories;
    let balance = total_consumed - total_expended;
    let status = if balance < 0 {
        BalanceStatus::Deficit
    } else {
        BalanceStatus::Surplus
    };

    BalanceBreakdown {
        basal_metabolism,
        professional_expenditure,
        exercise_calories: inputs.exercise_calories,
        total_expended,
        meal_calories: inputs.meal_calories,
        extra_calories: inputs.extra_calories,
        total_consumed,
        balance,
        status,
    }
}

/// Latest goal weight, else the registered initial weight, else zero.
pub async fn resolve_current_weight(db: &PgPool, user: &User) -> anyhow::Result<f64> {
    let latest = WeightGoal::latest_for_user(db, user.id).await?;
    Ok(latest
        .map(|goal| goal.current_weight_kg)
        .or(user.initial_weight_kg)
        .unwrap_or(0.0))
}

/// Basal terms resolved from the user's profile and latest goal.
pub async fn basal_terms_for_user(db: &PgPool, user: &User) -> anyhow::Result<(i32, i32)> {
    let weight_kg = resolve_current_weight(db, user).await?;
    Ok(basal_terms(
        weight_kg,
        user.height_m.unwrap_or(0.0),
        effective_age(user.age),
        user.profession.as_deref().unwrap_or(""),
    ))
}

/// Gather the day's records and fold them into a balance breakdown.
pub async fn balance_for_day(
    db: &PgPool,
    user: &User,
    day: Date,
) -> anyhow::Result<BalanceBreakdown> {
    let weight_kg = resolve_current_weight(db, user).await?;

    let exercise_calories = Activity::find_for_day(db, user.id, day)
        .await?
        .map(|activity| activity.exercise_calories)
        .unwrap_or(0);

    let routines = MealRoutine::list_for_day(db, user.id, day).await?;
    let meal_calories = completed_meal_calories(&routines);

    let extras = ExtraCalories::list_for_day(db, user.id, day).await?;
    let extra_calories = total_extra_calories(&extras);

    Ok(compute_balance(&BalanceInputs {
        weight_kg,
        height_m: user.height_m.unwrap_or(0.0),
        age: effective_age(user.age),
        profession: user.profession.clone().unwrap_or_default(),
        exercise_calories,
        meal_calories,
        extra_calories,
    }))
}

/// Sum of calories over completed meals only.
pub fn completed_meal_calories(routines: &[MealRoutine]) -> i32 {
    routines
        .iter()
        .filter(|routine| routine.completed)
        .map(|routine| routine.calories.unwrap_or(0))
        .sum()
}

/// Sum over all entries; the honesty flag does not exclude anything.
pub fn total_extra_calories(extras: &[ExtraCalories]) -> i32 {
    extras.iter().map(|extra| extra.calories).sum()
}

/// Compute the day's balance and refresh its cached row. The upsert is a
/// single statement, so concurrent callers cannot duplicate the row.
pub async fn compute_and_store(
    db: &PgPool,
    user: &User,
    day: Date,
) -> anyhow::Result<BalanceBreakdown> {
    let breakdown = balance_for_day(db, user, day).await?;
    let stored = DailyBalance::upsert(db, user.id, day, &breakdown).await?;
    tracing::debug!(
        user_id = %user.id,
        %day,
        balance_id = %stored.id,
        balance = breakdown.balance,
        "daily balance stored"
    );
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> BalanceInputs {
        BalanceInputs {
            weight_kg: 80.0,
            height_m: 1.75,
            age: 30,
            profession: "office worker".into(),
            exercise_calories: 0,
            meal_calories: 320,
            extra_calories: 150,
        }
    }

    #[test]
    fn full_scenario_produces_a_deficit() {
        let breakdown = compute_balance(&inputs());

        assert_eq!(breakdown.basal_metabolism, 1830);
        assert_eq!(breakdown.professional_expenditure, 1007);
        assert_eq!(breakdown.total_expended, 2837);
        assert_eq!(breakdown.total_consumed, 470);
        assert_eq!(breakdown.balance, -2367);
        assert_eq!(breakdown.status, BalanceStatus::Deficit);
    }

    #[test]
    fn exercise_counts_toward_expenditure() {
        let breakdown = compute_balance(&BalanceInputs {
            exercise_calories: 200,
            ..inputs()
        });
        assert_eq!(breakdown.total_expended, 2837 + 200);
    }

    #[test]
    fn missing_profile_degrades_to_zero_expenditure() {
        let breakdown = compute_balance(&BalanceInputs {
            weight_kg: 0.0,
            height_m: 0.0,
            ..inputs()
        });

        assert_eq!(breakdown.basal_metabolism, 0);
        assert_eq!(breakdown.professional_expenditure, 0);
        assert_eq!(breakdown.total_expended, 0);
        assert_eq!(breakdown.balance, breakdown.total_consumed);
        assert_eq!(breakdown.status, BalanceStatus::Surplus);
    }

    #[test]
    fn zero_balance_counts_as_superavit() {
        let breakdown = compute_balance(&BalanceInputs {
            weight_kg: 0.0,
            meal_calories: 0,
            extra_calories: 0,
            ..inputs()
        });
        assert_eq!(breakdown.balance, 0);
        assert_eq!(breakdown.status, BalanceStatus::Surplus);
    }

    #[test]
    fn status_serializes_with_wire_names() {
        assert_eq!(
            serde_json::to_value(BalanceStatus::Deficit).unwrap(),
            serde_json::json!("deficit"),
        );
        assert_eq!(
            serde_json::to_value(BalanceStatus::Surplus).unwrap(),
            serde_json::json!("superavit"),
        );
    }
}
