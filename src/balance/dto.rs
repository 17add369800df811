use serde::Serialize;

use super::aggregator::{BalanceBreakdown, BalanceStatus};

#[derive(Debug, Serialize)]
pub struct TmbResponse {
    pub tmb: i32,
    pub gasto_profissional: i32,
    pub total_gasto_basal: i32,
}

/// Full aggregator output; wire field names match the original API.
#[derive(Debug, Serialize)]
pub struct BalanceReport {
    pub metabolismo_basal: i32,
    pub gasto_profissional: i32,
    pub calorias_exercicio: i32,
    pub total_gasto: i32,
    pub calorias_rotina: i32,
    pub calorias_extras: i32,
    pub total_consumido: i32,
    pub balanco: i32,
    pub status: BalanceStatus,
}

impl From<BalanceBreakdown> for BalanceReport {
    fn from(breakdown: BalanceBreakdown) -> Self {
        Self {
            metabolismo_basal: breakdown.basal_metabolism,
            gasto_profissional: breakdown.professional_expenditure,
            calorias_exercicio: breakdown.exercise_calories,
            total_gasto: breakdown.total_expended,
            calorias_rotina: breakdown.meal_calories,
            calorias_extras: breakdown.extra_calories,
            total_consumido: breakdown.total_consumed,
            balanco: breakdown.balance,
            status: breakdown.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_uses_wire_field_names() {
        let report = BalanceReport::from(BalanceBreakdown {
            basal_metabolism: 1830,
            professional_expenditure: 1007,
            exercise_calories: 0,
            total_expended: 2837,
            meal_calories: 320,
            extra_calories: 150,
            total_consumed: 470,
            balance: -2367,
            status: BalanceStatus::Deficit,
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["metabolismo_basal"], 1830);
        assert_eq!(json["gasto_profissional"], 1007);
        assert_eq!(json["total_gasto"], 2837);
        assert_eq!(json["total_consumido"], 470);
        assert_eq!(json["balanco"], -2367);
        assert_eq!(json["status"], "deficit");
    }
}
