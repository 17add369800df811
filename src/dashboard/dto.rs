use serde::Serialize;

use crate::activities::dto::ActivityResponse;
use crate::balance::dto::BalanceReport;
use crate::extras::dto::ExtraResponse;
use crate::goals::dto::GoalResponse;
use crate::profile::dto::UserProfile;
use crate::routine::dto::RoutineResponse;

/// Everything the dashboard screen needs in one response.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserProfile,
    pub meta: Option<GoalResponse>,
    pub atividade: Option<ActivityResponse>,
    pub rotinas: Vec<RoutineResponse>,
    pub calorias_extras: Vec<ExtraResponse>,
    pub balanco_calorico: BalanceReport,
}
