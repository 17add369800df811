use axum::Router;

use crate::state::AppState;

pub mod aggregator;
pub mod compute;
pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    handlers::calc_routes()
}
