use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/plan", post(handlers::submit_plan))
        .route("/api/actuals", post(handlers::submit_actuals))
        .route("/api/targets", get(handlers::get_targets).put(handlers::put_targets))
        .route("/api/roster", get(handlers::get_roster).post(handlers::add_member))
        .with_state(state)
}
