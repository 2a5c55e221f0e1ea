use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    history::{get_member_detail, get_series, get_yearly_averages},
    roster::{compute_adjustments, extract_names, parse_roster},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/roster/parse", post(parse_roster))
        .route("/api/roster/names", post(extract_names))
        .route("/api/adjustments", post(compute_adjustments))
        .route("/api/history/yearly", get(get_yearly_averages))
        .route("/api/history/series", get(get_series))
        .route("/api/history/member/:id", get(get_member_detail))
        .with_state(state)
}
