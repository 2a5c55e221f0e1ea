use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::warn;
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{AdjustmentRequest, NameItem, NamesResponse, TextRequest};
use crate::errors::AdjustmentError;

pub async fn parse_roster(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TextRequest>,
) -> impl IntoResponse {
    Json(state.roster.parse(&body.text))
}

pub async fn extract_names(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TextRequest>,
) -> impl IntoResponse {
    let names = state
        .roster
        .names(&body.text)
        .into_iter()
        .map(|(member_id, name)| NameItem { member_id, name })
        .collect();

    Json(NamesResponse { names })
}

pub async fn compute_adjustments(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AdjustmentRequest>,
) -> impl IntoResponse {
    let outcomes: Vec<_> = body
        .outcomes
        .iter()
        .map(|o| (o.member_id, o.won))
        .collect();

    match state.roster.adjust(&body.text, body.reference, &outcomes) {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            warn!("Adjustment rejected: {}", e);
            let status = match e {
                AdjustmentError::UnknownReference(_) => StatusCode::NOT_FOUND,
                AdjustmentError::UnratedReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            };
            error_response(status, e.to_string())
        }
    }
}
