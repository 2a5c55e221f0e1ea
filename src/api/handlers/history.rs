use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{error_response, AppState, HistoryParams};
use crate::api::models::MemberDetailResponse;
use crate::history::RatingHistory;
use crate::roster::{legend_names, MemberId, NameDictionary, Roster};

fn loaded_history(state: &AppState) -> Result<&RatingHistory, Response> {
    state
        .history
        .as_ref()
        .ok_or_else(|| error_response(StatusCode::SERVICE_UNAVAILABLE, "No rating history loaded"))
}

fn requested_members(params: &HistoryParams, state: &AppState) -> Result<Vec<MemberId>, Response> {
    let ids = params
        .member_ids()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))?;

    if ids.is_empty() {
        return Ok(state
            .config
            .history
            .default_members
            .iter()
            .copied()
            .map(MemberId::new)
            .collect());
    }
    Ok(ids)
}

pub async fn get_yearly_averages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let history = match loaded_history(&state) {
        Ok(h) => h,
        Err(resp) => return resp,
    };
    let members = match requested_members(&params, &state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let from = params.from.unwrap_or(state.config.history.from_year);
    let to = params.to.unwrap_or(state.config.history.to_year);
    let (from, to) = if from <= to { (from, to) } else { (to, from) };

    Json(history.yearly_averages(&members, from, to)).into_response()
}

pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let history = match loaded_history(&state) {
        Ok(h) => h,
        Err(resp) => return resp,
    };
    let members = match requested_members(&params, &state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let legend = legend_names(&members, &Roster::default(), &NameDictionary::new());
    Json(history.series(&legend)).into_response()
}

pub async fn get_member_detail(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<u32>,
) -> impl IntoResponse {
    let history = match loaded_history(&state) {
        Ok(h) => h,
        Err(resp) => return resp,
    };
    let member_id = MemberId::new(member_id);

    match history.swing_summary(member_id) {
        Some(summary) => Json(MemberDetailResponse {
            member_id,
            records: history.for_member(member_id).to_vec(),
            summary,
        })
        .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("No rating records for member {}", member_id),
        ),
    }
}
