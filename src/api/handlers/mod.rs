use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::config::settings::{is_member_id_in_range, AppConfig, MEMBER_ID_MAX, MEMBER_ID_MIN};
use crate::history::RatingHistory;
use crate::roster::MemberId;
use crate::services::roster::RosterService;

pub mod history;
pub mod roster;

pub struct AppState {
    pub config: AppConfig,
    pub roster: RosterService,
    /// Absent when the server started without a CSV
    pub history: Option<RatingHistory>,
}

#[derive(Deserialize)]
pub struct HistoryParams {
    /// Comma separated member ids
    pub members: Option<String>,
    pub from: Option<i32>,
    pub to: Option<i32>,
}

impl HistoryParams {
    pub fn member_ids(&self) -> Result<Vec<MemberId>, String> {
        let Some(raw) = self.members.as_deref() else {
            return Ok(Vec::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| match s.parse::<u32>() {
                Ok(id) if is_member_id_in_range(id) => Ok(MemberId::new(id)),
                Ok(_) => Err(format!(
                    "Member id {} outside {}..={}",
                    s, MEMBER_ID_MIN, MEMBER_ID_MAX
                )),
                Err(_) => Err(format!("Invalid member id: {}", s)),
            })
            .collect()
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}
